use serde::Deserialize;

use crate::input::{InputError, LoadedRuns};
use crate::model::KeyVariance;
use crate::pipeline::stage1_collect::RawRun;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixtureDoc {
    Scenario(ScenarioFile),
    Bare(Vec<RunEntry>),
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default)]
    scenario: Option<String>,
    #[serde(default)]
    headline: Option<KeyVariance>,
    runs: Vec<RunEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RunEntry {
    Text(String),
    Numbered {
        #[serde(default)]
        run_number: Option<usize>,
        response_text: String,
    },
}

impl From<RunEntry> for RawRun {
    fn from(entry: RunEntry) -> Self {
        match entry {
            RunEntry::Text(text) => RawRun {
                run_number: None,
                text,
            },
            RunEntry::Numbered {
                run_number,
                response_text,
            } => RawRun {
                run_number,
                text: response_text,
            },
        }
    }
}

/// Parses a fixture document. `origin` names the source in errors.
pub fn parse_fixture(contents: &str, origin: &str) -> Result<LoadedRuns, InputError> {
    let doc: FixtureDoc =
        serde_json::from_str(contents).map_err(|source| InputError::Json {
            origin: origin.to_string(),
            source,
        })?;
    let (scenario, headline, entries) = match doc {
        FixtureDoc::Scenario(f) => (f.scenario, f.headline, f.runs),
        FixtureDoc::Bare(entries) => (None, None, entries),
    };
    if entries.is_empty() {
        return Err(InputError::Empty(origin.to_string()));
    }
    Ok(LoadedRuns {
        scenario,
        headline,
        raw: entries.into_iter().map(RawRun::from).collect(),
    })
}
