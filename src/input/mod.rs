use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod demo;
pub mod fixture;

use crate::model::KeyVariance;
use crate::pipeline::stage1_collect::RawRun;
use fixture::parse_fixture;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown demo scenario '{requested}' (available: {known})")]
    UnknownScenario { requested: String, known: String },
    #[error("no responses found in {0}")]
    Empty(String),
}

/// Raw responses for one prompt plus optional scenario metadata.
#[derive(Debug, Clone)]
pub struct LoadedRuns {
    pub scenario: Option<String>,
    pub headline: Option<KeyVariance>,
    pub raw: Vec<RawRun>,
}

/// Loads from a JSON fixture file, or from a directory holding one `*.txt`
/// response per run (file name order).
pub fn load_runs(path: &Path) -> Result<LoadedRuns, InputError> {
    if path.is_dir() {
        return load_text_dir(path);
    }
    let contents = read(path)?;
    parse_fixture(&contents, &path.display().to_string())
}

pub fn load_text_dir(dir: &Path) -> Result<LoadedRuns, InputError> {
    let entries = fs::read_dir(dir).map_err(|source| InputError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| InputError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_txt = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("txt"))
            .unwrap_or(false);
        if path.is_file() && is_txt {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(InputError::Empty(dir.display().to_string()));
    }

    let mut raw = Vec::with_capacity(files.len());
    for path in &files {
        tracing::debug!(file = %path.display(), "reading response");
        raw.push(RawRun::new(read(path)?));
    }

    Ok(LoadedRuns {
        scenario: dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned()),
        headline: None,
        raw,
    })
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
