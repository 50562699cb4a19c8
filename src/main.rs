use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use kira_trustscore::input::demo::{DEFAULT_SCENARIO, builtin_scenarios, load_demo};
use kira_trustscore::input::{InputError, LoadedRuns, load_runs};
use kira_trustscore::logging::{self, Verbosity};
use kira_trustscore::model::ScoringProfile;
use kira_trustscore::pipeline::stage1_collect::run_stage1;
use kira_trustscore::pipeline::stage2_score::{ScoreError, run_stage2};
use kira_trustscore::pipeline::stage3_table::render_table;
use kira_trustscore::pipeline::stage4_report::{ReportError, write_reports};
use kira_trustscore::report::ReportContext;
use kira_trustscore::report::json::render_summary_json;
use kira_trustscore::report::text::render_report_text;

const TOOL_NAME: &str = "kira-trustscore";

#[derive(Debug, Parser)]
#[command(
    name = "kira-trustscore",
    version,
    about = "Score how consistently a model answers the same prompt across repeated runs"
)]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score responses from a JSON fixture file or a directory of .txt files
    Run {
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Score one of the built-in demo scenarios
    Demo {
        #[arg(long, default_value = DEFAULT_SCENARIO)]
        scenario: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List built-in demo scenarios
    Scenarios,
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    /// Write summary.json, comparison.tsv and report.txt into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 2 when the trust score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    fail_under: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    BelowThreshold { total: u32, threshold: u32 },
}

fn main() {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    match run(cli) {
        Ok(Outcome::Done) => {}
        Ok(Outcome::BelowThreshold { total, threshold }) => {
            tracing::error!(total, threshold, "trust score below --fail-under threshold");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Run { input, output } => {
            let loaded = load_runs(&input)?;
            evaluate(loaded, &output)
        }
        Command::Demo { scenario, output } => {
            let loaded = load_demo(&scenario)?;
            evaluate(loaded, &output)
        }
        Command::Scenarios => {
            for s in builtin_scenarios() {
                println!("{:<22} {}", s.id, s.name);
            }
            Ok(Outcome::Done)
        }
    }
}

fn evaluate(loaded: LoadedRuns, output: &OutputArgs) -> Result<Outcome, CliError> {
    let profile = ScoringProfile::default_v1();
    let runs = run_stage1(&loaded.raw);
    let score = run_stage2(&runs, &profile)?;
    let table = render_table(&runs);

    let ctx = ReportContext {
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        scenario: loaded.scenario.clone(),
        runs: &runs,
        score: &score,
        table: &table,
        headline: loaded.headline.as_ref(),
    };

    match output.format {
        OutputFormat::Text => print!("{}", render_report_text(&ctx)),
        OutputFormat::Json => println!("{}", render_summary_json(&ctx)?),
    }

    if let Some(dir) = &output.out {
        write_reports(&ctx, dir)?;
    }

    Ok(gate(score.total_score, output.fail_under))
}

fn gate(total: u32, fail_under: Option<u32>) -> Outcome {
    match fail_under {
        Some(threshold) if total < threshold => Outcome::BelowThreshold { total, threshold },
        _ => Outcome::Done,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
