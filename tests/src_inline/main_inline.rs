use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("kira-trustscore").chain(args.iter().copied()))
}

#[test]
fn test_parse_run_command() {
    let cli = parse(&["run", "--input", "runs.json", "--out", "out"]).unwrap();
    match cli.command {
        Command::Run { input, output } => {
            assert_eq!(input, PathBuf::from("runs.json"));
            assert_eq!(output.out, Some(PathBuf::from("out")));
            assert_eq!(output.format, OutputFormat::Text);
            assert_eq!(output.fail_under, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_demo_defaults() {
    let cli = parse(&["demo", "-v"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Demo { scenario, output } => {
            assert_eq!(scenario, DEFAULT_SCENARIO);
            assert!(output.out.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_format_and_gate() {
    let cli = parse(&[
        "demo",
        "--scenario",
        "ai-chatbot",
        "--format",
        "json",
        "--fail-under",
        "85",
    ])
    .unwrap();
    match cli.command {
        Command::Demo { scenario, output } => {
            assert_eq!(scenario, "ai-chatbot");
            assert_eq!(output.format, OutputFormat::Json);
            assert_eq!(output.fail_under, Some(85));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_bad_args() {
    assert!(parse(&["run"]).is_err());
    assert!(parse(&["demo", "--fail-under", "101"]).is_err());
    assert!(parse(&["demo", "--format", "xml"]).is_err());
    assert!(parse(&["demo", "-v", "-q"]).is_err());
}

#[test]
fn test_gate() {
    assert_eq!(gate(69, None), Outcome::Done);
    assert_eq!(gate(69, Some(69)), Outcome::Done);
    assert_eq!(
        gate(69, Some(85)),
        Outcome::BelowThreshold {
            total: 69,
            threshold: 85
        }
    );
}

#[test]
fn test_demo_below_threshold() {
    let cli = parse(&["-q", "demo", "--format", "json", "--fail-under", "95"]).unwrap();
    let outcome = run(cli).unwrap();
    assert_eq!(
        outcome,
        Outcome::BelowThreshold {
            total: 69,
            threshold: 95
        }
    );
}

#[test]
fn test_unknown_demo_scenario_errors() {
    let cli = parse(&["demo", "--scenario", "nope"]).unwrap();
    assert!(matches!(run(cli), Err(CliError::Input(_))));
}
