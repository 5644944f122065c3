use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_bare_invocation_uses_working_directory() {
    let cli = Cli::try_parse_from(["melma-validation"]).unwrap();
    assert_eq!(cli.out, PathBuf::from("."));
    assert!(cli.summary.is_none());
    assert!(!cli.verbose);
}

#[test]
fn test_out_and_summary_flags() {
    let cli = Cli::try_parse_from([
        "melma-validation",
        "--out",
        "figures",
        "--summary",
        "figures/summary.json",
        "-v",
    ])
    .unwrap();
    assert_eq!(cli.out, PathBuf::from("figures"));
    assert_eq!(cli.summary, Some(PathBuf::from("figures/summary.json")));
    assert!(cli.verbose);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["melma-validation", "--input", "data"]).is_err());
}

#[test]
fn test_failure_is_written_once() {
    let err = AnalysisError::Chart {
        file: "broken.svg".to_string(),
        message: "backend unavailable".to_string(),
    };
    let mut buf = Vec::new();
    write_failure(&mut buf, &err).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(text.trim_end(), err.to_string());
}
