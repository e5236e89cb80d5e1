use clap::Parser;
use feelbook_cli::cli_args::Cli;

// Integration tests for flag parsing and the manual-override rules.

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse")
}

#[test]
fn schedule_file_run_parses() {
    let cli = parse(&["feelbook", "-u", "a@b.se", "-p", "pw", "-a", "weekly"]);
    let run = cli.to_run_config("pw".to_string()).expect("run config");
    assert_eq!(run.username, "a@b.se");
    assert_eq!(run.activities_file.as_deref(), Some("weekly"));
    assert!(run.manual.is_none());
    assert!(!run.dry_run);
}

#[test]
fn full_manual_triple_parses() {
    let cli = parse(&[
        "feelbook",
        "-u",
        "a@b.se",
        "-p",
        "pw",
        "-n",
        "Boka",
        "-t",
        "09:00",
        "-d",
        "Sunday",
        "--start-time",
        "09:00",
    ]);
    let run = cli.to_run_config("pw".to_string()).expect("run config");
    let manual = run.manual.expect("manual entry");
    assert_eq!(manual.name, "Boka");
    assert_eq!(manual.time, "09:00");
    assert_eq!(manual.day, "Sunday");
    assert_eq!(manual.start_time.as_deref(), Some("09:00"));
}

#[test]
fn partial_manual_triple_is_rejected() {
    let cli = parse(&["feelbook", "-u", "a@b.se", "-p", "pw", "-n", "Boka"]);
    let err = cli.to_run_config("pw".to_string()).unwrap_err();
    assert!(err.contains("name, time and day"));
}

#[test]
fn missing_activity_source_is_rejected() {
    let cli = parse(&["feelbook", "-u", "a@b.se", "-p", "pw"]);
    assert!(cli.to_run_config("pw".to_string()).is_err());
}

#[test]
fn test_flag_sets_dry_run() {
    let cli = parse(&["feelbook", "-u", "a@b.se", "-p", "pw", "-a", "weekly", "--test"]);
    let run = cli.to_run_config("pw".to_string()).expect("run config");
    assert!(run.dry_run);
}

#[test]
fn day_offset_accepts_negative_values() {
    let cli = parse(&[
        "feelbook",
        "-u",
        "a@b.se",
        "-p",
        "pw",
        "-a",
        "weekly",
        "--day-offset",
        "-2",
    ]);
    let run = cli.to_run_config("pw".to_string()).expect("run config");
    assert_eq!(run.day_offset, Some(-2));
}

#[test]
fn username_is_required() {
    assert!(Cli::try_parse_from(["feelbook", "-a", "weekly"]).is_err());
}

#[test]
fn manual_entry_wins_over_schedule_file_in_core() {
    // Both sources may be given; the pipeline prefers the manual entry.
    let cli = parse(&[
        "feelbook", "-u", "a@b.se", "-p", "pw", "-a", "weekly", "-n", "Boka", "-t", "09:00",
        "-d", "7",
    ]);
    let run = cli.to_run_config("pw".to_string()).expect("run config");
    assert!(run.manual.is_some());
    assert!(run.activities_file.is_some());
}
