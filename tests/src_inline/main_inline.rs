use super::*;
use clap::CommandFactory;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("league_main_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_season_defaults() {
    let cli = Cli::try_parse_from(["league-handicap", "season"]).unwrap();
    match cli.command {
        Command::Season(args) => {
            assert_eq!(args.input, PathBuf::from("data/season.json"));
            assert_eq!(args.out, PathBuf::from("."));
            assert_eq!(args.week, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_calc_accepts_negative_values() {
    let cli = Cli::try_parse_from([
        "league-handicap",
        "calc",
        "--old-hi",
        "130",
        "--today",
        "22:10",
        "--pds",
        "-5, 120",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Calc(args) => {
            assert_eq!(args.pds, "-5, 120");
            assert_eq!(args.low_hi, "");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_calc_requires_time() {
    assert!(Cli::try_parse_from(["league-handicap", "calc", "--old-hi", "130"]).is_err());
}

fn calc_args(out: &Path, old_hi: &str, today: &str, pds: &str) -> CalcArgs {
    CalcArgs {
        old_hi: old_hi.to_string(),
        low_hi: String::new(),
        today: today.to_string(),
        pds: pds.to_string(),
        out: Some(out.to_path_buf()),
    }
}

#[test]
fn test_run_calc_writes_result() {
    let dir = make_temp_dir();
    let out = dir.join("calc.html");
    run_calc(
        &calc_args(&out, "130", "22:10", "120"),
        &CourseProfile::craigavon(),
    )
    .unwrap();
    let html = std::fs::read_to_string(out).unwrap();
    assert!(html.contains("New HI: <strong>60</strong>"));
}

#[test]
fn test_run_calc_reports_validation_error() {
    let dir = make_temp_dir();
    let out = dir.join("calc.html");
    let err = run_calc(
        &calc_args(&out, "130", "22.10", ""),
        &CourseProfile::craigavon(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(CalcError::InvalidTime)));
    let html = std::fs::read_to_string(out).unwrap();
    assert!(html.starts_with("<p class=\"bad\">"));
    assert!(!html.contains("New HI"));
}

#[test]
fn test_run_season_missing_input_writes_error_page() {
    let dir = make_temp_dir();
    let args = SeasonArgs {
        input: dir.join("absent.json"),
        out: dir.clone(),
        week: None,
    };
    let err = run_season(&args, &CourseProfile::craigavon()).unwrap_err();
    assert!(matches!(err, AppError::Season(SeasonError::Missing(_))));
    let html = std::fs::read_to_string(dir.join("league.html")).unwrap();
    assert!(html.contains("Unable to load season data."));
    assert!(!html.contains("<table>"));
}

#[test]
fn test_run_season_malformed_input_writes_error_page() {
    let dir = make_temp_dir();
    let input = dir.join("season.json");
    std::fs::write(&input, "{ not json").unwrap();
    let args = SeasonArgs {
        input,
        out: dir.clone(),
        week: None,
    };
    let err = run_season(&args, &CourseProfile::craigavon()).unwrap_err();
    assert!(matches!(err, AppError::Season(SeasonError::Parse(_))));
    let html = std::fs::read_to_string(dir.join("league.html")).unwrap();
    assert!(!html.contains("<table>"));
}

#[test]
fn test_run_season_renders_fixture() {
    let dir = make_temp_dir();
    let input = dir.join("season.json");
    std::fs::write(&input, include_str!("../fixtures/season.json")).unwrap();
    let args = SeasonArgs {
        input,
        out: dir.join("site"),
        week: Some("1".to_string()),
    };
    run_season(&args, &CourseProfile::craigavon()).unwrap();
    let html = std::fs::read_to_string(dir.join("site").join("league.html")).unwrap();
    assert!(html.contains("<option value=\"1\" selected>"));
    assert!(html.contains("Aoife Brennan"));
}
