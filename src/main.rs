mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::input::time::format_mmss;
use crate::input::{DEFAULT_SEASON_PATH, SeasonError, load_season};
use crate::model::course::CourseProfile;
use crate::model::handicap::{CalcError, HandicapForm, compute_handicap};
use crate::pipeline::compute_season;
use crate::pipeline::stage3_report::{write_error_report, write_league_report};
use crate::report::html::{render_calc_error, render_calc_result};

#[derive(Parser, Debug)]
#[command(
    name = "league-handicap",
    version,
    about = "Running-league handicap calculator and season standings"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a runner's new HI from today's time
    Calc(CalcArgs),
    /// Rank every week of a season and write the league page
    Season(SeasonArgs),
}

#[derive(Args, Debug, Clone)]
struct CalcArgs {
    /// Previous handicap index
    #[arg(long = "old-hi", allow_hyphen_values = true)]
    old_hi: String,

    /// Lowest HI floor; blank means the old HI
    #[arg(long = "low-hi", default_value = "", allow_hyphen_values = true)]
    low_hi: String,

    /// Today's time as mm:ss
    #[arg(long)]
    today: String,

    /// Comma-separated historical PD values
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pds: String,

    /// Write the HTML fragment here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct SeasonArgs {
    /// Season document (.json or .json.gz)
    #[arg(long, default_value = DEFAULT_SEASON_PATH)]
    input: PathBuf,

    /// Directory receiving league.html
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Week id to show on the leaderboard; defaults to the latest week
    #[arg(long)]
    week: Option<String>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Validation(#[from] CalcError),
    #[error("failed to load season data: {0}")]
    Season(#[from] SeasonError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(&cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: &Command) -> Result<(), AppError> {
    let course = CourseProfile::craigavon();
    match command {
        Command::Calc(args) => run_calc(args, &course),
        Command::Season(args) => run_season(args, &course),
    }
}

fn run_calc(args: &CalcArgs, course: &CourseProfile) -> Result<(), AppError> {
    let form = HandicapForm {
        old_hi: &args.old_hi,
        low_hi: &args.low_hi,
        today: &args.today,
        pds: &args.pds,
    };
    let input = match form.parse() {
        Ok(input) => input,
        Err(err) => {
            warn!(error = %err, "calculator input rejected");
            emit(args.out.as_deref(), &render_calc_error(&err.to_string()))?;
            return Err(err.into());
        }
    };

    let outcome = compute_handicap(&input, course);
    debug!(
        hi_raw_base = outcome.hi_raw_base,
        bonus = outcome.bonus,
        "handicap intermediates"
    );
    info!(
        course = course.id,
        time = %format_mmss(input.today_seconds),
        pd_today = outcome.pd_today,
        hi_raw = outcome.hi_raw,
        new_hi = outcome.new_hi,
        "handicap updated"
    );
    emit(
        args.out.as_deref(),
        &render_calc_result(&outcome, input.old_hi, course),
    )?;
    Ok(())
}

fn run_season(args: &SeasonArgs, course: &CourseProfile) -> Result<(), AppError> {
    let season = match load_season(&args.input) {
        Ok(season) => season,
        Err(err) => {
            write_error_report(&args.out)?;
            return Err(err.into());
        }
    };
    info!(
        path = %args.input.display(),
        players = season.players.len(),
        weeks = season.weeks.len(),
        "season loaded"
    );

    let computed = compute_season(&season, course);
    write_league_report(&computed, args.week.as_deref(), &args.out)?;
    Ok(())
}

fn emit(out: Option<&Path>, html: &str) -> std::io::Result<()> {
    match out {
        Some(path) => std::fs::write(path, html),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
