use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::pipeline::SeasonComputed;
use crate::pipeline::stage1_weeks::WeekComputed;
use crate::report::html::{render_error_page, render_league_page};

pub const REPORT_FILE: &str = "league.html";

/// Requested week by id, falling back to the most recent week.
pub fn select_week<'a>(
    computed: &'a SeasonComputed,
    requested: Option<&str>,
) -> Option<&'a WeekComputed> {
    if let Some(id) = requested {
        if let Some(week) = computed.week(id) {
            return Some(week);
        }
        warn!(week = id, "requested week not found; showing the latest week");
    }
    computed.latest_week()
}

pub fn write_league_report(
    computed: &SeasonComputed,
    requested_week: Option<&str>,
    out_dir: &Path,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let selected = select_week(computed, requested_week);
    let page = render_league_page(&computed.weeks, selected, &computed.standings);
    let path = out_dir.join(REPORT_FILE);
    write_text(&path, &page)?;

    info!(
        path = %path.display(),
        week = selected.map(|w| w.id.as_str()).unwrap_or("-"),
        "league report written"
    );
    Ok(path)
}

/// Replaces any previous report with the data-error banner alone.
pub fn write_error_report(out_dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(REPORT_FILE);
    write_text(&path, &render_error_page())?;
    Ok(path)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
