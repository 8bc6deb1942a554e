use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

pub mod season;
pub mod time;

pub use season::{Player, PlayerId, Season, Week};

/// Relative location of the season document.
pub const DEFAULT_SEASON_PATH: &str = "data/season.json";

#[derive(Debug, Error)]
pub enum SeasonError {
    #[error("season document not found: {0}")]
    Missing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reads and parses the season document. Nothing is cached between calls.
pub fn load_season(path: &Path) -> Result<Season, SeasonError> {
    if !path.exists() {
        return Err(SeasonError::Missing(path.display().to_string()));
    }
    let mut text = String::new();
    open_maybe_gz(path)?.read_to_string(&mut text)?;
    let season = parse_season(&text)?;
    debug!(
        path = %path.display(),
        players = season.players.len(),
        weeks = season.weeks.len(),
        "season document parsed"
    );
    Ok(season)
}

pub fn parse_season(text: &str) -> Result<Season, SeasonError> {
    Ok(serde_json::from_str(text)?)
}

fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, SeasonError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
