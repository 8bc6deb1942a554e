use std::collections::HashMap;

use tracing::{debug, info};

use crate::input::{Player, PlayerId, Season};
use crate::model::course::CourseProfile;

pub mod stage1_weeks;
pub mod stage2_standings;
pub mod stage3_report;

use stage1_weeks::{WeekComputed, compute_week};
use stage2_standings::{StandingsEntry, compute_standings};

pub const UNKNOWN_RUNNER: &str = "Unknown runner";

/// Runner lookup by id. A repeated id resolves to its last definition.
#[derive(Debug, Clone, Default)]
pub struct Roster<'a> {
    by_id: HashMap<Option<PlayerId>, &'a Player>,
}

impl<'a> Roster<'a> {
    pub fn new(players: &'a [Player]) -> Self {
        let by_id = players.iter().map(|p| (p.id.clone(), p)).collect();
        Self { by_id }
    }

    pub fn get(&self, id: Option<&PlayerId>) -> Option<&'a Player> {
        self.by_id.get(&id.cloned()).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonComputed {
    pub weeks: Vec<WeekComputed>,
    pub standings: Vec<StandingsEntry>,
}

impl SeasonComputed {
    /// A repeated id resolves to the last week carrying it.
    pub fn week(&self, id: &str) -> Option<&WeekComputed> {
        self.weeks.iter().rfind(|w| w.id == id)
    }

    pub fn latest_week(&self) -> Option<&WeekComputed> {
        self.weeks.last()
    }
}

pub fn compute_season(season: &Season, course: &CourseProfile) -> SeasonComputed {
    let roster = Roster::new(&season.players);
    let weeks: Vec<WeekComputed> = season
        .weeks
        .iter()
        .enumerate()
        .map(|(index, week)| compute_week(week, index, &roster, course))
        .collect();
    let standings = compute_standings(&season.players, &weeks);

    for entry in &standings {
        debug!(
            position = entry.position,
            player_id = ?entry.player_id,
            points = entry.points,
            "standing"
        );
    }
    info!(
        players = season.players.len(),
        weeks = weeks.len(),
        ranked = standings.len(),
        "season computed"
    );

    SeasonComputed { weeks, standings }
}
