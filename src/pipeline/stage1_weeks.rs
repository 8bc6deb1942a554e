use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::input::time::parse_mmss_lenient;
use crate::input::{PlayerId, Week};
use crate::model::course::CourseProfile;
use crate::model::points::points_for_position;
use crate::pipeline::{Roster, UNKNOWN_RUNNER};
use crate::report::{format_hi, format_net};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub player_id: Option<PlayerId>,
    pub runner: String,
    pub time: Option<String>,
    pub hi_frozen: f64,
    pub net: Option<f64>,
    pub position: usize,
    pub points: u32,
    pub net_text: String,
    pub hi_display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekComputed {
    pub id: String,
    pub week_number: Option<String>,
    pub date: Option<String>,
    pub rows: Vec<WeekRow>,
}

impl WeekComputed {
    pub fn label(&self) -> String {
        let number = self.week_number.as_deref().unwrap_or(self.id.as_str());
        match self.date.as_deref() {
            Some(date) if !date.is_empty() => format!("Week {number} — {date}"),
            _ => format!("Week {number}"),
        }
    }
}

/// Pace over the course minus the frozen HI; `None` when the time is unreadable.
pub fn net_seconds_per_km(time: Option<&str>, hi_frozen: f64, course: &CourseProfile) -> Option<f64> {
    let total = parse_mmss_lenient(time?)?;
    Some(total / course.distance_km - hi_frozen)
}

/// Ranks one week's results. `index` is the week's position in the document and
/// only serves as its id when the week number is missing.
pub fn compute_week(
    week: &Week,
    index: usize,
    roster: &Roster<'_>,
    course: &CourseProfile,
) -> WeekComputed {
    let id = week.week.clone().unwrap_or_else(|| index.to_string());

    let mut rows: Vec<WeekRow> = week
        .results
        .iter()
        .map(|result| {
            let player = roster.get(result.player_id.as_ref());
            if player.is_none() {
                warn!(
                    week = %id,
                    player_id = ?result.player_id,
                    "result references a runner missing from the roster"
                );
            }
            // Every week uses the runner's current HI from the document.
            let hi_frozen = player.and_then(|p| p.hi).unwrap_or(0.0);
            let runner = player
                .and_then(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_RUNNER.to_string());
            let net = net_seconds_per_km(result.time.as_deref(), hi_frozen, course);
            if net.is_none() {
                debug!(week = %id, runner = %runner, time = ?result.time, "unparseable result time");
            }
            WeekRow {
                player_id: result.player_id.clone(),
                runner,
                time: result.time.clone(),
                hi_frozen,
                net,
                position: 0,
                points: 0,
                net_text: String::new(),
                hi_display: String::new(),
            }
        })
        .collect();

    rows.sort_by(|a, b| compare_net(a.net, b.net));

    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
        row.points = points_for_position(row.position);
        row.net_text = format_net(row.net);
        row.hi_display = format_hi(row.hi_frozen);
    }

    WeekComputed {
        id,
        week_number: week.week.clone(),
        date: week.date.clone(),
        rows,
    }
}

// Ascending net; missing nets after every numeric one.
fn compare_net(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_weeks.rs"]
mod tests;
