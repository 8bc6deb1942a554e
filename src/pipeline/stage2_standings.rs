use std::cmp::Ordering;
use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::input::{Player, PlayerId};
use crate::pipeline::stage1_weeks::WeekComputed;
use crate::pipeline::{Roster, UNKNOWN_RUNNER};

#[derive(Debug, Clone, PartialEq)]
pub struct StandingsEntry {
    pub position: usize,
    pub player_id: Option<PlayerId>,
    pub runner: String,
    pub points: u32,
    pub hi: Option<f64>,
}

/// Season totals, rebuilt from the weekly rows on every call.
pub fn compute_standings(players: &[Player], weeks: &[WeekComputed]) -> Vec<StandingsEntry> {
    let roster = Roster::new(players);

    let mut order: Vec<Option<&PlayerId>> = Vec::with_capacity(players.len());
    let mut totals: HashMap<Option<&PlayerId>, u32> = HashMap::with_capacity(players.len());
    for player in players {
        let key = player.id.as_ref();
        if !totals.contains_key(&key) {
            totals.insert(key, 0);
            order.push(key);
        }
    }

    for week in weeks {
        for row in &week.rows {
            let key = row.player_id.as_ref();
            let total = totals.entry(key).or_insert_with(|| {
                order.push(key);
                0
            });
            *total += row.points;
        }
    }

    let mut standings: Vec<StandingsEntry> = order
        .into_iter()
        .map(|key| {
            let points = totals.get(&key).copied().unwrap_or(0);
            let (runner, hi) = match roster.get(key) {
                Some(player) => (
                    player
                        .name
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_RUNNER.to_string()),
                    player.hi,
                ),
                None => (UNKNOWN_RUNNER.to_string(), Some(0.0)),
            };
            StandingsEntry {
                position: 0,
                player_id: key.cloned(),
                runner,
                points,
                hi,
            }
        })
        .collect();

    standings.sort_by(|a, b| match b.points.cmp(&a.points) {
        Ordering::Equal => compare_names(&a.runner, &b.runner),
        other => other,
    });

    for (i, entry) in standings.iter_mut().enumerate() {
        entry.position = i + 1;
    }

    standings
}

/// Collation-style order: base letters, then accents, then case with
/// lowercase first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| b.cmp(a))
}

// Lowercased with accents stripped: "Órla" and "orla" share a key.
fn primary_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn secondary_key(name: &str) -> String {
    name.nfd().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_standings.rs"]
mod tests;
