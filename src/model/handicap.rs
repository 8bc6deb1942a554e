use thiserror::Error;

use crate::input::time::parse_mmss_strict;
use crate::model::course::CourseProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Please enter a valid old HI (multiple of 10).")]
    InvalidOldHi,
    #[error("Please enter a valid low HI or leave it blank.")]
    InvalidLowHi,
    #[error("Enter today's time as mm:ss (e.g. 22:10).")]
    InvalidTime,
    #[error("Unable to parse one or more PD entries.")]
    InvalidPd,
}

/// Validated calculator input.
#[derive(Debug, Clone, PartialEq)]
pub struct HandicapInput {
    pub old_hi: f64,
    pub low_hi: Option<f64>,
    pub today_seconds: u32,
    pub pd_history: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandicapOutcome {
    pub pd_today: f64,
    pub hi_raw_base: f64,
    pub bonus: f64,
    pub hi_raw: f64,
    pub new_hi: f64,
}

/// Raw calculator fields as typed by the runner.
#[derive(Debug, Clone, Default)]
pub struct HandicapForm<'a> {
    pub old_hi: &'a str,
    pub low_hi: &'a str,
    pub today: &'a str,
    pub pds: &'a str,
}

impl HandicapForm<'_> {
    /// Validates in field order; the first failing field is reported.
    pub fn parse(&self) -> Result<HandicapInput, CalcError> {
        let old_hi = parse_number(self.old_hi).ok_or(CalcError::InvalidOldHi)?;
        let low_hi = if self.low_hi.trim().is_empty() {
            None
        } else {
            Some(parse_number(self.low_hi).ok_or(CalcError::InvalidLowHi)?)
        };
        let today_seconds = parse_mmss_strict(self.today).ok_or(CalcError::InvalidTime)?;
        let pd_history = parse_pd_list(self.pds)?;
        Ok(HandicapInput {
            old_hi,
            low_hi,
            today_seconds,
            pd_history,
        })
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Comma-separated PD values; blank entries are skipped.
pub fn parse_pd_list(text: &str) -> Result<Vec<f64>, CalcError> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_number(entry).ok_or(CalcError::InvalidPd))
        .collect()
}

/// Rounds half-way values toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

pub fn round10(value: f64) -> f64 {
    round_half_up(value / 10.0) * 10.0
}

pub fn pd_from_time(seconds: u32, course: &CourseProfile) -> f64 {
    let delta = f64::from(seconds) - course.baseline_seconds;
    round1(delta / course.distance_km)
}

pub fn hi_from_pds(pds: &[f64]) -> f64 {
    if pds.is_empty() {
        return 0.0;
    }
    pds.iter().sum::<f64>() / pds.len() as f64
}

/// Extra cut when today's PD beats the frozen HI.
pub fn exceptional_cut(pd_today: f64, hi_frozen: f64, course: &CourseProfile) -> f64 {
    if pd_today < hi_frozen {
        (hi_frozen - pd_today) * course.exceptional_cut_rate
    } else {
        0.0
    }
}

/// Clamps to `[0, min(low_hi, hi_prev) + max_session_rise]`.
pub fn apply_caps(hi_prev: f64, hi_raw: f64, low_hi: Option<f64>, course: &CourseProfile) -> f64 {
    let min_hi = match low_hi {
        Some(low) => low.min(hi_prev),
        None => hi_prev,
    };
    let capped = hi_raw.min(min_hi + course.max_session_rise).max(0.0);
    // Normalise -0.0 so it never renders as "-0".
    capped + 0.0
}

pub fn compute_handicap(input: &HandicapInput, course: &CourseProfile) -> HandicapOutcome {
    let pd_today = pd_from_time(input.today_seconds, course);

    let mut pds = Vec::with_capacity(input.pd_history.len() + 1);
    pds.extend_from_slice(&input.pd_history);
    pds.push(pd_today);
    let hi_raw_base = hi_from_pds(&pds);

    let bonus = exceptional_cut(pd_today, input.old_hi, course);
    let hi_raw = round10(hi_raw_base - bonus);
    let new_hi = apply_caps(input.old_hi, hi_raw, input.low_hi, course);

    HandicapOutcome {
        pd_today,
        hi_raw_base,
        bonus,
        hi_raw,
        new_hi,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/handicap.rs"]
mod tests;
