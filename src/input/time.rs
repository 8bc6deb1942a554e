/// Strict `m:ss` / `mm:ss` parser used for calculator input.
///
/// Surrounding whitespace is ignored. Minutes take one or two digits and
/// seconds exactly two; the seconds field is not range-checked.
pub fn parse_mmss_strict(text: &str) -> Option<u32> {
    let (mm, ss) = text.trim().split_once(':')?;
    if mm.is_empty() || mm.len() > 2 || ss.len() != 2 {
        return None;
    }
    if !mm.bytes().all(|b| b.is_ascii_digit()) || !ss.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: u32 = mm.parse().ok()?;
    let seconds: u32 = ss.parse().ok()?;
    Some(minutes * 60 + seconds)
}

/// Tolerant parser used for recorded league results.
///
/// Requires exactly two `:`-separated parts. Each part is trimmed, an empty
/// part counts as zero, anything else must be a finite decimal number.
pub fn parse_mmss_lenient(text: &str) -> Option<f64> {
    let mut parts = text.split(':');
    let mm = parts.next()?;
    let ss = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let minutes = parse_component(mm)?;
    let seconds = parse_component(ss)?;
    Some(minutes * 60.0 + seconds)
}

fn parse_component(part: &str) -> Option<f64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0.0);
    }
    let value: f64 = part.parse().ok()?;
    value.is_finite().then_some(value)
}

pub fn format_mmss(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/time.rs"]
mod tests;
