use std::fmt::Write;

use crate::model::course::CourseProfile;
use crate::model::handicap::HandicapOutcome;
use crate::pipeline::stage1_weeks::WeekComputed;
use crate::pipeline::stage2_standings::StandingsEntry;
use crate::report::{MISSING, escape_html, format_hi, format_number, to_fixed_1};

pub const DATA_ERROR_MESSAGE: &str = "Unable to load season data. Please try again later.";

struct Cell {
    text: String,
    column: Option<&'static str>,
    class: Option<&'static str>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            column: None,
            class: None,
        }
    }

    fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }

    fn class(mut self, class: Option<&'static str>) -> Self {
        self.class = class;
        self
    }
}

pub fn render_calc_result(outcome: &HandicapOutcome, old_hi: f64, course: &CourseProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<p>Today PD: <strong>{}</strong> sec/km</p>",
        to_fixed_1(outcome.pd_today)
    );
    let _ = writeln!(
        out,
        "<p>New HI: <strong>{}</strong> sec/km (was {})</p>",
        format_number(outcome.new_hi),
        format_number(old_hi)
    );
    let _ = writeln!(
        out,
        "<p class=\"small\">Assumes {} (CR {}).</p>",
        escape_html(course.name),
        format_number(course.course_rating)
    );
    out
}

pub fn render_calc_error(message: &str) -> String {
    format!("<p class=\"bad\">{}</p>\n", escape_html(message))
}

pub fn render_data_error() -> String {
    format!(
        "<div id=\"dataError\" class=\"bad\" role=\"alert\">{}</div>\n",
        escape_html(DATA_ERROR_MESSAGE)
    )
}

/// Only `selected` itself is marked, even when another week shares its id.
pub fn render_week_options(weeks: &[WeekComputed], selected: Option<&WeekComputed>) -> String {
    let mut out = String::new();
    out.push_str("<select id=\"weekSelect\"");
    if weeks.is_empty() {
        out.push_str(" disabled");
    }
    out.push_str(">\n");
    for week in weeks {
        let is_selected = selected.is_some_and(|s| std::ptr::eq(s, week));
        let _ = writeln!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape_html(&week.id),
            if is_selected { " selected" } else { "" },
            escape_html(&week.label())
        );
    }
    out.push_str("</select>\n");
    out
}

pub fn render_week_leaderboard(week: Option<&WeekComputed>) -> String {
    let week = match week {
        Some(w) if !w.rows.is_empty() => w,
        _ => return "<p class=\"small\">No week results available yet.</p>\n".to_string(),
    };

    let headers = [
        ("#", None),
        ("Runner", None),
        ("Time", None),
        ("HI (frozen)", Some("hi")),
        ("NET", None),
        ("Pts", None),
    ];
    let rows = week.rows.iter().map(|row| {
        let net_class = row.net.map(|n| if n <= 0.0 { "good" } else { "bad" });
        vec![
            Cell::plain(row.position.to_string()),
            Cell::plain(row.runner.as_str()),
            Cell::plain(row.time.as_deref().unwrap_or("")),
            Cell::plain(row.hi_display.as_str()).column("hi"),
            Cell::plain(row.net_text.as_str()).class(net_class),
            Cell::plain(row.points.to_string()),
        ]
    });
    render_table(&headers, rows)
}

pub fn render_season_table(standings: &[StandingsEntry]) -> String {
    if standings.is_empty() {
        return "<p class=\"small\">No season standings yet.</p>\n".to_string();
    }

    let headers = [
        ("#", None),
        ("Runner", None),
        ("Points", None),
        ("Current HI", Some("hi")),
    ];
    let rows = standings.iter().map(|entry| {
        let hi_text = entry.hi.map_or_else(|| MISSING.to_string(), format_hi);
        vec![
            Cell::plain(entry.position.to_string()),
            Cell::plain(entry.runner.as_str()),
            Cell::plain(entry.points.to_string()).class(Some("points-strong")),
            Cell::plain(hi_text).column("hi"),
        ]
    });
    render_table(&headers, rows)
}

fn render_table(
    headers: &[(&str, Option<&'static str>)],
    rows: impl Iterator<Item = Vec<Cell>>,
) -> String {
    let mut out = String::new();
    out.push_str("<table>\n<thead>\n<tr>");
    for (label, column) in headers {
        out.push_str("<th");
        push_column_attr(&mut out, *column);
        let _ = write!(out, ">{}</th>", escape_html(label));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for cells in rows {
        out.push_str("<tr>");
        for cell in cells {
            out.push_str("<td");
            push_column_attr(&mut out, cell.column);
            if let Some(class) = cell.class {
                let _ = write!(out, " class=\"{class}\"");
            }
            let _ = write!(out, ">{}</td>", escape_html(&cell.text));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn push_column_attr(out: &mut String, column: Option<&str>) {
    if let Some(column) = column {
        let _ = write!(out, " data-column=\"{column}\"");
    }
}

/// Full page: week picker, the selected week's leaderboard, season standings.
pub fn render_league_page(
    weeks: &[WeekComputed],
    selected: Option<&WeekComputed>,
    standings: &[StandingsEntry],
) -> String {
    let mut out = page_open();
    out.push_str("<section id=\"weekLeaderboard\">\n<h2>Weekly leaderboard</h2>\n");
    out.push_str(&render_week_options(weeks, selected));
    out.push_str(&render_week_leaderboard(selected));
    out.push_str("</section>\n");
    out.push_str("<section id=\"seasonTable\">\n<h2>Season standings</h2>\n");
    out.push_str(&render_season_table(standings));
    out.push_str("</section>\n");
    out.push_str(PAGE_CLOSE);
    out
}

/// Page carrying only the retrieval banner.
pub fn render_error_page() -> String {
    let mut out = page_open();
    out.push_str(&render_data_error());
    out.push_str(PAGE_CLOSE);
    out
}

const PAGE_CLOSE: &str = "</main>\n</body>\n</html>\n";

fn page_open() -> String {
    concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n<meta charset=\"utf-8\">\n<title>League standings</title>\n</head>\n",
        "<body>\n<main>\n",
    )
    .to_string()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
