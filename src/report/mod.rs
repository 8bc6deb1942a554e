pub mod html;

/// Placeholder for a missing value in any table cell.
pub const MISSING: &str = "—";

/// Shortest decimal form; whole numbers carry no fractional part.
pub fn format_number(v: f64) -> String {
    format!("{}", v + 0.0)
}

pub fn format_hi(hi: f64) -> String {
    format!("{}s/km", format_number(hi))
}

pub fn format_net(net: Option<f64>) -> String {
    match net {
        None => MISSING.to_string(),
        Some(v) => {
            let prefix = if v > 0.0 { "+" } else { "" };
            format!("{prefix}{} sec/km", to_fixed_1(v))
        }
    }
}

/// One decimal place; exact halfway values round away from zero.
pub fn to_fixed_1(v: f64) -> String {
    let abs = v.abs();
    // A double sits exactly between two tenths only when its fraction is .25 or .75.
    let quarters = abs * 4.0;
    let rounded = if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        (abs * 10.0 + 0.5).floor() / 10.0
    } else {
        abs
    };
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.1}")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
