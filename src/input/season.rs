use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::report::format_number;

/// Opaque runner identifier. Numeric and string ids never compare equal.
///
/// Numbers are kept in canonical decimal form, so `1` and `1.0` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Number(String),
    Text(String),
    Other(String),
}

impl PlayerId {
    pub fn number(n: f64) -> Self {
        PlayerId::Number(format_number(n))
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => PlayerId::Text(s),
            Value::Number(n) => n
                .as_f64()
                .map_or_else(|| PlayerId::Number(n.to_string()), PlayerId::number),
            other => PlayerId::Other(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Season {
    #[serde(default, deserialize_with = "array_or_empty")]
    pub players: Vec<Player>,
    #[serde(default, deserialize_with = "array_or_empty")]
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub id: Option<PlayerId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hi: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Week {
    /// Week label as written in the document; numbers render without a fraction.
    #[serde(default, deserialize_with = "lenient_text")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "array_or_empty")]
    pub results: Vec<RaceResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "playerId", default)]
    pub player_id: Option<PlayerId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
}

/// Text form of a JSON scalar; `null` has none.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.as_f64().map_or_else(|| n.to_string(), format_number)),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| value_text(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

// Anything other than a JSON array (missing, null, object, scalar) reads as empty.
fn array_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

// Numbers and numeric strings; anything else counts as missing.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}
