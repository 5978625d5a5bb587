use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;
use tracing::warn;

/// A single scheduled competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    /// ISO-8601 calendar date, used as display label and grouping key.
    pub day: String,
    pub discipline_name: String,
    #[serde(default, deserialize_with = "deserialize_gender")]
    pub gender_code: Option<Gender>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl Event {
    /// Parse `day` as a calendar date. Returns `None` if the label isn't `YYYY-MM-DD`.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.day, "%Y-%m-%d").ok()
    }

    /// Find a competitor by its per-event country identifier.
    pub fn competitor(&self, country_id: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.country_id == country_id)
    }

    /// Whether every competitor already has a result.
    pub fn is_concluded(&self) -> bool {
        !self.competitors.is_empty() && self.competitors.iter().all(|c| c.has_result())
    }
}

/// One participant or team within an event, in ranking/display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub country_id: String,
    pub country_flag_url: String,
    pub competitor_name: String,
    #[serde(default)]
    pub result_mark: String,
}

impl Competitor {
    pub fn has_result(&self) -> bool {
        !self.result_mark.trim().is_empty()
    }
}

/// Gender category of an event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
pub enum Gender {
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Men,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Women,
}

fn deserialize_gender<'de, D>(deserializer: D) -> std::result::Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|code| parse_gender_code(&code)))
}

/// Parse a wire gender code. Empty means "not specified"; unknown codes are
/// logged and treated the same way.
fn parse_gender_code(code: &str) -> Option<Gender> {
    if code.is_empty() {
        return None;
    }
    match code.parse() {
        Ok(gender) => Some(gender),
        Err(_) => {
            warn!(code, "unknown gender code, treating as unspecified");
            None
        }
    }
}
