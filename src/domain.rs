use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a supported carrier. The set is fixed at compile time;
/// carriers are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierId {
    AusPost,
    FedEx,
    Unknown,
}

impl CarrierId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierId::AusPost => "AUSPOST",
            CarrierId::FedEx => "FEDEX",
            CarrierId::Unknown => "UNKNOWN",
        }
    }

    /// Parses a carrier key, mapping anything outside the fixed set to `Unknown`.
    pub fn parse(key: &str) -> Self {
        match key {
            "AUSPOST" => CarrierId::AusPost,
            "FEDEX" => CarrierId::FedEx,
            _ => CarrierId::Unknown,
        }
    }
}

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single scan/checkpoint in a shipment's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    #[serde(with = "event_time_format")]
    pub time: NaiveDateTime,
    pub description: String,
    pub location: String,
}

/// The response shape returned for a tracking query. Events are ordered
/// most-recent-first. "Not Found" is carried as a normal result with the
/// `error` field populated, never as a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    pub carrier: String,
    pub tracking_number: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TrackingEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Serializes event timestamps as "YYYY-MM-DD HH:MM".
mod event_time_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
