//! Typed GBFS documents.
//!
//! Only the fields this crate reads are declared; serde ignores the rest,
//! so operators adding optional GBFS fields does not break decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Common wrapper around every GBFS document.
///
/// `last_updated` and `ttl` are informational only: a value of an
/// unexpected shape decodes as `None` instead of failing the document.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// POSIX seconds (GBFS 1.x/2.x) or an RFC 3339 string (GBFS 3.x).
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Seconds before the data should be considered stale.
    #[serde(default, deserialize_with = "lenient_ttl")]
    pub ttl: Option<u32>,
    pub data: T,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64().and_then(|s| DateTime::from_timestamp(s, 0)),
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        _ => None,
    })
}

fn lenient_ttl<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64()).and_then(|n| u32::try_from(n).ok()))
}

/// `gbfs.json`: one section per language code. Sections are decoded only
/// when requested, so a malformed sibling language does not matter.
pub type Discovery = Envelope<HashMap<String, serde_json::Value>>;

#[derive(Debug, Deserialize)]
pub struct LanguageFeeds {
    pub feeds: Vec<FeedRef>,
}

/// A named sub-feed listed in the discovery document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedRef {
    pub name: String,
    pub url: String,
}

/// `data` payload of the station feeds.
#[derive(Debug, Deserialize)]
pub struct Stations<T> {
    pub stations: Vec<T>,
}

/// Static station metadata from `station_information`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StationInformation {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Optional in GBFS; some operators omit it for virtual stations.
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Live availability from `station_status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StationStatus {
    pub station_id: String,
    pub num_bikes_available: u32,
    pub num_docks_available: u32,
}

/// Operator details from `system_information`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SystemInformation {
    pub system_id: String,
    pub language: String,
    pub name: String,
    pub timezone: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
