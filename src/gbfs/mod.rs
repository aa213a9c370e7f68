//! GBFS discovery and feed access.

mod client;
pub mod types;

pub use client::{ClientConfig, DEFAULT_DISCOVERY_URL, DEFAULT_LANGUAGE, GbfsClient};
pub use types::{FeedRef, StationInformation, StationStatus, SystemInformation};

/// Feed names used by the typed accessors.
pub mod feeds {
    pub const STATION_INFORMATION: &str = "station_information";
    pub const STATION_STATUS: &str = "station_status";
    pub const SYSTEM_INFORMATION: &str = "system_information";
}
