//! Joins station metadata with live availability.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::error::GbfsError;
use crate::gbfs::StationInformation;

/// Per-station view combining location with bike and lock availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    pub name: String,
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub available_bikes: u32,
    pub available_locks: u32,
}

/// Builds one [`StationSummary`] per entry of `stations`, in the same order.
///
/// # Errors
///
/// Returns [`GbfsError::KeyLookup`] for the first station that has no entry
/// in `available_bikes` or `available_docks`.
pub fn build_summary(
    stations: &[StationInformation],
    available_bikes: &HashMap<String, u32>,
    available_docks: &HashMap<String, u32>,
) -> Result<Vec<StationSummary>, GbfsError> {
    stations
        .iter()
        .map(|station| -> Result<StationSummary, GbfsError> {
            let lookup = |mapping: &HashMap<String, u32>, name: &'static str| {
                mapping
                    .get(&station.station_id)
                    .copied()
                    .ok_or_else(|| GbfsError::KeyLookup {
                        station_id: station.station_id.clone(),
                        mapping: name,
                    })
            };

            Ok(StationSummary {
                name: station.name.clone(),
                station_id: station.station_id.clone(),
                lat: station.lat,
                lon: station.lon,
                available_bikes: lookup(available_bikes, "available_bikes")?,
                available_locks: lookup(available_docks, "available_docks")?,
            })
        })
        .collect()
}

/// Re-keys a summary list by `station_id`.
///
/// A repeated id keeps the record seen last and logs a warning.
pub fn index_by_station_id(summary: Vec<StationSummary>) -> BTreeMap<String, StationSummary> {
    let mut by_id = BTreeMap::new();
    for record in summary {
        if let Some(previous) = by_id.insert(record.station_id.clone(), record) {
            warn!(
                station_id = %previous.station_id,
                "Duplicate station_id in summary, keeping the last record"
            );
        }
    }
    by_id
}
