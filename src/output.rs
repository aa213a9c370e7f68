//! Output formatting and persistence for station summaries.
//!
//! Supports indented JSON on stdout and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::summary::StationSummary;

/// Writes `value` as JSON indented with four spaces, followed by a newline.
///
/// Non-ASCII text such as station names is written as-is, not escaped.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// [`write_json`] to standard output.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    write_json(std::io::stdout().lock(), value)
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    sampled_at: DateTime<Utc>,
    station_id: &'a str,
    name: &'a str,
    lat: f64,
    lon: f64,
    available_bikes: u32,
    available_locks: u32,
}

/// Appends one CSV row per station, stamped with `sampled_at`.
///
/// Creates the file with headers if it does not already exist. An empty
/// summary leaves the file untouched.
pub fn append_summary_csv<'a>(
    path: &str,
    summary: impl IntoIterator<Item = &'a StationSummary>,
    sampled_at: DateTime<Utc>,
) -> Result<()> {
    let mut summary = summary.into_iter().peekable();
    if summary.peek().is_none() {
        return Ok(());
    }

    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending summary rows");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for record in summary {
        writer.serialize(SummaryRow {
            sampled_at,
            station_id: &record.station_id,
            name: &record.name,
            lat: record.lat,
            lon: record.lon,
            available_bikes: record.available_bikes,
            available_locks: record.available_locks,
        })?;
    }
    writer.flush()?;

    Ok(())
}
