//! Client for GBFS bike-share feeds.
//!
//! [`gbfs::GbfsClient`] reads a system's discovery document, fetches its
//! station feeds and joins them into per-station [`summary::StationSummary`]
//! records.

pub mod error;
pub mod fetch;
pub mod gbfs;
pub mod output;
pub mod parser;
pub mod summary;

pub use error::GbfsError;
