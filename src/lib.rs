//! Weather archive service for directories of daily observation files.
//!
//! Observation files are delimited text, one header line then one row per
//! day. The service loads every matching file once into an immutable
//! [`archive::WeatherArchive`] snapshot, aggregates per-year extremes and
//! per-month averages up front, and renders text, chart and JSON reports
//! from the snapshot. Picking up new files means building a new snapshot
//! and swapping it in whole.

pub mod analysis;
pub mod archive;
pub mod chart;
pub mod ingest;
pub mod layouts;
pub mod logging;
pub mod model;
pub mod report;
pub mod sources;
