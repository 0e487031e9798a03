/// Core data types for the Murree weather archive service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O, only types and their error/display impls.

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single daily observation parsed from one row of an archive file.
///
/// The date string is stored verbatim (e.g. "2004-8-1"); year, month and day
/// components are derived later by the analysis layer. Measurement fields are
/// `None` when the source field was blank or not numeric. Temperatures are in
/// degrees Celsius, humidity in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub date: String,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub humidity: Option<i64>,
}

// ---------------------------------------------------------------------------
// Aggregate keys
// ---------------------------------------------------------------------------

/// Composite key for monthly aggregates.
///
/// `month` is always a calendar month number in 1..=12; rows whose month
/// token cannot be normalized into that range never produce a key. Ordering
/// is year-major, so a sorted map iterates January..December within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u8,
}

// ---------------------------------------------------------------------------
// Aggregate result types
// ---------------------------------------------------------------------------

/// Running extreme values for one calendar year.
///
/// Produced by `analysis::extremes::yearly_extremes`. A field stays `None`
/// until the year contributes at least one present value for it, so a year
/// of readings with empty humidity columns reports `max_humidity: None`
/// rather than a fabricated zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearlyExtremes {
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_humidity: Option<i64>,
}

/// Arithmetic means over one (year, month) bucket.
///
/// Produced by `analysis::averages::monthly_averages`. Each mean is taken
/// over the readings that actually carried that field; a field nobody
/// reported that month is `None`, never 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyAverages {
    pub avg_max_temp: Option<f64>,
    pub avg_min_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
}

// ---------------------------------------------------------------------------
// Highlight types
// ---------------------------------------------------------------------------

/// A temperature extreme together with the date it occurred on.
#[derive(Debug, Clone, PartialEq)]
pub struct TempHighlight {
    pub temp: f64,
    pub date: String,
}

/// A humidity extreme together with the date it occurred on.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidityHighlight {
    pub humidity: i64,
    pub date: String,
}

/// The standout days of one calendar year.
///
/// Produced by `analysis::highlights::year_highlights`. On ties the earliest
/// reading in load order wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearHighlights {
    pub hottest_day: Option<TempHighlight>,
    pub coldest_day: Option<TempHighlight>,
    pub most_humid_day: Option<HumidityHighlight>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while loading an archive directory.
///
/// Malformed rows inside a readable file are not errors; they are skipped
/// and counted in `ingest::files::LoadStats`.
#[derive(Debug, PartialEq)]
pub enum ArchiveError {
    /// The configured archive directory does not exist or is not listable.
    DirectoryUnreadable { path: String, message: String },
    /// A matching file could not be read.
    FileUnreadable { path: String, message: String },
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::DirectoryUnreadable { path, message } => {
                write!(f, "Cannot read archive directory {}: {}", path, message)
            }
            ArchiveError::FileUnreadable { path, message } => {
                write!(f, "Cannot read archive file {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ArchiveError {}
