/// The in-memory weather archive snapshot.
///
/// A `WeatherArchive` is built once, from a load pass or a ready-made
/// reading list, computes both aggregate maps up front, and never changes
/// afterwards. Queries borrow from the snapshot. Reloading means building a
/// fresh archive and swapping it in wholesale, so a reader never sees a
/// half-updated view.

use std::collections::BTreeMap;
use std::error::Error;

use crate::analysis::{averages, extremes, highlights};
use crate::ingest::files::{self, LoadStats};
use crate::model::{MonthKey, MonthlyAverages, WeatherReading, YearHighlights, YearlyExtremes};
use crate::sources::SourceConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherArchive {
    readings: Vec<WeatherReading>,
    yearly: BTreeMap<i32, YearlyExtremes>,
    monthly: BTreeMap<MonthKey, MonthlyAverages>,
    stats: LoadStats,
}

impl WeatherArchive {
    /// Loads the configured archive directory and aggregates it.
    pub fn load(config: &SourceConfig) -> Result<Self, Box<dyn Error>> {
        let layout = config.resolve_layout()?;
        let result = files::load_directory(&config.archive, &layout)?;
        let mut archive = Self::from_readings(result.readings);
        archive.stats = result.stats;
        Ok(archive)
    }

    /// Builds a snapshot from readings already in memory.
    ///
    /// Load counters stay at zero here; only `load` knows about files.
    pub fn from_readings(readings: Vec<WeatherReading>) -> Self {
        let yearly = extremes::yearly_extremes(&readings);
        let monthly = averages::monthly_averages(&readings);
        WeatherArchive {
            readings,
            yearly,
            monthly,
            stats: LoadStats::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Extreme values for `year`. `None` when the year has no readings.
    pub fn yearly_extremes(&self, year: i32) -> Option<&YearlyExtremes> {
        self.yearly.get(&year)
    }

    /// The months of `year` that have readings, in calendar order.
    pub fn monthly_averages(&self, year: i32) -> Vec<(u8, &MonthlyAverages)> {
        self.monthly
            .range(MonthKey { year, month: 1 }..=MonthKey { year, month: 12 })
            .map(|(key, avg)| (key.month, avg))
            .collect()
    }

    /// Averages for one specific month. `None` when it has no readings.
    pub fn month_averages(&self, key: MonthKey) -> Option<&MonthlyAverages> {
        self.monthly.get(&key)
    }

    /// The standout days of `year`, computed on demand from the readings.
    pub fn highlights(&self, year: i32) -> YearHighlights {
        highlights::year_highlights(&self.readings, year)
    }

    /// Every year with at least one aggregated reading, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.yearly.keys().copied().collect()
    }

    /// All readings, in load order.
    pub fn readings(&self) -> &[WeatherReading] {
        &self.readings
    }

    /// Counters from the load pass that built this snapshot.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
