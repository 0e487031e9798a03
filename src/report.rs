/// Report generation over an archive snapshot.
///
/// Produces the plain-text reports shown to users plus a structured JSON
/// year report for machine consumers. The text wording is a stable contract;
/// tests and surrounding tooling match on it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::archive::WeatherArchive;

/// Printed in place of a value the archive does not have.
const ABSENT: &str = "n/a";

/// Closing line for a year with no readings at all.
const NO_DATA: &str = "No data available for this year.\n";

// ============================================================================
// Month names
// ============================================================================

/// Calendar month names, indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display name for a month number. Out-of-range numbers never reach the
/// reports, but this stays total anyway.
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}

// ============================================================================
// Value formatting
// ============================================================================

fn fmt_temp(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}°C", v),
        None => ABSENT.to_string(),
    }
}

fn fmt_humidity(value: Option<i64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => ABSENT.to_string(),
    }
}

fn fmt_avg_humidity(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => ABSENT.to_string(),
    }
}

// ============================================================================
// Text reports
// ============================================================================

pub struct ReportGenerator<'a> {
    archive: &'a WeatherArchive,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(archive: &'a WeatherArchive) -> Self {
        ReportGenerator { archive }
    }

    /// Extreme temperatures and humidity for one year.
    pub fn yearly_report(&self, year: i32) -> String {
        let mut report = format!("Weather Report for {}:\n", year);

        match self.archive.yearly_extremes(year) {
            Some(extremes) => {
                report.push_str(&format!(
                    "Highest Temperature: {}\n",
                    fmt_temp(extremes.max_temp)
                ));
                report.push_str(&format!(
                    "Lowest Temperature: {}\n",
                    fmt_temp(extremes.min_temp)
                ));
                report.push_str(&format!(
                    "Highest Humidity: {}\n\n",
                    fmt_humidity(extremes.max_humidity)
                ));
            }
            None => report.push_str(NO_DATA),
        }

        report
    }

    /// Month-by-month averages for one year, in calendar order.
    pub fn monthly_report(&self, year: i32) -> String {
        let mut report = format!("Monthly Weather Averages for {}:\n", year);
        let months = self.archive.monthly_averages(year);

        if months.is_empty() {
            report.push_str(NO_DATA);
            return report;
        }

        for (month, averages) in months {
            report.push_str(&format!("{}:\n", month_name(month)));
            report.push_str(&format!(
                "Average Max Temperature: {}\n",
                fmt_temp(averages.avg_max_temp)
            ));
            report.push_str(&format!(
                "Average Min Temperature: {}\n",
                fmt_temp(averages.avg_min_temp)
            ));
            report.push_str(&format!(
                "Average Humidity: {}\n\n",
                fmt_avg_humidity(averages.avg_humidity)
            ));
        }

        report
    }

    /// The standout days of one year.
    pub fn highlights_report(&self, year: i32) -> String {
        let mut report = format!("Year Highlights for {}:\n", year);

        if self.archive.yearly_extremes(year).is_none() {
            report.push_str(NO_DATA);
            return report;
        }

        let highlights = self.archive.highlights(year);

        match &highlights.hottest_day {
            Some(day) => report.push_str(&format!("Hottest Day: {:.1}°C on {}\n", day.temp, day.date)),
            None => report.push_str(&format!("Hottest Day: {}\n", ABSENT)),
        }
        match &highlights.coldest_day {
            Some(day) => report.push_str(&format!("Coldest Day: {:.1}°C on {}\n", day.temp, day.date)),
            None => report.push_str(&format!("Coldest Day: {}\n", ABSENT)),
        }
        match &highlights.most_humid_day {
            Some(day) => {
                report.push_str(&format!("Most Humid Day: {}% on {}\n\n", day.humidity, day.date))
            }
            None => report.push_str(&format!("Most Humid Day: {}\n\n", ABSENT)),
        }

        report
    }

    /// Assembles the serializable year report.
    pub fn year_report(&self, year: i32) -> YearReport {
        let extremes = self.archive.yearly_extremes(year).map(|e| ExtremesReport {
            max_temp: e.max_temp,
            min_temp: e.min_temp,
            max_humidity: e.max_humidity,
        });

        let h = self.archive.highlights(year);
        let highlights = HighlightsReport {
            hottest_day: h.hottest_day.map(|d| TempDayReport {
                temp: d.temp,
                date: d.date,
            }),
            coldest_day: h.coldest_day.map(|d| TempDayReport {
                temp: d.temp,
                date: d.date,
            }),
            most_humid_day: h.most_humid_day.map(|d| HumidityDayReport {
                humidity: d.humidity,
                date: d.date,
            }),
        };

        let months = self
            .archive
            .monthly_averages(year)
            .into_iter()
            .map(|(month, averages)| MonthReport {
                month,
                name: month_name(month),
                avg_max_temp: averages.avg_max_temp,
                avg_min_temp: averages.avg_min_temp,
                avg_humidity: averages.avg_humidity,
            })
            .collect();

        YearReport {
            year,
            generated_at: Utc::now(),
            has_data: extremes.is_some(),
            extremes,
            highlights,
            months,
        }
    }

    /// The year report as pretty-printed JSON.
    pub fn year_report_json(&self, year: i32) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.year_report(year))
    }
}

// ============================================================================
// JSON report structures
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct YearReport {
    pub year: i32,
    pub generated_at: DateTime<Utc>,
    pub has_data: bool,
    pub extremes: Option<ExtremesReport>,
    pub highlights: HighlightsReport,
    pub months: Vec<MonthReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtremesReport {
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub max_humidity: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightsReport {
    pub hottest_day: Option<TempDayReport>,
    pub coldest_day: Option<TempDayReport>,
    pub most_humid_day: Option<HumidityDayReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TempDayReport {
    pub temp: f64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HumidityDayReport {
    pub humidity: i64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub month: u8,
    pub name: &'static str,
    pub avg_max_temp: Option<f64>,
    pub avg_min_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
}

// ============================================================================
// Tests
// ============================================================================
