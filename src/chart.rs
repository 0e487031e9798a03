/// Console temperature chart.
///
/// Draws each day of one month as a pair of horizontal bars, red for the
/// daily high and blue for the daily low, one bar character per degree
/// Celsius. Output carries ANSI color escapes, so it is meant for a
/// terminal, not a file.

use std::collections::BTreeMap;

use crate::analysis::{day_of, month_key_of};
use crate::model::{MonthKey, WeatherReading};
use crate::report::month_name;

const RED: &str = "\x1b[91m";
const BLUE: &str = "\x1b[94m";
const RESET: &str = "\x1b[0m";

/// One day's pair of temperatures, ready to chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTemps {
    pub day: u8,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

/// Collects the chartable days of one month, ascending by day.
///
/// Readings whose date yields no day number are left out. Should a day
/// appear twice, the first reading in load order wins.
pub fn daily_series(readings: &[WeatherReading], key: MonthKey) -> Vec<DayTemps> {
    let mut by_day: BTreeMap<u8, DayTemps> = BTreeMap::new();

    for reading in readings {
        if month_key_of(&reading.date) != Some(key) {
            continue;
        }
        let day = match day_of(&reading.date) {
            Some(d) => d,
            None => continue,
        };
        by_day.entry(day).or_insert(DayTemps {
            day,
            max_temp: reading.max_temp,
            min_temp: reading.min_temp,
        });
    }

    by_day.into_values().collect()
}

/// Widest bar the chart will draw. The printed label still carries the
/// exact value, so a clamped bar loses no information.
const MAX_BAR_LENGTH: usize = 120;

/// One bar character per whole degree, capped at `MAX_BAR_LENGTH` cells.
/// Sub-zero temperatures have no leftward direction on this chart, so they
/// render with no width.
fn bar(value: f64) -> String {
    let length = value.round().clamp(0.0, MAX_BAR_LENGTH as f64) as usize;
    "█".repeat(length)
}

/// Renders the chart for one month.
///
/// Each charted day prints its high in red and its low in blue; a missing
/// value drops that line rather than drawing an empty bar.
pub fn temperature_bars(series: &[DayTemps], key: MonthKey) -> String {
    let mut out = format!("Daily temperatures for {} {}:\n\n", month_name(key.month), key.year);

    if series.is_empty() {
        out.push_str("No data available for this month.\n");
        return out;
    }

    for day in series {
        if let Some(high) = day.max_temp {
            out.push_str(&format!(
                "{:02}: {}{}{} {:.0}°C (High)\n",
                day.day,
                RED,
                bar(high),
                RESET,
                high
            ));
        }
        if let Some(low) = day.min_temp {
            out.push_str(&format!(
                "      {}{}{} {:.0}°C (Low)\n\n",
                BLUE,
                bar(low),
                RESET,
                low
            ));
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(date: &str, max: Option<f64>, min: Option<f64>) -> WeatherReading {
        WeatherReading {
            date: date.to_string(),
            max_temp: max,
            min_temp: min,
            humidity: None,
        }
    }

    const AUG_2004: MonthKey = MonthKey { year: 2004, month: 8 };

    #[test]
    fn test_series_is_sorted_by_day() {
        let readings = vec![
            reading("2004-8-15", Some(31.0), Some(20.0)),
            reading("2004-8-2", Some(30.0), Some(19.0)),
            reading("2004-8-9", Some(29.0), Some(18.0)),
        ];
        let series = daily_series(&readings, AUG_2004);

        let days: Vec<u8> = series.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![2, 9, 15]);
    }

    #[test]
    fn test_series_excludes_other_months() {
        let readings = vec![
            reading("2004-8-2", Some(30.0), Some(19.0)),
            reading("2004-9-2", Some(25.0), Some(15.0)),
            reading("2005-8-2", Some(28.0), Some(17.0)),
        ];
        let series = daily_series(&readings, AUG_2004);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].max_temp, Some(30.0));
    }

    #[test]
    fn test_duplicate_days_keep_the_first_reading() {
        let readings = vec![
            reading("2004-8-2", Some(30.0), Some(19.0)),
            reading("2004-8-2", Some(99.0), Some(-99.0)),
        ];
        let series = daily_series(&readings, AUG_2004);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].max_temp, Some(30.0));
    }

    #[test]
    fn test_bar_length_is_one_cell_per_degree() {
        assert_eq!(bar(5.0).chars().count(), 5);
        assert_eq!(bar(30.4).chars().count(), 30, "bars round to the nearest degree");
        assert_eq!(bar(30.5).chars().count(), 31);
        assert_eq!(bar(0.0).chars().count(), 0);
    }

    #[test]
    fn test_negative_temperatures_draw_no_bar() {
        assert_eq!(bar(-5.0), "", "a bar cannot extend left of the axis");
    }

    #[test]
    fn test_absurd_temperatures_draw_a_capped_bar() {
        // A temperature field holding "1e300" parses as a valid f64; the
        // bar must stay terminal-sized instead of allocating by magnitude.
        assert_eq!(bar(1e300).chars().count(), MAX_BAR_LENGTH);
        assert_eq!(bar(f64::MAX).chars().count(), MAX_BAR_LENGTH);
        assert_eq!(bar(MAX_BAR_LENGTH as f64 - 1.0).chars().count(), MAX_BAR_LENGTH - 1);
    }

    #[test]
    fn test_chart_labels_and_colors() {
        let series = vec![DayTemps {
            day: 1,
            max_temp: Some(30.0),
            min_temp: Some(15.0),
        }];
        let chart = temperature_bars(&series, AUG_2004);

        assert!(chart.starts_with("Daily temperatures for August 2004:\n"), "got: {}", chart);
        assert!(chart.contains("01: "), "days should be zero-padded, got: {}", chart);
        assert!(chart.contains("30°C (High)"), "got: {}", chart);
        assert!(chart.contains("15°C (Low)"), "got: {}", chart);
        assert!(chart.contains(RED) && chart.contains(BLUE) && chart.contains(RESET));
    }

    #[test]
    fn test_missing_side_drops_its_line() {
        let series = vec![DayTemps {
            day: 3,
            max_temp: Some(28.0),
            min_temp: None,
        }];
        let chart = temperature_bars(&series, AUG_2004);

        assert!(chart.contains("(High)"));
        assert!(!chart.contains("(Low)"), "a missing low must not draw a zero bar, got: {}", chart);
    }

    #[test]
    fn test_empty_month_says_so() {
        let chart = temperature_bars(&[], MonthKey { year: 2004, month: 2 });
        assert!(chart.contains("No data available for this month."), "got: {}", chart);
    }
}
