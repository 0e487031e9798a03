/// Per-month average values.
///
/// Collect-then-reduce: readings are bucketed by (year, month), then each
/// bucket's present values are averaged. A mean only ever covers the rows
/// that reported that field, so absent values cannot drag it toward zero.

use std::collections::BTreeMap;

use crate::model::{MonthKey, MonthlyAverages, WeatherReading};

use super::month_key_of;

#[derive(Debug, Default)]
struct MonthBucket {
    max_temps: Vec<f64>,
    min_temps: Vec<f64>,
    humidities: Vec<i64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// Accumulates in f64 like `mean`, so extreme magnitudes cannot overflow
// an integer sum on the way to the divide.
fn mean_of_ints(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64)
    }
}

/// Buckets readings by (year, month) and averages each bucket.
///
/// Readings that yield no (year, month) key are excluded. A month appears in
/// the map as soon as one reading lands in it, even if every averaged field
/// ends up `None`. The map iterates year-major, January..December.
pub fn monthly_averages(readings: &[WeatherReading]) -> BTreeMap<MonthKey, MonthlyAverages> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();

    for reading in readings {
        let key = match month_key_of(&reading.date) {
            Some(k) => k,
            None => continue,
        };
        let bucket = buckets.entry(key).or_default();
        if let Some(v) = reading.max_temp {
            bucket.max_temps.push(v);
        }
        if let Some(v) = reading.min_temp {
            bucket.min_temps.push(v);
        }
        if let Some(v) = reading.humidity {
            bucket.humidities.push(v);
        }
    }

    buckets
        .into_iter()
        .map(|(key, bucket)| {
            let averages = MonthlyAverages {
                avg_max_temp: mean(&bucket.max_temps),
                avg_min_temp: mean(&bucket.min_temps),
                avg_humidity: mean_of_ints(&bucket.humidities),
            };
            (key, averages)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
