/// Per-year extreme values.
///
/// One streaming pass over the readings. Each year's entry starts empty and
/// absorbs one reading at a time; missing fields never participate, so a
/// year whose rows all lack humidity ends with `max_humidity: None`.

use std::collections::BTreeMap;

use crate::model::{WeatherReading, YearlyExtremes};

use super::year_of;

impl YearlyExtremes {
    /// Absorbs one reading into the running extremes.
    ///
    /// Comparisons are strict, so an equal value never replaces the
    /// incumbent. Fields the reading does not carry leave the running
    /// values untouched.
    pub fn fold_reading(&mut self, reading: &WeatherReading) {
        if let Some(value) = reading.max_temp {
            let replace = match self.max_temp {
                Some(current) => value > current,
                None => true,
            };
            if replace {
                self.max_temp = Some(value);
            }
        }

        if let Some(value) = reading.min_temp {
            let replace = match self.min_temp {
                Some(current) => value < current,
                None => true,
            };
            if replace {
                self.min_temp = Some(value);
            }
        }

        if let Some(value) = reading.humidity {
            let replace = match self.max_humidity {
                Some(current) => value > current,
                None => true,
            };
            if replace {
                self.max_humidity = Some(value);
            }
        }
    }
}

/// Folds all readings into per-year extremes.
///
/// Readings without a usable year are excluded. Fold order cannot change the
/// result; any permutation of `readings` produces the same map.
pub fn yearly_extremes(readings: &[WeatherReading]) -> BTreeMap<i32, YearlyExtremes> {
    let mut by_year: BTreeMap<i32, YearlyExtremes> = BTreeMap::new();

    for reading in readings {
        let year = match year_of(&reading.date) {
            Some(y) => y,
            None => continue,
        };
        by_year.entry(year).or_default().fold_reading(reading);
    }

    by_year
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(date: &str, max: Option<f64>, min: Option<f64>, hum: Option<i64>) -> WeatherReading {
        WeatherReading {
            date: date.to_string(),
            max_temp: max,
            min_temp: min,
            humidity: hum,
        }
    }

    #[test]
    fn test_single_reading_sets_all_fields() {
        let readings = vec![reading("2004-8-1", Some(30.0), Some(20.0), Some(77))];
        let by_year = yearly_extremes(&readings);

        let year = by_year.get(&2004).expect("2004 should be present");
        assert_eq!(year.max_temp, Some(30.0));
        assert_eq!(year.min_temp, Some(20.0));
        assert_eq!(year.max_humidity, Some(77));
    }

    #[test]
    fn test_max_only_moves_up_and_min_only_moves_down() {
        let readings = vec![
            reading("2004-8-1", Some(30.0), Some(20.0), None),
            reading("2004-8-2", Some(25.0), Some(25.0), None),
            reading("2004-8-3", Some(33.0), Some(15.0), None),
        ];
        let year = yearly_extremes(&readings)[&2004];

        assert_eq!(year.max_temp, Some(33.0), "middle reading must not lower the max");
        assert_eq!(year.min_temp, Some(15.0), "middle reading must not raise the min");
    }

    #[test]
    fn test_missing_fields_leave_running_values_untouched() {
        let readings = vec![
            reading("2004-8-1", Some(30.0), Some(20.0), Some(77)),
            reading("2004-8-2", None, None, None),
        ];
        let year = yearly_extremes(&readings)[&2004];

        assert_eq!(year.max_temp, Some(30.0));
        assert_eq!(year.min_temp, Some(20.0));
        assert_eq!(year.max_humidity, Some(77));
    }

    #[test]
    fn test_year_with_only_missing_humidity_reports_none() {
        let readings = vec![
            reading("2004-8-1", Some(30.0), Some(20.0), None),
            reading("2004-8-2", Some(31.0), Some(19.0), None),
        ];
        let year = yearly_extremes(&readings)[&2004];

        assert_eq!(year.max_humidity, None, "no humidity values means no humidity extreme");
        assert_eq!(year.max_temp, Some(31.0), "temperatures still aggregate normally");
    }

    #[test]
    fn test_zero_is_a_value_not_a_gap() {
        let readings = vec![
            reading("2004-1-1", Some(0.0), Some(0.0), Some(0)),
            reading("2004-1-2", Some(-2.0), Some(-5.0), None),
        ];
        let year = yearly_extremes(&readings)[&2004];

        assert_eq!(year.max_temp, Some(0.0), "0.0 must beat -2.0, not disappear");
        assert_eq!(year.min_temp, Some(-5.0));
        assert_eq!(year.max_humidity, Some(0), "a recorded zero is still a record");
    }

    #[test]
    fn test_rows_without_a_year_are_excluded() {
        let readings = vec![
            reading("not-a-date", Some(99.0), Some(-99.0), Some(100)),
            reading("2004-8-1", Some(30.0), Some(20.0), Some(77)),
        ];
        let by_year = yearly_extremes(&readings);

        assert_eq!(by_year.len(), 1, "only 2004 should exist");
        assert_eq!(by_year[&2004].max_temp, Some(30.0));
    }

    #[test]
    fn test_readings_split_across_years() {
        let readings = vec![
            reading("2004-12-31", Some(10.0), Some(2.0), Some(60)),
            reading("2005-1-1", Some(8.0), Some(-1.0), Some(70)),
        ];
        let by_year = yearly_extremes(&readings);

        assert_eq!(by_year[&2004].min_temp, Some(2.0));
        assert_eq!(by_year[&2005].min_temp, Some(-1.0));
    }

    #[test]
    fn test_fold_order_does_not_matter() {
        let forward = vec![
            reading("2004-8-1", Some(30.0), Some(20.0), Some(77)),
            reading("2004-8-2", Some(33.0), Some(18.0), None),
            reading("2004-8-3", None, Some(15.0), Some(80)),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(
            yearly_extremes(&forward),
            yearly_extremes(&backward),
            "extremes must be order-independent"
        );
    }
}
