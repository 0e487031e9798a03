/// Highlight days: the standout readings of one calendar year.
///
/// Unlike the extremes map, a highlight remembers which date set the record.
/// Comparisons are strict, so the first reading to reach a value keeps the
/// record over later ties.

use crate::model::{HumidityHighlight, TempHighlight, WeatherReading, YearHighlights};

use super::year_of;

/// Scans `readings` for the hottest, coldest and most humid days of `year`.
///
/// Readings from other years, or with no usable year, do not participate.
pub fn year_highlights(readings: &[WeatherReading], year: i32) -> YearHighlights {
    let mut highlights = YearHighlights::default();

    for reading in readings {
        if year_of(&reading.date) != Some(year) {
            continue;
        }

        if let Some(temp) = reading.max_temp {
            let replace = match &highlights.hottest_day {
                Some(current) => temp > current.temp,
                None => true,
            };
            if replace {
                highlights.hottest_day = Some(TempHighlight {
                    temp,
                    date: reading.date.clone(),
                });
            }
        }

        if let Some(temp) = reading.min_temp {
            let replace = match &highlights.coldest_day {
                Some(current) => temp < current.temp,
                None => true,
            };
            if replace {
                highlights.coldest_day = Some(TempHighlight {
                    temp,
                    date: reading.date.clone(),
                });
            }
        }

        if let Some(humidity) = reading.humidity {
            let replace = match &highlights.most_humid_day {
                Some(current) => humidity > current.humidity,
                None => true,
            };
            if replace {
                highlights.most_humid_day = Some(HumidityHighlight {
                    humidity,
                    date: reading.date.clone(),
                });
            }
        }
    }

    highlights
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
    fn test_highlights_carry_their_dates() {
        let readings = vec![
            reading("2004-8-1", Some(30.0), Some(20.0), Some(70)),
            reading("2004-8-2", Some(35.0), Some(18.0), Some(90)),
            reading("2004-8-3", Some(28.0), Some(12.0), Some(60)),
        ];
        let h = year_highlights(&readings, 2004);

        let hottest = h.hottest_day.expect("hottest day should exist");
        assert_eq!(hottest.temp, 35.0);
        assert_eq!(hottest.date, "2004-8-2");

        let coldest = h.coldest_day.expect("coldest day should exist");
        assert_eq!(coldest.temp, 12.0);
        assert_eq!(coldest.date, "2004-8-3");

        let most_humid = h.most_humid_day.expect("most humid day should exist");
        assert_eq!(most_humid.humidity, 90);
        assert_eq!(most_humid.date, "2004-8-2");
    }

    #[test]
    fn test_ties_keep_the_first_reading() {
        let readings = vec![
            reading("2004-8-1", Some(35.0), Some(12.0), Some(90)),
            reading("2004-8-2", Some(35.0), Some(12.0), Some(90)),
        ];
        let h = year_highlights(&readings, 2004);

        assert_eq!(h.hottest_day.unwrap().date, "2004-8-1");
        assert_eq!(h.coldest_day.unwrap().date, "2004-8-1");
        assert_eq!(h.most_humid_day.unwrap().date, "2004-8-1");
    }

    #[test]
    fn test_coldest_reads_the_min_temp_field() {
        // The second day's max is the lowest max, but day one has the
        // lowest min. Coldest must follow mins.
        let readings = vec![
            reading("2004-8-1", Some(30.0), Some(5.0), None),
            reading("2004-8-2", Some(20.0), Some(10.0), None),
        ];
        let h = year_highlights(&readings, 2004);

        assert_eq!(h.coldest_day.unwrap().date, "2004-8-1");
    }

    #[test]
    fn test_other_years_do_not_participate() {
        let readings = vec![
            reading("2003-8-1", Some(50.0), Some(-50.0), Some(100)),
            reading("2004-8-1", Some(30.0), Some(20.0), Some(70)),
        ];
        let h = year_highlights(&readings, 2004);

        assert_eq!(h.hottest_day.unwrap().temp, 30.0);
        assert_eq!(h.most_humid_day.unwrap().humidity, 70);
    }

    #[test]
    fn test_year_without_readings_has_no_highlights() {
        let readings = vec![reading("2004-8-1", Some(30.0), Some(20.0), Some(70))];
        let h = year_highlights(&readings, 1999);

        assert_eq!(h, YearHighlights::default());
    }

    #[test]
    fn test_missing_fields_never_become_highlights() {
        let readings = vec![
            reading("2004-8-1", None, Some(20.0), None),
            reading("2004-8-2", None, Some(15.0), None),
        ];
        let h = year_highlights(&readings, 2004);

        assert!(h.hottest_day.is_none(), "no max temps means no hottest day");
        assert!(h.most_humid_day.is_none());
        assert_eq!(h.coldest_day.unwrap().temp, 15.0);
    }
}
