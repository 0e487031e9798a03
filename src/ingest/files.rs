/// Archive file loader.
///
/// Reads daily weather observation files from the configured directory.
/// Each file is delimited text: a header line followed by one comma-separated
/// row per day. A row never fails the load; rows with too few fields are
/// counted and skipped, and a field that does not parse becomes a missing
/// value on an otherwise usable reading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::layouts::ColumnLayout;
use crate::logging::{self, Component};
use crate::model::{ArchiveError, WeatherReading};
use crate::sources::ArchiveSource;

// ============================================================================
// Load bookkeeping
// ============================================================================

/// Counters for one load pass over the archive directory.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadStats {
    /// Files that matched the naming scheme and were read.
    pub files_read: usize,
    /// Data rows that produced a reading.
    pub rows_parsed: usize,
    /// Data rows dropped for having fewer fields than the layout reaches.
    pub rows_skipped: usize,
}

/// Everything produced by one load pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub readings: Vec<WeatherReading>,
    pub stats: LoadStats,
}

// ============================================================================
// Field and row parsing
// ============================================================================

/// Parses a temperature field. Blank and non-numeric values are missing.
pub fn parse_temp(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() { None } else { s.parse().ok() }
}

/// Parses a humidity field. The archive records whole percentages, so a
/// fractional value is as missing as a blank one.
pub fn parse_humidity(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() { None } else { s.parse().ok() }
}

/// Builds a reading from one row's fields using `layout`.
///
/// The caller guarantees `fields.len() >= layout.required_fields()`. The date
/// is kept verbatim. This function is total: a row whose measurement fields
/// are all unusable still yields a reading with every field missing.
pub fn parse_reading(fields: &[&str], layout: &ColumnLayout) -> WeatherReading {
    WeatherReading {
        date: fields[layout.date].to_string(),
        max_temp: parse_temp(fields[layout.max_temp]),
        min_temp: parse_temp(fields[layout.min_temp]),
        humidity: parse_humidity(fields[layout.humidity]),
    }
}

/// Parses the body of one archive file, accumulating row counters.
pub fn parse_rows(
    text: &str,
    layout: &ColumnLayout,
    stats: &mut LoadStats,
) -> Vec<WeatherReading> {
    let mut readings = Vec::new();
    let required = layout.required_fields();

    for (i, line) in text.lines().enumerate() {
        if i == 0 || line.trim().is_empty() {
            continue; // Skip header or empty lines
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < required {
            stats.rows_skipped += 1;
            continue; // Skip incomplete rows
        }

        readings.push(parse_reading(&fields, layout));
        stats.rows_parsed += 1;
    }

    readings
}

// ============================================================================
// Directory loading
// ============================================================================

/// Loads every matching file under the configured directory.
///
/// Filenames are matched against the configured prefix and suffix and read
/// in name order, so repeated loads of an unchanged directory see readings
/// in the same order. Within a file readings keep row order; across files
/// they are concatenated, never re-sorted by date.
pub fn load_directory(
    source: &ArchiveSource,
    layout: &ColumnLayout,
) -> Result<LoadResult, ArchiveError> {
    let entries =
        fs::read_dir(Path::new(&source.directory)).map_err(|e| ArchiveError::DirectoryUnreadable {
            path: source.directory.clone(),
            message: e.to_string(),
        })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::DirectoryUnreadable {
            path: source.directory.clone(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(n) => n,
            None => continue,
        };
        if name.starts_with(&source.file_prefix) && name.ends_with(&source.file_suffix) {
            paths.push(path);
        }
    }
    // read_dir order is platform-dependent; name order keeps reloads stable.
    paths.sort();

    let mut readings = Vec::new();
    let mut stats = LoadStats::default();

    for path in &paths {
        let text = fs::read_to_string(path).map_err(|e| ArchiveError::FileUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut file_readings = parse_rows(&text, layout, &mut stats);
        logging::debug(
            Component::Files,
            path.file_name().and_then(|n| n.to_str()),
            &format!("parsed {} readings", file_readings.len()),
        );
        readings.append(&mut file_readings);
        stats.files_read += 1;
    }

    Ok(LoadResult { readings, stats })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::find_layout;

    fn minimal() -> ColumnLayout {
        find_layout("minimal").unwrap()
    }

    #[test]
    fn test_parse_temp_handles_blank_and_garbage() {
        assert_eq!(parse_temp("30"), Some(30.0));
        assert_eq!(parse_temp(" 21.5 "), Some(21.5), "surrounding whitespace should be trimmed");
        assert_eq!(parse_temp("-3.5"), Some(-3.5));
        assert_eq!(parse_temp(""), None);
        assert_eq!(parse_temp("   "), None);
        assert_eq!(parse_temp("warm"), None);
    }

    #[test]
    fn test_parse_humidity_requires_whole_numbers() {
        assert_eq!(parse_humidity("64"), Some(64));
        assert_eq!(parse_humidity(" 100 "), Some(100));
        assert_eq!(parse_humidity("64.5"), None, "fractional humidity should be missing");
        assert_eq!(parse_humidity(""), None);
        assert_eq!(parse_humidity("n/a"), None);
    }

    #[test]
    fn test_header_line_is_never_data() {
        let text = "date,max,min,humidity\n2004-8-1,30,20,77\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &minimal(), &mut stats);

        assert_eq!(readings.len(), 1, "only the data row should survive");
        assert_eq!(stats.rows_parsed, 1);
        assert_eq!(stats.rows_skipped, 0, "the header is not a skipped data row");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let text = "date,max,min,humidity\n\n2004-8-1,30,20,77\n\n\n2004-8-2,31,21,70\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &minimal(), &mut stats);

        assert_eq!(readings.len(), 2);
        assert_eq!(stats.rows_skipped, 0);
    }

    #[test]
    fn test_short_rows_are_counted_and_skipped() {
        let text = "date,max,min,humidity\n2004-8-1,30\n2004-8-2,31,21,70\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &minimal(), &mut stats);

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].date, "2004-8-2");
        assert_eq!(stats.rows_parsed, 1);
        assert_eq!(stats.rows_skipped, 1);
    }

    #[test]
    fn test_unparseable_fields_become_missing_not_skipped() {
        // Enough commas to be a complete row, but nothing in it parses.
        let text = "date,max,min,humidity\n2004-8-1,,n/a,64.5\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &minimal(), &mut stats);

        assert_eq!(stats.rows_parsed, 1, "a complete row with bad fields still parses");
        assert_eq!(stats.rows_skipped, 0);
        let r = &readings[0];
        assert_eq!(r.max_temp, None);
        assert_eq!(r.min_temp, None);
        assert_eq!(r.humidity, None);
    }

    #[test]
    fn test_date_is_kept_verbatim() {
        let text = "h\n2004-8-1,30,20,77\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &minimal(), &mut stats);
        assert_eq!(readings[0].date, "2004-8-1");
    }

    #[test]
    fn test_extended_layout_reads_scattered_columns() {
        let layout = find_layout("extended").unwrap();
        // date, max, mean, min, dew, mean dew, min dew, max humidity
        let text = "PKT,Max TemperatureC,Mean TemperatureC,Min TemperatureC,a,b,c,Max Humidity\n\
                    2004-8-1,30,25,21,18,16,13,77\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &layout, &mut stats);

        assert_eq!(readings.len(), 1);
        let r = &readings[0];
        assert_eq!(r.max_temp, Some(30.0));
        assert_eq!(r.min_temp, Some(21.0), "min temp sits past the mean column");
        assert_eq!(r.humidity, Some(77));
    }

    #[test]
    fn test_extended_layout_skips_rows_cut_before_humidity() {
        let layout = find_layout("extended").unwrap();
        let text = "header\n2004-8-1,30,25,21,18,16,13\n";
        let mut stats = LoadStats::default();
        let readings = parse_rows(text, &layout, &mut stats);

        assert!(readings.is_empty(), "a seven-field row cannot reach the humidity column");
        assert_eq!(stats.rows_skipped, 1);
    }
}
