/// Column layout registry for the weather archive service.
///
/// Archive files in the surrounding system come in two column conventions:
/// a minimal four-column export, and a wide station export where the same
/// observations sit at scattered indices. This module is the single source
/// of truth for those conventions; loaders resolve a layout here instead of
/// hardcoding indices.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Column layouts
// ---------------------------------------------------------------------------

/// Zero-based column indices for the four observation fields of a row.
///
/// Deserializable so a configuration file can spell out a custom layout
/// directly instead of naming a built-in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ColumnLayout {
    pub date: usize,
    pub max_temp: usize,
    pub min_temp: usize,
    pub humidity: usize,
}

/// Highest column index a configured layout may name. Real exports stay in
/// the low tens of columns; anything past this is a configuration typo.
pub const MAX_COLUMN_INDEX: usize = 255;

impl ColumnLayout {
    fn highest_index(&self) -> usize {
        self.date
            .max(self.max_temp)
            .max(self.min_temp)
            .max(self.humidity)
    }

    /// Minimum number of comma-separated fields a row needs for every index
    /// of this layout to be in bounds. The loader skips shorter rows.
    pub fn required_fields(&self) -> usize {
        self.highest_index() + 1
    }

    /// Rejects indices past `MAX_COLUMN_INDEX`. Configuration loading runs
    /// this before a layout ever reaches the parser.
    pub fn validate(&self) -> Result<(), String> {
        let highest = self.highest_index();
        if highest > MAX_COLUMN_INDEX {
            return Err(format!(
                "column index {} exceeds the supported maximum {}",
                highest, MAX_COLUMN_INDEX
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Built-in layouts
// ---------------------------------------------------------------------------

/// A named, built-in column convention.
pub struct NamedLayout {
    pub name: &'static str,
    /// Human-readable description of which export produces this shape.
    pub description: &'static str,
    pub columns: ColumnLayout,
}

/// Layout used when the configuration names none.
pub const DEFAULT_LAYOUT: &str = "minimal";

/// The column conventions known to appear in archive exports.
pub static LAYOUT_REGISTRY: &[NamedLayout] = &[
    NamedLayout {
        name: "minimal",
        description: "Four-column export: date, max temperature, min temperature, humidity.",
        columns: ColumnLayout {
            date: 0,
            max_temp: 1,
            min_temp: 2,
            humidity: 3,
        },
    },
    NamedLayout {
        name: "extended",
        description: "Wide station export: date at 0, max temperature at 1, \
                      min temperature at 3, max humidity at 7. Intervening \
                      columns carry mean values and dew points.",
        columns: ColumnLayout {
            date: 0,
            max_temp: 1,
            min_temp: 3,
            humidity: 7,
        },
    },
];

/// Looks up a built-in layout by name. Returns `None` if not found.
pub fn find_layout(name: &str) -> Option<ColumnLayout> {
    LAYOUT_REGISTRY
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.columns)
}

/// Names of all built-in layouts, for error messages and usage text.
pub fn layout_names() -> Vec<&'static str> {
    LAYOUT_REGISTRY.iter().map(|l| l.name).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
