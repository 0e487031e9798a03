/// Source configuration for the weather archive service.
///
/// The archive location, file naming scheme and column layout live in
/// `weatherfiles.toml` next to the binary. A missing file falls back to
/// built-in defaults so the service runs against a `weatherfiles/` directory
/// out of the box. `main` loads `.env` first, so both variables below can be
/// kept there:
///
///   WEATHERFILES_CONFIG  path of the configuration file itself
///   WEATHERFILES_DIR     overrides `[archive] directory`

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::layouts::{self, ColumnLayout};

/// Configuration file path used when `WEATHERFILES_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./weatherfiles.toml";

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub archive: ArchiveSource,
}

/// The `[archive]` section of `weatherfiles.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveSource {
    /// Directory holding the daily observation files.
    pub directory: String,
    /// Only files whose name starts with this prefix are loaded.
    /// Empty matches everything.
    #[serde(default)]
    pub file_prefix: String,
    /// Only files whose name ends with this suffix are loaded.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
    /// Name of a built-in column layout from `layouts::LAYOUT_REGISTRY`.
    #[serde(default)]
    pub layout: Option<String>,
    /// Explicit column indices. Takes precedence over `layout`.
    #[serde(default)]
    pub columns: Option<ColumnLayout>,
}

fn default_file_suffix() -> String {
    ".txt".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            archive: ArchiveSource {
                directory: "weatherfiles".to_string(),
                file_prefix: String::new(),
                file_suffix: default_file_suffix(),
                layout: None,
                columns: None,
            },
        }
    }
}

impl SourceConfig {
    /// Resolves the effective column layout.
    ///
    /// Explicit `columns` beat a named `layout`; naming neither means
    /// `layouts::DEFAULT_LAYOUT`. An unknown layout name, or an index past
    /// `layouts::MAX_COLUMN_INDEX`, is a configuration error here rather
    /// than a failure mid-load.
    pub fn resolve_layout(&self) -> Result<ColumnLayout, Box<dyn Error>> {
        let layout = match self.archive.columns {
            Some(columns) => columns,
            None => {
                let name = self
                    .archive
                    .layout
                    .as_deref()
                    .unwrap_or(layouts::DEFAULT_LAYOUT);
                layouts::find_layout(name).ok_or_else(|| {
                    format!(
                        "unknown column layout '{}' (built-in layouts: {})",
                        name,
                        layouts::layout_names().join(", ")
                    )
                })?
            }
        };
        layout.validate()?;
        Ok(layout)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from a TOML file. Does not consult the environment.
pub fn load_config(path: &str) -> Result<SourceConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config: SourceConfig = toml::from_str(&text)?;
    Ok(config)
}

/// Loads configuration for a service run.
///
/// A missing file falls back to `SourceConfig::default()`; an unreadable or
/// malformed file is still an error. The layout is resolved once here so a
/// bad layout name fails at startup rather than mid-load, and
/// `WEATHERFILES_DIR` is applied over the configured directory.
pub fn load_or_default(path: &str) -> Result<SourceConfig, Box<dyn Error>> {
    let mut config = if Path::new(path).exists() {
        load_config(path)?
    } else {
        SourceConfig::default()
    };
    config.resolve_layout()?;
    if let Ok(dir) = env::var("WEATHERFILES_DIR") {
        if !dir.is_empty() {
            config.archive.directory = dir;
        }
    }
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
