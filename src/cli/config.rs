//! Configuration file handling
//!
//! The config file is a single JSON object. Every field is optional; an
//! absent file means all defaults.
//!
//! ```json
//! {
//!   "log_level": "info",
//!   "people": [{"name": "Alice", "age": 25}],
//!   "lookup": {"name": "Alice", "age": 25},
//!   "circle_radius": 100.0,
//!   "frame": {"width": 100.0, "height": 100.0},
//!   "sort_direction": "asc"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};
use crate::observability::Severity;
use crate::projection::SortDirection;
use crate::record::{DynamicRecord, Person};
use crate::shape::{Size, DEFAULT_RADIUS};

/// Showcase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// People sorted by `key-path` (optional, default Alice/Bob/Charlie)
    #[serde(default = "Person::samples")]
    pub people: Vec<Person>,

    /// Record queried by `dynamic-lookup`
    #[serde(default = "default_lookup")]
    pub lookup: DynamicRecord,

    /// Radius of the shape built by `opaque-shape`
    #[serde(default = "default_circle_radius")]
    pub circle_radius: f64,

    /// Frame the shape is laid out in
    #[serde(default = "default_frame")]
    pub frame: Size,

    /// Default direction for `key-path` and `sort` (optional, default "asc")
    #[serde(default)]
    pub sort_direction: SortDirection,
}

fn default_log_level() -> Severity {
    Severity::Info
}
fn default_lookup() -> DynamicRecord {
    DynamicRecord::new().with("name", "Alice").with("age", 25)
}
fn default_circle_radius() -> f64 {
    DEFAULT_RADIUS
}
fn default_frame() -> Size {
    Size::new(100.0, 100.0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            people: Person::samples(),
            lookup: default_lookup(),
            circle_radius: default_circle_radius(),
            frame: default_frame(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration JSON
    pub fn from_json_str(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the numeric settings; enum settings are checked while parsing
    pub fn validate(&self) -> CliResult<()> {
        if !self.circle_radius.is_finite() || self.circle_radius < 0.0 {
            return Err(CliError::config_error(
                "circle_radius must be finite and >= 0",
            ));
        }

        let frame_ok = self.frame.width.is_finite()
            && self.frame.height.is_finite()
            && self.frame.width > 0.0
            && self.frame.height > 0.0;
        if !frame_ok {
            return Err(CliError::config_error("frame width and height must be > 0"));
        }

        Ok(())
    }
}
