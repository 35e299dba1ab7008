//! Simulator configuration, read from `SMOCKS_*` environment variables.

use std::env;
use std::str::FromStr;

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Smallest grid side; narrower than four columns cannot hold a horizontal line
pub const MIN_DIMENSION: usize = 4;

/// Largest grid side accepted from the environment
pub const MAX_DIMENSION: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u32,
    /// Upper bound on shapes dropped; the run also ends when a spawn collides
    pub shapes: usize,
    pub columns: usize,
    pub rows: usize,
    pub format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            shapes: 16,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            format: OutputFormat::Text,
        }
    }
}

impl SimConfig {
    /// Create from environment variables, keeping defaults for unset or invalid values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with an explicit variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let format = match lookup("SMOCKS_FORMAT") {
            Some(raw) => OutputFormat::from_str(&raw).unwrap_or_else(|| {
                log::warn!("ignoring SMOCKS_FORMAT={raw:?}, expected text or json");
                defaults.format
            }),
            None => defaults.format,
        };

        Self {
            seed: parse_or(&lookup, "SMOCKS_SEED", defaults.seed),
            shapes: parse_or(&lookup, "SMOCKS_SHAPES", defaults.shapes),
            columns: parse_or(&lookup, "SMOCKS_COLUMNS", defaults.columns),
            rows: parse_or(&lookup, "SMOCKS_ROWS", defaults.rows),
            format,
        }
        .clamped()
    }

    /// Keep both grid sides within `MIN_DIMENSION..=MAX_DIMENSION`
    pub fn clamped(self) -> Self {
        Self {
            columns: self.columns.clamp(MIN_DIMENSION, MAX_DIMENSION),
            rows: self.rows.clamp(MIN_DIMENSION, MAX_DIMENSION),
            ..self
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("ignoring {key}={raw:?}, not a valid number");
        default
    })
}
