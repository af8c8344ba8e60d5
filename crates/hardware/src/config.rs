//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values when a setting is omitted.
//! 2. **General settings:** Tracing and the optional cycle cap.
//! 3. **Initial state:** Register and data-memory values applied after the program loads.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Stage latencies and memory size are fixed properties of the machine and
//! are not configurable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Stage tracing is off unless requested.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// Sections printed by the statistics report when none are named.
    pub const STATS_SECTIONS: &[&str] = &[];
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use minirisc_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 500 },
///     "init": { "registers": { "2": 4, "3": 5 } }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.init.registers[&2], 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Initial architectural state
    pub init: InitConfig,
}

impl Config {
    /// Parses a configuration from JSON. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`SimError::InvalidConfig`] when the text is not valid JSON for this schema.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        serde_json::from_str(text).map_err(|e| SimError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::ConfigIo`] when the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Emit per-stage trace events (`trace` level) in addition to write-back and branch events.
    pub trace_instructions: bool,

    /// Abort with [`SimError::CycleLimit`] if the pipeline has not drained after this many cycles.
    pub max_cycles: Option<u64>,

    /// Statistics report sections to print; empty means all.
    pub stats_sections: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            max_cycles: None,
            stats_sections: defaults::STATS_SECTIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Initial register and data-memory values.
///
/// JSON object keys are register indices and word addresses, e.g.
/// `{"registers": {"2": 4}, "memory": {"100": 7}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitConfig {
    /// Register index to initial value.
    pub registers: BTreeMap<usize, u32>,
    /// Data-memory address to initial value.
    pub memory: BTreeMap<usize, u32>,
}
