//! TOML-based configuration for DNP3 stations.

use std::path::Path;

use serde::Deserialize;

use dnp3_core::Direction;

use crate::error::StackError;

/// Top-level station configuration loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct StackConfig {
    #[serde(default)]
    pub station: StationSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl StackConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, StackError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StackError::Config(format!("failed to read config file: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| StackError::Config(format!("failed to parse config: {e}")))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, StackError> {
        toml::from_str(s).map_err(|e| StackError::Config(format!("failed to parse config: {e}")))
    }
}

/// The `[station]` section.
#[derive(Debug, Deserialize)]
pub struct StationSection {
    /// Link address of this station. Default: 1.
    #[serde(default = "default_source")]
    pub source: u16,
    /// Link address of the peer station. Default: 1024.
    #[serde(default = "default_destination")]
    pub destination: u16,
    /// "master" or "outstation". Default: master.
    #[serde(default = "default_role")]
    pub role: String,
    /// Whether user data is sent confirmed, expecting acknowledgements.
    #[serde(default)]
    pub confirmed: bool,
}

fn default_source() -> u16 {
    1
}

fn default_destination() -> u16 {
    1024
}

fn default_role() -> String {
    "master".to_string()
}

impl Default for StationSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            role: default_role(),
            confirmed: false,
        }
    }
}

/// The `[logging]` section.
#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Parse a role string to the direction bit the station stamps on every
/// frame it sends.
pub fn parse_role(s: &str) -> Result<Direction, StackError> {
    match s.to_lowercase().as_str() {
        "master" => Ok(Direction::FromMaster),
        "outstation" => Ok(Direction::FromOutstation),
        other => Err(StackError::Config(format!("unknown station role: {other}"))),
    }
}
