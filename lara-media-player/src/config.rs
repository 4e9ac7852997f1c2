//! Platform configuration
//!
//! Mirrors the keys the host accepts for the `elkoep_lara` platform:
//!
//! ```json
//! {
//!   "host": "192.168.1.40",
//!   "name": "Kitchen Radio",
//!   "customize": { "sources": ["FM1", "Radio 1"] },
//!   "filename": "elkoep_lara.conf",
//!   "timeout": 8
//! }
//! ```
//!
//! Every key is optional. `host` may instead come from discovery.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ConfigError;

/// Display name used when none is configured
pub const DEFAULT_NAME: &str = "Lara Radio";

/// Local configuration file name used when none is configured
pub const LARA_CONFIG_FILE: &str = "elkoep_lara.conf";

/// Client timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u32 = 8;

/// Per-entity customization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customize {
    /// Preferred source names. A single string is accepted as a one-item list.
    #[serde(default, deserialize_with = "deserialize_sources", skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

/// Validated configuration of the `elkoep_lara` platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Device address, if not supplied by discovery
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub customize: Customize,

    /// Local config file name, resolved against the host's config directory
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Client timeout in seconds (positive)
    #[serde(default = "default_timeout", deserialize_with = "deserialize_timeout")]
    pub timeout: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            host: None,
            name: default_name(),
            customize: Customize::default(),
            filename: default_filename(),
            timeout: default_timeout(),
        }
    }
}

impl PlatformConfig {
    /// Configuration for a known host with every other key defaulted
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Default::default()
        }
    }

    /// Parse a JSON platform configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PlatformConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert an already-parsed JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: PlatformConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that hold for deserialized configs but not
    /// necessarily for ones built in code
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::InvalidTimeout(self.timeout));
        }
        Ok(())
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout))
    }
}

/// Default directory for the local config file when the host has none
///
/// `<user config dir>/elkoep_lara`, or a relative `elkoep_lara` when the
/// platform has no notion of a user config directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("elkoep_lara"))
        .unwrap_or_else(|| PathBuf::from("elkoep_lara"))
}

/// Resolves config file names against a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    root: PathBuf,
}

impl ConfigDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `filename` inside this directory
    pub fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new(default_config_dir())
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_filename() -> String {
    LARA_CONFIG_FILE.to_string()
}

fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_SECS
}

fn deserialize_timeout<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let timeout = u32::deserialize(deserializer)?;
    if timeout == 0 {
        return Err(serde::de::Error::custom(
            "timeout must be a positive number of seconds",
        ));
    }
    Ok(timeout)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_sources<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|sources| match sources {
        OneOrMany::One(source) => vec![source],
        OneOrMany::Many(sources) => sources,
    }))
}
