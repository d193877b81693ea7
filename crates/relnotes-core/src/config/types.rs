//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for relnotes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project name
    pub name: Option<String>,

    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Issue tracker configuration
    pub tracker: TrackerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            name: None,
            changelog: ChangelogConfig::default(),
            tracker: TrackerConfig::default(),
        }
    }
}

/// Changelog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Path to the changelog document
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG"),
        }
    }
}

/// Issue tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Base URL for issue links; the issue number is appended as the
    /// last path segment
    pub base_url: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com/phusion/passenger/issues".to_string(),
        }
    }
}
