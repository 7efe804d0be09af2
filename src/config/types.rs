//! Configuration type definitions.

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default unit preferences.
    #[serde(default)]
    pub units: UnitsConfig,

    /// Site endpoint settings.
    #[serde(default)]
    pub site: SiteConfig,
}

/// Default unit preferences; the CLI flags override these. Values are
/// resolved case-insensitively against the unit sets when a lookup is
/// built, so a typo here fails the same way a bad flag does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Power unit (BHP, kW or PS).
    pub power: Option<String>,

    /// Torque unit (lb/ft or Nm).
    pub torque: Option<String>,
}

/// Site endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root the lookup endpoints are resolved against.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
