use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Startup toggles, read once. Field defaults mirror the shipped default
/// config, so an empty JSON object is a valid configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Whether felling mode starts enabled for joining players.
    pub active_on_join: bool,
    /// Gate felling and the toggle gesture behind `PERMISSION_FELL`.
    pub use_permissions: bool,
    /// Cascade decay to unsupported leaves after a log or leaf breaks.
    pub fast_leaf_decay: bool,
    pub leaf_decay_sound: bool,
    pub leaf_decay_particles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            active_on_join: true,
            use_permissions: false,
            fast_leaf_decay: true,
            leaf_decay_sound: true,
            leaf_decay_particles: true,
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
