//! Pairnav configuration system.
//!
//! Provides TOML-based configuration with live reload and validation.
//! All config sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pairnav_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod reload;
pub mod schema;
pub mod snapshot;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use reload::ReloadManager;
pub use schema::{PairnavConfig, PrefixMatch, CONFIG_SCHEMA_VERSION};
pub use snapshot::PairConfiguration;
pub use watcher::ConfigWatcher;

use pairnav_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<PairnavConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (e.g. `--config`).
pub fn load_config_from(path: &Path) -> Result<PairnavConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PairnavConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
