//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod pairing;
mod search;

#[cfg(test)]
mod tests;

use crate::schema::PairnavConfig;
use pairnav_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PairnavConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    pairing::validate_pairing(&mut errors, config);
    search::validate_search(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
