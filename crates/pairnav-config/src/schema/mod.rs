//! Configuration schema types for Pairnav.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults documented in the template.

mod pairing;
mod search;
mod system;

pub use pairing::*;
pub use search::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PairnavConfig {
    pub pairing: PairingConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}
