//! Workspace search and automatic-mode timing settings.

use serde::{Deserialize, Serialize};

/// Counterpart search configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Globs excluded from the counterpart search.
    pub exclude: Vec<String>,
    /// Results requested from the workspace search (valid range: 1-1000).
    pub max_candidates: u32,
    /// How long a self-triggered open stays suppressed, in ms (valid range: 50-60000).
    pub suppression_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["**/node_modules/**".into()],
            max_candidates: 32,
            suppression_timeout_ms: 1000,
        }
    }
}
