//! Per-invocation configuration snapshot.
//!
//! The coordinator takes one [`PairConfiguration`] at the start of each
//! action and uses it throughout, so a reload mid-action cannot mix values.

use std::time::Duration;

use crate::schema::{PairnavConfig, PrefixMatch};

#[derive(Debug, Clone, PartialEq)]
pub struct PairConfiguration {
    /// Normalised source directory, `None` when unset.
    pub source_dir: Option<String>,
    /// Normalised counterpart directory, `None` when unset.
    pub counterpart_dir: Option<String>,
    pub split_view: bool,
    pub preview_mode: bool,
    pub open_on_view: bool,
    pub prefix_match: PrefixMatch,
    pub exclude: Vec<String>,
    pub max_candidates: usize,
    pub suppression_timeout: Duration,
}

impl PairConfiguration {
    /// Both directories, or `None` if either is unset.
    pub fn directories(&self) -> Option<(&str, &str)> {
        match (&self.source_dir, &self.counterpart_dir) {
            (Some(s), Some(c)) => Some((s.as_str(), c.as_str())),
            _ => None,
        }
    }

    /// Names of the directory settings that are unset.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.source_dir.is_none() {
            missing.push("pairing.source_dir");
        }
        if self.counterpart_dir.is_none() {
            missing.push("pairing.counterpart_dir");
        }
        missing
    }
}

impl PairnavConfig {
    pub fn pair_configuration(&self) -> PairConfiguration {
        PairConfiguration {
            source_dir: normalize_dir(&self.pairing.source_dir),
            counterpart_dir: normalize_dir(&self.pairing.counterpart_dir),
            split_view: self.pairing.open_in_split_view,
            preview_mode: self.pairing.use_preview_mode,
            open_on_view: self.pairing.open_on_view,
            prefix_match: self.pairing.prefix_match,
            exclude: self.search.exclude.clone(),
            max_candidates: self.search.max_candidates.max(1) as usize,
            suppression_timeout: Duration::from_millis(self.search.suppression_timeout_ms),
        }
    }
}

impl Default for PairConfiguration {
    fn default() -> Self {
        PairnavConfig::default().pair_configuration()
    }
}

/// Forward slashes, no leading `./`, no trailing `/`. Blank means unset.
pub fn normalize_dir(raw: &str) -> Option<String> {
    let mut dir = raw.trim().replace('\\', "/");
    while let Some(rest) = dir.strip_prefix("./") {
        dir = rest.to_string();
    }
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        None
    } else {
        Some(dir.to_string())
    }
}
