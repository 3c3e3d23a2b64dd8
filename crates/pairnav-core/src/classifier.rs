//! Role classification: which configured directory a path lives under.

use pairnav_config::{PairConfiguration, PrefixMatch};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two directory roles. Symmetric: each is the other's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Source,
    Counterpart,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Source => Role::Counterpart,
            Role::Counterpart => Role::Source,
        }
    }

    /// The configured directory for this role, if set.
    pub fn directory(self, config: &PairConfiguration) -> Option<&str> {
        match self {
            Role::Source => config.source_dir.as_deref(),
            Role::Counterpart => config.counterpart_dir.as_deref(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Source => f.write_str("source"),
            Role::Counterpart => f.write_str("counterpart"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub role: Role,
    /// Directory to search for the counterpart.
    pub target_dir: String,
}

/// Classify a workspace-relative path against the configured roots.
///
/// The source root is tested first, so with nested roots a path under
/// both is a source file. Returns `None` when either root is unset or the
/// path is under neither.
pub fn classify(relative_path: &str, config: &PairConfiguration) -> Option<Classification> {
    let (source, counterpart) = config.directories()?;
    let path = normalize_relative(relative_path);

    if is_under(&path, source, config.prefix_match) {
        Some(Classification {
            role: Role::Source,
            target_dir: counterpart.to_string(),
        })
    } else if is_under(&path, counterpart, config.prefix_match) {
        Some(Classification {
            role: Role::Counterpart,
            target_dir: source.to_string(),
        })
    } else {
        None
    }
}

/// Prefix test of `path` against `dir` under the given matching mode.
pub fn is_under(path: &str, dir: &str, mode: PrefixMatch) -> bool {
    match mode {
        PrefixMatch::Textual => path.starts_with(dir),
        PrefixMatch::Segment => match path.strip_prefix(dir) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        },
    }
}

fn normalize_relative(path: &str) -> String {
    let mut p = path.replace('\\', "/");
    while let Some(rest) = p.strip_prefix("./") {
        p = rest.to_string();
    }
    p
}
