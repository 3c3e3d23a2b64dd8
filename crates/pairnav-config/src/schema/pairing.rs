//! Directory pairing and open-behaviour settings.

use serde::{Deserialize, Serialize};

/// How a workspace-relative path is tested against a configured directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMatch {
    /// The directory must be followed by a path separator (or be the whole path).
    #[default]
    Segment,
    /// Raw string prefix: `src/resolvers` also matches `src/resolversExtra/a.ts`.
    Textual,
}

/// The two directory roles and how counterparts are displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PairingConfig {
    /// Workspace-relative "source" directory. Empty means unset.
    pub source_dir: String,
    /// Workspace-relative "counterpart" directory. Empty means unset.
    pub counterpart_dir: String,
    /// Open counterparts in the adjacent editor group instead of the active one.
    pub open_in_split_view: bool,
    /// Open counterparts as transient preview tabs.
    pub use_preview_mode: bool,
    /// Automatically open the counterpart whenever a paired file is opened.
    pub open_on_view: bool,
    pub prefix_match: PrefixMatch,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            source_dir: "src/graphql/resolvers".into(),
            counterpart_dir: "src/graphql/typeDefs".into(),
            open_in_split_view: true,
            use_preview_mode: false,
            open_on_view: false,
            prefix_match: PrefixMatch::Segment,
        }
    }
}
