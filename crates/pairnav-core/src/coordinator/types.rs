//! Outcomes reported by the coordinator's entry points.

use pairnav_common::{FileRef, HostError};

/// Result of a single open attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenResult {
    Opened,
    AlreadyVisible,
    Failed(HostError),
}

/// Outcome of "open corresponding file".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// Invoked without a file.
    NoFile,
    /// The named directory settings are unset.
    Misconfigured(Vec<&'static str>),
    /// The file is under neither configured directory.
    OutOfScope,
    NotFound { target_dir: String, stem: String },
    AlreadyVisible(FileRef),
    Opened(FileRef),
    Failed(HostError),
}

/// Outcome of "open both files".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BothOutcome {
    NoFile,
    Misconfigured(Vec<&'static str>),
    OutOfScope,
    /// Only the clicked file carries the stem; `target_dir` came up empty.
    NoCounterpart {
        original: OpenResult,
        target_dir: String,
    },
    Opened {
        original: OpenResult,
        counterparts: Vec<(FileRef, OpenResult)>,
    },
}

/// Outcome of handling one editor "file opened" event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoOutcome {
    /// The event was caused by our own open and has been consumed.
    Suppressed,
    /// Automatic mode is switched off.
    Disabled,
    Misconfigured,
    OutOfScope,
    NotFound,
    AlreadyVisible(FileRef),
    /// Another handler is already opening this counterpart.
    InFlight(FileRef),
    Opened(FileRef),
    Failed(HostError),
}

/// Outcome of dispatching an [`Action`](pairnav_common::Action).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Pair(PairOutcome),
    Both(BothOutcome),
    ConfigurationRefreshed,
    Ignored,
}

impl PairOutcome {
    pub fn opened(&self) -> Option<&FileRef> {
        match self {
            PairOutcome::Opened(f) => Some(f),
            _ => None,
        }
    }
}

impl BothOutcome {
    /// Number of successful opens, original included.
    pub fn opened_count(&self) -> usize {
        match self {
            BothOutcome::Opened {
                original,
                counterparts,
            } => {
                let mut n = usize::from(*original == OpenResult::Opened);
                n += counterparts
                    .iter()
                    .filter(|(_, r)| *r == OpenResult::Opened)
                    .count();
                n
            }
            BothOutcome::NoCounterpart { original, .. } => {
                usize::from(*original == OpenResult::Opened)
            }
            _ => 0,
        }
    }
}
