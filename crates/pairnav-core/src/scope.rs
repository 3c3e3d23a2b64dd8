//! "Is the active file inside a pair directory" context signal.
//!
//! A projection of [`classify`](crate::classifier::classify) over the active
//! file, republished whenever the active file or the configuration changes.
//! Hosts use it to show or hide the pair actions in menus.

use std::path::PathBuf;

use pairnav_config::PairConfiguration;
use tokio::sync::watch;

use crate::classifier::{classify, Role};

/// Context key under which hosts expose [`ScopeState::in_scope`].
pub const CONTEXT_KEY: &str = "pairnav.inPairDirectory";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeState {
    pub active_file: Option<PathBuf>,
    pub role: Option<Role>,
}

impl ScopeState {
    pub fn in_scope(&self) -> bool {
        self.role.is_some()
    }
}

pub struct ScopeSignal {
    tx: watch::Sender<ScopeState>,
}

impl ScopeSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(ScopeState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScopeState> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> ScopeState {
        self.tx.borrow().clone()
    }

    /// Recompute for a new active file. `relative` is its workspace-relative
    /// form. Returns `true` if the published state changed.
    pub fn update(
        &self,
        active_file: Option<PathBuf>,
        relative: Option<&str>,
        config: &PairConfiguration,
    ) -> bool {
        let role = relative
            .and_then(|rel| classify(rel, config))
            .map(|c| c.role);
        let next = ScopeState { active_file, role };
        self.tx.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        })
    }
}

impl Default for ScopeSignal {
    fn default() -> Self {
        Self::new()
    }
}
