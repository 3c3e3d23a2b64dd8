//! Suppression of self-triggered "file opened" events.
//!
//! Before the automatic mode opens a counterpart it records the path here.
//! The matching editor event consumes the entry; if that event never
//! arrives, a scheduled cleanup removes it after a fixed timeout.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

#[derive(Debug)]
struct Entry {
    /// Distinguishes a re-inserted path from the one a stale timer was armed for.
    token: u64,
    cleanup: AbortHandle,
}

/// Set of paths whose next "opened" event was caused by us.
///
/// Cloning shares the same underlying set. The lock is never held across
/// an `.await`, so every operation is atomic with respect to interleaved
/// event handlers.
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    entries: Arc<Mutex<HashMap<PathBuf, Entry>>>,
    next_token: Arc<AtomicU64>,
}

impl SuppressionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` and arm its cleanup timer.
    ///
    /// Returns `false` without changing anything if the path is already
    /// suppressed, i.e. another handler is opening it right now. Must be
    /// called from within a tokio runtime.
    pub fn try_insert(&self, path: &Path, timeout: Duration) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(path) {
            return false;
        }

        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let shared = Arc::clone(&self.entries);
        let key = path.to_path_buf();
        let task = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let mut entries = shared.lock().unwrap_or_else(|e| e.into_inner());
            if entries.get(&key).is_some_and(|e| e.token == token) {
                entries.remove(&key);
                debug!(path = %key.display(), "suppression expired without an open event");
            }
        });

        entries.insert(
            path.to_path_buf(),
            Entry {
                token,
                cleanup: task.abort_handle(),
            },
        );
        true
    }

    /// Consume the entry for an observed open event. Returns `true` if the
    /// event was self-triggered and must be ignored.
    pub fn take(&self, path: &Path) -> bool {
        self.remove(path)
    }

    /// Roll back an entry whose open failed.
    pub fn release(&self, path: &Path) -> bool {
        self.remove(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.lock().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every entry and cancel the pending timers.
    pub fn clear(&self) {
        for (_, entry) in self.lock().drain() {
            entry.cleanup.abort();
        }
    }

    fn remove(&self, path: &Path) -> bool {
        match self.lock().remove(path) {
            Some(entry) => {
                entry.cleanup.abort();
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, Entry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
