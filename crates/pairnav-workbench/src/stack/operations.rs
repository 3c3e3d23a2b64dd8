//! Mutating operations on TabStack: open, pin, close, set_active.

use std::path::{Path, PathBuf};

use super::{Tab, TabStack};

impl TabStack {
    /// Open `path` and make it active.
    ///
    /// An already-open tab is reused (and pinned if opened non-preview).
    /// A new preview tab takes the place of the existing preview tab;
    /// anything else is appended.
    pub fn open(&mut self, path: impl Into<PathBuf>, preview: bool) {
        let path = path.into();
        if let Some(idx) = self.position(&path) {
            if !preview {
                self.tabs[idx].preview = false;
            }
            self.active_index = Some(idx);
            return;
        }

        let tab = Tab { path, preview };
        if preview {
            if let Some(idx) = self.tabs.iter().position(|t| t.preview) {
                self.tabs[idx] = tab;
                self.active_index = Some(idx);
                return;
            }
        }
        self.tabs.push(tab);
        self.active_index = Some(self.tabs.len() - 1);
    }

    /// Turn a preview tab into a regular one. Returns `true` if it was a preview.
    pub fn pin(&mut self, path: &Path) -> bool {
        match self.position(path) {
            Some(idx) if self.tabs[idx].preview => {
                self.tabs[idx].preview = false;
                true
            }
            _ => false,
        }
    }

    /// Close a tab. Returns `true` if found.
    /// If the active tab is closed, the previous tab becomes active.
    pub fn close(&mut self, path: &Path) -> bool {
        let Some(idx) = self.position(path) else {
            return false;
        };
        self.tabs.remove(idx);

        self.active_index = match self.active_index {
            _ if self.tabs.is_empty() => None,
            Some(active) if idx < active => Some(active - 1),
            Some(active) if idx == active => Some(active.saturating_sub(1)),
            Some(active) => Some(active.min(self.tabs.len() - 1)),
            None => None,
        };
        true
    }

    /// Make an open tab active by path. Returns `true` if found.
    pub fn set_active(&mut self, path: &Path) -> bool {
        if let Some(idx) = self.position(path) {
            self.active_index = Some(idx);
            true
        } else {
            false
        }
    }
}
