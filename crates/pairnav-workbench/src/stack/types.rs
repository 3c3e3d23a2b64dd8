//! Core types for tab stacks.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One open editor tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub path: PathBuf,
    /// Preview tabs are transient: the next preview open replaces them.
    pub preview: bool,
}

/// The ordered tabs of one editor group. The active tab is the one on
/// screen; the others are open but hidden. At most one tab is a preview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabStack {
    pub(super) tabs: Vec<Tab>,
    /// Index of the active tab, `None` only when the stack is empty.
    pub(super) active_index: Option<usize>,
}

impl TabStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The tab currently on screen.
    pub fn active(&self) -> Option<&Path> {
        self.active_index.map(|i| self.tabs[i].path.as_path())
    }

    pub fn preview_tab(&self) -> Option<&Path> {
        self.tabs
            .iter()
            .find(|t| t.preview)
            .map(|t| t.path.as_path())
    }

    pub(super) fn position(&self, path: &Path) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }
}
