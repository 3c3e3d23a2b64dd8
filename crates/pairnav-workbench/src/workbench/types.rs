//! Core types and accessors for Workbench.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::stack::TabStack;

/// One editor column.
#[derive(Debug, Clone)]
pub struct EditorGroup {
    pub id: u32,
    pub tabs: TabStack,
}

impl EditorGroup {
    pub(super) fn new(id: u32) -> Self {
        Self {
            id,
            tabs: TabStack::new(),
        }
    }
}

/// The editor area: editor groups laid out left to right, each with its
/// own tab stack, and one focused group.
pub struct Workbench {
    /// Groups in visual order, never empty.
    pub(super) groups: Vec<EditorGroup>,
    /// Index into `groups` of the focused group.
    pub(super) focused: usize,
    /// Auto-incrementing counter for group IDs.
    pub(super) next_id: u32,
}

impl Workbench {
    /// Create a workbench with a single empty group.
    pub fn new() -> Self {
        Self {
            groups: vec![EditorGroup::new(1)],
            focused: 0,
            next_id: 2,
        }
    }

    // -- Accessors --

    pub fn groups(&self) -> &[EditorGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn focused_group(&self) -> &EditorGroup {
        &self.groups[self.focused]
    }

    pub fn focused_id(&self) -> u32 {
        self.groups[self.focused].id
    }

    pub fn group(&self, id: u32) -> Option<&EditorGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The file on screen in the focused group.
    pub fn active_file(&self) -> Option<&Path> {
        self.focused_group().tabs.active()
    }

    /// The active tab of every group.
    pub fn visible_files(&self) -> HashSet<PathBuf> {
        self.groups
            .iter()
            .filter_map(|g| g.tabs.active())
            .map(Path::to_path_buf)
            .collect()
    }

    /// Whether `path` is open in any group, visible or not.
    pub fn is_open(&self, path: &Path) -> bool {
        self.groups.iter().any(|g| g.tabs.contains(path))
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}
