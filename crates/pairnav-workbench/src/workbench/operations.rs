//! Opening and closing editors.

use std::path::Path;

use pairnav_common::Placement;

use super::{EditorGroup, Workbench};

impl Workbench {
    /// Show `path` in the group selected by `placement`.
    ///
    /// `Beside` targets the group right of the focused one, creating it if
    /// the focused group is the rightmost. Focus moves to the target group
    /// unless `preserve_focus` is set. Returns the target group's ID.
    pub fn open(
        &mut self,
        path: &Path,
        placement: Placement,
        preview: bool,
        preserve_focus: bool,
    ) -> u32 {
        let target = match placement {
            Placement::Active => self.focused,
            Placement::Beside => self.group_right_of_focused(),
        };

        self.groups[target].tabs.open(path, preview);
        if !preserve_focus {
            self.focused = target;
        }
        self.groups[target].id
    }

    /// Close `path` in every group showing it. Groups left empty are
    /// removed, except the last one. Returns `true` if anything closed.
    pub fn close(&mut self, path: &Path) -> bool {
        let mut closed = false;
        for group in &mut self.groups {
            closed |= group.tabs.close(path);
        }
        if closed {
            self.remove_empty_groups();
        }
        closed
    }

    fn group_right_of_focused(&mut self) -> usize {
        let right = self.focused + 1;
        if right == self.groups.len() {
            let id = self.next_id;
            self.next_id += 1;
            self.groups.push(EditorGroup::new(id));
        }
        right
    }

    fn remove_empty_groups(&mut self) {
        let focused_id = self.focused_id();
        self.groups.retain(|g| !g.tabs.is_empty());
        if self.groups.is_empty() {
            let id = self.next_id;
            self.next_id += 1;
            self.groups.push(EditorGroup::new(id));
        }

        self.focused = match self.groups.iter().position(|g| g.id == focused_id) {
            Some(idx) => idx,
            // The focused group went away; focus its left neighbour.
            None => self
                .groups
                .iter()
                .rposition(|g| g.id < focused_id)
                .unwrap_or(0),
        };
    }
}
