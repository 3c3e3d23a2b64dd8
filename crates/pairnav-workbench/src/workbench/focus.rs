//! Focus handling for Workbench.

use super::Workbench;

impl Workbench {
    /// Set focus to a specific group by ID.
    pub fn focus_group(&mut self, id: u32) -> bool {
        if let Some(idx) = self.groups.iter().position(|g| g.id == id) {
            self.focused = idx;
            true
        } else {
            false
        }
    }

    /// Focus the next group to the right, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        if self.groups.len() > 1 {
            self.focused = (self.focused + 1) % self.groups.len();
            true
        } else {
            false
        }
    }
}
