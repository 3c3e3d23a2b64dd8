//! Headless reference editor for pair navigation.
//!
//! Models just enough of an editor to drive the coordinator: editor groups
//! with tab stacks, a filesystem-backed workspace search, and a
//! [`WorkbenchHost`] that fires editor events on the shared bus.

pub mod host;
pub mod index;
pub mod stack;
pub mod workbench;

pub use host::WorkbenchHost;
pub use index::WorkspaceIndex;
pub use stack::{Tab, TabStack};
pub use workbench::{EditorGroup, Workbench};
