//! The Workbench coordinates editor groups, their tabs, and focus.

mod focus;
mod operations;
mod types;

pub use types::*;
