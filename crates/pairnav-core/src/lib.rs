//! Pair navigation core.
//!
//! Given a file and two configured directory roles, finds the file with the
//! same stem in the opposite directory and coordinates opening it:
//! - [`classifier`] decides which role a path belongs to
//! - [`resolver`] searches the workspace for the counterpart
//! - [`coordinator`] runs the explicit actions and the automatic mode
//! - [`suppression`] keeps self-triggered opens from re-triggering
//! - [`scope`] exposes the "inside a pair directory" context signal
//!
//! The editor is reached only through the [`Host`] trait.

pub mod classifier;
pub mod coordinator;
pub mod host;
pub mod resolver;
pub mod scope;
pub mod suppression;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{classify, Classification, Role};
pub use coordinator::{ActionOutcome, AutoOutcome, BothOutcome, OpenCoordinator, OpenResult, PairOutcome};
pub use host::{ConfigSource, DocumentHandle, Host};
pub use resolver::{resolve, SearchQuery};
pub use scope::{ScopeSignal, ScopeState, CONTEXT_KEY};
pub use suppression::SuppressionSet;
