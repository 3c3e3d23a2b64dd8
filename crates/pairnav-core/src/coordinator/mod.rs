//! The open coordinator: explicit pair actions, automatic mode, and the
//! event listener that feeds both.
//!
//! Every entry point reads one configuration snapshot up front and then runs
//! classify -> resolve -> visibility check -> open strictly in order. Failures
//! never escape an entry point; they are reported through the returned
//! outcome, the host's notices (explicit actions), or the log (automatic mode).

mod automatic;
mod events;
mod explicit;
mod types;


use std::path::Path;
use std::sync::Arc;

use pairnav_common::{FileRef, HostError, Placement, ShowOptions};
use pairnav_config::PairConfiguration;

use crate::host::{ConfigSource, Host};
use crate::scope::ScopeSignal;
use crate::suppression::SuppressionSet;

pub use types::*;

pub struct OpenCoordinator<H: ?Sized, C> {
    host: Arc<H>,
    config: C,
    suppression: SuppressionSet,
    scope: ScopeSignal,
}

impl<H, C> OpenCoordinator<H, C>
where
    H: Host + ?Sized,
    C: ConfigSource,
{
    pub fn new(host: Arc<H>, config: C) -> Self {
        Self {
            host,
            config,
            suppression: SuppressionSet::new(),
            scope: ScopeSignal::new(),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    /// Shared handle to the suppression state, for inspection.
    pub fn suppression(&self) -> &SuppressionSet {
        &self.suppression
    }

    pub fn scope(&self) -> &ScopeSignal {
        &self.scope
    }

    fn is_visible(&self, file: &FileRef) -> bool {
        self.host.visible_files().contains(file.path())
    }

    async fn open_and_show(&self, file: &FileRef, options: ShowOptions) -> Result<(), HostError> {
        let document = self.host.open_document(file).await?;
        self.host.show_document(&document, options).await
    }

    /// Open `file`, registering it for suppression first when automatic
    /// mode is on so the resulting editor event is not handled again.
    async fn open_tracked(
        &self,
        file: &FileRef,
        options: ShowOptions,
        config: &PairConfiguration,
    ) -> Result<(), HostError> {
        let tracked = config.open_on_view
            && self
                .suppression
                .try_insert(file.path(), config.suppression_timeout);

        let result = self.open_and_show(file, options).await;
        if result.is_err() && tracked {
            self.suppression.release(file.path());
        }
        result
    }
}

/// Display options for a counterpart under the given configuration.
pub(crate) fn counterpart_options(config: &PairConfiguration, preserve_focus: bool) -> ShowOptions {
    ShowOptions {
        preview: config.preview_mode,
        placement: if config.split_view {
            Placement::Beside
        } else {
            Placement::Active
        },
        preserve_focus,
    }
}

pub(crate) fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str()).filter(|s| !s.is_empty())
}
