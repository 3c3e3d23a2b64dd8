//! Automatic mode: open the counterpart whenever a paired file is opened.
//!
//! Never notifies the user; every failure is logged only.

use std::path::Path;

use pairnav_common::new_correlation_id;
use tracing::{debug, info, warn, Instrument};

use super::types::AutoOutcome;
use super::{counterpart_options, file_stem, OpenCoordinator};
use crate::classifier::classify;
use crate::host::{ConfigSource, Host};
use crate::resolver::resolve;

impl<H, C> OpenCoordinator<H, C>
where
    H: Host + ?Sized,
    C: ConfigSource,
{
    /// Handle an editor "file opened" event.
    pub async fn on_file_opened(&self, opened: &Path) -> AutoOutcome {
        let span = tracing::debug_span!("on_file_opened", cid = %new_correlation_id());
        self.on_file_opened_inner(opened).instrument(span).await
    }

    async fn on_file_opened_inner(&self, opened: &Path) -> AutoOutcome {
        if self.suppression.take(opened) {
            debug!(path = %opened.display(), "ignoring self-triggered open");
            return AutoOutcome::Suppressed;
        }

        let config = self.config.snapshot();
        if !config.open_on_view {
            return AutoOutcome::Disabled;
        }
        if config.directories().is_none() {
            debug!(missing = ?config.missing_settings(), "automatic mode skipped, directories not configured");
            return AutoOutcome::Misconfigured;
        }

        let relative = self.host.relativize(opened);
        let Some(classification) = classify(&relative, &config) else {
            return AutoOutcome::OutOfScope;
        };
        let Some(stem) = file_stem(opened) else {
            return AutoOutcome::OutOfScope;
        };

        let target = match resolve(
            &*self.host,
            &classification.target_dir,
            stem,
            Some(opened),
            &config,
        )
        .await
        {
            Ok(Some(target)) => target,
            Ok(None) => {
                debug!(stem, target = %classification.target_dir, "no counterpart to auto-open");
                return AutoOutcome::NotFound;
            }
            Err(e) => {
                warn!("automatic counterpart search failed: {e}");
                return AutoOutcome::Failed(e);
            }
        };

        // Re-checked after the search: the editor may have changed meanwhile.
        if self.is_visible(&target) {
            return AutoOutcome::AlreadyVisible(target);
        }

        // Must be recorded before the open so the resulting event is caught.
        if !self
            .suppression
            .try_insert(target.path(), config.suppression_timeout)
        {
            debug!(target = %target, "counterpart already being opened");
            return AutoOutcome::InFlight(target);
        }

        let options = counterpart_options(&config, true);
        match self.open_and_show(&target, options).await {
            Ok(()) => {
                info!(origin = %relative, target = %target, "auto-opened counterpart");
                AutoOutcome::Opened(target)
            }
            Err(e) => {
                self.suppression.release(target.path());
                warn!(target = %target, "automatic open failed: {e}");
                AutoOutcome::Failed(e)
            }
        }
    }
}
