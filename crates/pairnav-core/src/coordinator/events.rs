//! Event listener and action dispatch.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pairnav_common::{Action, Event};
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::types::ActionOutcome;
use super::OpenCoordinator;
use crate::host::{ConfigSource, Host};

impl<H, C> OpenCoordinator<H, C>
where
    H: Host + ?Sized,
    C: ConfigSource,
{
    /// Dispatch a resolved [`Action`] invoked on `file`.
    pub async fn dispatch(&self, action: Action, file: Option<&Path>) -> ActionOutcome {
        match action {
            Action::OpenCorrespondingFile => ActionOutcome::Pair(self.open_pair(file).await),
            Action::OpenBothFiles => ActionOutcome::Both(self.open_both(file).await),
            Action::ReloadConfig => {
                self.on_configuration_changed();
                ActionOutcome::ConfigurationRefreshed
            }
            Action::None => ActionOutcome::Ignored,
        }
    }

    /// Recompute the scope signal for a new active file.
    pub fn on_active_file_changed(&self, active: Option<PathBuf>) {
        let config = self.config.snapshot();
        let relative = active.as_deref().map(|p| self.host.relativize(p));
        if self.scope.update(active, relative.as_deref(), &config) {
            debug!(in_scope = self.scope.current().in_scope(), "scope signal changed");
        }
    }

    /// Recompute the scope signal for the current active file.
    pub fn on_configuration_changed(&self) {
        info!("configuration changed");
        let active = self.scope.current().active_file;
        self.on_active_file_changed(active);
    }
}

impl<H, C> OpenCoordinator<H, C>
where
    H: Host + ?Sized + 'static,
    C: ConfigSource + 'static,
{
    /// Listen on the editor event bus until shutdown.
    ///
    /// File-opened events are handled concurrently, so handlers interleave
    /// at their suspension points the way editor callbacks do. On shutdown
    /// in-flight handlers are awaited and suppression state is cleared.
    pub async fn run(self: Arc<Self>, mut rx: broadcast::Receiver<Event>) {
        info!("coordinator listening for editor events");
        let mut handlers = JoinSet::new();

        loop {
            while handlers.try_join_next().is_some() {}

            match rx.recv().await {
                Ok(Event::FileOpened(path)) => {
                    let this = Arc::clone(&self);
                    handlers.spawn(async move {
                        let outcome = this.on_file_opened(&path).await;
                        debug!(path = %path.display(), ?outcome, "file-opened handled");
                    });
                }
                Ok(Event::ActiveFileChanged(active)) => self.on_active_file_changed(active),
                Ok(Event::ConfigurationChanged) => self.on_configuration_changed(),
                Ok(Event::Shutdown) => break,
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("coordinator lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }

        while handlers.join_next().await.is_some() {}
        self.suppression.clear();
        info!("coordinator stopped");
    }
}
