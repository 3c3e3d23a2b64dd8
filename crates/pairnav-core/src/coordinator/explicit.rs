//! User-invoked actions: "open corresponding file" and "open both files".

use std::path::Path;

use futures_util::future::{join, join_all};
use pairnav_common::{new_correlation_id, Action, FileRef, HostError, NotificationLevel};
use pairnav_common::{Placement, ShowOptions};
use pairnav_config::PairConfiguration;
use tracing::{debug, error, info, warn, Instrument};

use super::types::{BothOutcome, OpenResult, PairOutcome};
use super::{counterpart_options, file_stem, OpenCoordinator};
use crate::classifier::{classify, Role};
use crate::host::{ConfigSource, Host};
use crate::resolver::resolve;

impl<H, C> OpenCoordinator<H, C>
where
    H: Host + ?Sized,
    C: ConfigSource,
{
    /// Open the counterpart of `clicked` according to the current configuration.
    pub async fn open_pair(&self, clicked: Option<&Path>) -> PairOutcome {
        let span = tracing::info_span!("open_pair", cid = %new_correlation_id());
        self.open_pair_inner(clicked).instrument(span).await
    }

    async fn open_pair_inner(&self, clicked: Option<&Path>) -> PairOutcome {
        let label = Action::OpenCorrespondingFile.label();
        let Some(clicked) = clicked else {
            warn!("invoked without a file");
            self.host
                .notify(NotificationLevel::Warning, &format!("{label}: no file selected."));
            return PairOutcome::NoFile;
        };

        let config = self.config.snapshot();
        if let Some(missing) = self.check_configured(label, &config) {
            return PairOutcome::Misconfigured(missing);
        }

        let relative = self.host.relativize(clicked);
        let Some(classification) = classify(&relative, &config) else {
            debug!(path = %relative, "not inside a pair directory");
            return PairOutcome::OutOfScope;
        };
        let Some(stem) = file_stem(clicked) else {
            debug!(path = %relative, "file has no stem");
            return PairOutcome::OutOfScope;
        };
        debug!(path = %relative, role = %classification.role, target = %classification.target_dir, "classified");

        let target_dir = classification.target_dir;
        let found = match resolve(&*self.host, &target_dir, stem, Some(clicked), &config).await {
            Ok(found) => found,
            Err(e) => {
                error!("counterpart search failed: {e}");
                self.host
                    .notify(NotificationLevel::Error, &format!("{label}: {e}"));
                return PairOutcome::Failed(e);
            }
        };

        let Some(target) = found else {
            info!(stem, target = %target_dir, "no counterpart found");
            self.host.notify(
                NotificationLevel::Info,
                &format!("No file named '{stem}.*' found in {target_dir}."),
            );
            return PairOutcome::NotFound {
                target_dir,
                stem: stem.to_string(),
            };
        };

        if self.is_visible(&target) {
            debug!(target = %target, "counterpart already visible");
            return PairOutcome::AlreadyVisible(target);
        }

        let options = counterpart_options(&config, false);
        match self.open_tracked(&target, options, &config).await {
            Ok(()) => {
                info!(target = %target, "opened counterpart");
                PairOutcome::Opened(target)
            }
            Err(e) => {
                self.report_open_failure(&target, &e);
                PairOutcome::Failed(e)
            }
        }
    }

    /// Open `clicked` plus whatever shares its stem in both directories.
    pub async fn open_both(&self, clicked: Option<&Path>) -> BothOutcome {
        let span = tracing::info_span!("open_both", cid = %new_correlation_id());
        self.open_both_inner(clicked).instrument(span).await
    }

    async fn open_both_inner(&self, clicked: Option<&Path>) -> BothOutcome {
        let label = Action::OpenBothFiles.label();
        let Some(clicked) = clicked else {
            warn!("invoked without a file");
            self.host
                .notify(NotificationLevel::Warning, &format!("{label}: no file selected."));
            return BothOutcome::NoFile;
        };

        let config = self.config.snapshot();
        if let Some(missing) = self.check_configured(label, &config) {
            return BothOutcome::Misconfigured(missing);
        }
        let (Some(source_dir), Some(counterpart_dir)) = (
            Role::Source.directory(&config),
            Role::Counterpart.directory(&config),
        ) else {
            return BothOutcome::Misconfigured(config.missing_settings());
        };

        let relative = self.host.relativize(clicked);
        let Some(classification) = classify(&relative, &config) else {
            debug!(path = %relative, "not inside a pair directory");
            return BothOutcome::OutOfScope;
        };
        let Some(stem) = file_stem(clicked) else {
            return BothOutcome::OutOfScope;
        };

        let (in_source, in_counterpart) = join(
            self.resolve_logged(source_dir, stem, clicked, &config),
            self.resolve_logged(counterpart_dir, stem, clicked, &config),
        )
        .await;

        let mut found: Vec<FileRef> = Vec::with_capacity(2);
        for file in [in_source, in_counterpart].into_iter().flatten() {
            if !found.contains(&file) {
                found.push(file);
            }
        }

        // The clicked file stands for its own directory and is opened regardless.
        let original_file = FileRef::from(clicked);
        let original = if self.is_visible(&original_file) {
            OpenResult::AlreadyVisible
        } else {
            let options = ShowOptions {
                preview: false,
                placement: Placement::Active,
                preserve_focus: false,
            };
            match self.open_tracked(&original_file, options, &config).await {
                Ok(()) => OpenResult::Opened,
                Err(e) => {
                    self.report_open_failure(&original_file, &e);
                    OpenResult::Failed(e)
                }
            }
        };

        if found.is_empty() {
            let target_dir = classification.target_dir;
            info!(stem, target = %target_dir, "nothing to pair with");
            self.host.notify(
                NotificationLevel::Info,
                &format!("No file named '{stem}.*' found in {target_dir}."),
            );
            return BothOutcome::NoCounterpart {
                original,
                target_dir,
            };
        }

        // Snapshot after the original is shown so it is deduplicated too.
        let visible = self.host.visible_files();
        let options = counterpart_options(&config, true);
        let attempts = found.into_iter().map(|file| {
            let already = visible.contains(file.path());
            let config = &config;
            async move {
                if already {
                    return (file, OpenResult::AlreadyVisible);
                }
                let result = match self.open_tracked(&file, options, config).await {
                    Ok(()) => OpenResult::Opened,
                    Err(e) => {
                        self.report_open_failure(&file, &e);
                        OpenResult::Failed(e)
                    }
                };
                (file, result)
            }
        });
        let counterparts = join_all(attempts).await;

        BothOutcome::Opened {
            original,
            counterparts,
        }
    }

    /// Emits the configuration error notice and returns the missing settings.
    fn check_configured(
        &self,
        label: &str,
        config: &PairConfiguration,
    ) -> Option<Vec<&'static str>> {
        if config.directories().is_some() {
            return None;
        }
        let missing = config.missing_settings();
        error!(?missing, "pair directories not configured");
        self.host.notify(
            NotificationLevel::Error,
            &format!(
                "{label}: {} not set. Configure it in the pairnav config file.",
                missing.join(" and ")
            ),
        );
        Some(missing)
    }

    async fn resolve_logged(
        &self,
        dir: &str,
        stem: &str,
        origin: &Path,
        config: &PairConfiguration,
    ) -> Option<FileRef> {
        match resolve(&*self.host, dir, stem, Some(origin), config).await {
            Ok(found) => found,
            Err(e) => {
                warn!(dir, "search failed: {e}");
                None
            }
        }
    }

    fn report_open_failure(&self, file: &FileRef, e: &HostError) {
        error!(target = %file, "open failed: {e}");
        self.host.notify(
            NotificationLevel::Error,
            &format!("Could not open {file}: {e}"),
        );
    }
}
