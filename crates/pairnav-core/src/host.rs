//! Collaborator interfaces the core is written against.
//!
//! Any editor that can relativize paths, search the workspace, list visible
//! files, and open/show documents can drive the coordinator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use pairnav_common::{FileRef, HostError, NotificationLevel, ShowOptions};
use pairnav_config::{PairConfiguration, PairnavConfig};
use tokio::sync::watch;

/// A loaded document, ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    file: FileRef,
}

impl DocumentHandle {
    pub fn new(file: FileRef) -> Self {
        Self { file }
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }
}

#[async_trait]
pub trait Host: Send + Sync {
    /// Express a path relative to the workspace root, `/`-separated.
    fn relativize(&self, path: &Path) -> String;

    /// Files matching `include` and not `exclude`, at most `max_results`.
    async fn search_files(
        &self,
        include: &str,
        exclude: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<FileRef>, HostError>;

    /// Snapshot of the files currently displayed in any editor group.
    fn visible_files(&self) -> HashSet<PathBuf>;

    async fn open_document(&self, file: &FileRef) -> Result<DocumentHandle, HostError>;

    async fn show_document(
        &self,
        document: &DocumentHandle,
        options: ShowOptions,
    ) -> Result<(), HostError>;

    /// Fire-and-forget user-visible notice.
    fn notify(&self, level: NotificationLevel, message: &str);
}

#[async_trait]
impl<T: Host + ?Sized> Host for Arc<T> {
    fn relativize(&self, path: &Path) -> String {
        (**self).relativize(path)
    }

    async fn search_files(
        &self,
        include: &str,
        exclude: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<FileRef>, HostError> {
        (**self).search_files(include, exclude, max_results).await
    }

    fn visible_files(&self) -> HashSet<PathBuf> {
        (**self).visible_files()
    }

    async fn open_document(&self, file: &FileRef) -> Result<DocumentHandle, HostError> {
        (**self).open_document(file).await
    }

    async fn show_document(
        &self,
        document: &DocumentHandle,
        options: ShowOptions,
    ) -> Result<(), HostError> {
        (**self).show_document(document, options).await
    }

    fn notify(&self, level: NotificationLevel, message: &str) {
        (**self).notify(level, message)
    }
}

/// Where the coordinator reads configuration from.
///
/// Called once at the start of every invocation; implementations must not
/// cache across invocations unless they also track reloads.
pub trait ConfigSource: Send + Sync {
    fn snapshot(&self) -> PairConfiguration;
}

impl ConfigSource for PairConfiguration {
    fn snapshot(&self) -> PairConfiguration {
        self.clone()
    }
}

impl ConfigSource for PairnavConfig {
    fn snapshot(&self) -> PairConfiguration {
        self.pair_configuration()
    }
}

/// Latest value published by the reload manager.
impl ConfigSource for watch::Receiver<PairnavConfig> {
    fn snapshot(&self) -> PairConfiguration {
        self.borrow().pair_configuration()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn snapshot(&self) -> PairConfiguration {
        (**self).snapshot()
    }
}
