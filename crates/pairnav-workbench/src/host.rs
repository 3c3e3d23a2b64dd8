//! `Host` implementation over the in-process workbench.
//!
//! Showing a document updates the [`Workbench`] and publishes the editor
//! events a real editor would fire: `FileOpened` when a document is loaded
//! into a group for the first time, `ActiveFileChanged` when the focused
//! file changes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use pairnav_common::{
    Event, EventBus, FileRef, HostError, Notification, NotificationLevel, NotificationQueue,
    Placement, ShowOptions,
};
use pairnav_core::{DocumentHandle, Host};
use tracing::{debug, error, info, warn};

use crate::index::WorkspaceIndex;
use crate::workbench::Workbench;

pub struct WorkbenchHost {
    index: WorkspaceIndex,
    workbench: Mutex<Workbench>,
    notifications: Mutex<NotificationQueue>,
    bus: Arc<EventBus>,
}

impl WorkbenchHost {
    pub fn new(index: WorkspaceIndex, bus: Arc<EventBus>) -> Self {
        Self {
            index,
            workbench: Mutex::new(Workbench::new()),
            notifications: Mutex::new(NotificationQueue::default()),
            bus,
        }
    }

    pub fn index(&self) -> &WorkspaceIndex {
        &self.index
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Run `f` against the current workbench state.
    pub fn with_workbench<T>(&self, f: impl FnOnce(&Workbench) -> T) -> T {
        f(&self.lock_workbench())
    }

    /// The user opens `path` in the focused group as a regular tab.
    pub async fn user_open(&self, path: &Path) -> Result<(), HostError> {
        let document = self.open_document(&FileRef::from(path)).await?;
        self.show_document(
            &document,
            ShowOptions {
                preview: false,
                placement: Placement::Active,
                preserve_focus: false,
            },
        )
        .await
    }

    /// The user closes every tab showing `path`.
    pub fn user_close(&self, path: &Path) -> bool {
        let (closed, before, after) = {
            let mut wb = self.lock_workbench();
            let before = wb.active_file().map(Path::to_path_buf);
            let closed = wb.close(path);
            (closed, before, wb.active_file().map(Path::to_path_buf))
        };
        if before != after {
            self.bus.publish(Event::ActiveFileChanged(after));
        }
        closed
    }

    /// The user focuses an editor group.
    pub fn user_focus(&self, group: u32) -> bool {
        let (focused, before, after) = {
            let mut wb = self.lock_workbench();
            let before = wb.active_file().map(Path::to_path_buf);
            let focused = wb.focus_group(group);
            (focused, before, wb.active_file().map(Path::to_path_buf))
        };
        if before != after {
            self.bus.publish(Event::ActiveFileChanged(after));
        }
        focused
    }

    /// Take all queued notices.
    pub fn drain_notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .drain()
    }

    /// One line per editor group: `*` marks the focused group, `[..]` the
    /// active tab, `~` a preview tab.
    pub fn render_layout(&self) -> Vec<String> {
        let wb = self.lock_workbench();
        let focused = wb.focused_id();
        wb.groups()
            .iter()
            .map(|group| {
                let marker = if group.id == focused { "*" } else { " " };
                let tabs: Vec<String> = group
                    .tabs
                    .tabs()
                    .iter()
                    .enumerate()
                    .map(|(i, tab)| {
                        let mut name = self.index.relativize(&tab.path);
                        if tab.preview {
                            name.insert(0, '~');
                        }
                        if group.tabs.active_index() == Some(i) {
                            format!("[{name}]")
                        } else {
                            name
                        }
                    })
                    .collect();
                format!("{marker}group {}: {}", group.id, tabs.join(" "))
            })
            .collect()
    }

    fn lock_workbench(&self) -> MutexGuard<'_, Workbench> {
        self.workbench.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Host for WorkbenchHost {
    fn relativize(&self, path: &Path) -> String {
        self.index.relativize(path)
    }

    async fn search_files(
        &self,
        include: &str,
        exclude: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<FileRef>, HostError> {
        let index = self.index.clone();
        let include = include.to_string();
        let exclude = exclude.map(str::to_string);

        let found = tokio::task::spawn_blocking(move || {
            index.search(&include, exclude.as_deref(), max_results)
        })
        .await
        .map_err(|e| HostError::Search(format!("search task failed: {e}")))??;

        Ok(found.into_iter().map(FileRef::from).collect())
    }

    fn visible_files(&self) -> HashSet<PathBuf> {
        self.lock_workbench().visible_files()
    }

    async fn open_document(&self, file: &FileRef) -> Result<DocumentHandle, HostError> {
        let path = self.index.absolutize(file.path());
        let open_failed = |reason: String| HostError::OpenFailed {
            path: path.clone(),
            reason,
        };

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| open_failed(e.to_string()))?;
        if !metadata.is_file() {
            return Err(open_failed("not a regular file".into()));
        }
        tokio::fs::File::open(&path)
            .await
            .map_err(|e| open_failed(e.to_string()))?;

        debug!(path = %path.display(), "document loaded");
        Ok(DocumentHandle::new(FileRef::new(path)))
    }

    async fn show_document(
        &self,
        document: &DocumentHandle,
        options: ShowOptions,
    ) -> Result<(), HostError> {
        let path = document.file().path();
        let exists = tokio::fs::metadata(path)
            .await
            .is_ok_and(|m| m.is_file());
        if !exists {
            return Err(HostError::ShowFailed {
                path: path.to_path_buf(),
                reason: "document no longer exists".into(),
            });
        }

        let (first_open, before, after) = {
            let mut wb = self.lock_workbench();
            let first_open = !wb.is_open(path);
            let before = wb.active_file().map(Path::to_path_buf);
            wb.open(path, options.placement, options.preview, options.preserve_focus);
            (first_open, before, wb.active_file().map(Path::to_path_buf))
        };

        if first_open {
            self.bus.publish(Event::FileOpened(path.to_path_buf()));
        }
        if before != after {
            self.bus.publish(Event::ActiveFileChanged(after));
        }
        Ok(())
    }

    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => info!("notice: {message}"),
            NotificationLevel::Warning => warn!("notice: {message}"),
            NotificationLevel::Error => error!("notice: {message}"),
        }
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Notification::with_level(level, message));
    }
}
