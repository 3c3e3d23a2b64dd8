//! Recording host used by the unit tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use globset::Glob;
use pairnav_common::{FileRef, HostError, NotificationLevel, ShowOptions};

use crate::host::{DocumentHandle, Host};

#[derive(Default)]
pub(crate) struct StubHost {
    files: Vec<PathBuf>,
    visible: Mutex<HashSet<PathBuf>>,
    failing: Mutex<HashSet<PathBuf>>,
    search_error: Mutex<Option<String>>,
    latency: Mutex<Option<Duration>>,
    pub searches: Mutex<Vec<String>>,
    pub shown: Mutex<Vec<(PathBuf, ShowOptions)>>,
    pub notices: Mutex<Vec<(NotificationLevel, String)>>,
}

impl StubHost {
    /// Workspace-relative paths double as the host's absolute paths.
    pub fn with_files(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
            ..Default::default()
        }
    }

    pub fn set_visible(&self, path: &str) {
        self.visible.lock().unwrap().insert(PathBuf::from(path));
    }

    pub fn hide_all(&self) {
        self.visible.lock().unwrap().clear();
    }

    pub fn fail_open(&self, path: &str) {
        self.failing.lock().unwrap().insert(PathBuf::from(path));
    }

    pub fn fail_search(&self, reason: &str) {
        *self.search_error.lock().unwrap() = Some(reason.to_string());
    }

    /// Every async call sleeps this long first.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = Some(latency);
    }

    pub fn shown_paths(&self) -> Vec<PathBuf> {
        self.shown.lock().unwrap().iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn notices_at(&self, level: NotificationLevel) -> Vec<String> {
        self.notices
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn notice_count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    async fn pause(&self) {
        let latency = *self.latency.lock().unwrap();
        if let Some(d) = latency {
            tokio::time::sleep(d).await;
        }
    }
}

#[async_trait]
impl Host for StubHost {
    fn relativize(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    async fn search_files(
        &self,
        include: &str,
        exclude: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<FileRef>, HostError> {
        self.searches.lock().unwrap().push(include.to_string());
        self.pause().await;
        if let Some(reason) = self.search_error.lock().unwrap().clone() {
            return Err(HostError::Search(reason));
        }

        let include = Glob::new(include)
            .map_err(|e| HostError::Search(e.to_string()))?
            .compile_matcher();
        let exclude = exclude
            .map(|g| Glob::new(g).map(|g| g.compile_matcher()))
            .transpose()
            .map_err(|e| HostError::Search(e.to_string()))?;

        Ok(self
            .files
            .iter()
            .filter(|f| include.is_match(f))
            .filter(|f| exclude.as_ref().map_or(true, |ex| !ex.is_match(f)))
            .take(max_results)
            .map(|f| FileRef::new(f.clone()))
            .collect())
    }

    fn visible_files(&self) -> HashSet<PathBuf> {
        self.visible.lock().unwrap().clone()
    }

    async fn open_document(&self, file: &FileRef) -> Result<DocumentHandle, HostError> {
        self.pause().await;
        if self.failing.lock().unwrap().contains(file.path()) {
            return Err(HostError::OpenFailed {
                path: file.path().to_path_buf(),
                reason: "no such file".into(),
            });
        }
        Ok(DocumentHandle::new(file.clone()))
    }

    async fn show_document(
        &self,
        document: &DocumentHandle,
        options: ShowOptions,
    ) -> Result<(), HostError> {
        let path = document.file().path().to_path_buf();
        self.shown.lock().unwrap().push((path.clone(), options));
        self.visible.lock().unwrap().insert(path);
        Ok(())
    }

    fn notify(&self, level: NotificationLevel, message: &str) {
        self.notices.lock().unwrap().push((level, message.to_string()));
    }
}
