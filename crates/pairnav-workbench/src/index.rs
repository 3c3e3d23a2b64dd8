//! Filesystem-backed workspace search.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use pairnav_common::HostError;
use tracing::debug;
use walkdir::WalkDir;

/// A workspace rooted at one directory.
///
/// Globs are matched against `/`-separated workspace-relative paths with
/// `*` confined to a single path segment.
#[derive(Debug, Clone)]
pub struct WorkspaceIndex {
    root: PathBuf,
}

impl WorkspaceIndex {
    /// The root is canonicalized when possible so search results and
    /// user-supplied paths compare equal.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = root.canonicalize().unwrap_or(root);
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a user-supplied path against the workspace root.
    pub fn absolutize(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// `path` relative to the root, `/`-separated. Paths outside the
    /// workspace are returned whole.
    pub fn relativize(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.to_string_lossy().replace('\\', "/")
    }

    /// Files matching `include` and not `exclude`, sorted by relative path,
    /// at most `max_results`. Hidden directories are not descended into.
    pub fn search(
        &self,
        include: &str,
        exclude: Option<&str>,
        max_results: usize,
    ) -> Result<Vec<PathBuf>, HostError> {
        let include = compile(include)?;
        let exclude = exclude.map(compile).transpose()?;

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| {
                e.path() == self.root
                    || !e.file_type().is_dir()
                    || !e.file_name().to_string_lossy().starts_with('.')
            });

        let mut matches: Vec<(String, PathBuf)> = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = self.relativize(entry.path());
            if !include.is_match(&rel) {
                continue;
            }
            if exclude.as_ref().is_some_and(|ex| ex.is_match(&rel)) {
                continue;
            }
            matches.push((rel, entry.into_path()));
        }

        matches.sort_by(|a, b| a.0.cmp(&b.0));
        matches.truncate(max_results);
        Ok(matches.into_iter().map(|(_, path)| path).collect())
    }
}

fn compile(pattern: &str) -> Result<GlobMatcher, HostError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|e| HostError::Search(format!("invalid glob '{pattern}': {e}")))
}
