//! Counterpart resolution: find the file with a given stem under a directory.

use std::path::Path;

use pairnav_common::{FileRef, HostError};
use pairnav_config::PairConfiguration;
use tracing::debug;

use crate::host::Host;

/// A workspace search request for one counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub include: String,
    pub exclude: Option<String>,
    pub max_results: usize,
}

impl SearchQuery {
    /// Any file below a `target_dir` directory component named `stem.<ext>`.
    pub fn for_counterpart(target_dir: &str, stem: &str, config: &PairConfiguration) -> Self {
        Self {
            include: format!("**/{}/**/{}.*", escape_glob(target_dir), escape_glob(stem)),
            exclude: combine_excludes(&config.exclude),
            max_results: config.max_candidates,
        }
    }
}

/// Resolve the counterpart of `stem` under `target_dir`.
///
/// The host may return near misses (`User.test.ts` for stem `User`), so
/// candidates are kept only when their stem matches exactly. `origin` is
/// never returned. When several files qualify, the lexicographically
/// smallest workspace-relative path wins, independent of search order.
pub async fn resolve<H: Host + ?Sized>(
    host: &H,
    target_dir: &str,
    stem: &str,
    origin: Option<&Path>,
    config: &PairConfiguration,
) -> Result<Option<FileRef>, HostError> {
    let query = SearchQuery::for_counterpart(target_dir, stem, config);
    debug!(include = %query.include, exclude = ?query.exclude, "searching for counterpart");

    let results = host
        .search_files(&query.include, query.exclude.as_deref(), query.max_results)
        .await?;
    let truncated = results.len() >= query.max_results;
    let mut candidates = exact_matches(host, results, stem, origin);

    // Near misses such as `User.test.graphql` can fill the capped result
    // set and hide the real counterpart.
    if candidates.is_empty() && truncated {
        debug!(stem, limit = query.max_results, "only near misses returned, searching without limit");
        let results = host
            .search_files(&query.include, query.exclude.as_deref(), usize::MAX)
            .await?;
        candidates = exact_matches(host, results, stem, origin);
    }

    if candidates.len() > 1 {
        debug!(count = candidates.len(), stem, "multiple counterparts, picking first by path");
    }
    candidates.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(candidates.into_iter().next().map(|(_, f)| f))
}

fn exact_matches<H: Host + ?Sized>(
    host: &H,
    results: Vec<FileRef>,
    stem: &str,
    origin: Option<&Path>,
) -> Vec<(String, FileRef)> {
    results
        .into_iter()
        .filter(|f| f.stem() == Some(stem))
        .filter(|f| origin.map_or(true, |o| f.path() != o))
        .map(|f| (host.relativize(f.path()), f))
        .collect()
}

/// Escape glob metacharacters so a literal name matches only itself.
pub fn escape_glob(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '*' | '?' | '[' | ']' | '{' | '}' | '\\' => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            _ => out.push(c),
        }
    }
    out
}

fn combine_excludes(patterns: &[String]) -> Option<String> {
    match patterns {
        [] => None,
        [single] => Some(single.clone()),
        many => Some(format!("{{{}}}", many.join(","))),
    }
}
