//! Validation for the `[pairing]` section.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::PairnavConfig;
use crate::snapshot::normalize_dir;

static GLOB_META_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*?\[\]{}!]").unwrap());

/// Directory settings must be plain workspace-relative paths.
pub(crate) fn validate_pairing(errors: &mut Vec<String>, config: &PairnavConfig) {
    let pairing = &config.pairing;
    for (name, raw) in [
        ("pairing.source_dir", &pairing.source_dir),
        ("pairing.counterpart_dir", &pairing.counterpart_dir),
    ] {
        if GLOB_META_RE.is_match(raw) {
            errors.push(format!("{name} = {raw:?} must not contain glob characters"));
        }
        if raw.trim_start().starts_with('/') {
            errors.push(format!("{name} = {raw:?} must be relative to the workspace root"));
        }
        if raw.split(['/', '\\']).any(|seg| seg == "..") {
            errors.push(format!("{name} = {raw:?} must not contain '..'"));
        }
    }

    if let (Some(source), Some(counterpart)) = (
        normalize_dir(&pairing.source_dir),
        normalize_dir(&pairing.counterpart_dir),
    ) {
        if source == counterpart {
            errors.push(format!(
                "pairing.source_dir and pairing.counterpart_dir are both {source:?}"
            ));
        }
    }
}
