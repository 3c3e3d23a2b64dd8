//! Validation for the `[search]` section.

use globset::Glob;

use crate::schema::PairnavConfig;

use super::helpers::validate_range;

pub(crate) fn validate_search(errors: &mut Vec<String>, config: &PairnavConfig) {
    let search = &config.search;
    validate_range(errors, "search.max_candidates", search.max_candidates, 1, 1000);
    validate_range(
        errors,
        "search.suppression_timeout_ms",
        search.suppression_timeout_ms,
        50,
        60_000,
    );

    for pattern in &search.exclude {
        if let Err(e) = Glob::new(pattern) {
            errors.push(format!("search.exclude {pattern:?} is not a valid glob: {e}"));
        }
    }
}
