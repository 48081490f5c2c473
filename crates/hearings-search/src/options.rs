//! Derived selection options for the status and type filters.

use std::collections::HashSet;

use hearings_core::Hearing;
use tracing::debug;

/// Unique values produced by `extractor` across `records`, each exactly once,
/// in first-seen order. Empty strings are values like any other.
///
/// # Example
///
/// ```
/// use hearings_core::sample_hearings;
/// use hearings_search::distinct_values;
///
/// let hearings = sample_hearings();
/// let locations = distinct_values(&hearings, |h| h.hearing_location.as_deref());
/// assert_eq!(locations, vec!["Calgary, AB", "Edmonton, AB", "Virtual"]);
/// ```
pub fn distinct_values<'a, T, F, I>(records: &'a [T], mut extractor: F) -> Vec<String>
where
    F: FnMut(&'a T) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut values: Vec<String> = Vec::new();

    for record in records {
        for value in extractor(record) {
            let value = value.as_ref();
            if seen.contains(value) {
                continue;
            }
            seen.insert(value.to_string());
            values.push(value.to_string());
        }
    }

    debug!(
        subsystem = "search",
        component = "options",
        op = "distinct_values",
        input_count = records.len(),
        result_count = values.len(),
        "Distinct values extracted"
    );
    values
}

/// Status labels present in `records`.
pub fn status_options(records: &[Hearing]) -> Vec<String> {
    distinct_values(records, |h| std::iter::once(h.status.as_str()))
}

/// Proceeding type tags present in `records`, flattened across records.
pub fn type_options(records: &[Hearing]) -> Vec<String> {
    distinct_values(records, |h| h.type_tags())
}
