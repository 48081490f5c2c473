//! Composed hearing query.
//!
//! [`HearingQuery`] bundles the three criteria dimensions the list screen
//! drives (quick search, filter panel, keyword panel) into one immutable value
//! that can be stored, serialized, and applied.

use hearings_core::{FilterCriteria, Hearing, KeywordCriteria};
use serde::{Deserialize, Serialize};

use crate::engine::{filter_records, RecordPredicate};

/// Quick search, filter criteria and keyword criteria as one value.
///
/// # Example
///
/// ```
/// use hearings_core::{sample_hearings, FilterCriteria, KeywordCriteria, KeywordOperator};
/// use hearings_search::HearingQuery;
///
/// let query = HearingQuery::new()
///     .with_filter(FilterCriteria::new().with_party_name("north"))
///     .with_keywords(
///         KeywordCriteria::new()
///             .with_keyword1("pipeline")
///             .with_operator(KeywordOperator::And),
///     );
///
/// let hearings = sample_hearings();
/// let hits = query.apply(&hearings);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].proceeding_id, "467");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingQuery {
    /// Quick search text. Empty disables the quick search test.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quick_search: String,

    /// Filter panel criteria.
    #[serde(default)]
    pub filter: FilterCriteria,

    /// Keyword panel criteria.
    #[serde(default)]
    pub keywords: KeywordCriteria,
}

impl HearingQuery {
    /// Create an empty query (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    pub fn with_quick_search(mut self, quick_search: impl Into<String>) -> Self {
        self.quick_search = quick_search.into();
        self
    }

    pub fn with_filter(mut self, filter: FilterCriteria) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordCriteria) -> Self {
        self.keywords = keywords;
        self
    }

    // =========================================================================
    // CONSTRAINT CHECKS
    // =========================================================================

    /// Check if there is a quick search term.
    pub fn has_quick_search(&self) -> bool {
        !self.quick_search.is_empty()
    }

    /// Check if the query can reject nothing.
    pub fn is_empty(&self) -> bool {
        self.active_dimension_count() == 0
    }

    /// Number of active dimensions (quick search, filter, keywords).
    pub fn active_dimension_count(&self) -> usize {
        usize::from(self.has_quick_search())
            + usize::from(!self.filter.is_empty())
            + usize::from(self.keywords.is_active())
    }

    // =========================================================================
    // EVALUATION
    // =========================================================================

    /// Check a single record.
    pub fn matches(&self, hearing: &Hearing) -> bool {
        RecordPredicate::new(&self.quick_search, &self.filter, &self.keywords).matches(hearing)
    }

    /// Filter records, preserving input order.
    pub fn apply<'a>(&self, records: &'a [Hearing]) -> Vec<&'a Hearing> {
        filter_records(records, &self.quick_search, &self.filter, &self.keywords)
    }
}
