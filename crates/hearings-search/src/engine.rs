//! Record filter engine.
//!
//! Selects the hearings that satisfy a quick search string, per-field filter
//! criteria, and keyword criteria. The engine is a pure function of its
//! inputs: it never reorders, never mutates records, and never fails.
//!
//! # Predicate composition
//!
//! A record is retained iff all three predicates hold, evaluated in order with
//! short-circuiting:
//!
//! 1. **Quick search** over proceeding id, description, parties and status label
//! 2. **Filter criteria**, every set field (implicit AND across fields)
//! 3. **Keywords** over a haystack of proceeding id, description, parties and
//!    the proceeding update, combined per [`KeywordOperator`]
//!
//! Text tests are case-insensitive substring containment; status and type
//! tests are exact equality.

use std::time::Instant;

use hearings_core::{
    DateRange, FilterCriteria, Hearing, HearingStatus, KeywordCriteria, KeywordOperator,
    LowercaseTerm,
};
use tracing::{debug, trace};

/// Filter `records` by the given criteria, preserving input order.
///
/// Empty strings in any criterion mean "no constraint". Whitespace is a real
/// search term. With every criterion empty the full input is returned.
///
/// # Example
///
/// ```
/// use hearings_core::{sample_hearings, FilterCriteria, KeywordCriteria};
/// use hearings_search::filter_records;
///
/// let hearings = sample_hearings();
/// let hits = filter_records(
///     &hearings,
///     "tourmaline",
///     &FilterCriteria::new(),
///     &KeywordCriteria::new(),
/// );
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].proceeding_id, "467");
/// ```
pub fn filter_records<'a>(
    records: &'a [Hearing],
    quick_search: &str,
    filter: &FilterCriteria,
    keywords: &KeywordCriteria,
) -> Vec<&'a Hearing> {
    let start = Instant::now();
    let predicate = RecordPredicate::new(quick_search, filter, keywords);

    let results: Vec<&Hearing> = records
        .iter()
        .filter(|hearing| predicate.matches(hearing))
        .collect();

    debug!(
        subsystem = "search",
        component = "filter_engine",
        op = "filter_records",
        input_count = records.len(),
        result_count = results.len(),
        constraint_count = filter.active_constraint_count(),
        keyword_operator = %keywords.operator,
        duration_us = start.elapsed().as_micros() as u64,
        "Filter complete"
    );

    results
}

// =============================================================================
// COMPILED PREDICATE
// =============================================================================

/// Keyword test after resolving the operator against the keyword slots.
#[derive(Debug, Clone)]
enum KeywordPredicate {
    /// No keyword can reject a record.
    Inactive,
    /// Every term must occur (`AND`, or `None` with a first keyword).
    All(Vec<LowercaseTerm>),
    /// At least one slot must be satisfied (`OR`). An empty slot (`None`)
    /// is satisfied by every record.
    Any(Vec<Option<LowercaseTerm>>),
}

impl KeywordPredicate {
    fn new(keywords: &KeywordCriteria) -> Self {
        if keywords.present_keywords().next().is_none() {
            return Self::Inactive;
        }
        match keywords.operator {
            KeywordOperator::None | KeywordOperator::And => {
                let terms: Vec<LowercaseTerm> = keywords
                    .effective_keywords()
                    .into_iter()
                    .map(LowercaseTerm::new)
                    .collect();
                if terms.is_empty() {
                    Self::Inactive
                } else {
                    Self::All(terms)
                }
            }
            KeywordOperator::Or => Self::Any(
                keywords
                    .slots()
                    .into_iter()
                    .map(|slot| slot.map(LowercaseTerm::new))
                    .collect(),
            ),
        }
    }

    fn matches(&self, hearing: &Hearing) -> bool {
        match self {
            Self::Inactive => true,
            Self::All(terms) => {
                let haystack = keyword_haystack(hearing);
                terms.iter().all(|term| term.found_in_lowercase(&haystack))
            }
            Self::Any(slots) => {
                if slots.iter().any(Option::is_none) {
                    return true;
                }
                let haystack = keyword_haystack(hearing);
                slots
                    .iter()
                    .flatten()
                    .any(|term| term.found_in_lowercase(&haystack))
            }
        }
    }
}

/// Criteria compiled once per call: terms are lowercased up front so each
/// record only lowercases its own fields.
#[derive(Debug, Clone)]
pub(crate) struct RecordPredicate<'c> {
    quick_search: Option<LowercaseTerm>,
    proceeding_id: Option<LowercaseTerm>,
    party_name: Option<LowercaseTerm>,
    status: Option<HearingStatus>,
    proceeding_type: Option<&'c str>,
    dates: &'c DateRange,
    keywords: KeywordPredicate,
}

impl<'c> RecordPredicate<'c> {
    pub(crate) fn new(
        quick_search: &str,
        filter: &'c FilterCriteria,
        keywords: &KeywordCriteria,
    ) -> Self {
        let quick_search = (!quick_search.is_empty()).then(|| LowercaseTerm::new(quick_search));
        Self {
            quick_search,
            proceeding_id: filter.proceeding_id_term().map(LowercaseTerm::new),
            party_name: filter.party_name_term().map(LowercaseTerm::new),
            status: filter.status,
            proceeding_type: filter.proceeding_type_term(),
            dates: &filter.dates,
            keywords: KeywordPredicate::new(keywords),
        }
    }

    pub(crate) fn matches(&self, hearing: &Hearing) -> bool {
        let quick = self.matches_quick_search(hearing);
        let retained = quick && self.matches_filter(hearing) && self.keywords.matches(hearing);
        trace!(
            hearing_id = %hearing.id,
            proceeding_id = %hearing.proceeding_id,
            retained,
            "Predicate evaluated"
        );
        retained
    }

    fn matches_quick_search(&self, hearing: &Hearing) -> bool {
        let Some(term) = &self.quick_search else {
            return true;
        };
        term.found_in(&hearing.proceeding_id)
            || term.found_in(&hearing.description)
            || hearing.parties.iter().any(|party| term.found_in(party))
            || term.found_in(hearing.status.as_str())
    }

    fn matches_filter(&self, hearing: &Hearing) -> bool {
        if let Some(term) = &self.proceeding_id {
            if !term.found_in(&hearing.proceeding_id) {
                return false;
            }
        }
        if let Some(term) = &self.party_name {
            if !hearing.parties.iter().any(|party| term.found_in(party)) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if hearing.status != status {
                return false;
            }
        }
        if let Some(proceeding_type) = self.proceeding_type {
            if !hearing.type_tags().any(|tag| tag == proceeding_type) {
                return false;
            }
        }
        self.dates.contains(hearing.start_date())
    }
}

/// Lowercased keyword haystack: proceeding id, description, parties joined by
/// spaces, and the proceeding update, separated by single spaces.
pub fn keyword_haystack(hearing: &Hearing) -> String {
    format!(
        "{} {} {} {}",
        hearing.proceeding_id,
        hearing.description,
        hearing.parties.join(" "),
        hearing.proceeding_update
    )
    .to_lowercase()
}

// =============================================================================
// TESTS
// =============================================================================
