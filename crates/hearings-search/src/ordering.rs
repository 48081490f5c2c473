//! Display ordering for the hearings list.
//!
//! The public list shows in-progress proceedings first, then adjourned ones,
//! with cancelled and completed proceedings at the end. Within a group,
//! numeric proceeding ids run from newest (highest) to oldest. The filter
//! engine never reorders; callers apply this ordering to its output.

use std::cmp::{Ordering, Reverse};

use hearings_core::Hearing;

/// Sort key of a proceeding id: numeric ids first (descending), then
/// non-numeric ids lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum ProceedingKey<'a> {
    Numeric(Reverse<u64>),
    Text(&'a str),
}

impl<'a> ProceedingKey<'a> {
    fn of(proceeding_id: &'a str) -> Self {
        let trimmed = proceeding_id.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => Self::Numeric(Reverse(n)),
            Err(_) => Self::Text(trimmed),
        }
    }
}

/// Compare two hearings for list display.
pub fn display_cmp(a: &Hearing, b: &Hearing) -> Ordering {
    a.status
        .display_rank()
        .cmp(&b.status.display_rank())
        .then_with(|| ProceedingKey::of(&a.proceeding_id).cmp(&ProceedingKey::of(&b.proceeding_id)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort filter results for display. Stable.
pub fn sort_for_display(hearings: &mut [&Hearing]) {
    hearings.sort_by(|a, b| display_cmp(a, b));
}
