//! Date-bound filtering for hearing start dates.
//!
//! Hearing dates are ISO-8601 calendar dates (`YYYY-MM-DD`) held as strings.
//! Strings in that format sort the same way the dates do, so bounds are
//! compared lexicographically without parsing on the hot path. Parsing with
//! `chrono` is only used to validate bounds at the edges (CLI input, config).
//!
//! # Missing dates
//!
//! A record without a start date never satisfies a set bound. An unbounded
//! range accepts every record, dated or not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::defaults::DATE_FORMAT;
use crate::error::{Error, Result};

/// Inclusive start-date range. Empty strings count as unset.
///
/// # Example
///
/// ```
/// use hearings_core::DateRange;
///
/// let range = DateRange::new().from("2026-01-01").to("2026-06-30");
/// assert!(range.contains(Some("2026-06-16")));
/// assert!(!range.contains(Some("2026-07-01")));
/// assert!(!range.contains(None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Inclusive lower bound.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_from: String,

    /// Inclusive upper bound.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_to: String,
}

impl DateRange {
    /// Create an unbounded range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound.
    pub fn from(mut self, date: impl Into<String>) -> Self {
        self.date_from = date.into();
        self
    }

    /// Set the inclusive upper bound.
    pub fn to(mut self, date: impl Into<String>) -> Self {
        self.date_to = date.into();
        self
    }

    /// Lower bound, if set.
    pub fn lower(&self) -> Option<&str> {
        non_empty(&self.date_from)
    }

    /// Upper bound, if set.
    pub fn upper(&self) -> Option<&str> {
        non_empty(&self.date_to)
    }

    /// Check if the range has no bounds.
    pub fn is_empty(&self) -> bool {
        self.lower().is_none() && self.upper().is_none()
    }

    /// Number of bounds set (0, 1 or 2).
    pub fn bound_count(&self) -> usize {
        usize::from(self.lower().is_some()) + usize::from(self.upper().is_some())
    }

    /// Check whether a record start date satisfies every set bound.
    pub fn contains(&self, date: Option<&str>) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(date) = date.filter(|d| !d.trim().is_empty()) else {
            return false;
        };
        let above_lower = self.lower().map_or(true, |from| date >= from);
        let below_upper = self.upper().map_or(true, |to| date <= to);
        above_lower && below_upper
    }

    /// Validate that every set bound is a real calendar date and that the
    /// bounds are not inverted.
    pub fn validate(&self) -> Result<()> {
        let lower = self.lower().map(parse_date).transpose()?;
        let upper = self.upper().map(parse_date).transpose()?;
        if let (Some(lower), Some(upper)) = (lower, upper) {
            if lower > upper {
                return Err(Error::InvalidInput(format!(
                    "date range is inverted: {} is after {}",
                    self.date_from, self.date_to
                )));
            }
        }
        Ok(())
    }
}

/// Parse an ISO-8601 calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_accepts_everything() {
        let range = DateRange::new();
        assert!(range.is_empty());
        assert!(range.contains(None));
        assert!(range.contains(Some("1999-01-01")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new().from("2026-06-16").to("2026-06-16");
        assert!(range.contains(Some("2026-06-16")));
        assert!(!range.contains(Some("2026-06-15")));
        assert!(!range.contains(Some("2026-06-17")));
    }

    #[test]
    fn test_missing_date_fails_any_bound() {
        assert!(!DateRange::new().from("2026-01-01").contains(None));
        assert!(!DateRange::new().to("2026-12-31").contains(None));
        assert!(!DateRange::new().to("2026-12-31").contains(Some("")));
    }

    #[test]
    fn test_empty_bounds_are_unset() {
        let range = DateRange::new().from("").to("");
        assert!(range.is_empty());
        assert_eq!(range.bound_count(), 0);
    }

    #[test]
    fn test_whitespace_bound_is_set_and_fails_validation() {
        let range = DateRange::new().from(" ");
        assert_eq!(range.bound_count(), 1);
        assert!(matches!(range.validate(), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_bound_count() {
        assert_eq!(DateRange::new().from("2026-01-01").bound_count(), 1);
        assert_eq!(
            DateRange::new().from("2026-01-01").to("2026-02-01").bound_count(),
            2
        );
    }

    #[test]
    fn test_validate_accepts_iso_dates() {
        let range = DateRange::new().from("2026-01-01").to("2026-12-31");
        assert!(range.validate().is_ok());
        assert!(DateRange::new().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let err = DateRange::new().from("2026-02-30").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));

        let err = DateRange::new().to("March 8").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidDate(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let err = DateRange::new()
            .from("2026-12-31")
            .to("2026-01-01")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2026-03-08").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
    }
}
