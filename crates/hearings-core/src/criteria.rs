//! Filter criteria for the hearings list.
//!
//! [`FilterCriteria`] holds the per-field constraints a user can set from the
//! filter panel. Every field is independently optional; an empty string means
//! "do not constrain on this field". The criteria are immutable value objects:
//! the presentation layer owns their lifecycle and hands a fresh value to the
//! filter engine whenever they change.
//!
//! # Field semantics
//!
//! | Field | Test |
//! |-------|------|
//! | `proceeding_id` | case-insensitive substring of the proceeding id |
//! | `party_name` | case-insensitive substring of ANY party name |
//! | `status` | exact status equality |
//! | `proceeding_type` | exact equality with ANY proceeding type tag |
//! | `dates` | inclusive start-date bounds, see [`DateRange`] |
//!
//! # Example
//!
//! ```
//! use hearings_core::{DateRange, FilterCriteria, HearingStatus};
//!
//! let criteria = FilterCriteria::new()
//!     .with_party_name("tourmaline")
//!     .with_status(HearingStatus::InProgress)
//!     .with_dates(DateRange::new().from("2026-01-01"));
//!
//! assert_eq!(criteria.active_constraint_count(), 3);
//! assert!(!criteria.is_empty());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::HearingStatus;
use crate::temporal::DateRange;

/// Per-field filter constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Proceeding id substring (case-insensitive).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proceeding_id: String,

    /// Party name substring (case-insensitive, any party).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub party_name: String,

    /// Required status (exact match).
    #[serde(
        default,
        rename = "proceedingStatus",
        deserialize_with = "deserialize_optional_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<HearingStatus>,

    /// Required proceeding type tag (exact match, any tag).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proceeding_type: String,

    /// Inclusive start-date bounds.
    #[serde(flatten)]
    pub dates: DateRange,

    /// Joint-hearing flag. Forwarded to remote queries only; it is never
    /// evaluated against in-memory records.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub joint_hearing: bool,
}

impl FilterCriteria {
    /// Create empty criteria (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    pub fn with_proceeding_id(mut self, proceeding_id: impl Into<String>) -> Self {
        self.proceeding_id = proceeding_id.into();
        self
    }

    pub fn with_party_name(mut self, party_name: impl Into<String>) -> Self {
        self.party_name = party_name.into();
        self
    }

    pub fn with_status(mut self, status: HearingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_proceeding_type(mut self, proceeding_type: impl Into<String>) -> Self {
        self.proceeding_type = proceeding_type.into();
        self
    }

    pub fn with_dates(mut self, dates: DateRange) -> Self {
        self.dates = dates;
        self
    }

    pub fn with_date_from(mut self, date: impl Into<String>) -> Self {
        self.dates.date_from = date.into();
        self
    }

    pub fn with_date_to(mut self, date: impl Into<String>) -> Self {
        self.dates.date_to = date.into();
        self
    }

    pub fn with_joint_hearing(mut self, joint_hearing: bool) -> Self {
        self.joint_hearing = joint_hearing;
        self
    }

    // =========================================================================
    // ACTIVE TERMS
    // =========================================================================

    /// Proceeding id term, if set.
    pub fn proceeding_id_term(&self) -> Option<&str> {
        non_empty(&self.proceeding_id)
    }

    /// Party name term, if set.
    pub fn party_name_term(&self) -> Option<&str> {
        non_empty(&self.party_name)
    }

    /// Proceeding type term, if set.
    pub fn proceeding_type_term(&self) -> Option<&str> {
        (!self.proceeding_type.is_empty()).then_some(self.proceeding_type.as_str())
    }

    // =========================================================================
    // CONSTRAINT CHECKS
    // =========================================================================

    /// Check if no field constrains in-memory records.
    pub fn is_empty(&self) -> bool {
        self.active_constraint_count() == 0
    }

    /// Number of active local constraints. Each date bound counts once;
    /// `joint_hearing` never counts.
    pub fn active_constraint_count(&self) -> usize {
        let mut count = self.dates.bound_count();
        if self.proceeding_id_term().is_some() {
            count += 1;
        }
        if self.party_name_term().is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.proceeding_type_term().is_some() {
            count += 1;
        }
        count
    }

    /// Reset every field, matching the filter panel's reset action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// The filter panel sends `""` for "any status".
fn deserialize_optional_status<'de, D>(deserializer: D) -> Result<Option<HearingStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
