//! Hearing record types.
//!
//! A [`Hearing`] is a flat, read-only record supplied wholesale by a data
//! source (the built-in sample set, a JSON file, or a mapped remote query
//! response). The filter engine only ever reads these records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::PARTY_SEPARATOR;
use crate::error::Error;

// =============================================================================
// STATUS
// =============================================================================

/// Lifecycle status of a proceeding.
///
/// The set is closed. Serialized with the display labels used by the
/// public record (`"In Progress"`, `"Adjourned"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HearingStatus {
    #[default]
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    Adjourned,
    Cancelled,
    Completed,
}

impl HearingStatus {
    /// Every status, in display-group order.
    pub const ALL: [HearingStatus; 4] = [
        HearingStatus::InProgress,
        HearingStatus::Adjourned,
        HearingStatus::Cancelled,
        HearingStatus::Completed,
    ];

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Adjourned => "Adjourned",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }

    /// Group rank for list display: in-progress first, then adjourned,
    /// cancelled and completed share the last group.
    pub fn display_rank(&self) -> u8 {
        match self {
            Self::InProgress => 0,
            Self::Adjourned => 1,
            Self::Cancelled | Self::Completed => 2,
        }
    }
}

impl fmt::Display for HearingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HearingStatus {
    type Err = Error;

    /// Accepts display labels and identifier spellings, case-insensitively:
    /// `"In Progress"`, `"InProgress"`, `"in_progress"`, `"in-progress"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "inprogress" => Ok(Self::InProgress),
            "adjourned" => Ok(Self::Adjourned),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

// =============================================================================
// DETAIL TYPES
// =============================================================================

/// A proceeding type entry. `proceeding_type` is the tag the type filter
/// matches against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProceedingType {
    #[serde(rename = "type")]
    pub proceeding_type: String,
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ProceedingType {
    pub fn new(proceeding_type: impl Into<String>) -> Self {
        Self {
            proceeding_type: proceeding_type.into(),
            ..Default::default()
        }
    }

    pub fn with_applicant(mut self, applicant_name: impl Into<String>) -> Self {
        self.applicant_name = applicant_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One row of a hearing's submission schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionScheduleEntry {
    pub submitter: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A document filed on the public record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibit {
    pub submitter: String,
    pub file_type: String,
    pub exhibit_no: String,
    pub file_name: String,
    pub file_size: String,
    pub url: String,
}

// =============================================================================
// HEARING
// =============================================================================

/// A hearing record.
///
/// Only `id`, `proceeding_id`, `description`, `status`, `proceeding_update`,
/// `parties`, `hearing_start_date` and the proceeding type tags take part in
/// filtering. The remaining fields are detail carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub id: String,
    pub proceeding_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: HearingStatus,
    #[serde(default)]
    pub proceeding_update: String,
    #[serde(default)]
    pub parties: Vec<String>,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proceeding_types: Vec<ProceedingType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_of_hearing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_start_end_dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hearing_location: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submission_schedule: Vec<SubmissionScheduleEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exhibits: Vec<Exhibit>,
}

impl Hearing {
    /// Create a record with the required fields; everything else empty.
    pub fn new(
        id: impl Into<String>,
        proceeding_id: impl Into<String>,
        description: impl Into<String>,
        status: HearingStatus,
    ) -> Self {
        Self {
            id: id.into(),
            proceeding_id: proceeding_id.into(),
            description: description.into(),
            status,
            ..Default::default()
        }
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.parties.push(party.into());
        self
    }

    pub fn with_parties<I, S>(mut self, parties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parties.extend(parties.into_iter().map(Into::into));
        self
    }

    pub fn with_update(mut self, update: impl Into<String>) -> Self {
        self.proceeding_update = update.into();
        self
    }

    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.hearing_start_date = Some(date.into());
        self
    }

    pub fn with_proceeding_type(mut self, proceeding_type: ProceedingType) -> Self {
        self.proceeding_types.push(proceeding_type);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.hearing_location = Some(location.into());
        self
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Proceeding type tags, in record order.
    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        self.proceeding_types
            .iter()
            .map(|pt| pt.proceeding_type.as_str())
    }

    /// Party names joined for display.
    pub fn parties_display(&self) -> String {
        self.parties.join(PARTY_SEPARATOR)
    }

    /// Start date, treating an empty string as absent.
    pub fn start_date(&self) -> Option<&str> {
        self.hearing_start_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}
