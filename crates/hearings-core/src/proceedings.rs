//! Mapping between the remote proceedings query and [`Hearing`] records.
//!
//! The remote `proceedings(filter:)` query returns a slimmer shape than the
//! full hearing record. This module deserializes that shape, maps it into
//! hearings, and builds the query's filter input from [`FilterCriteria`].
//! Fetching is left to the caller; nothing here performs I/O.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::criteria::FilterCriteria;
use crate::defaults::DATE_RANGE_SEPARATOR;
use crate::error::{Error, Result};
use crate::models::{Hearing, HearingStatus};

// =============================================================================
// RESPONSE SHAPE
// =============================================================================

/// Start and end dates of a hearing as returned by the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingDates {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// One item of `proceedings.data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProceedingData {
    pub id: String,
    pub proceeding_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub report_update: Option<String>,
    #[serde(default)]
    pub parties_names: Option<Vec<String>>,
    #[serde(default)]
    pub hearing_dates: Option<HearingDates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProceedingsPage {
    #[serde(default)]
    data: Vec<ProceedingData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProceedingsBody {
    #[serde(default)]
    proceedings: ProceedingsPage,
}

/// A proceedings query result, with or without the GraphQL `data` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ResponseShape {
    Enveloped { data: ProceedingsBody },
    Bare(ProceedingsBody),
}

/// Decoded proceedings query result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProceedingsResponse {
    pub data: Vec<ProceedingData>,
}

impl ProceedingsResponse {
    /// Decode a response body. Accepts `{"proceedings":{"data":[..]}}` and
    /// `{"data":{"proceedings":{"data":[..]}}}`.
    pub fn from_json(body: &str) -> Result<Self> {
        let shape: ResponseShape = serde_json::from_str(body)?;
        let body = match shape {
            ResponseShape::Enveloped { data } => data,
            ResponseShape::Bare(body) => body,
        };
        Ok(Self {
            data: body.proceedings.data,
        })
    }

    /// Map every item, failing on the first item that cannot be mapped.
    pub fn into_hearings(self) -> Result<Vec<Hearing>> {
        self.data.into_iter().map(Hearing::try_from).collect()
    }

    /// Map every item, skipping items that cannot be mapped.
    pub fn into_hearings_lossy(self) -> Vec<Hearing> {
        self.data
            .into_iter()
            .filter_map(|item| {
                let id = item.id.clone();
                match Hearing::try_from(item) {
                    Ok(hearing) => Some(hearing),
                    Err(e) => {
                        warn!(
                            subsystem = "source",
                            component = "proceedings",
                            hearing_id = %id,
                            error = %e,
                            "Skipping proceeding that cannot be mapped"
                        );
                        None
                    }
                }
            })
            .collect()
    }
}

impl TryFrom<ProceedingData> for Hearing {
    type Error = Error;

    fn try_from(item: ProceedingData) -> Result<Self> {
        let status = match item.status.as_deref().map(str::trim) {
            None | Some("") => HearingStatus::default(),
            Some(label) => label.parse()?,
        };

        let dates = item.hearing_dates.unwrap_or_default();
        let start = dates.start_date.filter(|d| !d.trim().is_empty());
        let end = dates.end_date.filter(|d| !d.trim().is_empty());
        let start_end = match (&start, &end) {
            (Some(start), Some(end)) => Some(format!("{}{}{}", start, DATE_RANGE_SEPARATOR, end)),
            (Some(start), None) => Some(start.clone()),
            _ => None,
        };

        Ok(Hearing {
            id: item.id,
            proceeding_id: item.proceeding_id,
            description: item.description.unwrap_or_default(),
            status,
            proceeding_update: item.report_update.unwrap_or_default(),
            parties: item.parties_names.unwrap_or_default(),
            hearing_start_date: start,
            hearing_start_end_dates: start_end,
            hearing_location: item.location,
            ..Default::default()
        })
    }
}

// =============================================================================
// FILTER INPUT
// =============================================================================

/// `ProceedingsFilterInput` variables for the remote query. Unset criteria
/// are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProceedingsFilterInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceeding_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceeding_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proceeding_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joint_hearing: Option<bool>,
}

impl ProceedingsFilterInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&FilterCriteria> for ProceedingsFilterInput {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            proceeding_id: criteria.proceeding_id_term().map(str::to_string),
            party_name: criteria.party_name_term().map(str::to_string),
            date_from: criteria.dates.lower().map(str::to_string),
            date_to: criteria.dates.upper().map(str::to_string),
            proceeding_status: criteria.status.map(|s| s.as_str().to_string()),
            proceeding_type: criteria.proceeding_type_term().map(str::to_string),
            joint_hearing: criteria.joint_hearing.then_some(true),
        }
    }
}
