//! Test fixtures for filter engine integration tests.
//!
//! Provides reusable hearing records for the property tests.

#![allow(dead_code)]

use hearings_core::{Hearing, HearingStatus, ProceedingType};

/// Records for the keyword AND/OR scenario: one mentions only "pipeline",
/// one only "appeal", one both, one neither.
pub mod keyword_scenario {
    use super::*;

    pub fn pipeline_only() -> Hearing {
        Hearing::new("r1", "501", "Pipeline licence amendment", HearingStatus::InProgress)
            .with_party("Prairie Midstream Ltd.")
    }

    pub fn appeal_only() -> Hearing {
        Hearing::new("r2", "502", "Regulatory review", HearingStatus::InProgress)
            .with_update("An appeal was filed on March 2.")
    }

    pub fn both() -> Hearing {
        Hearing::new("r3", "503", "Appeal of pipeline approval", HearingStatus::Adjourned)
    }

    pub fn neither() -> Hearing {
        Hearing::new("r4", "504", "Well spacing", HearingStatus::Completed)
    }

    pub fn all() -> Vec<Hearing> {
        vec![pipeline_only(), appeal_only(), both(), neither()]
    }
}

/// A mixed record set exercising every filter field.
pub fn mixed_hearings() -> Vec<Hearing> {
    vec![
        Hearing::new(
            "m1",
            "467",
            "Application from Tourmaline Oil Corp to amend pipeline license",
            HearingStatus::InProgress,
        )
        .with_parties(["Tourmaline Oil Corp.", "Tykewest Limited"])
        .with_proceeding_type(ProceedingType::new("Public Hearing"))
        .with_update("Responses due by February 4, 2026."),
        Hearing::new(
            "m2",
            "465",
            "Regulatory Appeal by North 40 Resources Ltd.",
            HearingStatus::Adjourned,
        )
        .with_parties(["North 40 Resources Ltd."])
        .with_proceeding_type(ProceedingType::new("Regulatory Appeal"))
        .with_start_date("2026-02-10"),
        Hearing::new(
            "m3",
            "464",
            "Regulatory Appeal by DeerGarden Resources",
            HearingStatus::InProgress,
        )
        .with_parties(["DeerGarden Resources Ltd."])
        .with_proceeding_type(ProceedingType::new("Regulatory Appeal"))
        .with_start_date("2026-06-16"),
        Hearing::new("m4", "450", "Coal mine approval", HearingStatus::Cancelled)
            .with_parties(["Ridge Coal Inc."])
            .with_start_date("2025-11-03"),
        Hearing::new("m5", "449", "Water licence transfer", HearingStatus::Completed)
            .with_parties(["Bow Water Co-op"]),
    ]
}

/// Collect record ids for assertions.
pub fn ids<'a>(hits: &[&'a Hearing]) -> Vec<&'a str> {
    hits.iter().map(|h| h.id.as_str()).collect()
}
