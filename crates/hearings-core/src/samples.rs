//! Built-in sample hearings.
//!
//! Used when no data source yields records, and as deterministic data for
//! demos and tests.

use crate::models::{Exhibit, Hearing, HearingStatus, ProceedingType, SubmissionScheduleEntry};

/// The three sample proceedings (467, 465, 464), in list order.
pub fn sample_hearings() -> Vec<Hearing> {
    vec![tourmaline_pipeline(), north_40_appeal(), deergarden_appeal()]
}

fn tourmaline_pipeline() -> Hearing {
    let mut hearing = Hearing::new(
        "1",
        "467",
        "Application 33571576 from Tourmaline Oil Corp to amend pipeline license 62758-5, \
         and related common carrier applications 1959278 from Northrock Resources Partnership \
         Ltd. and 1958059 from TykeWest Limited",
        HearingStatus::InProgress,
    )
    .with_parties([
        "Tourmaline Oil Corp.",
        "Tykewest Limited",
        "Northrock Resources Partnership Ltd.",
    ])
    .with_update(
        "The application file for hearing has been received and sent to applicants for \
         verification with responses due by February 4, 2026.",
    )
    .with_location("Calgary, AB")
    .with_proceeding_type(ProceedingType {
        number: Some("33571576".to_string()),
        source: Some("AER".to_string()),
        ..ProceedingType::new("Public Hearing")
            .with_applicant("Tourmaline Oil Corp.")
            .with_description("Application to amend pipeline license 62758-5")
    });

    hearing.participation_deadline = Some("2026-02-04".to_string());
    hearing.format_of_hearing = Some("Hybrid".to_string());
    hearing.hearing_start_end_dates = Some("2026-03-08 to 2026-03-10".to_string());
    hearing.submission_schedule = vec![SubmissionScheduleEntry {
        submitter: "All Parties".to_string(),
        description: "Deadline for written submissions".to_string(),
        deadline_date: Some("2026-02-15".to_string()),
        received_date: None,
        status: Some("Pending".to_string()),
    }];
    hearing.exhibits = vec![exhibit(
        "Tourmaline Oil Corp.",
        "Application",
        "1.0",
        "1.0 - Application Document.pdf",
        "2.5 MB",
    )];
    hearing
}

fn north_40_appeal() -> Hearing {
    let mut hearing = Hearing::new(
        "2",
        "465",
        "Regulatory Appeal by North 40 Resources Ltd. of the AER Regulatory Applications \
         Branch's July 16, 2025, decision issuing the Pooling Delineation Approval and \
         Off-Target Penalty Approval to Canadian Natural Resources Limited.",
        HearingStatus::InProgress,
    )
    .with_parties([
        "North 40 Resources Ltd.",
        "AER Regulatory Applications Branch",
        "Canadian Natural Resources Limited",
    ])
    .with_update(
        "On December 17, 2025, the Notice of Hearing was issued. The final date to submit a \
         request to participate is January 20, 2026. The final date for North 40 to submit a \
         response to any request is February 3, 2026.",
    )
    .with_location("Edmonton, AB")
    .with_proceeding_type(
        ProceedingType::new("Regulatory Appeal")
            .with_applicant("North 40 Resources Ltd.")
            .with_description(
                "Request for Regulatory Appeal by North 40 Resources Ltd. of the Pooling \
                 Delineation Approval and Off-Target Penalty Approval issued to Canadian \
                 Natural Resources Limited on July 16, 2025",
            ),
    );

    hearing.participation_deadline = Some("2026-01-20".to_string());
    hearing.format_of_hearing = Some("In-Person".to_string());
    hearing.exhibits = vec![
        exhibit(
            "North 40 Resources Ltd.",
            "Other",
            "1.0",
            "1.0 - 2025-11-12 North 40 to AER re Stay Request.pdf",
            "2.68 MB",
        ),
        exhibit(
            "Hearing Services",
            "Record of Decision Maker - Requested",
            "2.0",
            "2.0 - 2025-11-19 AER to Reg Apps re Request for Record of Decision Maker.pdf",
            "179.92 KB",
        ),
        exhibit(
            "Hearing Panel",
            "Other",
            "3.0",
            "3.0 - 2025-11-25 Hearing Panel Decision.pdf",
            "154.04 KB",
        ),
    ];
    hearing
}

fn deergarden_appeal() -> Hearing {
    let mut hearing = Hearing::new(
        "3",
        "464",
        "Regulatory Appeal by DeerGarden Resources",
        HearingStatus::InProgress,
    )
    .with_parties(["DeerGarden Resources Ltd.", "AER Regulatory"])
    .with_update("On January 16, 2026, the hearing panel")
    .with_start_date("2026-06-16")
    .with_location("Virtual")
    .with_proceeding_type(
        ProceedingType::new("Regulatory Appeal")
            .with_applicant("DeerGarden Resources Ltd.")
            .with_description("Regulatory Appeal by DeerGarden Resources"),
    );

    hearing.participation_deadline = Some("2026-02-01".to_string());
    hearing.format_of_hearing = Some("Virtual".to_string());
    hearing
}

fn exhibit(submitter: &str, file_type: &str, exhibit_no: &str, file_name: &str, size: &str) -> Exhibit {
    Exhibit {
        submitter: submitter.to_string(),
        file_type: file_type.to_string(),
        exhibit_no: exhibit_no.to_string(),
        file_name: file_name.to_string(),
        file_size: size.to_string(),
        url: "#".to_string(),
    }
}
