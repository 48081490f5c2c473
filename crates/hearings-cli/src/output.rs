//! Rendering of command results as text or JSON.

use hearings_core::defaults::{MISSING_FIELD, SNIPPET_LENGTH};
use hearings_core::{Hearing, Result};
use serde::Serialize;

use crate::config::OutputFormat;

/// Selection options for the status and type filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub proceeding_types: Vec<String>,
}

/// Render a filtered hearing list.
pub fn render_list(hits: &[&Hearing], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(hits)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for hearing in hits {
                out.push_str(&format!(
                    "{:<8} {:<12} {}\n",
                    hearing.proceeding_id,
                    hearing.status,
                    snippet(&hearing.description, SNIPPET_LENGTH)
                ));
                out.push_str(&format!(
                    "         Parties: {}\n",
                    or_missing(&hearing.parties_display())
                ));
                out.push_str(&format!(
                    "         Start:   {}\n",
                    hearing.start_date().unwrap_or(MISSING_FIELD)
                ));
            }
            out.push_str(&format!("{} hearing(s)", hits.len()));
            Ok(out)
        }
    }
}

/// Render the status and type selection options.
pub fn render_options(options: &FilterOptions, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(options)?),
        OutputFormat::Text => {
            let mut out = String::from("Statuses:\n");
            for status in &options.statuses {
                out.push_str(&format!("  {}\n", status));
            }
            out.push_str("Proceeding types:\n");
            for proceeding_type in &options.proceeding_types {
                out.push_str(&format!("  {}\n", proceeding_type));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Render one hearing's full details.
pub fn render_detail(hearing: &Hearing, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(hearing)?);
    }

    let fields = [
        ("Status", hearing.status.to_string()),
        ("Description", or_missing(&hearing.description).to_string()),
        ("Parties", or_missing(&hearing.parties_display()).to_string()),
        ("Update", or_missing(&hearing.proceeding_update).to_string()),
        ("Start date", opt(hearing.start_date()).to_string()),
        (
            "Start/end dates",
            opt(hearing.hearing_start_end_dates.as_deref()).to_string(),
        ),
        (
            "Participation deadline",
            opt(hearing.participation_deadline.as_deref()).to_string(),
        ),
        (
            "Format of hearing",
            opt(hearing.format_of_hearing.as_deref()).to_string(),
        ),
        ("Location", opt(hearing.hearing_location.as_deref()).to_string()),
    ];

    let mut out = format!("Proceeding {}\n", hearing.proceeding_id);
    for (label, value) in &fields {
        out.push_str(&format!("{:<23} {}\n", format!("{}:", label), value));
    }

    if !hearing.proceeding_types.is_empty() {
        out.push_str("Proceeding types:\n");
        for pt in &hearing.proceeding_types {
            out.push_str(&format!(
                "  {} | {} | {}\n",
                pt.proceeding_type,
                or_missing(&pt.applicant_name),
                or_missing(&pt.description)
            ));
        }
    }

    if !hearing.submission_schedule.is_empty() {
        out.push_str("Submission schedule:\n");
        for entry in &hearing.submission_schedule {
            out.push_str(&format!(
                "  {} | {} | due {} | {}\n",
                entry.submitter,
                entry.description,
                opt(entry.deadline_date.as_deref()),
                opt(entry.status.as_deref())
            ));
        }
    }

    if !hearing.exhibits.is_empty() {
        out.push_str("Exhibits:\n");
        for exhibit in &hearing.exhibits {
            out.push_str(&format!(
                "  {} {} ({}, {})\n",
                exhibit.exhibit_no, exhibit.file_name, exhibit.submitter, exhibit.file_size
            ));
        }
    }

    Ok(out.trim_end().to_string())
}

fn or_missing(value: &str) -> &str {
    if value.trim().is_empty() {
        MISSING_FIELD
    } else {
        value
    }
}

fn opt(value: Option<&str>) -> &str {
    or_missing(value.unwrap_or_default())
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
fn snippet(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
