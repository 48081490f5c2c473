//! Record loading.
//!
//! Records come from a JSON data file, either a plain array of hearing
//! records or a proceedings query response. When no file is configured, or
//! the file yields no records, the built-in sample records are used.

use std::fs;
use std::path::Path;

use hearings_core::{sample_hearings, Error, Hearing, ProceedingsResponse, Result};
use tracing::{debug, info, warn};

use crate::config::{CliConfig, SourceKind};

/// Load the records selected by `config`.
pub fn load_hearings(config: &CliConfig) -> Result<Vec<Hearing>> {
    let Some(path) = config.data_file.as_deref() else {
        let hearings = sample_hearings();
        info!(
            subsystem = "source",
            component = "loader",
            op = "load",
            result_count = hearings.len(),
            "No data file configured, using sample records"
        );
        return Ok(hearings);
    };

    let hearings = read_hearings(path, config.source)?;
    if hearings.is_empty() {
        warn!(
            subsystem = "source",
            component = "loader",
            op = "load",
            data_file = %path.display(),
            source_kind = %config.source,
            "Data file yielded no records, falling back to sample records"
        );
        return Ok(sample_hearings());
    }

    info!(
        subsystem = "source",
        component = "loader",
        op = "load",
        data_file = %path.display(),
        source_kind = %config.source,
        result_count = hearings.len(),
        "Records loaded"
    );
    Ok(hearings)
}

/// Read and decode one data file.
pub fn read_hearings(path: &Path, kind: SourceKind) -> Result<Vec<Hearing>> {
    if !path.exists() {
        return Err(Error::NotFound(format!("data file {}", path.display())));
    }
    let body = fs::read_to_string(path)?;
    debug!(
        subsystem = "source",
        component = "loader",
        data_file = %path.display(),
        bytes = body.len(),
        "Data file read"
    );
    parse_hearings(&body, kind)
}

/// Decode a data file body of the given shape.
///
/// Proceedings that cannot be mapped into records are skipped with a
/// warning rather than failing the whole load.
pub fn parse_hearings(body: &str, kind: SourceKind) -> Result<Vec<Hearing>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match kind {
        SourceKind::Records => Ok(serde_json::from_str(body)?),
        SourceKind::Proceedings => Ok(ProceedingsResponse::from_json(body)?.into_hearings_lossy()),
    }
}

/// Find a record by record id, then by proceeding id.
pub fn find_hearing<'a>(hearings: &'a [Hearing], id: &str) -> Result<&'a Hearing> {
    let id = id.trim();
    hearings
        .iter()
        .find(|h| h.id == id)
        .or_else(|| hearings.iter().find(|h| h.proceeding_id == id))
        .ok_or_else(|| Error::HearingNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_array() {
        let body = r#"[{"id":"9","proceedingId":"900","description":"d","status":"Adjourned"}]"#;
        let hearings = parse_hearings(body, SourceKind::Records).unwrap();
        assert_eq!(hearings.len(), 1);
        assert_eq!(hearings[0].proceeding_id, "900");
    }

    #[test]
    fn test_parse_blank_body_is_empty() {
        assert!(parse_hearings("  \n", SourceKind::Records).unwrap().is_empty());
        assert!(parse_hearings("", SourceKind::Proceedings).unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_is_serialization_error() {
        let err = parse_hearings("{not json", SourceKind::Records).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_load_without_file_uses_samples() {
        let hearings = load_hearings(&CliConfig::default()).unwrap();
        assert_eq!(hearings, sample_hearings());
    }

    #[test]
    fn test_find_hearing_by_either_id() {
        let hearings = sample_hearings();
        assert_eq!(find_hearing(&hearings, "2").unwrap().proceeding_id, "465");
        assert_eq!(find_hearing(&hearings, "464").unwrap().id, "3");
        assert!(matches!(
            find_hearing(&hearings, "999"),
            Err(Error::HearingNotFound(_))
        ));
    }
}
