//! Centralized default constants for the hearings crates.
//!
//! **This module is the single source of truth** for shared default values.
//! The command-line front end and the library reference these constants
//! instead of defining their own literals.

// =============================================================================
// KEYWORD SEARCH
// =============================================================================

/// Maximum number of keywords combined by a keyword search.
pub const MAX_KEYWORDS: usize = 3;

// =============================================================================
// DATES
// =============================================================================

/// Calendar date format accepted for hearing start dates and date bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator used when joining a start and end date for display.
pub const DATE_RANGE_SEPARATOR: &str = " to ";

// =============================================================================
// DISPLAY
// =============================================================================

/// Placeholder shown for absent detail fields.
pub const MISSING_FIELD: &str = "—";

/// Separator used when joining party names for display.
pub const PARTY_SEPARATOR: &str = ", ";

/// Default snippet length in characters for list output.
pub const SNIPPET_LENGTH: usize = 120;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Environment variable naming the record data file.
pub const ENV_DATA_FILE: &str = "HEARINGS_DATA_FILE";

/// Environment variable naming the shape of the data file.
pub const ENV_SOURCE: &str = "HEARINGS_SOURCE";

/// Environment variable selecting the output format.
pub const ENV_OUTPUT: &str = "HEARINGS_OUTPUT";

/// Environment variable enabling display ordering of results.
pub const ENV_SORTED: &str = "HEARINGS_SORTED";

/// Default log filter when `RUST_LOG` is unset.
pub const LOG_FILTER: &str = "hearings_cli=info,hearings_search=info,hearings_core=info";

/// Default log file name when `LOG_FILE` names only a directory.
pub const LOG_FILE_NAME: &str = "hearings.log";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_limit_is_three() {
        assert_eq!(MAX_KEYWORDS, 3);
    }

    #[test]
    fn date_format_parses_iso_dates() {
        let parsed = chrono::NaiveDate::parse_from_str("2026-06-16", DATE_FORMAT);
        assert!(parsed.is_ok());
    }

    #[test]
    fn env_names_share_prefix() {
        for name in [ENV_DATA_FILE, ENV_SOURCE, ENV_OUTPUT, ENV_SORTED] {
            assert!(name.starts_with("HEARINGS_"));
        }
    }
}
