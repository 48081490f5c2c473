//! Structured logging schema and field name constants for the hearings crates.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log output can be queried by the same field names whether it came from
//! the filter engine, record loading, or the command-line front end.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Command failed, nothing was printed |
//! | WARN  | Recoverable issue, automatic fallback applied (e.g. sample records) |
//! | INFO  | Lifecycle events (startup, data source chosen) |
//! | DEBUG | Decision points, per-call filter summaries |
//! | TRACE | Per-record predicate outcomes |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "source", "cli"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "filter_engine", "options", "proceedings"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "filter_records", "distinct_values", "load"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Hearing record identifier.
pub const HEARING_ID: &str = "hearing_id";

/// Proceeding code of a hearing.
pub const PROCEEDING_ID: &str = "proceeding_id";

/// Quick search text.
pub const QUERY: &str = "query";

/// Keyword operator in effect.
pub const KEYWORD_OPERATOR: &str = "keyword_operator";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in microseconds.
pub const DURATION_US: &str = "duration_us";

/// Number of records handed to an operation.
pub const INPUT_COUNT: &str = "input_count";

/// Number of records an operation produced.
pub const RESULT_COUNT: &str = "result_count";

/// Number of active filter constraints.
pub const CONSTRAINT_COUNT: &str = "constraint_count";

// ─── Source fields ─────────────────────────────────────────────────────────

/// Path of a record data file.
pub const DATA_FILE: &str = "data_file";

/// Shape of a record data file ("records", "proceedings").
pub const SOURCE_KIND: &str = "source_kind";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
