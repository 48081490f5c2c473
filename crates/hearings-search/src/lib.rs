//! # hearings-search
//!
//! In-memory record filter engine for the hearings list.
//!
//! This crate provides:
//! - `filter_records`: stable multi-criteria filtering (quick search, filter
//!   criteria, keyword criteria)
//! - `HearingQuery`: the three criteria dimensions composed into one value
//! - `distinct_values`: selection options for the status and type filters
//! - Display ordering for filtered results
//!
//! ## Example
//!
//! ```
//! use hearings_core::{sample_hearings, FilterCriteria, HearingStatus, KeywordCriteria};
//! use hearings_search::{filter_records, sort_for_display, status_options};
//!
//! let hearings = sample_hearings();
//! let criteria = FilterCriteria::new().with_status(HearingStatus::InProgress);
//!
//! let mut hits = filter_records(&hearings, "appeal", &criteria, &KeywordCriteria::new());
//! sort_for_display(&mut hits);
//!
//! assert_eq!(hits.len(), 2);
//! assert_eq!(status_options(&hearings), vec!["In Progress"]);
//! ```

pub mod engine;
pub mod options;
pub mod ordering;
pub mod query;

// Re-export core types
pub use hearings_core::*;

pub use engine::{filter_records, keyword_haystack};
pub use options::{distinct_values, status_options, type_options};
pub use ordering::{display_cmp, sort_for_display};
pub use query::HearingQuery;
