//! # hearings-core
//!
//! Core types for the hearings record filter.
//!
//! This crate provides the hearing record model, the immutable criteria value
//! objects the filter engine consumes, and the mapping from the remote
//! proceedings query into records. It performs no filtering itself; see the
//! `hearings-search` crate for the engine.

pub mod criteria;
pub mod defaults;
pub mod error;
pub mod keyword;
pub mod logging;
pub mod models;
pub mod proceedings;
pub mod samples;
pub mod temporal;
pub mod text;

// Re-export commonly used types at crate root
pub use criteria::FilterCriteria;
pub use error::{Error, Result};
pub use keyword::{KeywordCriteria, KeywordOperator};
pub use models::*;
pub use proceedings::{HearingDates, ProceedingData, ProceedingsFilterInput, ProceedingsResponse};
pub use samples::sample_hearings;
pub use temporal::{parse_date, DateRange};
pub use text::LowercaseTerm;
