//! # hearings-cli
//!
//! Support code for the `hearings` command: configuration, record loading,
//! and result rendering. The filtering itself lives in `hearings-search`.

pub mod config;
pub mod output;
pub mod source;

pub use config::{CliConfig, OutputFormat, SourceKind};
pub use output::{render_detail, render_list, render_options, FilterOptions};
pub use source::{find_hearing, load_hearings, parse_hearings, read_hearings};
