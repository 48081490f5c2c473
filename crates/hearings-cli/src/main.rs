//! hearings: Command-line front end for the hearings record filter.
//!
//! Loads hearing records (a JSON data file or the built-in samples), applies
//! the quick search, filter criteria and keyword criteria, and prints the
//! matching records.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use hearings_cli::{
    find_hearing, load_hearings, render_detail, render_list, render_options, CliConfig,
    FilterOptions, OutputFormat, SourceKind,
};
use hearings_core::defaults::{LOG_FILE_NAME, LOG_FILTER};
use hearings_core::{
    FilterCriteria, HearingStatus, KeywordCriteria, KeywordOperator, ProceedingsFilterInput,
};
use hearings_search::{sort_for_display, status_options, type_options, HearingQuery};
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hearings")]
#[command(author, version, about = "Search and filter the public hearings list")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List hearings matching the given criteria
    List {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Order results for display (in progress first, newest proceedings first)
        #[arg(long)]
        sorted: bool,
    },

    /// Show the status and proceeding type options present in the data
    Options {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Show the full details of one hearing
    Show {
        /// Record id or proceeding id
        id: String,

        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args)]
struct DataArgs {
    /// JSON data file (default: built-in sample records)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Shape of the data file: records or proceedings
    #[arg(long, value_name = "KIND")]
    source: Option<SourceKind>,

    /// Output format: text or json
    #[arg(short, long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

#[derive(Args)]
struct FilterArgs {
    /// Quick search over proceeding id, description, parties and status
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    quick: String,

    /// Proceeding id contains
    #[arg(long, value_name = "TEXT")]
    proceeding_id: Option<String>,

    /// A party name contains
    #[arg(long, value_name = "TEXT")]
    party: Option<String>,

    /// Status equals (in-progress, adjourned, cancelled, completed)
    #[arg(long, value_name = "STATUS")]
    status: Option<HearingStatus>,

    /// A proceeding type equals
    #[arg(long = "type", value_name = "TYPE")]
    proceeding_type: Option<String>,

    /// Start date on or after (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    from: Option<String>,

    /// Start date on or before (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    to: Option<String>,

    /// Request joint hearings from a remote source (not applied locally)
    #[arg(long)]
    joint_hearing: bool,

    /// Keyword (repeat up to 3 times)
    #[arg(short = 'k', long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// How keywords combine: none (first keyword only), and, or
    #[arg(long, value_name = "OPERATOR")]
    operator: Option<KeywordOperator>,
}

impl FilterArgs {
    fn to_query(&self) -> anyhow::Result<HearingQuery> {
        let mut filter = FilterCriteria::new().with_joint_hearing(self.joint_hearing);
        if let Some(proceeding_id) = &self.proceeding_id {
            filter = filter.with_proceeding_id(proceeding_id);
        }
        if let Some(party) = &self.party {
            filter = filter.with_party_name(party);
        }
        if let Some(status) = self.status {
            filter = filter.with_status(status);
        }
        if let Some(proceeding_type) = &self.proceeding_type {
            filter = filter.with_proceeding_type(proceeding_type);
        }
        if let Some(from) = &self.from {
            filter = filter.with_date_from(from);
        }
        if let Some(to) = &self.to {
            filter = filter.with_date_to(to);
        }
        filter.dates.validate().context("invalid date bounds")?;

        let operator = self.operator.unwrap_or_default();
        let keywords = KeywordCriteria::from_keywords(self.keywords.iter().cloned(), operator)?;
        if operator == KeywordOperator::None && keywords.present_keywords().count() > 1 {
            warn!(
                subsystem = "cli",
                keyword_operator = %operator,
                "Only the first keyword is used without --operator and|or"
            );
        }
        if operator == KeywordOperator::Or
            && !keywords.is_active()
            && keywords.present_keywords().next().is_some()
        {
            warn!(
                subsystem = "cli",
                keyword_operator = %operator,
                keyword_count = keywords.present_keywords().count(),
                "An empty keyword slot matches every record with --operator or"
            );
        }

        Ok(HearingQuery::new()
            .with_quick_search(self.quick.as_str())
            .with_filter(filter)
            .with_keywords(keywords))
    }
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _file_guard = init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(subsystem = "cli", error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with configurable output. Logs go to stderr so that
/// command output on stdout stays machine-readable.
///
/// Environment variables:
///   LOG_FORMAT  - "json" or "text" (default: "text")
///   LOG_FILE    - path to log file (optional, enables file logging)
///   LOG_ANSI    - "true"/"false" override ANSI colors (auto-detected by default)
///   RUST_LOG    - standard env filter (default: hearings crates at info)
fn init_logging() -> Option<WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();
    let log_ansi = std::env::var("LOG_ANSI")
        .ok()
        .map(|v| v == "true" || v == "1");

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    let guard = if let Some(ref path) = log_file {
        // Daily rotation
        let file_dir = Path::new(path).parent().unwrap_or(Path::new("."));
        let file_name = Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(LOG_FILE_NAME);
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init();
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(log_ansi.unwrap_or(false)); // no ANSI in files by default
            registry.with(layer).init();
        }
        Some(guard)
    } else {
        if log_format == "json" {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            let mut layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if let Some(ansi) = log_ansi {
                layer = layer.with_ansi(ansi);
            }
            registry.with(layer).init();
        }
        None
    };

    debug!(
        log_format = %log_format,
        log_file = log_file.as_deref().unwrap_or("(stderr)"),
        "Logging initialized"
    );
    guard
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::List {
            data,
            filter,
            sorted,
        } => cmd_list(&data, &filter, sorted),
        Commands::Options { data } => cmd_options(&data),
        Commands::Show { id, data } => cmd_show(&id, &data),
    }
}

/// Environment configuration with command-line overrides applied.
fn resolve_config(data: &DataArgs) -> anyhow::Result<CliConfig> {
    let config = CliConfig::from_env()?
        .with_data_file(data.data.clone())
        .with_source(data.source)
        .with_output(data.output);
    info!(
        subsystem = "cli",
        data_file = config
            .data_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(samples)".to_string()),
        source_kind = %config.source,
        "Configuration resolved"
    );
    Ok(config)
}

fn cmd_list(data: &DataArgs, filter: &FilterArgs, sorted: bool) -> anyhow::Result<()> {
    let config = resolve_config(data)?.with_sorted(sorted);
    let query = filter.to_query()?;

    let remote = ProceedingsFilterInput::from(&query.filter);
    if !remote.is_empty() {
        debug!(
            subsystem = "cli",
            remote_filter = %serde_json::to_string(&remote)?,
            "Equivalent proceedings filter input"
        );
    }

    let hearings = load_hearings(&config).context("failed to load hearings")?;
    let mut hits = query.apply(&hearings);
    if config.sorted {
        sort_for_display(&mut hits);
    }

    info!(
        subsystem = "cli",
        op = "list",
        input_count = hearings.len(),
        result_count = hits.len(),
        "Hearings listed"
    );
    println!("{}", render_list(&hits, config.output)?);
    Ok(())
}

fn cmd_options(data: &DataArgs) -> anyhow::Result<()> {
    let config = resolve_config(data)?;
    let hearings = load_hearings(&config).context("failed to load hearings")?;

    let options = FilterOptions {
        statuses: status_options(&hearings),
        proceeding_types: type_options(&hearings),
    };
    println!("{}", render_options(&options, config.output)?);
    Ok(())
}

fn cmd_show(id: &str, data: &DataArgs) -> anyhow::Result<()> {
    let config = resolve_config(data)?;
    let hearings = load_hearings(&config).context("failed to load hearings")?;

    let hearing = find_hearing(&hearings, id)?;
    println!("{}", render_detail(hearing, config.output)?);
    Ok(())
}
