//! optview: view AI optimization status and history.
//!
//! Reads the optimizer's JSON documents from the data directory and prints
//! the selected reports to stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use optview::application::reporting::{DEFAULT_HISTORY_LIMIT, ReportPrinter, ReportSelection};
use optview::config::ViewerConfig;
use optview::domain::errors::ReportError;
use optview::infrastructure::JsonFileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "View AI optimization status and history", long_about = None)]
struct Cli {
    /// Show current parameters
    #[arg(long, visible_alias = "show-parameters")]
    parameters: bool,

    /// Show optimization history
    #[arg(long, visible_alias = "show-history")]
    history: bool,

    /// Show parameter change history
    #[arg(long, visible_alias = "show-param-history")]
    param_history: bool,

    /// Show performance comparison
    #[arg(long, visible_alias = "show-performance")]
    performance: bool,

    /// Show everything (default when no report is selected)
    #[arg(long, visible_alias = "show-all")]
    all: bool,

    /// Limit history entries
    #[arg(
        long,
        default_value_t = DEFAULT_HISTORY_LIMIT as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    limit: u64,

    /// Directory holding the optimizer's JSON files [env: OPTVIEW_DATA_DIR]
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl Cli {
    fn selection(&self) -> ReportSelection {
        if self.all {
            return ReportSelection::all();
        }
        ReportSelection {
            parameters: self.parameters,
            history: self.history,
            param_history: self.param_history,
            performance: self.performance,
        }
        .or_all()
    }

    fn history_limit(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(usize::MAX)
    }
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_env().with_data_dir(cli.data_dir.clone());
    debug!("Using data directory {:?}", config.data_dir);

    let store = JsonFileStore::new(&config.data_dir);
    let stdout = std::io::stdout();
    let mut printer = ReportPrinter::new(&store, stdout.lock())
        .with_optimizer_command(config.optimizer_command.as_str());

    match printer.run(cli.selection(), cli.history_limit()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ReportError::Data(_) | ReportError::OutOfRange(_)) => Ok(ExitCode::FAILURE),
        Err(ReportError::Output(e)) => Err(e).context("Failed to write report to stdout"),
    }
}
