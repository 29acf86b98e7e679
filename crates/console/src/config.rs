//! Runtime configuration.
//!
//! Every setting can come from the environment; command line flags win.
//! Precedence is resolved by clap (`env = ...` on the flag definitions).

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use industrialerp_observability::LogConfig;

use crate::cli::Cli;

/// Dataset file to load instead of the embedded sample.
pub const DATA_ENV: &str = "INDUSTRIALERP_DATA";
/// `pretty`, `compact` or `json`.
pub const LOG_FORMAT_ENV: &str = "INDUSTRIALERP_LOG_FORMAT";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` means the embedded sample dataset.
    pub data: Option<PathBuf>,
    pub log: LogConfig,
    pub today: NaiveDate,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let log = LogConfig::from_verbosity(cli.verbose, cli.quiet)
            .with_format(cli.log_format.into())
            .with_ansi(io::stderr().is_terminal());
        Self {
            data: cli.data.clone(),
            log,
            today: cli.today.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}
