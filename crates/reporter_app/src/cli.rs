use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use reporter_engine::{FetchSettings, DEFAULT_ENDPOINT};

use crate::platform::logging::{LogDestination, LogSettings, DEFAULT_LOG_FILE};

#[derive(Parser, Debug)]
#[command(name = "repo-reporter")]
#[command(about = "List repositories from a remote API and keep a favorites list")]
pub struct Cli {
    /// Repository list endpoint
    #[arg(long, env = "REPORTER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Serve built-in sample repositories instead of calling the network
    #[arg(long, env = "REPORTER_OFFLINE")]
    pub offline: bool,

    /// Connection timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`
    #[arg(long, env = "REPORTER_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Minimum level written (off, error, warn, info, debug, trace)
    #[arg(long, env = "REPORTER_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn log_settings(&self) -> LogSettings {
        let destination = match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        };
        LogSettings {
            destination,
            file: self.log_file.clone(),
            level: self.log_level,
        }
    }
}
