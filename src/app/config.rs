use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::ranking::RankOptions;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Argument error: {0}")]
    Args(#[from] clap::Error),
    #[error("Engine config error: {0}")]
    Engine(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// How ranked results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Rank roommate candidates by compatibility", long_about = None)]
pub struct Config {
    /// Requester profile (JSON)
    #[arg(long, env = "ROOMMATE_REQUESTER")]
    pub requester: PathBuf,

    /// Candidate pool (JSON array)
    #[arg(long, env = "ROOMMATE_CANDIDATES")]
    pub candidates: PathBuf,

    /// Output format
    #[arg(long, env = "OUTPUT_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Maximum number of candidates to print
    #[arg(long, env = "RANK_LIMIT")]
    pub limit: Option<usize>,

    /// Hide candidates scoring below this
    #[arg(long, env = "MIN_SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Engine configuration file (TOML, optional)
    #[arg(long = "config", env = "ENGINE_CONFIG")]
    pub engine_config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub json_logs: bool,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Config::try_parse_from(args)?)
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            min_score: self.min_score,
            limit: self.limit,
        }
    }

    /// Loads the engine config file when one is given, defaults otherwise.
    pub fn engine_config(&self) -> Result<EngineConfig, CliError> {
        match &self.engine_config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading engine config");
                Ok(EngineConfig::from_file(path)?)
            }
            None => Ok(EngineConfig::default()),
        }
    }
}
