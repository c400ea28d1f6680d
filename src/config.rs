//! Runtime configuration.
//!
//! Defaults are overridden by environment variables (a `.env` file is loaded
//! by `main`), which are in turn overridden by command line flags.

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Smallest column count accepted from the user.
pub const MIN_COLUMNS: usize = 2;
/// Largest column count accepted from the user.
pub const MAX_COLUMNS: usize = 10;
pub const DEFAULT_COLUMNS: usize = 4;

/// log4rs configuration file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const ENV_COLUMNS: &str = "IP_SHUFFLE_COLUMNS";
pub const ENV_FORMAT: &str = "IP_SHUFFLE_FORMAT";
pub const ENV_EXPORT_DIR: &str = "IP_SHUFFLE_EXPORT_DIR";

/// How the columns are rendered on stdout.
#[derive(ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

/// Settings for one run of the shuffler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub columns: usize,
    pub format: OutputFormat,
    /// Directory to write one text file per non-empty column.
    pub export_dir: Option<PathBuf>,
    /// Seed for a reproducible shuffle.
    pub seed: Option<u64>,
    /// Hide the stats banner in terminal output.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            columns: DEFAULT_COLUMNS,
            format: OutputFormat::default(),
            export_dir: None,
            seed: None,
            quiet: false,
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults overridden by `lookup`.
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of an environment variable, if set
    ///
    /// # Returns
    /// * `Ok(Config)` - Defaults with any recognised variables applied
    /// * `Err` - If a variable is set but cannot be parsed
    pub fn from_vars<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(columns) = lookup(ENV_COLUMNS) {
            config.columns = columns
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_COLUMNS}='{columns}': {e}"))?;
            log::debug!("{ENV_COLUMNS} -> columns={}", config.columns);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse::<OutputFormat>()?;
            log::debug!("{ENV_FORMAT} -> format={}", config.format);
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR) {
            if !dir.trim().is_empty() {
                config.export_dir = Some(PathBuf::from(dir.trim()));
            }
        }

        Ok(config)
    }

    /// Check the column count is within `MIN_COLUMNS..=MAX_COLUMNS`.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&self.columns) {
            return Err(format!(
                "Column count {} out of range {MIN_COLUMNS}..={MAX_COLUMNS}",
                self.columns
            )
            .into());
        }
        Ok(())
    }
}
