//! Runtime configuration and fixed protocol constants.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Latency samples kept in the rolling window.
pub const HISTORY_SIZE: usize = 30;
/// CPU and I/O samples kept for the vitals sparklines.
pub const VITALS_SPARK_SIZE: usize = 10;
/// Wait passed to the ping binary for a single echo reply.
pub const PING_TIMEOUT_MS: u64 = 2000;
/// Extra time granted to the ping process itself before it is killed.
pub const PING_GRACE: Duration = Duration::from_secs(3);
/// Latency above this renders in the warning color.
pub const HIGH_LATENCY_MS: f64 = 100.0;
/// Total panel width in display columns, borders included.
pub const PANEL_WIDTH: u16 = 58;
/// Floor for the CPU session maximum (percent).
pub const CPU_MAX_FLOOR: f64 = 10.0;
/// Floor for the I/O session maximum (bytes per second).
pub const IO_MAX_FLOOR: f64 = 1024.0;

/// Default host when none is given on the command line.
pub const DEFAULT_HOST: &str = "8.8.8.8";
/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "PINGMON_LOG";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid interval '{0}': expected a positive number of seconds")]
    InvalidInterval(String),
}

/// Parses the tick interval given in (fractional) seconds.
pub fn parse_interval(s: &str) -> Result<Duration, ConfigError> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidInterval(s.to_string()))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidInterval(s.to_string()));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidInterval(s.to_string()))
}

/// Everything the monitor needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub interval: Duration,
    pub proc_path: String,
    pub sys_path: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            interval: Duration::from_secs(1),
            proc_path: "/proc".to_string(),
            sys_path: "/sys".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn new(host: impl Into<String>, interval: Duration) -> Self {
        Self {
            host: host.into(),
            interval,
            ..Self::default()
        }
    }

    /// Picks up the optional log file from the environment.
    pub fn with_env(mut self) -> Self {
        self.log_file = std::env::var_os(LOG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self
    }
}
