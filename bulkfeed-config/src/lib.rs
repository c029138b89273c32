//! Environment-driven configuration for the bulk feed importer.
//!
//! Configuration is loaded once per invocation from environment variables,
//! with an optional `.env` bootstrap for local development. Every knob has a
//! documented default except `FILE_PATH`, which is required.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default number of parse workers per block.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default capacity of each typed row channel.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Default connection max lifetime in minutes (`TIMEOUT_SECONDS` is kept as
/// the historical key name; the value has always been interpreted as minutes).
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Default idle timeout in minutes.
pub const DEFAULT_IDLE_TIMEOUT_SECONDS: u64 = 10;

/// Default writer batch size (reserved).
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default age in minutes after which a RUNNING finalize row left behind by a
/// crashed process is considered recoverable.
pub const DEFAULT_FINALIZE_STALE_MINUTES: i64 = 30;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is missing or empty.
    #[error("required environment variable `{0}` is missing or empty")]
    MissingVar(&'static str),

    /// A variable is present but does not parse as the expected type.
    #[error("environment variable `{key}` has invalid value `{value}`")]
    InvalidVar { key: &'static str, value: String },
}

/// SQL Server connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Ingress (FTP) settings. The download client is an external collaborator;
/// these keys are recognized and validated here so a misconfigured ingress
/// fails at startup rather than mid-run.
#[derive(Debug, Clone, Default)]
pub struct FtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub remote_dir: String,
    pub file_pattern: String,
    pub archive_dir: String,
    pub delete_after_download: bool,
    pub move_after_download: bool,
}

impl FtpConfig {
    /// Whether an ingress endpoint is configured at all.
    pub fn is_configured(&self) -> bool {
        !self.host.is_empty()
    }
}

/// Full importer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*_<BLOCK>.txt` inputs.
    pub file_path: PathBuf,
    /// Working directory for in-flight files.
    pub process_dir: PathBuf,
    /// Files that parsed without an I/O error are moved here.
    pub success_dir: PathBuf,
    /// Files whose scan failed are moved here.
    pub failed_dir: PathBuf,
    /// Directory for the daily-rotating log files.
    pub log_dir: PathBuf,

    pub database: DatabaseConfig,
    pub ftp: FtpConfig,

    /// Parse workers per block (SDEAL overrides this with 2 x CPUs).
    pub worker_count: usize,
    /// Capacity of each typed row channel.
    pub buffer_size: usize,
    /// Reserved for writer batching.
    pub batch_size: usize,
    /// Connection max lifetime, minutes.
    pub timeout_minutes: u64,
    /// Connection idle timeout, minutes.
    pub idle_timeout_minutes: u64,
    /// Age after which a leftover RUNNING finalize row is recoverable.
    pub finalize_stale_minutes: i64,

    /// Pipe-separated unit-of-measure buy flags for the product master feed.
    pub uom_buy: String,
    /// Pipe-separated unit-of-measure priority list for the product master feed.
    pub uom_main: String,
}

impl Config {
    /// Loads configuration from the environment, bootstrapping `.env` first
    /// when present.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Loads configuration from the current process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_path = required("FILE_PATH")?;

        Ok(Config {
            file_path: PathBuf::from(file_path),
            process_dir: PathBuf::from(optional("PROCESS_DIR", "process")),
            success_dir: PathBuf::from(optional("PROCESS_SUCCESS_DIR", "process/success")),
            failed_dir: PathBuf::from(optional("PROCESS_FAILED_DIR", "process/failed")),
            log_dir: PathBuf::from(optional("LOG_PATH", "logs")),

            database: DatabaseConfig {
                host: optional("SQLSERVER_HOST", "localhost"),
                port: parsed("SQLSERVER_PORT", 1433)?,
                user: optional("SQLSERVER_USER", "sa"),
                password: optional("SQLSERVER_PASSWORD", ""),
                database: optional("SQLSERVER_DB", "master"),
            },

            ftp: FtpConfig {
                host: optional("FTP_HOST", ""),
                port: parsed("FTP_PORT", 21)?,
                username: optional("FTP_USERNAME", ""),
                password: optional("FTP_PASSWORD", ""),
                remote_dir: optional("FTP_REMOTE_DIR", ""),
                file_pattern: optional("FTP_FILE_PATTERN", ""),
                archive_dir: optional("FTP_ARCHIVE_DIR", ""),
                delete_after_download: parsed("FTP_DELETE", false)?,
                move_after_download: parsed("FTP_MOVE", false)?,
            },

            worker_count: parsed("WORKER_COUNT", DEFAULT_WORKER_COUNT)?,
            buffer_size: parsed("BUFFER_SIZE", DEFAULT_BUFFER_SIZE)?,
            batch_size: parsed("BATCH_SIZE", DEFAULT_BATCH_SIZE)?,
            timeout_minutes: parsed("TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS)?,
            idle_timeout_minutes: parsed("IDLE_TIMEOUT_SECONDS", DEFAULT_IDLE_TIMEOUT_SECONDS)?,
            finalize_stale_minutes: parsed(
                "FINALIZE_STALE_MINUTES",
                DEFAULT_FINALIZE_STALE_MINUTES,
            )?,

            uom_buy: optional("UOM_BUY", ""),
            uom_main: optional("UOM_MAIN", ""),
        })
    }

    /// The directories that must exist before a run starts.
    pub fn working_dirs(&self) -> [&PathBuf; 5] {
        [
            &self.file_path,
            &self.process_dir,
            &self.success_dir,
            &self.failed_dir,
            &self.log_dir,
        ]
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(key)),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar { key, value })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    /// Mutex to serialize tests that modify environment variables.
    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_env() {
        for key in [
            "FILE_PATH",
            "PROCESS_DIR",
            "PROCESS_SUCCESS_DIR",
            "PROCESS_FAILED_DIR",
            "LOG_PATH",
            "SQLSERVER_PORT",
            "WORKER_COUNT",
            "BUFFER_SIZE",
            "BATCH_SIZE",
            "TIMEOUT_SECONDS",
            "IDLE_TIMEOUT_SECONDS",
            "FINALIZE_STALE_MINUTES",
            "FTP_HOST",
            "FTP_PORT",
            "FTP_DELETE",
            "FTP_MOVE",
            "UOM_BUY",
            "UOM_MAIN",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn file_path_is_required() {
        let _guard = env_lock().lock().unwrap();
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("FILE_PATH")));
    }

    #[test]
    fn defaults_apply_when_vars_absent() {
        let _guard = env_lock().lock().unwrap();
        clear_env();
        std::env::set_var("FILE_PATH", "/data/in");

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.worker_count, DEFAULT_WORKER_COUNT);
        assert_eq!(cfg.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(cfg.timeout_minutes, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(cfg.finalize_stale_minutes, DEFAULT_FINALIZE_STALE_MINUTES);
        assert!(!cfg.ftp.is_configured());
    }

    #[test]
    fn numeric_overrides_are_parsed() {
        let _guard = env_lock().lock().unwrap();
        clear_env();
        std::env::set_var("FILE_PATH", "/data/in");
        std::env::set_var("WORKER_COUNT", "12");
        std::env::set_var("BUFFER_SIZE", "4096");
        std::env::set_var("FTP_HOST", "ftp.example.com");
        std::env::set_var("FTP_DELETE", "true");

        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.worker_count, 12);
        assert_eq!(cfg.buffer_size, 4096);
        assert!(cfg.ftp.is_configured());
        assert!(cfg.ftp.delete_after_download);
    }

    #[test]
    fn invalid_numeric_is_rejected() {
        let _guard = env_lock().lock().unwrap();
        clear_env();
        std::env::set_var("FILE_PATH", "/data/in");
        std::env::set_var("WORKER_COUNT", "not-a-number");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidVar {
                key: "WORKER_COUNT",
                ..
            }
        ));
    }
}
