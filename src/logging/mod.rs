mod init;
pub use init::{init_logging, parse_level, parse_rotation};
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used when a log directory is configured.
pub const LOG_FILENAME: &str = "taggart.log";
/// Configuration for the logging system.
pub struct LogConfig {
    /// Directory for the rolling log file. Stderr only when `None`.
    pub log_dir: Option<PathBuf>,
    /// Default level when `RUST_LOG` is not set.
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_level: Level::WARN,
            json_format: false,
            rotation: Rotation::NEVER,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
