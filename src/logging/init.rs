use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use super::{LogConfig, LOG_FILENAME};
/// Initialize logging to stderr, plus a rolling file when `log_dir` is set.
///
/// Stdout is left alone so command output can be piped.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let LogConfig { log_dir, log_level, json_format, rotation } = config;
    let file_appender = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Some(RollingFileAppender::new(rotation, dir, LOG_FILENAME))
        }
        None => None,
    };
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("taggart={log_level}")))
    };
    if json_format {
        let json_file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json().with_writer(appender).with_current_span(true).with_target(true)
                .with_filter(filter())
        });
        let json_stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_current_span(true).with_target(true)
            .with_filter(filter());
        tracing_subscriber::registry()
            .with(json_file_layer).with(json_stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender).with_target(true).with_ansi(false)
                .with_filter(filter())
        });
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_target(false)
            .with_filter(filter());
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    Ok(())
}
/// Parse rotation period from string. Unknown values never rotate.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "daily" => Rotation::DAILY,
        _ => Rotation::NEVER,
    }
}
/// Parse a level name such as `debug` or `WARN`. `None` if it is not one.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    s.trim().parse().ok()
}
