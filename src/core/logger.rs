//! Logger initialisation
//!
//! Per-phase log control on top of `tracing` and `tracing-subscriber`.
//!
//! # Example
//! ```ignore
//! use infix_calc::core::config::{Config, init};
//! use infix_calc::core::logger::init_logger;
//!
//! init(Config::default());
//! init_logger();
//! ```

use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::core::config::{self, Phase};

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Coloured, multi-line (development)
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// JSON (tooling)
    Json,
}

/// Initialise logging with the default format
///
/// Must be called after `config::init()`.
pub fn init_logger() {
    init_with_format(LogFormat::default());
}

/// Initialise logging with the given format
pub fn init_with_format(format: LogFormat) {
    init_with_file(format, None::<&str>);
}

/// Initialise logging, optionally also appending to a file
///
/// # Arguments
/// * `format` - console format
/// * `file` - log file path, `None` for console only
///
/// # Panics
/// If the configuration is not initialised or the log file cannot be opened
pub fn init_with_file<P: AsRef<std::path::Path>>(format: LogFormat, file: Option<P>) {
    if !config::is_initialized() {
        panic!("Config must be initialized before logger");
    }

    let targets = build_targets(&config::config().log);

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(move || file_handle.try_clone().expect("Failed to clone file handle"))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let console_layer = create_format_layer(format, io::stderr).with_filter(targets);
        tracing_subscriber::registry().with(console_layer).init();
    }
}

/// Target filter with one entry per phase plus the CLI target
pub fn build_targets(cfg: &config::LogConfig) -> Targets {
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(cfg.global), |targets, phase| {
            targets.with_target(phase.target(), cfg.level_for(*phase))
        })
        .with_target("calc::cli", cfg.global)
}

fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// Simple console logger for tests
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Whether DEBUG events of `phase` would be recorded
///
/// Lets callers skip rendering token sequences nobody will see.
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Scanner => tracing::enabled!(target: "calc::scanner", tracing::Level::DEBUG),
        Phase::Resolver => tracing::enabled!(target: "calc::resolver", tracing::Level::DEBUG),
        Phase::Parser => tracing::enabled!(target: "calc::parser", tracing::Level::DEBUG),
        Phase::Eval => tracing::enabled!(target: "calc::eval", tracing::Level::DEBUG),
    }
}
