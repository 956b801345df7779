//! Global configuration
//!
//! A process-wide configuration singleton holding log levels and the
//! evaluation policies. Pipeline functions never read it implicitly; they
//! take an [`EvalConfig`] by reference. The singleton exists for the CLI and
//! for logger initialisation.
//!
//! # Example
//! ```
//! use infix_calc::core::config::{Config, LogConfig, init, config};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! init(cfg);
//! assert_eq!(config().log.global, Level::DEBUG);
//! ```

use std::path::Path;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::Level;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// Initialise the global configuration (call once, before any use)
///
/// # Panics
/// If the configuration is already initialised
pub fn init(config: Config) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Global configuration reference
///
/// # Panics
/// If the configuration has not been initialised
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Global configuration, initialising the default one on first use
pub fn get_or_default() -> &'static Config {
    GLOBAL_CONFIG.get_or_init(Config::default)
}

/// Whether [`init`] has been called
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Global configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging
    pub log: LogConfig,
    /// Evaluation policies
    pub eval: EvalConfig,
}

/// Log levels, globally and per phase
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level for every target
    pub global: Level,
    /// Scanner level (`None` falls back to `global`)
    pub scanner: Option<LevelFilter>,
    /// Minus resolver level
    pub resolver: Option<LevelFilter>,
    /// Shunting-yard level
    pub parser: Option<LevelFilter>,
    /// Postfix evaluator level
    pub eval: Option<LevelFilter>,
}

/// Evaluation policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// What the scanner does with literals that do not fit in `i64`
    pub overflow: OverflowPolicy,
    /// What the evaluator does with operands left over at the end
    pub stack: StackPolicy,
}

/// Integer literal overflow policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail the scan with `LiteralOverflow`
    #[default]
    Reject,
    /// Clamp the literal to `i64::MAX`
    Saturate,
}

/// Leftover operand policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackPolicy {
    /// Answer with the first stack slot, ignore the rest
    #[default]
    Lenient,
    /// Exactly one operand must remain
    Strict,
}

/// Pipeline phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Resolver,
    Parser,
    Eval,
}

impl LogConfig {
    /// Effective level of `phase`
    ///
    /// The phase-specific level wins when set, otherwise the global one.
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        let specific = match phase {
            Phase::Scanner => self.scanner,
            Phase::Resolver => self.resolver,
            Phase::Parser => self.parser,
            Phase::Eval => self.eval,
        };
        specific.unwrap_or_else(|| LevelFilter::from_level(self.global))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            scanner: None,
            resolver: None,
            parser: None,
            eval: None,
        }
    }
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Scanner, Phase::Resolver, Phase::Parser, Phase::Eval];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Resolver => "resolver",
            Phase::Parser => "parser",
            Phase::Eval => "eval",
        }
    }

    /// Log target of this phase
    pub fn target(&self) -> String {
        format!("calc::{}", self.as_str())
    }
}

// ==================== Config file ====================

/// Config file error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("unknown overflow policy '{0}' (expected \"reject\" or \"saturate\")")]
    UnknownOverflowPolicy(String),
}

/// On-disk configuration (`calc.json`)
///
/// Every field is optional; missing fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// "silent", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
    /// Require exactly one operand at the end of evaluation
    pub strict: Option<bool>,
    /// "reject" or "saturate"
    pub overflow: Option<String>,
}

impl FileConfig {
    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Overlay the file values onto `base`
    pub fn apply(&self, mut base: Config) -> Result<Config, ConfigError> {
        if let Some(level) = &self.log_level {
            base.log.global = parse_log_level(level)?;
        }
        if let Some(strict) = self.strict {
            base.eval.stack = if strict {
                StackPolicy::Strict
            } else {
                StackPolicy::Lenient
            };
        }
        if let Some(overflow) = &self.overflow {
            base.eval.overflow = parse_overflow_policy(overflow)?;
        }
        Ok(base)
    }
}

// ==================== Command-line layer ====================

/// Global level before the config file and `-v` are applied
pub const CLI_BASE_LEVEL: Level = Level::WARN;

/// Command-line overrides, applied after the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `-v` count: 1 = INFO, 2 = DEBUG, 3+ = TRACE, 0 keeps the lower layers
    pub verbosity: u8,
    pub scanner: Option<LevelFilter>,
    pub resolver: Option<LevelFilter>,
    pub parser: Option<LevelFilter>,
    pub eval: Option<LevelFilter>,
    /// Force [`StackPolicy::Strict`]
    pub strict: bool,
    /// Force [`OverflowPolicy::Saturate`]
    pub saturate: bool,
}

impl Overrides {
    /// Overlay the set flags onto `base`
    pub fn apply(&self, mut base: Config) -> Config {
        match self.verbosity {
            0 => {}
            1 => base.log.global = Level::INFO,
            2 => base.log.global = Level::DEBUG,
            _ => base.log.global = Level::TRACE,
        }

        base.log.scanner = self.scanner.or(base.log.scanner);
        base.log.resolver = self.resolver.or(base.log.resolver);
        base.log.parser = self.parser.or(base.log.parser);
        base.log.eval = self.eval.or(base.log.eval);

        if self.strict {
            base.eval.stack = StackPolicy::Strict;
        }
        if self.saturate {
            base.eval.overflow = OverflowPolicy::Saturate;
        }
        base
    }
}

/// Defaults (global level [`CLI_BASE_LEVEL`]), then `file`, then `overrides`
pub fn layered(file: Option<&FileConfig>, overrides: &Overrides) -> Result<Config, ConfigError> {
    let mut base = Config::default();
    base.log.global = CLI_BASE_LEVEL;

    let base = match file {
        Some(file) => file.apply(base)?,
        None => base,
    };
    Ok(overrides.apply(base))
}

/// Parse a log level name
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    match s.to_lowercase().as_str() {
        "silent" => Ok(Level::ERROR), // silent = errors only
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(ConfigError::UnknownLogLevel(s.to_string())),
    }
}

fn parse_overflow_policy(s: &str) -> Result<OverflowPolicy, ConfigError> {
    match s.to_lowercase().as_str() {
        "reject" => Ok(OverflowPolicy::Reject),
        "saturate" => Ok(OverflowPolicy::Saturate),
        _ => Err(ConfigError::UnknownOverflowPolicy(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log.global, Level::INFO);
        assert_eq!(cfg.eval.overflow, OverflowPolicy::Reject);
        assert_eq!(cfg.eval.stack, StackPolicy::Lenient);
    }

    #[test]
    fn test_log_level_for() {
        let cfg = LogConfig {
            global: Level::WARN,
            scanner: Some(LevelFilter::DEBUG),
            eval: Some(LevelFilter::OFF),
            ..Default::default()
        };

        assert_eq!(cfg.level_for(Phase::Scanner), LevelFilter::DEBUG);
        assert_eq!(cfg.level_for(Phase::Parser), LevelFilter::WARN);
        assert_eq!(cfg.level_for(Phase::Eval), LevelFilter::OFF);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Scanner.as_str(), "scanner");
        assert_eq!(Phase::Eval.target(), "calc::eval");
        assert_eq!(Phase::ALL.len(), 4);
    }

    #[test]
    fn test_file_config_overrides() {
        let file = FileConfig::from_json(
            r#"{ "log_level": "debug", "strict": true, "overflow": "saturate" }"#,
        )
        .unwrap();
        let cfg = file.apply(Config::default()).unwrap();

        assert_eq!(cfg.log.global, Level::DEBUG);
        assert_eq!(cfg.eval.stack, StackPolicy::Strict);
        assert_eq!(cfg.eval.overflow, OverflowPolicy::Saturate);
    }

    #[test]
    fn test_file_config_empty_keeps_defaults() {
        let file = FileConfig::from_json("{}").unwrap();
        let cfg = file.apply(Config::default()).unwrap();

        assert_eq!(cfg.log.global, Level::INFO);
        assert_eq!(cfg.eval, EvalConfig::default());
    }

    #[test]
    fn test_file_config_bad_values() {
        let file = FileConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
        assert!(matches!(
            file.apply(Config::default()),
            Err(ConfigError::UnknownLogLevel(s)) if s == "loud"
        ));

        let file = FileConfig::from_json(r#"{ "overflow": "wrap" }"#).unwrap();
        assert!(matches!(
            file.apply(Config::default()),
            Err(ConfigError::UnknownOverflowPolicy(_))
        ));
    }

    #[test]
    fn test_layered_without_file_or_flags() {
        let cfg = layered(None, &Overrides::default()).unwrap();

        assert_eq!(cfg.log.global, CLI_BASE_LEVEL);
        assert_eq!(cfg.log.level_for(Phase::Eval), LevelFilter::WARN);
        assert_eq!(cfg.eval, EvalConfig::default());
    }

    #[test]
    fn test_layered_file_beats_defaults() {
        let file = FileConfig::from_json(
            r#"{ "log_level": "debug", "strict": true, "overflow": "saturate" }"#,
        )
        .unwrap();
        let cfg = layered(Some(&file), &Overrides::default()).unwrap();

        assert_eq!(cfg.log.global, Level::DEBUG);
        assert_eq!(cfg.eval.stack, StackPolicy::Strict);
        assert_eq!(cfg.eval.overflow, OverflowPolicy::Saturate);
    }

    #[test]
    fn test_layered_flags_beat_file() {
        let file = FileConfig::from_json(
            r#"{ "log_level": "error", "strict": false, "overflow": "reject" }"#,
        )
        .unwrap();
        let flags = Overrides {
            verbosity: 3,
            parser: Some(LevelFilter::OFF),
            strict: true,
            saturate: true,
            ..Default::default()
        };
        let cfg = layered(Some(&file), &flags).unwrap();

        assert_eq!(cfg.log.global, Level::TRACE);
        assert_eq!(cfg.log.level_for(Phase::Parser), LevelFilter::OFF);
        assert_eq!(cfg.log.level_for(Phase::Scanner), LevelFilter::TRACE);
        assert_eq!(cfg.eval.stack, StackPolicy::Strict);
        assert_eq!(cfg.eval.overflow, OverflowPolicy::Saturate);
    }

    #[test]
    fn test_layered_unset_flags_keep_file() {
        let file = FileConfig::from_json(r#"{ "log_level": "info" }"#).unwrap();
        let flags = Overrides {
            verbosity: 2,
            ..Default::default()
        };

        let cfg = layered(Some(&file), &Overrides::default()).unwrap();
        assert_eq!(cfg.log.global, Level::INFO);

        let cfg = layered(Some(&file), &flags).unwrap();
        assert_eq!(cfg.log.global, Level::DEBUG);
    }

    #[test]
    fn test_layered_reports_file_errors() {
        let file = FileConfig::from_json(r#"{ "overflow": "wrap" }"#).unwrap();
        assert!(matches!(
            layered(Some(&file), &Overrides::default()),
            Err(ConfigError::UnknownOverflowPolicy(_))
        ));
    }

    #[test]
    fn test_file_config_malformed_json() {
        assert!(FileConfig::from_json("{ strict: yes }").is_err());
    }

    #[test]
    fn test_parse_log_level_case_insensitive() {
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("silent").unwrap(), Level::ERROR);
    }
}
