use tabula_lib::error::{ConfigError, RuleError};

/// Errors surfaced by the demo binary.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("unknown story '{0}' (run without arguments to list stories)")]
    UnknownStory(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
