//! Configuration loading errors

use std::path::PathBuf;

/// Error type for loading table options from disk or text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid JSON for the expected shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
