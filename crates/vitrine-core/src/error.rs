//! Shared error type.

/// Errors raised by configuration and local file handling.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
