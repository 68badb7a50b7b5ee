use std::path::PathBuf;

/// All domain errors for the audit recorder.
///
/// Write and read failures carry the log path so that a monitoring
/// caller can report exactly which file misbehaved.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("Cannot append to audit log at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read audit log at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;
