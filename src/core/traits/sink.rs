use crate::core::errors::Result;

/// Port for appending encoded lines to the audit log.
///
/// Implementations must treat each `append` call as one indivisible unit
/// relative to concurrent appenders on the same destination: a line is
/// never split across two writes.
pub trait AuditSink: Send + Sync {
    /// Append one already-encoded, newline-terminated line.
    fn append(&self, line: &str) -> Result<()>;
}
