use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{AuditError, Result};
use crate::core::traits::sink::AuditSink;

/// Appends encoded lines to a shared append-only file.
///
/// The file is opened in append mode on every call, so the kernel
/// positions each write at the current end of file regardless of what
/// other processes appended in between. Combined with one `write_all`
/// per line, concurrent appenders never interleave partial lines on
/// filesystems that honor `O_APPEND` (network filesystems may not).
///
/// The file is created on first append and never truncated.
pub struct FileLogWriter {
    log_path: PathBuf,
}

impl FileLogWriter {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

impl AuditSink for FileLogWriter {
    fn append(&self, line: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = self.log_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| AuditError::WriteFailed {
                path: self.log_path.clone(),
                source: e,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AuditError::WriteFailed {
                path: self.log_path.clone(),
                source: e,
            })?;

        file.write_all(line.as_bytes())
            .map_err(|e| AuditError::WriteFailed {
                path: self.log_path.clone(),
                source: e,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn append_creates_file_with_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audit.log");
        let writer = FileLogWriter::new(&path);

        writer.append("first line\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first line\n");
    }

    #[test]
    fn append_never_truncates() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audit.log");
        let writer = FileLogWriter::new(&path);

        writer.append("one\n").unwrap();
        writer.append("two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn append_creates_missing_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content").join("audit.log");
        let writer = FileLogWriter::new(&path);

        writer.append("nested\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn append_to_unwritable_path_reports_failure() {
        let writer = FileLogWriter::new("/proc/wordpane-denied/audit.log");
        let result = writer.append("line\n");
        assert!(matches!(result, Err(AuditError::WriteFailed { .. })));
    }

    #[test]
    fn concurrent_appends_do_not_interleave() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("audit.log");

        const WRITERS: usize = 8;
        const LINES_PER_WRITER: usize = 50;

        let mut handles = Vec::new();
        for w in 0..WRITERS {
            let writer = Arc::new(FileLogWriter::new(&path));
            handles.push(thread::spawn(move || {
                // varying lengths make torn writes visible
                let payload = "x".repeat(10 + w * 37);
                for i in 0..LINES_PER_WRITER {
                    writer
                        .append(&format!("writer={w} seq={i} pad={payload}\n"))
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), WRITERS * LINES_PER_WRITER);
        for line in lines {
            let mut parts = line.split(' ');
            let w: usize = parts
                .next()
                .and_then(|p| p.strip_prefix("writer="))
                .and_then(|v| v.parse().ok())
                .expect("line should start with its writer id");
            let pad = parts.nth(1).and_then(|p| p.strip_prefix("pad=")).unwrap();
            // a merged or split line would break the per-writer pad length
            assert_eq!(pad.len(), 10 + w * 37, "torn line detected: {line}");
        }
    }
}
