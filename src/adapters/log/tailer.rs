use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::core::errors::{AuditError, Result};

/// Window size applied when the caller asks for zero or fewer lines.
pub const DEFAULT_LINES: i64 = 50;

/// Block size for the backward read. One block covers dozens of typical
/// audit lines, so small windows touch only the end of a large file.
const CHUNK_SIZE: u64 = 8 * 1024;

/// Outcome of a tail query.
///
/// A missing file is an expected state (nothing audited yet), not an
/// error; the caller decides how to phrase it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// The log file does not exist.
    Absent,
    /// The last complete lines of the file, oldest first. Empty when the
    /// file holds no complete line.
    Lines(Vec<String>),
}

/// Return the last `n` complete lines of `path`, in original file order.
///
/// `n <= 0` is normalized to [`DEFAULT_LINES`]. A trailing partial line
/// (file not ending in a newline, e.g. a writer crashed mid-append on a
/// filesystem without atomic appends) is never included. Blank lines are
/// skipped, matching what the query surface displays.
///
/// Reads backward from the end in [`CHUNK_SIZE`] blocks until the window
/// is covered, so a small window on a large file stays cheap.
pub fn tail(path: &Path, n: i64) -> Result<Tail> {
    let wanted = if n <= 0 {
        DEFAULT_LINES as usize
    } else {
        n as usize
    };

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Tail::Absent),
        Err(e) => {
            return Err(AuditError::ReadFailed {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let read_failed = |e: io::Error| AuditError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let len = file.metadata().map_err(read_failed)?.len();

    // Grow a suffix of the file backward until it holds enough complete
    // lines or the start of the file is reached.
    let mut suffix: Vec<u8> = Vec::new();
    let mut pos = len;

    while pos > 0 && complete_lines(&suffix, pos > 0).len() <= wanted {
        let read_len = CHUNK_SIZE.min(pos);
        pos -= read_len;

        let mut chunk = vec![0u8; read_len as usize];
        file.seek(SeekFrom::Start(pos)).map_err(read_failed)?;
        file.read_exact(&mut chunk).map_err(read_failed)?;

        chunk.extend_from_slice(&suffix);
        suffix = chunk;
    }

    let lines = complete_lines(&suffix, pos > 0);
    let start = lines.len().saturating_sub(wanted);
    Ok(Tail::Lines(lines[start..].to_vec()))
}

/// Extract the displayable lines from an accumulated file suffix.
///
/// The element after the final break is either empty (file ends with a
/// newline) or a trailing partial line; both are dropped. When the suffix
/// does not start at the beginning of the file its first element is a
/// fragment of an older line (possibly even mid-character), so it is
/// dropped too; the caller compensates by reading further back.
fn complete_lines(suffix: &[u8], truncated_front: bool) -> Vec<String> {
    let text = String::from_utf8_lossy(suffix);
    let mut lines: Vec<&str> = text.split('\n').collect();

    lines.pop();
    if truncated_front && !lines.is_empty() {
        lines.remove(0);
    }
    lines.retain(|line| !line.trim().is_empty());

    lines.into_iter().map(str::to_string).collect()
}
