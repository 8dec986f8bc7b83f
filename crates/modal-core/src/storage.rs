//! Plain-text, line-oriented file persistence.
//!
//! Loading splits on `\n` and tolerates a trailing `\r` per line (CRLF-safe). Every cap
//! comes from [`Limits`]: over-long lines are truncated with a visible marker appended,
//! and ingestion stops once the line-count cap is reached (the result reports that
//! truncation occurred). Loading is all-or-nothing from the caller's perspective:
//! on error nothing is returned, so existing pane content stays untouched.

use crate::buffer::char_len;
use crate::config::{Limits, TRUNCATION_MARKER};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File persistence errors.
#[derive(Debug)]
pub enum StorageError {
    /// An underlying I/O failure, with the path it happened on.
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The OS error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
        }
    }
}

/// The result of a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    /// The ingested lines; never empty (an empty file yields one empty line).
    pub lines: Vec<String>,
    /// Whether any line or the file as a whole was truncated by a cap.
    pub truncated: bool,
}

fn truncate_line(line: &str, max_chars: usize) -> String {
    let mut kept: String = line.chars().take(max_chars).collect();
    kept.push_str(TRUNCATION_MARKER);
    kept
}

/// Load `path` into lines, enforcing the line-length and line-count caps.
pub fn load_lines(path: &Path, limits: &Limits) -> Result<LoadedFile, StorageError> {
    let text = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines: Vec<String> = Vec::new();
    let mut truncated = false;

    let mut segments: Vec<&str> = text.split('\n').collect();
    // A final newline produces an empty trailing segment, not an extra line.
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }

    for segment in segments {
        if lines.len() >= limits.max_file_lines {
            truncated = true;
            break;
        }
        let line = segment.strip_suffix('\r').unwrap_or(segment);
        if char_len(line) > limits.max_line_chars {
            lines.push(truncate_line(line, limits.max_line_chars));
            truncated = true;
        } else {
            lines.push(line.to_string());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    if truncated {
        log::warn!("load {}: content truncated by caps", path.display());
    }
    log::debug!("loaded {} ({} lines)", path.display(), lines.len());

    Ok(LoadedFile { lines, truncated })
}

/// Write each line followed by a single `\n` to `path`.
pub fn save_lines(path: &Path, lines: &[String]) -> Result<(), StorageError> {
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = std::io::BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes()).map_err(io_err)?;
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    log::debug!("saved {} ({} lines)", path.display(), lines.len());
    Ok(())
}
