//! Capability interfaces for the embedding shell.
//!
//! The engine is headless: window painting, native dialogs, directory traversal, and
//! command execution belong to the host. The core calls out through the narrow traits
//! here and never owns those side effects.

use crate::config::{CaptureLimits, TRUNCATION_MARKER};
use std::path::{Path, PathBuf};

/// The host clipboard.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str);
    /// Current clipboard text, if any.
    fn paste(&mut self) -> Option<String>;
}

/// A process-local clipboard, for hosts without a system clipboard (and for tests).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    data: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) {
        self.data = Some(text.to_string());
    }

    fn paste(&mut self) -> Option<String> {
        self.data.clone()
    }
}

/// Captured output of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// Combined captured text.
    pub captured: String,
    /// Process exit code, when the host could observe one.
    pub exit_code: Option<i32>,
}

/// Synchronous external command execution.
///
/// `execute` blocks the caller. Hosts should expose a way to abandon a long-running
/// command without crashing; the core never retries or cancels on its own.
pub trait ShellExecutor {
    /// Run `command_line` and capture its output.
    fn execute(&mut self, command_line: &str) -> std::io::Result<ShellOutput>;
}

/// One entry from the directory-browser collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Display name.
    pub name: String,
    /// Full path for opening.
    pub full_path: PathBuf,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

/// Directory listing, owned by the host. The core only ever consumes
/// "open file at path" and exposes the active pane's path back.
pub trait DirectoryBrowser {
    /// List the entries under `path`.
    fn list(&self, path: &Path) -> std::io::Result<Vec<DirEntry>>;
    /// The directory the browser is currently showing.
    fn current_path(&self) -> &Path;
}

/// Bound captured shell output by the byte and line caps, appending a truncation
/// marker when either cap is hit.
///
/// This is the backpressure contract the core relies on to bound memory; the second
/// element reports whether anything was cut.
pub fn truncate_capture(text: &str, caps: &CaptureLimits) -> (String, bool) {
    let mut out = String::new();
    let mut truncated = false;
    let mut lines = 0usize;

    for (i, line) in text.split('\n').enumerate() {
        if lines >= caps.max_lines {
            truncated = true;
            break;
        }
        let sep = if i > 0 { 1 } else { 0 };
        if out.len() + sep + line.len() > caps.max_bytes {
            let budget = caps.max_bytes.saturating_sub(out.len() + sep);
            let cut = floor_char_boundary(line, budget);
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line[..cut]);
            truncated = true;
            break;
        }
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
        lines += 1;
    }

    if truncated {
        out.push_str(TRUNCATION_MARKER);
    }
    (out, truncated)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
