//! Configurable resource limits.
//!
//! Every cap the engine enforces lives here as an explicit configuration value; nothing
//! is an embedded constant. Limits deserialize from TOML so a host can ship a config
//! file, and `Default` provides sensible caps for embedding without one.

use serde::Deserialize;
use std::path::Path;

/// Marker appended wherever content was cut to satisfy a cap.
pub const TRUNCATION_MARKER: &str = "…";

/// Resource caps for buffers, files, history, and shell capture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum characters per line after an edit or load.
    pub max_line_chars: usize,
    /// Maximum characters accepted in a single inserted chunk/segment.
    pub max_insert_chars: usize,
    /// Maximum lines ingested from a loaded file.
    pub max_file_lines: usize,
    /// Maximum undo snapshots retained per pane (oldest evicted first).
    /// A value of 0 disables undo history entirely.
    pub max_undo_depth: usize,
    /// Caps applied to captured shell output.
    pub shell_capture: CaptureLimits,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_chars: 4096,
            max_insert_chars: 4096,
            max_file_lines: 65536,
            max_undo_depth: 100,
            shell_capture: CaptureLimits::default(),
        }
    }
}

/// Backpressure contract for the shell collaborator's captured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureLimits {
    /// Maximum captured bytes.
    pub max_bytes: usize,
    /// Maximum captured lines.
    pub max_lines: usize,
}

impl Default for CaptureLimits {
    fn default() -> Self {
        Self {
            max_bytes: 64 * 1024,
            max_lines: 1000,
        }
    }
}

/// Errors raised while loading a limits file.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed.
    Io(std::io::Error),
    /// The TOML did not parse or contained unknown fields.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "Failed to read limits file: {}", err),
            ConfigError::Parse(err) => write!(f, "Failed to parse limits file: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl Limits {
    /// Parse limits from a TOML string; absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load limits from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&text).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let limits = Limits::from_toml_str("max_undo_depth = 7\n").unwrap();
        assert_eq!(limits.max_undo_depth, 7);
        assert_eq!(limits.max_line_chars, Limits::default().max_line_chars);
    }

    #[test]
    fn nested_capture_limits_parse() {
        let limits = Limits::from_toml_str("[shell_capture]\nmax_lines = 5\n").unwrap();
        assert_eq!(limits.shell_capture.max_lines, 5);
        assert_eq!(
            limits.shell_capture.max_bytes,
            CaptureLimits::default().max_bytes
        );
    }
}
