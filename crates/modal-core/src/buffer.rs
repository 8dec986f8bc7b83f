//! Buffer model and edit engine.
//!
//! A [`Buffer`] is a non-empty ordered sequence of lines plus a cursor and a selection.
//! All public inputs/outputs use **character offsets** (not byte offsets); cursor motion
//! and single-character deletion step over grapheme clusters so that combined characters
//! are never split.
//!
//! Invariants upheld after every operation:
//!
//! - `line_count() >= 1`, even immediately after deleting all content
//! - `0 <= cursor.line < line_count()`
//! - `0 <= cursor.column <= char_len(line[cursor.line])`

use crate::config::Limits;
use crate::selection::Selection;
use std::cmp::Ordering;
use unicode_segmentation::UnicodeSegmentation;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Edit errors raised when a resource cap would be exceeded.
///
/// A rejected operation leaves the buffer, cursor, and selection untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The inserted chunk exceeds the configured chunk cap.
    ChunkTooLarge {
        /// Chunk length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
    /// The resulting line would exceed the configured line cap.
    LineTooLong {
        /// Resulting line length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::ChunkTooLarge { length, max } => {
                write!(f, "Inserted text too large: {} chars (max {})", length, max)
            }
            EditError::LineTooLong { length, max } => {
                write!(f, "Line would grow to {} chars (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Cursor motions understood by [`Buffer::move_cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One grapheme left, wrapping to the end of the previous line.
    Left,
    /// One grapheme right, wrapping to the start of the next line.
    Right,
    /// One line up, clamping the column.
    Up,
    /// One line down, clamping the column.
    Down,
    /// Start of the current line.
    LineStart,
    /// End of the current line.
    LineEnd,
    /// Start of the buffer.
    BufferStart,
    /// End of the buffer.
    BufferEnd,
}

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn byte_of(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(b, _)| b).unwrap_or(s.len())
}

/// Largest grapheme boundary strictly before `col`.
fn prev_grapheme_col(s: &str, col: usize) -> usize {
    let mut pos = 0;
    for g in s.graphemes(true) {
        let next = pos + g.chars().count();
        if next >= col {
            return pos;
        }
        pos = next;
    }
    pos
}

/// Smallest grapheme boundary strictly after `col`.
fn next_grapheme_col(s: &str, col: usize) -> usize {
    let mut pos = 0;
    for g in s.graphemes(true) {
        let next = pos + g.chars().count();
        if next > col {
            return next;
        }
        pos = next;
    }
    pos
}

fn remove_char_range(line: &mut String, start: usize, end: usize) {
    let start_byte = byte_of(line, start);
    let end_byte = byte_of(line, end);
    line.replace_range(start_byte..end_byte, "");
}

/// Split pasted or loaded text on `\n`, tolerating a trailing `\r` per segment.
pub fn split_text_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|seg| seg.strip_suffix('\r').unwrap_or(seg).to_string())
        .collect()
}

/// One pane's text content, cursor, and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub(crate) lines: Vec<String>,
    pub(crate) cursor: Position,
    pub(crate) selection: Selection,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
            selection: Selection::default(),
        }
    }

    /// Create a buffer from existing lines. An empty vector becomes one empty line.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: Position::default(),
            selection: Selection::default(),
        }
    }

    /// All lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always at least 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `index`, if in bounds.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Full text joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn current_line(&self) -> &str {
        &self.lines[self.cursor.line]
    }

    /// Move the cursor to `pos`, clamping line and column into bounds.
    ///
    /// Clears the selection (a host-driven jump, e.g. a mouse click, never extends).
    pub fn set_cursor(&mut self, pos: Position) {
        self.selection.clear();
        let line = pos.line.min(self.lines.len() - 1);
        let column = pos.column.min(char_len(&self.lines[line]));
        self.cursor = Position::new(line, column);
    }

    /// Apply a cursor motion.
    ///
    /// With `extend`, the selection anchors at the pre-move cursor (if not already
    /// active) and its focus follows the cursor; without it, any selection is cleared.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        if extend {
            self.selection.begin_at(self.cursor);
        } else {
            self.selection.clear();
        }

        let Position { line, column } = self.cursor;
        self.cursor = match motion {
            Motion::Left => {
                if column > 0 {
                    Position::new(line, prev_grapheme_col(self.current_line(), column))
                } else if line > 0 {
                    Position::new(line - 1, char_len(&self.lines[line - 1]))
                } else {
                    self.cursor
                }
            }
            Motion::Right => {
                if column < char_len(self.current_line()) {
                    Position::new(line, next_grapheme_col(self.current_line(), column))
                } else if line + 1 < self.lines.len() {
                    Position::new(line + 1, 0)
                } else {
                    self.cursor
                }
            }
            Motion::Up => {
                if line > 0 {
                    Position::new(line - 1, column.min(char_len(&self.lines[line - 1])))
                } else {
                    self.cursor
                }
            }
            Motion::Down => {
                if line + 1 < self.lines.len() {
                    Position::new(line + 1, column.min(char_len(&self.lines[line + 1])))
                } else {
                    self.cursor
                }
            }
            Motion::LineStart => Position::new(line, 0),
            Motion::LineEnd => Position::new(line, char_len(self.current_line())),
            Motion::BufferStart => Position::new(0, 0),
            Motion::BufferEnd => {
                let last = self.lines.len() - 1;
                Position::new(last, char_len(&self.lines[last]))
            }
        };

        if extend {
            self.selection.focus = self.cursor;
        }
    }

    /// Insert `text` (no line separators) at the cursor, advancing the column.
    ///
    /// Rejects the whole insertion when the chunk or the resulting line would exceed
    /// the configured caps.
    pub fn insert_text(&mut self, text: &str, limits: &Limits) -> Result<(), EditError> {
        debug_assert!(
            !text.contains(['\n', '\r']),
            "insert_text takes a single segment; use insert_multiline_text"
        );

        let chunk = char_len(text);
        if chunk > limits.max_insert_chars {
            return Err(EditError::ChunkTooLarge {
                length: chunk,
                max: limits.max_insert_chars,
            });
        }
        let resulting = char_len(self.current_line()) + chunk;
        if resulting > limits.max_line_chars {
            return Err(EditError::LineTooLong {
                length: resulting,
                max: limits.max_line_chars,
            });
        }

        let at = byte_of(self.current_line(), self.cursor.column);
        self.lines[self.cursor.line].insert_str(at, text);
        self.cursor.column += chunk;
        Ok(())
    }

    /// Insert text that may contain line separators.
    ///
    /// The text is split on `\n` (tolerating `\r\n`); the first segment is inserted at
    /// the cursor, with a line split before each subsequent segment. All resulting line
    /// lengths are validated up front so a cap rejection leaves the buffer untouched.
    pub fn insert_multiline_text(&mut self, text: &str, limits: &Limits) -> Result<(), EditError> {
        let segments = split_text_lines(text);
        if segments.len() == 1 {
            return self.insert_text(&segments[0], limits);
        }

        let prefix_len = self.cursor.column;
        let suffix_len = char_len(self.current_line()) - prefix_len;
        for (i, seg) in segments.iter().enumerate() {
            let seg_len = char_len(seg);
            if seg_len > limits.max_insert_chars {
                return Err(EditError::ChunkTooLarge {
                    length: seg_len,
                    max: limits.max_insert_chars,
                });
            }
            let resulting = if i == 0 {
                prefix_len + seg_len
            } else if i == segments.len() - 1 {
                seg_len + suffix_len
            } else {
                seg_len
            };
            if resulting > limits.max_line_chars {
                return Err(EditError::LineTooLong {
                    length: resulting,
                    max: limits.max_line_chars,
                });
            }
        }

        let line = self.cursor.line;
        let at = byte_of(self.current_line(), self.cursor.column);
        let suffix = self.lines[line].split_off(at);
        self.lines[line].push_str(&segments[0]);

        let last = segments.len() - 1;
        for (offset, seg) in segments[1..last].iter().enumerate() {
            self.lines.insert(line + 1 + offset, seg.clone());
        }
        let mut tail = segments[last].clone();
        let tail_len = char_len(&tail);
        tail.push_str(&suffix);
        self.lines.insert(line + last, tail);

        self.cursor = Position::new(line + last, tail_len);
        self.selection.clear();
        Ok(())
    }

    /// Split the current line at the cursor; the cursor moves to the start of the
    /// new line.
    pub fn insert_newline(&mut self) {
        let at = byte_of(self.current_line(), self.cursor.column);
        let right = self.lines[self.cursor.line].split_off(at);
        self.lines.insert(self.cursor.line + 1, right);
        self.cursor = Position::new(self.cursor.line + 1, 0);
    }

    /// Delete one grapheme left of the cursor, joining lines at column 0.
    ///
    /// With a live selection, deletes the selection instead. Returns `true` if the
    /// buffer changed.
    pub fn backspace(&mut self) -> bool {
        if self.selection.is_selected() {
            return self.delete_selection();
        }
        if self.cursor.column > 0 {
            let start = prev_grapheme_col(self.current_line(), self.cursor.column);
            let end = self.cursor.column;
            remove_char_range(&mut self.lines[self.cursor.line], start, end);
            self.cursor.column = start;
            true
        } else if self.cursor.line > 0 {
            let removed = self.lines.remove(self.cursor.line);
            let previous = self.cursor.line - 1;
            let join_at = char_len(&self.lines[previous]);
            self.lines[previous].push_str(&removed);
            self.cursor = Position::new(previous, join_at);
            true
        } else {
            false
        }
    }

    /// Delete one grapheme at the cursor, joining the next line at end-of-line.
    ///
    /// With a live selection, deletes the selection instead. Returns `true` if the
    /// buffer changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.selection.is_selected() {
            return self.delete_selection();
        }
        if self.cursor.column < char_len(self.current_line()) {
            let end = next_grapheme_col(self.current_line(), self.cursor.column);
            remove_char_range(&mut self.lines[self.cursor.line], self.cursor.column, end);
            true
        } else if self.cursor.line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.line + 1);
            self.lines[self.cursor.line].push_str(&next);
            true
        } else {
            false
        }
    }

    /// Delete the selected range, moving the cursor to its start.
    ///
    /// A no-op (returning `false`) when there is no live selection.
    pub fn delete_selection(&mut self) -> bool {
        if !self.selection.is_selected() {
            return false;
        }

        let (start, end) = self.selection.normalized();
        if start.line == end.line {
            remove_char_range(&mut self.lines[start.line], start.column, end.column);
        } else {
            let suffix_at = byte_of(&self.lines[end.line], end.column);
            let suffix = self.lines[end.line][suffix_at..].to_string();
            let prefix_at = byte_of(&self.lines[start.line], start.column);
            self.lines[start.line].truncate(prefix_at);
            self.lines[start.line].push_str(&suffix);
            self.lines.drain(start.line + 1..=end.line);
        }
        self.cursor = start;
        self.selection.clear();
        true
    }

    /// Text covered by the selection, joined with `\n`. `None` without a live selection.
    pub fn selected_text(&self) -> Option<String> {
        if !self.selection.is_selected() {
            return None;
        }

        let (start, end) = self.selection.normalized();
        if start.line == end.line {
            let line = &self.lines[start.line];
            let s = byte_of(line, start.column);
            let e = byte_of(line, end.column);
            return Some(line[s..e].to_string());
        }

        let mut out = String::new();
        for i in start.line..=end.line {
            let line = &self.lines[i];
            if i == start.line {
                out.push_str(&line[byte_of(line, start.column)..]);
            } else if i == end.line {
                out.push_str(&line[..byte_of(line, end.column)]);
            } else {
                out.push_str(line);
            }
            if i < end.line {
                out.push('\n');
            }
        }
        Some(out)
    }

    /// Insert a copy of the cursor's line immediately below it; the cursor stays put.
    pub fn duplicate_current_line(&mut self) {
        let copy = self.lines[self.cursor.line].clone();
        self.lines.insert(self.cursor.line + 1, copy);
    }

    /// Remove the cursor's line. Refused (returning `false`) when it is the only line.
    pub fn delete_current_line(&mut self) -> bool {
        if self.lines.len() == 1 {
            return false;
        }
        self.lines.remove(self.cursor.line);
        let line = self.cursor.line.min(self.lines.len() - 1);
        let column = self.cursor.column.min(char_len(&self.lines[line]));
        self.cursor = Position::new(line, column);
        self.selection.clear();
        true
    }

    /// Select the full current line, leaving the cursor at its end.
    pub fn select_current_line(&mut self) {
        let line = self.cursor.line;
        self.selection = Selection {
            anchor: Position::new(line, 0),
            focus: Position::new(line, char_len(&self.lines[line])),
            active: true,
        };
        self.cursor = self.selection.focus;
    }

    /// Select the whole buffer, leaving the cursor at its end.
    pub fn select_all(&mut self) {
        let last = self.lines.len() - 1;
        self.selection = Selection {
            anchor: Position::new(0, 0),
            focus: Position::new(last, char_len(&self.lines[last])),
            active: true,
        };
        self.cursor = self.selection.focus;
    }
}
