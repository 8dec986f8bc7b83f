//! Literal forward search with wraparound, and find-and-replace-next.
//!
//! Queries are plain substrings: they are escaped and compiled into a [`regex::Regex`]
//! so matching stays byte-exact while positions are reported as **character** columns.

use crate::buffer::{Buffer, EditError, Position, byte_of, char_len};
use crate::config::Limits;
use regex::Regex;

fn compile_literal(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    // Escaped literals always compile.
    Regex::new(&regex::escape(pattern)).ok()
}

/// Char column of the first match in `line` at or after `from_col`.
fn find_in_line(re: &Regex, line: &str, from_col: usize) -> Option<usize> {
    let from_byte = byte_of(line, from_col);
    let m = re.find_at(line, from_byte)?;
    Some(char_len(&line[..m.start()]))
}

/// Find the next occurrence of `pattern`, scanning forward from the cursor with
/// wraparound.
///
/// - On the starting row, the scan begins at the cursor column (inclusive); on every
///   later row it begins at column 0.
/// - After reaching the end of the buffer the scan wraps to row 0; on the second visit
///   to the starting row, only a match strictly before the original column counts, so
///   the same hit is never re-reported.
/// - Returns `None` for an empty pattern or when there is no match anywhere; the
///   buffer is never touched.
pub fn search_forward(buffer: &Buffer, pattern: &str) -> Option<Position> {
    let re = compile_literal(pattern)?;
    let start = buffer.cursor();

    for line_idx in start.line..buffer.line_count() {
        let from_col = if line_idx == start.line { start.column } else { 0 };
        if let Some(col) = find_in_line(&re, buffer.line(line_idx)?, from_col) {
            return Some(Position::new(line_idx, col));
        }
    }

    for line_idx in 0..=start.line {
        if let Some(col) = find_in_line(&re, buffer.line(line_idx)?, 0)
            && (line_idx < start.line || col < start.column)
        {
            return Some(Position::new(line_idx, col));
        }
    }

    None
}

/// Result of a [`replace_next`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The occurrence at the cursor was replaced; the cursor advanced past the
    /// inserted text.
    Replaced,
    /// The cursor was not on an occurrence; it was moved to the next one.
    MovedTo(Position),
    /// No occurrence exists anywhere in the buffer.
    NotFound,
    /// The pattern is empty; nothing was done.
    EmptyPattern,
}

/// Replace the occurrence of `pattern` starting exactly at the cursor, or move the
/// cursor to the next occurrence.
///
/// This is find-and-replace-next, not replace-all: each call replaces at most one
/// occurrence. Replacement honors the line cap; on rejection the buffer is untouched.
pub fn replace_next(
    buffer: &mut Buffer,
    pattern: &str,
    replacement: &str,
    limits: &Limits,
) -> Result<ReplaceOutcome, EditError> {
    if pattern.is_empty() {
        return Ok(ReplaceOutcome::EmptyPattern);
    }

    let cursor = buffer.cursor();
    let line = &buffer.lines[cursor.line];
    let at = byte_of(line, cursor.column);

    if line[at..].starts_with(pattern) {
        let resulting = char_len(line) - char_len(pattern) + char_len(replacement);
        if resulting > limits.max_line_chars {
            return Err(EditError::LineTooLong {
                length: resulting,
                max: limits.max_line_chars,
            });
        }

        let end = at + pattern.len();
        buffer.lines[cursor.line].replace_range(at..end, replacement);
        buffer.cursor.column = cursor.column + char_len(replacement);
        return Ok(ReplaceOutcome::Replaced);
    }

    match search_forward(buffer, pattern) {
        Some(pos) => {
            buffer.set_cursor(pos);
            Ok(ReplaceOutcome::MovedTo(pos))
        }
        None => Ok(ReplaceOutcome::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraparound_does_not_re_report_the_starting_hit() {
        let mut buffer = Buffer::from_lines(vec![
            "foo".to_string(),
            "bar".to_string(),
            "foo".to_string(),
        ]);
        buffer.set_cursor(Position::new(2, 0));
        assert_eq!(search_forward(&buffer, "foo"), Some(Position::new(0, 0)));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let buffer = Buffer::from_lines(vec!["a.*b".to_string(), "axxb".to_string()]);
        assert_eq!(search_forward(&buffer, ".*"), Some(Position::new(0, 1)));
    }
}
