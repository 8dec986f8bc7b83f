//! Anchor/focus selection model.
//!
//! A selection is a pair of buffer positions plus an `active` flag. The anchor is the
//! position where selecting started; the focus follows the cursor. Endpoints are kept in
//! the order they were produced and only normalized on extraction.

use crate::buffer::Position;

/// An anchor/focus range over buffer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Position where the selection was anchored.
    pub anchor: Position,
    /// Position the selection currently extends to (follows the cursor).
    pub focus: Position,
    /// Whether a selection gesture is in progress.
    pub active: bool,
}

impl Selection {
    /// Clear the selection.
    pub fn clear(&mut self) {
        self.active = false;
    }

    /// Returns `true` if there is a usable selection.
    ///
    /// A selection counts only when it is active **and** non-degenerate
    /// (`anchor != focus`). Every extraction/deletion call site uses this
    /// single predicate.
    pub fn is_selected(&self) -> bool {
        self.active && self.anchor != self.focus
    }

    /// Begin a selection at `at` if none is in progress.
    pub fn begin_at(&mut self, at: Position) {
        if !self.active {
            self.anchor = at;
            self.active = true;
        }
    }

    /// Order the endpoints lexicographically as `(start, end)`.
    pub fn normalized(&self) -> (Position, Position) {
        if self.anchor <= self.focus {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }
}
