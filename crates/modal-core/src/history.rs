//! Bounded, linear undo/redo history.
//!
//! History is snapshot-based: before every mutating edit the session captures the
//! buffer's full line sequence and cursor, labelled with the operation that caused it.
//! The stack is bounded; on overflow the single oldest snapshot is evicted (FIFO).
//! Recording a new snapshot invalidates the redo stack.

use crate::buffer::{Buffer, Position};

/// A deep copy of a buffer's lines and cursor, labelled with the operation it precedes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The buffer's full line sequence.
    pub lines: Vec<String>,
    /// Cursor position at capture time.
    pub cursor: Position,
    /// Human-readable operation label ("insert text", "paste", ...).
    pub label: String,
}

impl Snapshot {
    /// Capture the current state of `buffer`.
    pub fn capture(buffer: &Buffer, label: &str) -> Self {
        Self {
            lines: buffer.lines().to_vec(),
            cursor: buffer.cursor(),
            label: label.to_string(),
        }
    }

    /// Restore this snapshot into `buffer`, clearing any selection.
    pub fn restore(&self, buffer: &mut Buffer) {
        buffer.lines = self.lines.clone();
        buffer.cursor = self.cursor;
        buffer.selection.clear();
    }
}

/// Bounded linear undo/redo stacks for one pane.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
    max_depth: usize,
}

impl History {
    /// Create an empty history bounded to `max_depth` snapshots per stack.
    ///
    /// A `max_depth` of 0 disables history: nothing is ever retained.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Returns `true` if there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Current undo stack depth.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Current redo stack depth.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo.len() >= self.max_depth {
            let evicted = self.undo.remove(0);
            log::trace!("history: evicted oldest snapshot ({})", evicted.label);
        }
        self.undo.push(snapshot);
    }

    /// Record a new pre-edit snapshot. Any redo history is invalidated.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.push_undo(snapshot);
        self.redo.clear();
    }

    /// Pop the most recent undo snapshot, pushing `current` onto the redo stack.
    ///
    /// Returns `None` (leaving `current` unused) when there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current);
        Some(snapshot)
    }

    /// Pop the most recent redo snapshot, pushing `current` onto the undo stack.
    ///
    /// Returns `None` when there is nothing to redo. Does not invalidate redo history.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.redo.pop()?;
        self.push_undo(current);
        Some(snapshot)
    }
}
