//! The editor session: modes, overlays, input routing, and every operation boundary.
//!
//! [`EditorSession`] is the single owned state value for one editing session; nothing in
//! the engine is global. It owns the pane set, one bounded undo/redo history per pane,
//! the mode/overlay state machine, and the status line. Input events reach
//! [`EditorSession::handle_key`], which routes them to the edit engine (Insert mode),
//! the command interpreter (Command mode), or the active overlay.
//!
//! Host-facing side effects (quit, save-as dialogs) are *signaled* through
//! [`HostRequest`], never performed here. Clipboard and shell access go through the
//! traits in [`crate::host`].
//!
//! Every failure is handled at the operation boundary: it becomes status text and the
//! session state stays unchanged and invariant-preserving.

use crate::buffer::{Buffer, EditError, Motion, Position};
use crate::commands::{self, CommandError, ExCommand, HELP_TEXT};
use crate::config::Limits;
use crate::history::{History, Snapshot};
use crate::host::{Clipboard, ShellExecutor, truncate_capture};
use crate::search::{self, ReplaceOutcome};
use crate::storage::{self, StorageError};
use crate::workspace::{Pane, PaneId, PaneSet, UNTITLED};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level input-interpretation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Printable input mutates the active buffer.
    #[default]
    Insert,
    /// Characters are collected into the command buffer.
    Command,
}

/// A transient overlay that redirects character input regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// No overlay active.
    #[default]
    None,
    /// Characters append to the search pattern; submit runs the search.
    Search,
    /// Characters fill the pattern, then (after one submit) the replacement.
    Replace {
        /// Whether input currently fills the replacement string.
        filling_replacement: bool,
    },
}

/// Named keys understood by [`EditorSession::handle_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character key.
    Char(char),
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Start of line.
    Home,
    /// End of line.
    End,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The pressed key.
    pub key: Key,
    /// Shift held (extends the selection on cursor motion).
    pub shift: bool,
    /// Ctrl held (shortcut chords).
    pub ctrl: bool,
}

impl KeyEvent {
    /// A plain key press.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
        }
    }

    /// A plain character press.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// A shifted key press.
    pub fn shifted(key: Key) -> Self {
        Self {
            key,
            shift: true,
            ctrl: false,
        }
    }

    /// A Ctrl chord.
    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: true,
        }
    }
}

/// Outward signals for the embedding shell. The core never quits the process or opens
/// dialogs itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    /// Nothing to do.
    None,
    /// The session asked to close.
    Quit,
    /// The active pane has no filename; the host should choose a path and call
    /// [`EditorSession::save_active_as`].
    SaveAs,
}

/// One editing session: panes, per-pane histories, mode state, and the status line.
#[derive(Debug)]
pub struct EditorSession {
    panes: PaneSet,
    histories: HashMap<PaneId, History>,
    limits: Limits,
    mode: Mode,
    overlay: Overlay,
    command_buffer: String,
    pattern: String,
    replacement: String,
    status: String,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create a session with default limits and one empty pane.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create a session with explicit limits.
    pub fn with_limits(limits: Limits) -> Self {
        let panes = PaneSet::new();
        let mut histories = HashMap::new();
        histories.insert(panes.active().id(), History::new(limits.max_undo_depth));
        Self {
            panes,
            histories,
            limits,
            mode: Mode::default(),
            overlay: Overlay::default(),
            command_buffer: String::new(),
            pattern: String::new(),
            replacement: String::new(),
            status: "INSERT MODE".to_string(),
        }
    }

    /// The pane set.
    pub fn panes(&self) -> &PaneSet {
        &self.panes
    }

    /// Mutable pane access (for host-side layout updates).
    pub fn panes_mut(&mut self) -> &mut PaneSet {
        &mut self.panes
    }

    /// The active pane.
    pub fn active_pane(&self) -> &Pane {
        self.panes.active()
    }

    /// The active pane's buffer.
    pub fn active_buffer(&self) -> &Buffer {
        &self.panes.active().buffer
    }

    /// The active pane's filename (the `"Untitled"` sentinel until saved or loaded).
    pub fn active_filename(&self) -> &str {
        self.panes.active().filename()
    }

    /// The session limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Current top-level mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current overlay state.
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// The command buffer collected in Command mode.
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// The current search pattern.
    pub fn search_pattern(&self) -> &str {
        &self.pattern
    }

    /// The current replacement string.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Undo depth of the active pane's history.
    pub fn undo_depth(&self) -> usize {
        self.histories
            .get(&self.panes.active().id())
            .map_or(0, History::undo_depth)
    }

    /// Redo depth of the active pane's history.
    pub fn redo_depth(&self) -> usize {
        self.histories
            .get(&self.panes.active().id())
            .map_or(0, History::redo_depth)
    }

    fn history_mut(&mut self, id: PaneId) -> &mut History {
        let depth = self.limits.max_undo_depth;
        self.histories
            .entry(id)
            .or_insert_with(|| History::new(depth))
    }

    /// Run a mutating edit on the active buffer, recording a pre-edit snapshot.
    ///
    /// The snapshot is pushed only when the edit reports a change; on a cap rejection
    /// the buffer is restored from the snapshot, so the whole operation is atomic.
    fn edit_active(
        &mut self,
        label: &str,
        f: impl FnOnce(&mut Buffer, &Limits) -> Result<bool, EditError>,
    ) -> Result<bool, EditError> {
        let limits = self.limits.clone();
        let pane = self.panes.active_mut();
        let id = pane.id();
        let snapshot = Snapshot::capture(&pane.buffer, label);

        match f(&mut pane.buffer, &limits) {
            Ok(true) => {
                pane.modified = true;
                self.history_mut(id).record(snapshot);
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(err) => {
                snapshot.restore(&mut pane.buffer);
                self.status = err.to_string();
                Err(err)
            }
        }
    }

    // ----- Edit engine operations -----

    /// Insert a single-segment text chunk at the cursor, replacing any live selection.
    pub fn insert_text(&mut self, text: &str) -> Result<(), EditError> {
        self.edit_active("insert text", |buffer, limits| {
            buffer.delete_selection();
            buffer.insert_text(text, limits)?;
            Ok(true)
        })
        .map(|_| ())
    }

    /// Insert text that may contain line separators, replacing any live selection.
    pub fn insert_multiline_text(&mut self, text: &str) -> Result<(), EditError> {
        self.edit_active("insert text", |buffer, limits| {
            buffer.delete_selection();
            buffer.insert_multiline_text(text, limits)?;
            Ok(true)
        })
        .map(|_| ())
    }

    /// Split the current line at the cursor (replacing any live selection).
    pub fn insert_newline(&mut self) {
        let _ = self.edit_active("new line", |buffer, _| {
            buffer.delete_selection();
            buffer.insert_newline();
            Ok(true)
        });
    }

    /// Backspace: delete the selection, one grapheme left, or join with the line above.
    pub fn backspace(&mut self) {
        let _ = self.edit_active("backspace", |buffer, _| Ok(buffer.backspace()));
    }

    /// Forward delete: delete the selection, one grapheme, or join the line below.
    pub fn delete_forward(&mut self) {
        let _ = self.edit_active("delete", |buffer, _| Ok(buffer.delete_forward()));
    }

    /// Delete the selected range (a no-op without a live selection).
    pub fn delete_selection(&mut self) {
        let _ = self.edit_active("delete selection", |buffer, _| {
            Ok(buffer.delete_selection())
        });
    }

    /// Duplicate the cursor's line below itself.
    pub fn duplicate_line(&mut self) {
        let _ = self.edit_active("duplicate line", |buffer, _| {
            buffer.duplicate_current_line();
            Ok(true)
        });
    }

    /// Delete the cursor's line; refused on the last remaining line.
    pub fn delete_line(&mut self) {
        if let Ok(false) =
            self.edit_active("delete line", |buffer, _| Ok(buffer.delete_current_line()))
        {
            self.status = "Cannot delete the last line".to_string();
        }
    }

    /// Select the full current line.
    pub fn select_line(&mut self) {
        self.panes.active_mut().buffer.select_current_line();
    }

    /// Select the whole buffer.
    pub fn select_all(&mut self) {
        self.panes.active_mut().buffer.select_all();
        self.status = "All text selected".to_string();
    }

    /// Apply a cursor motion; with `extend`, the selection follows the cursor.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) {
        self.panes.active_mut().buffer.move_cursor(motion, extend);
    }

    // ----- Undo / redo -----

    /// Undo the most recent edit of the active pane.
    pub fn undo(&mut self) {
        let current = Snapshot::capture(&self.panes.active().buffer, "redo");
        let id = self.panes.active().id();
        match self.history_mut(id).undo(current) {
            Some(snapshot) => {
                let pane = self.panes.active_mut();
                snapshot.restore(&mut pane.buffer);
                pane.modified = true;
                self.status = format!("Undone: {}", snapshot.label);
            }
            None => self.status = "Nothing to undo".to_string(),
        }
    }

    /// Redo the most recently undone edit of the active pane.
    pub fn redo(&mut self) {
        let current = Snapshot::capture(&self.panes.active().buffer, "undo");
        let id = self.panes.active().id();
        match self.history_mut(id).redo(current) {
            Some(snapshot) => {
                let pane = self.panes.active_mut();
                snapshot.restore(&mut pane.buffer);
                pane.modified = true;
                self.status = format!("Redone: {}", snapshot.label);
            }
            None => self.status = "Nothing to redo".to_string(),
        }
    }

    // ----- Clipboard -----

    /// Copy the selected text to the clipboard collaborator.
    pub fn copy_selection(&mut self, clipboard: &mut dyn Clipboard) {
        if let Some(text) = self.panes.active().buffer.selected_text() {
            clipboard.copy(&text);
            self.status = "Copied to clipboard".to_string();
        }
    }

    /// Copy the selected text, then delete it.
    pub fn cut_selection(&mut self, clipboard: &mut dyn Clipboard) {
        if let Some(text) = self.panes.active().buffer.selected_text() {
            clipboard.copy(&text);
            let _ = self.edit_active("cut", |buffer, _| Ok(buffer.delete_selection()));
            self.status = "Cut to clipboard".to_string();
        }
    }

    /// Insert the clipboard contents at the cursor, replacing any live selection.
    ///
    /// Multi-line text is split with the same separator convention as file load.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        let Some(text) = clipboard.paste() else {
            self.status = "Clipboard is empty".to_string();
            return;
        };
        let pasted = self.edit_active("paste", |buffer, limits| {
            buffer.delete_selection();
            buffer.insert_multiline_text(&text, limits)?;
            Ok(true)
        });
        if pasted.is_ok() {
            self.status = "Pasted from clipboard".to_string();
        }
    }

    // ----- Search / replace -----

    /// Enter the search overlay, clearing the pattern.
    pub fn start_search(&mut self) {
        self.overlay = Overlay::Search;
        self.pattern.clear();
        self.status = "Search: ".to_string();
    }

    /// Enter the replace overlay, clearing pattern and replacement.
    pub fn start_replace(&mut self) {
        self.overlay = Overlay::Replace {
            filling_replacement: false,
        };
        self.pattern.clear();
        self.replacement.clear();
        self.status = "Replace: ".to_string();
    }

    /// Exit any overlay without effect.
    pub fn cancel_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Search forward (with wraparound) for `pattern`, moving the cursor to the hit.
    ///
    /// The pattern is remembered for subsequent [`EditorSession::replace_next`] calls.
    /// On a miss the cursor does not move.
    pub fn search(&mut self, pattern: &str) -> Option<Position> {
        self.pattern = pattern.to_string();
        match search::search_forward(&self.panes.active().buffer, pattern) {
            Some(pos) => {
                self.panes.active_mut().buffer.set_cursor(pos);
                self.status = format!("Found: {}", pattern);
                Some(pos)
            }
            None => {
                self.status = format!("Not found: {}", pattern);
                None
            }
        }
    }

    /// Replace the occurrence at the cursor with the stored replacement, or move to
    /// the next occurrence of the stored pattern.
    pub fn replace_next(&mut self) {
        if self.pattern.is_empty() {
            return;
        }
        let pattern = self.pattern.clone();
        let replacement = self.replacement.clone();

        let mut outcome = ReplaceOutcome::NotFound;
        let result = self.edit_active("replace", |buffer, limits| {
            outcome = search::replace_next(buffer, &pattern, &replacement, limits)?;
            Ok(matches!(outcome, ReplaceOutcome::Replaced))
        });

        if result.is_err() {
            return;
        }
        match outcome {
            ReplaceOutcome::Replaced => {
                self.status = format!("Replaced: {} -> {}", pattern, replacement);
            }
            ReplaceOutcome::MovedTo(_) => {
                self.status = format!("Found: {}", pattern);
            }
            ReplaceOutcome::NotFound => {
                self.status = format!("Not found: {}", pattern);
            }
            ReplaceOutcome::EmptyPattern => {}
        }
    }

    // ----- Panes -----

    /// Split vertically, cloning the active pane.
    pub fn split_vertical(&mut self) {
        let id = self.panes.split_vertical();
        let depth = self.limits.max_undo_depth;
        self.histories.insert(id, History::new(depth));
        self.status = "Vertical split created".to_string();
    }

    /// Split horizontally, cloning the active pane.
    pub fn split_horizontal(&mut self) {
        let id = self.panes.split_horizontal();
        let depth = self.limits.max_undo_depth;
        self.histories.insert(id, History::new(depth));
        self.status = "Horizontal split created".to_string();
    }

    /// Close the active pane (refused on the last one). Its history is dropped.
    pub fn close_pane(&mut self) -> bool {
        match self.panes.close_active() {
            Some(id) => {
                self.histories.remove(&id);
                self.status = "Pane closed".to_string();
                true
            }
            None => {
                self.status = "Cannot close the last pane".to_string();
                false
            }
        }
    }

    /// Cycle to the next pane.
    pub fn switch_pane(&mut self) {
        if self.panes.len() > 1 {
            self.panes.cycle_active();
            self.status = format!("Switched to pane {}", self.panes.active_index() + 1);
        }
    }

    /// Activate pane `index` if it exists.
    pub fn switch_to_pane(&mut self, index: usize) -> bool {
        if self.panes.activate(index) {
            self.status = format!("Switched to pane {}", index + 1);
            true
        } else {
            false
        }
    }

    // ----- Files -----

    /// Reset the active pane to a fresh document: one empty line, the `"Untitled"`
    /// filename, no modification flag, and an empty history.
    pub fn new_file(&mut self) {
        let depth = self.limits.max_undo_depth;
        let pane = self.panes.active_mut();
        let id = pane.id();
        pane.buffer = Buffer::new();
        pane.filename = UNTITLED.to_string();
        pane.modified = false;
        self.histories.insert(id, History::new(depth));
        self.status = "New file".to_string();
    }

    /// Load `path` into the active pane.
    ///
    /// All-or-nothing: on error the pane keeps its current content and the error is
    /// also reported in the status line. A successful load resets the pane's history.
    pub fn open_file(&mut self, path: &Path) -> Result<(), StorageError> {
        let loaded = match storage::load_lines(path, &self.limits) {
            Ok(loaded) => loaded,
            Err(err) => {
                self.status = format!("Error opening file: {}", err);
                return Err(err);
            }
        };

        let truncated = loaded.truncated;
        let depth = self.limits.max_undo_depth;
        let pane = self.panes.active_mut();
        let id = pane.id();
        pane.buffer = Buffer::from_lines(loaded.lines);
        pane.filename = path.display().to_string();
        pane.modified = false;
        self.histories.insert(id, History::new(depth));

        self.status = if truncated {
            format!("File loaded (truncated): {}", path.display())
        } else {
            format!("File loaded: {}", path.display())
        };
        Ok(())
    }

    /// Save the active pane to its filename.
    ///
    /// Returns `Ok(`[`HostRequest::SaveAs`]`)` when the pane is still `"Untitled"`.
    /// A save failure is reported in the status line and returned as an error so
    /// callers can gate follow-up actions on it; the `modified` flag stays unchanged.
    pub fn save_active(&mut self) -> Result<HostRequest, StorageError> {
        if self.panes.active().filename() == UNTITLED {
            self.status = "No filename".to_string();
            return Ok(HostRequest::SaveAs);
        }
        let path = PathBuf::from(self.panes.active().filename());
        match storage::save_lines(&path, self.panes.active().buffer.lines()) {
            Ok(()) => {
                self.panes.active_mut().modified = false;
                self.status = format!("File saved: {}", path.display());
                Ok(HostRequest::None)
            }
            Err(err) => {
                self.status = format!("Error saving file: {}", err);
                Err(err)
            }
        }
    }

    /// Save the active pane to `path`, adopting it as the pane's filename on success.
    pub fn save_active_as(&mut self, path: &Path) -> Result<(), StorageError> {
        match storage::save_lines(path, self.panes.active().buffer.lines()) {
            Ok(()) => {
                let pane = self.panes.active_mut();
                pane.filename = path.display().to_string();
                pane.modified = false;
                self.status = format!("File saved: {}", path.display());
                Ok(())
            }
            Err(err) => {
                self.status = format!("Error saving file: {}", err);
                Err(err)
            }
        }
    }

    // ----- Shell -----

    /// Run `command_line` through the shell collaborator and insert its captured
    /// output at the cursor, bounded by the capture caps.
    pub fn insert_shell_output(
        &mut self,
        shell: &mut dyn ShellExecutor,
        command_line: &str,
    ) -> std::io::Result<()> {
        log::debug!("shell: {:?}", command_line);
        let output = match shell.execute(command_line) {
            Ok(output) => output,
            Err(err) => {
                self.status = format!("Command failed: {}", err);
                return Err(err);
            }
        };

        let (captured, truncated) = truncate_capture(&output.captured, &self.limits.shell_capture);
        let inserted = self.edit_active("shell output", |buffer, limits| {
            buffer.delete_selection();
            buffer.insert_multiline_text(&captured, limits)?;
            Ok(true)
        });

        if inserted.is_ok() {
            self.status = if truncated {
                "Command output inserted (truncated)".to_string()
            } else {
                "Command output inserted".to_string()
            };
        }
        Ok(())
    }

    // ----- Command interpreter -----

    /// Move the cursor to 1-based line `n` (column 0).
    ///
    /// Out-of-range values report an error and leave the cursor unchanged.
    pub fn goto_line(&mut self, line: usize) -> Result<(), CommandError> {
        let line_count = self.panes.active().buffer.line_count();
        if line == 0 || line > line_count {
            let err = CommandError::LineOutOfRange { line, line_count };
            self.status = err.to_string();
            return Err(err);
        }
        self.panes
            .active_mut()
            .buffer
            .set_cursor(Position::new(line - 1, 0));
        Ok(())
    }

    /// Parse and execute the collected command buffer, then clear it.
    ///
    /// Policy: the session stays in Command mode after execution.
    pub fn execute_command(&mut self) -> HostRequest {
        let input = std::mem::take(&mut self.command_buffer);
        log::debug!("ex command: {:?}", input);
        match commands::parse(&input) {
            Ok(command) => self.run_ex_command(command),
            Err(err) => {
                self.status = err.to_string();
                HostRequest::None
            }
        }
    }

    fn run_ex_command(&mut self, command: ExCommand) -> HostRequest {
        match command {
            ExCommand::Quit => {
                if self.panes.len() > 1 {
                    self.close_pane();
                    HostRequest::None
                } else {
                    HostRequest::Quit
                }
            }
            ExCommand::Write => self.save_active().unwrap_or(HostRequest::None),
            ExCommand::WriteQuit => match self.save_active() {
                Ok(HostRequest::SaveAs) => HostRequest::SaveAs,
                // The save failed; the status already explains why, and the
                // quit half must not run.
                Err(_) => HostRequest::None,
                Ok(_) => {
                    if self.panes.len() > 1 {
                        self.close_pane();
                        HostRequest::None
                    } else {
                        HostRequest::Quit
                    }
                }
            },
            ExCommand::VerticalSplit => {
                self.split_vertical();
                HostRequest::None
            }
            ExCommand::HorizontalSplit => {
                self.split_horizontal();
                HostRequest::None
            }
            ExCommand::Close => {
                self.close_pane();
                HostRequest::None
            }
            ExCommand::Goto(line) => {
                let _ = self.goto_line(line);
                HostRequest::None
            }
            ExCommand::Help => {
                self.status = HELP_TEXT.to_string();
                HostRequest::None
            }
        }
    }

    // ----- Input routing -----

    /// Route one key event through the mode/overlay state machine.
    ///
    /// Errors never escape: they become status text. The return value carries any
    /// outward signal (quit, save-as) for the embedding shell.
    pub fn handle_key(&mut self, event: KeyEvent) -> HostRequest {
        if self.overlay != Overlay::None {
            return self.handle_overlay_key(event);
        }
        if event.ctrl {
            return self.handle_ctrl_key(event);
        }
        match self.mode {
            Mode::Insert => self.handle_insert_key(event),
            Mode::Command => self.handle_command_key(event),
        }
    }

    fn handle_overlay_key(&mut self, event: KeyEvent) -> HostRequest {
        match event.key {
            Key::Escape => self.cancel_overlay(),
            Key::Enter => match self.overlay {
                Overlay::Search => {
                    let pattern = self.pattern.clone();
                    self.overlay = Overlay::None;
                    self.search(&pattern);
                }
                Overlay::Replace {
                    filling_replacement: false,
                } => {
                    self.overlay = Overlay::Replace {
                        filling_replacement: true,
                    };
                    self.status = format!("Replace: {} -> ", self.pattern);
                }
                Overlay::Replace {
                    filling_replacement: true,
                } => {
                    // Stays open so Enter walks successive occurrences.
                    self.replace_next();
                }
                Overlay::None => {}
            },
            Key::Backspace => {
                match self.overlay {
                    Overlay::Replace {
                        filling_replacement: true,
                    } => {
                        self.replacement.pop();
                    }
                    _ => {
                        self.pattern.pop();
                    }
                }
                self.refresh_overlay_status();
            }
            Key::Char(ch) => {
                match self.overlay {
                    Overlay::Replace {
                        filling_replacement: true,
                    } => self.replacement.push(ch),
                    _ => self.pattern.push(ch),
                }
                self.refresh_overlay_status();
            }
            _ => {}
        }
        HostRequest::None
    }

    fn refresh_overlay_status(&mut self) {
        self.status = match self.overlay {
            Overlay::Search => format!("Search: {}", self.pattern),
            Overlay::Replace {
                filling_replacement: false,
            } => format!("Replace: {}", self.pattern),
            Overlay::Replace {
                filling_replacement: true,
            } => format!("Replace: {} -> {}", self.pattern, self.replacement),
            Overlay::None => return,
        };
    }

    fn handle_ctrl_key(&mut self, event: KeyEvent) -> HostRequest {
        if let Key::Char(ch) = event.key {
            match ch.to_ascii_lowercase() {
                'z' => self.undo(),
                'y' => self.redo(),
                'n' => self.new_file(),
                'a' => self.select_all(),
                'f' => self.start_search(),
                'h' => self.start_replace(),
                'd' => self.duplicate_line(),
                'k' => self.delete_line(),
                'l' => self.select_line(),
                '1'..='9' => {
                    let index = ch as usize - '1' as usize;
                    self.switch_to_pane(index);
                }
                _ => {}
            }
        }
        HostRequest::None
    }

    fn handle_insert_key(&mut self, event: KeyEvent) -> HostRequest {
        match event.key {
            Key::Char(':') => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
                self.status = "COMMAND MODE".to_string();
            }
            Key::Char(ch) if !ch.is_control() => {
                let mut text = [0u8; 4];
                let _ = self.insert_text(ch.encode_utf8(&mut text));
            }
            Key::Left => self.move_cursor(Motion::Left, event.shift),
            Key::Right => self.move_cursor(Motion::Right, event.shift),
            Key::Up => self.move_cursor(Motion::Up, event.shift),
            Key::Down => self.move_cursor(Motion::Down, event.shift),
            Key::Home => self.move_cursor(Motion::LineStart, event.shift),
            Key::End => self.move_cursor(Motion::LineEnd, event.shift),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_forward(),
            Key::Enter => self.insert_newline(),
            Key::Tab => {
                if self.panes.len() > 1 {
                    self.switch_pane();
                } else {
                    let _ = self.insert_text("    ");
                }
            }
            Key::Escape => {
                self.panes.active_mut().buffer.selection.clear();
                self.status = "Selection cleared".to_string();
            }
            _ => {}
        }
        HostRequest::None
    }

    fn handle_command_key(&mut self, event: KeyEvent) -> HostRequest {
        match event.key {
            Key::Escape => {
                self.command_buffer.clear();
                self.status = "COMMAND MODE".to_string();
            }
            Key::Enter => return self.execute_command(),
            Key::Backspace => {
                // No-op (not a mode change) when the buffer is already empty.
                self.command_buffer.pop();
                self.status = format!(":{}", self.command_buffer);
            }
            Key::Char('i') if self.command_buffer.is_empty() => {
                self.mode = Mode::Insert;
                self.status = "INSERT MODE".to_string();
            }
            Key::Char(ch) if ch.is_alphanumeric() || ch == ' ' => {
                self.command_buffer.push(ch);
                self.status = format!(":{}", self.command_buffer);
            }
            _ => {}
        }
        HostRequest::None
    }
}
