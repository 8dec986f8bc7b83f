#![warn(missing_docs)]
//! Modal Core - Headless Modal Text-Editing Kernel
//!
//! # Overview
//!
//! `modal-core` is a headless, deterministic text-editing engine with a modal input
//! model. It owns buffer content, cursor, selection, bounded undo/redo, split panes,
//! search/replace, and an ex-style command language. It does not render anything and
//! never talks to the platform directly: the embedding shell drives it with key
//! events and acts on the [`HostRequest`] signals it returns.
//!
//! # Core Features
//!
//! - **Line-oriented buffers**: `Vec<String>` content, never empty, char-offset coordinates
//! - **Grapheme-aware editing**: backspace/delete/arrow steps respect grapheme clusters
//! - **Bounded snapshot history**: per-pane undo/redo with FIFO eviction
//! - **Modal input**: Insert and Command modes plus Search/Replace overlays
//! - **Split panes**: vertical/horizontal splits over independent buffers
//! - **Literal search**: forward with wraparound, plus replace-at-cursor stepping
//! - **Capped file I/O**: line-length and line-count limits with visible truncation
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  EditorSession (modes, key routing)         │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Commands & Search (ex language, find)      │  ← Interpreters
//! ├─────────────────────────────────────────────┤
//! │  PaneSet & History (panes, undo/redo)       │  ← Session State
//! ├─────────────────────────────────────────────┤
//! │  Buffer & Selection (lines, cursor)         │  ← Edit Engine
//! ├─────────────────────────────────────────────┤
//! │  Storage & Host traits (files, clipboard)   │  ← Boundaries
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use modal_core::{EditorSession, Key, KeyEvent, Mode};
//!
//! let mut session = EditorSession::new();
//!
//! // Type some text in Insert mode
//! for ch in "hello".chars() {
//!     session.handle_key(KeyEvent::char(ch));
//! }
//! assert_eq!(session.active_buffer().line(0), Some("hello"));
//!
//! // Switch to Command mode and back
//! session.handle_key(KeyEvent::char(':'));
//! assert_eq!(session.mode(), Mode::Command);
//! session.handle_key(KeyEvent::char('i'));
//! assert_eq!(session.mode(), Mode::Insert);
//!
//! // Undo the typing
//! session.handle_key(KeyEvent::ctrl(Key::Char('z')));
//! ```

pub mod buffer;
pub mod commands;
pub mod config;
pub mod history;
pub mod host;
pub mod search;
pub mod selection;
pub mod state;
pub mod storage;
pub mod workspace;

pub use buffer::{Buffer, EditError, Motion, Position, split_text_lines};
pub use commands::{CommandError, ExCommand, HELP_TEXT};
pub use config::{CaptureLimits, ConfigError, Limits, TRUNCATION_MARKER};
pub use history::{History, Snapshot};
pub use host::{
    Clipboard, DirEntry, DirectoryBrowser, MemoryClipboard, ShellExecutor, ShellOutput,
};
pub use search::{ReplaceOutcome, search_forward};
pub use selection::Selection;
pub use state::{EditorSession, HostRequest, Key, KeyEvent, Mode, Overlay};
pub use storage::{LoadedFile, StorageError, load_lines, save_lines};
pub use workspace::{Pane, PaneId, PaneRect, PaneSet, SplitOrientation, UNTITLED};
