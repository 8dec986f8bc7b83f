//! Pane lifecycle: the ordered pane list, the active index, and split/close/switch.
//!
//! A [`Pane`] owns one [`Buffer`] plus file metadata and an opaque layout rectangle the
//! core never reads (the renderer collaborator consumes it). [`PaneSet`] owns the
//! ordered panes; there is always at least one, and exactly one is active.

use crate::buffer::Buffer;

/// Filename sentinel for a pane that has never been saved.
pub const UNTITLED: &str = "Untitled";

/// Opaque identifier for a pane in a [`PaneSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PaneId(u64);

impl PaneId {
    /// Get the underlying numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Host-provided layout geometry for a pane. The core stores it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

/// Which way newly split panes are laid out (a layout hint only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitOrientation {
    /// Panes side by side.
    #[default]
    Vertical,
    /// Panes stacked.
    Horizontal,
}

/// One editable pane: a buffer plus file metadata and layout geometry.
#[derive(Debug)]
pub struct Pane {
    pub(crate) id: PaneId,
    pub(crate) buffer: Buffer,
    pub(crate) filename: String,
    pub(crate) modified: bool,
    pub(crate) rect: PaneRect,
}

impl Pane {
    fn new(id: PaneId) -> Self {
        Self {
            id,
            buffer: Buffer::new(),
            filename: UNTITLED.to_string(),
            modified: false,
            rect: PaneRect::default(),
        }
    }

    /// This pane's id.
    pub fn id(&self) -> PaneId {
        self.id
    }

    /// The pane's buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// The pane's filename (the `"Untitled"` sentinel until saved or loaded).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whether the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Host-set layout geometry.
    pub fn rect(&self) -> PaneRect {
        self.rect
    }

    /// Store layout geometry for the renderer collaborator.
    pub fn set_rect(&mut self, rect: PaneRect) {
        self.rect = rect;
    }
}

/// The ordered list of panes and the active-pane index.
#[derive(Debug)]
pub struct PaneSet {
    panes: Vec<Pane>,
    active_index: usize,
    orientation: SplitOrientation,
    next_pane_id: u64,
}

impl Default for PaneSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PaneSet {
    /// Create a pane set holding a single empty pane.
    pub fn new() -> Self {
        Self {
            panes: vec![Pane::new(PaneId(0))],
            active_index: 0,
            orientation: SplitOrientation::default(),
            next_pane_id: 1,
        }
    }

    /// Number of panes (always at least 1).
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// A pane set is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All panes, in order.
    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    /// Mutable access to a pane by index.
    pub fn pane_mut(&mut self, index: usize) -> Option<&mut Pane> {
        self.panes.get_mut(index)
    }

    /// Index of the active pane.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns `true` if `index` is the active pane.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_index
    }

    /// The active pane.
    pub fn active(&self) -> &Pane {
        &self.panes[self.active_index]
    }

    /// The active pane, mutably.
    pub fn active_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.active_index]
    }

    /// The current split orientation hint.
    pub fn orientation(&self) -> SplitOrientation {
        self.orientation
    }

    fn split(&mut self, orientation: SplitOrientation) -> PaneId {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;

        let source = self.active();
        let mut pane = Pane::new(id);
        pane.buffer = Buffer::from_lines(source.buffer.lines().to_vec());
        pane.filename = source.filename.clone();
        self.panes.push(pane);
        self.orientation = orientation;
        id
    }

    /// Append a new pane cloned from the active pane, laid out side by side.
    ///
    /// The active index does not change.
    pub fn split_vertical(&mut self) -> PaneId {
        self.split(SplitOrientation::Vertical)
    }

    /// Append a new pane cloned from the active pane, laid out stacked.
    ///
    /// The active index does not change.
    pub fn split_horizontal(&mut self) -> PaneId {
        self.split(SplitOrientation::Horizontal)
    }

    /// Remove the active pane, clamping the active index.
    ///
    /// Refused (returning `None`) when only one pane remains; otherwise returns the
    /// id of the closed pane.
    pub fn close_active(&mut self) -> Option<PaneId> {
        if self.panes.len() <= 1 {
            return None;
        }
        let removed = self.panes.remove(self.active_index);
        if self.active_index >= self.panes.len() {
            self.active_index = self.panes.len() - 1;
        }
        Some(removed.id)
    }

    /// Cycle to the next pane in order.
    pub fn cycle_active(&mut self) {
        self.active_index = (self.active_index + 1) % self.panes.len();
    }

    /// Activate pane `index` if it is in range; returns whether it was.
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.panes.len() {
            self.active_index = index;
            true
        } else {
            false
        }
    }
}
