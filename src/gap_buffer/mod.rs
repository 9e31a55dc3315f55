//! Gap buffer implementation for efficient line editing
//!
//! Storage layout: `[before_gap][gap][after_gap]`. The cursor is the end of
//! `before_gap`; inserting and deleting at the cursor only touches the gap
//! edges, and moving the cursor shifts runes across the gap one at a time.

use crate::constants::errors::{EMPTY_DELETE, INVALID_CURSOR};
use crate::constants::gap::{DEFAULT_CAPACITY, GAP_FILL, GROWTH_INCREMENT};
use crate::error::{Result, RiftError};

/// Gap buffer holding the runes of a single line
#[derive(Debug, Clone)]
pub struct GapBuffer {
    /// Backing storage including the gap
    storage: Vec<char>,
    /// Start of gap (end of before_gap, i.e. the cursor)
    pre: usize,
    /// End of gap (start of after_gap)
    post: usize,
}

impl GapBuffer {
    /// Create an empty gap buffer with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty gap buffer with room for `capacity` runes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        GapBuffer {
            storage: vec![GAP_FILL; capacity],
            pre: 0,
            post: capacity,
        }
    }

    /// Create a gap buffer holding `runes`, cursor at the end
    #[must_use]
    pub fn from_runes(runes: &[char]) -> Self {
        let mut buf = Self::with_capacity(runes.len() + DEFAULT_CAPACITY);
        buf.insert(runes);
        buf
    }

    /// Current cursor position (same as gap start)
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.pre
    }

    /// Logical length in runes, excluding the gap
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len() - (self.post - self.pre)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of free slots in the gap
    #[must_use]
    pub fn gap_len(&self) -> usize {
        self.post - self.pre
    }

    /// Total slots allocated, gap included
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Insert runes at the cursor; the cursor ends up after them
    pub fn insert(&mut self, runes: &[char]) {
        if runes.is_empty() {
            return;
        }
        if self.gap_len() <= runes.len() {
            self.grow(runes.len());
        }
        self.storage[self.pre..self.pre + runes.len()].copy_from_slice(runes);
        self.pre += runes.len();
    }

    /// Delete the rune immediately before the cursor and return it
    pub fn delete(&mut self) -> Result<char> {
        if self.pre == 0 {
            return Err(RiftError::precondition(
                EMPTY_DELETE,
                "Cannot delete before cursor position 0",
            ));
        }
        self.pre -= 1;
        let ch = self.storage[self.pre];
        self.storage[self.pre] = GAP_FILL;
        Ok(ch)
    }

    /// Move the gap so that logical position `pos` becomes the cursor
    pub fn set_cursor(&mut self, pos: usize) -> Result<()> {
        let len = self.len();
        if pos > len {
            return Err(RiftError::precondition(
                INVALID_CURSOR,
                format!("Cursor position {} out of bounds (len: {})", pos, len),
            ));
        }

        while self.pre > pos {
            self.move_left();
        }
        while self.pre < pos {
            self.move_right();
        }
        Ok(())
    }

    /// Full logical content, independent of gap position
    #[must_use]
    pub fn get(&self) -> Vec<char> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(self.before_gap());
        out.extend_from_slice(self.after_gap());
        out
    }

    /// Rune at logical position `pos`
    #[must_use]
    pub fn rune_at(&self, pos: usize) -> Option<char> {
        if pos < self.pre {
            Some(self.storage[pos])
        } else {
            self.storage.get(self.post + (pos - self.pre)).copied()
        }
    }

    /// Reset to an empty buffer of default capacity
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Runes before the gap
    #[must_use]
    pub fn before_gap(&self) -> &[char] {
        &self.storage[..self.pre]
    }

    /// Runes after the gap
    #[must_use]
    pub fn after_gap(&self) -> &[char] {
        &self.storage[self.post..]
    }

    /// Move cursor left (move one rune from before the gap to after it)
    fn move_left(&mut self) {
        self.pre -= 1;
        self.post -= 1;
        self.storage[self.post] = self.storage[self.pre];
        self.storage[self.pre] = GAP_FILL;
    }

    /// Move cursor right (move one rune from after the gap to before it)
    fn move_right(&mut self) {
        self.storage[self.pre] = self.storage[self.post];
        self.storage[self.post] = GAP_FILL;
        self.pre += 1;
        self.post += 1;
    }

    /// Widen the gap by `max(needed, GROWTH_INCREMENT)` slots, splicing the
    /// after_gap tail forward
    fn grow(&mut self, needed: usize) {
        let extra = needed.max(GROWTH_INCREMENT);
        let old_size = self.storage.len();

        self.storage.resize(old_size + extra, GAP_FILL);
        self.storage.copy_within(self.post..old_size, self.post + extra);
        self.storage[self.post..self.post + extra].fill(GAP_FILL);
        self.post += extra;
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for GapBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .before_gap()
                .iter()
                .chain(self.after_gap())
                .eq(other.before_gap().iter().chain(other.after_gap()))
    }
}

impl Eq for GapBuffer {}
