//! Line buffer: the document model
//!
//! A `LineBuffer` owns one `GapBuffer` per document line. All mutation goes
//! through [`LineBuffer::perform`], which records every primitive change on
//! an undo log so that [`LineBuffer::undo`] can replay it in reverse.
//!
//! ## buffer/ Invariants
//!
//! - The document always has at least one line, possibly empty.
//! - Every mutation performed through an `Action` pushes at least one
//!   `Modification` unless it changed nothing.
//! - Undo replays exactly the inverse of what was recorded, newest first.
//! - Coordinates are rune indices; a column equal to the line length is the
//!   end-of-line position.

pub mod action;
pub mod movement;
pub mod search;
pub mod undo;

pub use action::Action;
pub use search::SearchLimit;

use crate::config::Config;
use crate::constants::errors::{INVALID_LINE, LOAD_FAILED, SAVE_FAILED};
use crate::error::{Result, RiftError};
use crate::gap_buffer::GapBuffer;
use crate::history::{Modification, ModificationKind, Position, UndoLog};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Document made of gap-buffered lines plus its undo log
#[derive(Debug, Clone)]
pub struct LineBuffer {
    lines: Vec<GapBuffer>,
    config: Config,
    history: UndoLog,
}

impl LineBuffer {
    /// Create a document holding a single empty line
    #[must_use]
    pub fn new(config: Config) -> Self {
        LineBuffer {
            lines: vec![GapBuffer::new()],
            config,
            history: UndoLog::new(),
        }
    }

    /// Create a document from raw rune lines; no lines means one empty line
    #[must_use]
    pub fn from_lines(raw_lines: Vec<Vec<char>>, config: Config) -> Self {
        let mut lines: Vec<GapBuffer> = raw_lines
            .iter()
            .map(|runes| GapBuffer::from_runes(runes))
            .collect();
        if lines.is_empty() {
            lines.push(GapBuffer::new());
        }
        LineBuffer {
            lines,
            config,
            history: UndoLog::new(),
        }
    }

    /// Create a document from text; a single trailing newline terminates the
    /// last line rather than opening a new one
    #[must_use]
    pub fn from_text(text: &str, config: Config) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let raw_lines = body.split('\n').map(|l| l.chars().collect()).collect();
        Self::from_lines(raw_lines, config)
    }

    /// Load a document from disk
    pub fn open(path: impl AsRef<Path>, config: Config) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| RiftError::io(LOAD_FAILED, path, &e))?;
        let buffer = Self::from_text(&String::from_utf8_lossy(&bytes), config);
        info!(path = %path.display(), lines = buffer.line_count(), "loaded document");
        Ok(buffer)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn tab_size(&self) -> usize {
        self.config.tab_size()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Runes of line `n`
    #[must_use]
    pub fn line(&self, n: usize) -> Option<Vec<char>> {
        self.lines.get(n).map(GapBuffer::get)
    }

    #[must_use]
    pub fn line_string(&self, n: usize) -> Option<String> {
        self.lines.get(n).map(|l| l.get().into_iter().collect())
    }

    #[must_use]
    pub fn line_len(&self, n: usize) -> Option<usize> {
        self.lines.get(n).map(GapBuffer::len)
    }

    /// Direct read access to the storage of line `n`
    #[must_use]
    pub fn gap_buffer(&self, n: usize) -> Option<&GapBuffer> {
        self.lines.get(n)
    }

    /// Every line as runes
    #[must_use]
    pub fn to_lines(&self) -> Vec<Vec<char>> {
        self.lines.iter().map(GapBuffer::get).collect()
    }

    /// Serialized document: lines joined by `\n`, last line terminated too
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.extend(line.before_gap());
            out.extend(line.after_gap());
            out.push('\n');
        }
        out
    }

    /// Write the document to `path`, then mark a save point in the undo log
    ///
    /// On failure nothing changes and no save point is recorded.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Err(e) = self.write_to_file(path) {
            warn!(path = %path.display(), error = %e, "save failed");
            return Err(RiftError::io(SAVE_FAILED, path, &e));
        }
        self.history.push(Modification::breakpoint());
        info!(path = %path.display(), lines = self.line_count(), "saved document");
        Ok(())
    }

    /// Whether there are edits since the last save point (or since loading)
    #[must_use]
    pub fn is_modified(&self) -> bool {
        matches!(
            self.history.top_kind(),
            Some(kind) if kind != ModificationKind::Breakpoint
        )
    }

    /// Number of recorded modifications
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Newest recorded modification
    #[must_use]
    pub fn peek_undo(&self) -> Option<&Modification> {
        self.history.peek()
    }

    #[must_use]
    pub fn history(&self) -> &UndoLog {
        &self.history
    }

    /// Atomic write through a temporary sibling file
    fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let temp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
        ));

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(self.text().as_bytes())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Primitive line surgery shared by actions, undo, and replace
    // -------------------------------------------------------------------------

    fn check_line(&self, line: usize) -> Result<()> {
        if line >= self.lines.len() {
            return Err(RiftError::precondition(
                INVALID_LINE,
                format!("Line {} out of bounds (lines: {})", line, self.lines.len()),
            ));
        }
        Ok(())
    }

    fn gap(&self, line: usize) -> Result<&GapBuffer> {
        self.check_line(line)?;
        Ok(&self.lines[line])
    }

    fn gap_mut(&mut self, line: usize) -> Result<&mut GapBuffer> {
        self.check_line(line)?;
        Ok(&mut self.lines[line])
    }

    /// Insert `runes` so that they start at `at`
    fn splice_in(&mut self, at: Position, runes: &[char]) -> Result<()> {
        let line = self.gap_mut(at.line)?;
        line.set_cursor(at.col)?;
        line.insert(runes);
        Ok(())
    }

    /// Remove `count` runes starting at `at` and return them
    fn splice_out(&mut self, at: Position, count: usize) -> Result<Vec<char>> {
        let line = self.gap_mut(at.line)?;
        line.set_cursor(at.col + count)?;
        let mut removed = Vec::with_capacity(count);
        for _ in 0..count {
            removed.push(line.delete()?);
        }
        removed.reverse();
        Ok(removed)
    }

    /// Move everything from `at` onwards into a new line below
    fn split_line(&mut self, at: Position) -> Result<()> {
        let len = self.gap(at.line)?.len();
        let tail = self.splice_out(at, len.saturating_sub(at.col))?;
        self.lines.insert(at.line + 1, GapBuffer::from_runes(&tail));
        Ok(())
    }

    /// Append line `line + 1` onto line `line` and remove it
    fn join_with_next(&mut self, line: usize) -> Result<()> {
        self.check_line(line + 1)?;
        let next = self.lines.remove(line + 1);
        let end = self.gap(line)?.len();
        self.splice_in(Position::new(line, end), &next.get())
    }

    fn rune_before(&self, at: Position) -> Option<char> {
        at.col
            .checked_sub(1)
            .and_then(|c| self.lines.get(at.line)?.rune_at(c))
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl PartialEq for LineBuffer {
    /// Documents compare by content only
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}
