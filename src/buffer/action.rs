//! Editing actions
//!
//! An `Action` is a request to change the document. `LineBuffer::perform`
//! applies it, records the primitive modifications it caused, and returns
//! the position the cursor should move to.

use super::LineBuffer;
use crate::constants::errors::INVALID_COLUMN;
use crate::error::{Result, RiftError};
use crate::history::{Modification, Position};
use tracing::trace;

/// Edit request understood by `LineBuffer::perform`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert runes so they start at `at`
    InsertRunes { at: Position, runes: Vec<char> },
    /// Split the line at `at`
    Linefeed { at: Position },
    /// Remove the rune before `at`, or merge the line into the previous one
    Backspace { at: Position },
    /// Remove everything from `at` to the end of its line
    DeleteLineContent { at: Position },
    /// Remove a whole line
    DeleteLine { line: usize },
    /// Remove the word before `at`
    DeleteWord { at: Position },
    /// Remove one indentation level from the start of the line
    Detabulate { at: Position },
}

impl Action {
    #[must_use]
    pub fn insert(line: usize, col: usize, runes: &[char]) -> Self {
        Action::InsertRunes {
            at: Position::new(line, col),
            runes: runes.to_vec(),
        }
    }

    #[must_use]
    pub fn insert_str(line: usize, col: usize, text: &str) -> Self {
        Action::InsertRunes {
            at: Position::new(line, col),
            runes: text.chars().collect(),
        }
    }

    #[must_use]
    pub fn linefeed(line: usize, col: usize) -> Self {
        Action::Linefeed {
            at: Position::new(line, col),
        }
    }

    #[must_use]
    pub fn backspace(line: usize, col: usize) -> Self {
        Action::Backspace {
            at: Position::new(line, col),
        }
    }

    #[must_use]
    pub fn delete_line_content(line: usize, col: usize) -> Self {
        Action::DeleteLineContent {
            at: Position::new(line, col),
        }
    }

    #[must_use]
    pub fn delete_line(line: usize) -> Self {
        Action::DeleteLine { line }
    }

    #[must_use]
    pub fn delete_word(line: usize, col: usize) -> Self {
        Action::DeleteWord {
            at: Position::new(line, col),
        }
    }

    #[must_use]
    pub fn detabulate(line: usize, col: usize) -> Self {
        Action::Detabulate {
            at: Position::new(line, col),
        }
    }
}

impl LineBuffer {
    /// Apply an action and return the resulting cursor position
    ///
    /// Out-of-range positions are rejected with a critical error and leave
    /// the document untouched.
    pub fn perform(&mut self, action: Action) -> Result<Position> {
        trace!(?action, "perform");
        match action {
            Action::InsertRunes { at, runes } => self.insert_runes(at, runes),
            Action::Linefeed { at } => self.linefeed(at),
            Action::Backspace { at } => self.backspace(at),
            Action::DeleteLineContent { at } => self.delete_line_content(at),
            Action::DeleteLine { line } => self.delete_line(line),
            Action::DeleteWord { at } => self.delete_word(at),
            Action::Detabulate { at } => self.detabulate(at),
        }
    }

    fn check_position(&self, at: Position) -> Result<()> {
        let len = self.gap(at.line)?.len();
        if at.col > len {
            return Err(RiftError::precondition(
                INVALID_COLUMN,
                format!("Column {} out of bounds on line {} (len: {})", at.col, at.line, len),
            ));
        }
        Ok(())
    }

    fn insert_runes(&mut self, at: Position, runes: Vec<char>) -> Result<Position> {
        self.check_position(at)?;
        if runes.is_empty() {
            return Ok(at);
        }
        self.splice_in(at, &runes)?;
        let end = Position::new(at.line, at.col + runes.len());
        self.history.push(Modification::InsertRunes { at, runes });
        Ok(end)
    }

    fn linefeed(&mut self, at: Position) -> Result<Position> {
        self.check_position(at)?;
        self.split_line(at)?;
        self.history.push(Modification::Linefeed { at });
        Ok(Position::new(at.line + 1, 0))
    }

    fn backspace(&mut self, at: Position) -> Result<Position> {
        self.check_position(at)?;

        if at.col > 0 {
            let start = Position::new(at.line, at.col - 1);
            let runes = self.splice_out(start, 1)?;
            self.history.push(Modification::DeleteRunes { at: start, runes });
            return Ok(start);
        }

        if at.line == 0 {
            return Ok(at);
        }

        // Merge into the previous line
        let prev_end = Position::new(at.line - 1, self.gap(at.line - 1)?.len());
        let len = self.gap(at.line)?.len();
        if len > 0 {
            let runes = self.splice_out(Position::new(at.line, 0), len)?;
            self.splice_in(prev_end, &runes)?;
            self.history.push(Modification::MoveRunes {
                from: Position::new(at.line, 0),
                to: prev_end,
                runes,
            });
        }
        self.lines.remove(at.line);
        self.history.push(Modification::DeleteLine { line: at.line });
        Ok(prev_end)
    }

    fn delete_line_content(&mut self, at: Position) -> Result<Position> {
        self.check_position(at)?;
        let len = self.gap(at.line)?.len();
        if at.col == len {
            return Ok(at);
        }
        let runes = self.splice_out(at, len - at.col)?;
        self.history.push(Modification::DeleteRunes { at, runes });
        Ok(at)
    }

    fn delete_line(&mut self, line: usize) -> Result<Position> {
        self.check_line(line)?;
        if self.lines.len() == 1 {
            return Ok(Position::new(0, 0));
        }

        let len = self.gap(line)?.len();
        if len > 0 {
            let at = Position::new(line, 0);
            let runes = self.splice_out(at, len)?;
            self.history.push(Modification::DeleteRunes { at, runes });
        }
        self.lines.remove(line);
        self.history.push(Modification::DeleteLine { line });
        Ok(Position::new(line.min(self.lines.len() - 1), 0))
    }

    fn delete_word(&mut self, at: Position) -> Result<Position> {
        self.check_position(at)?;
        if at.col == 0 {
            return self.backspace(at);
        }

        let mut pos = at;
        while pos.col > 0 && self.before_is_delimiter(pos) {
            pos = self.backspace(pos)?;
        }
        while pos.col > 0 && !self.before_is_delimiter(pos) {
            pos = self.backspace(pos)?;
        }
        Ok(pos)
    }

    fn before_is_delimiter(&self, at: Position) -> bool {
        self.rune_before(at)
            .is_some_and(|c| self.config.is_word_delimiter(c))
    }

    fn detabulate(&mut self, at: Position) -> Result<Position> {
        self.check_position(at)?;
        let tab_size = self.config.tab_size();
        let line = self.gap(at.line)?;

        let count = if line.rune_at(0) == Some('\t') {
            1
        } else if line.len() >= tab_size && (0..tab_size).all(|i| line.rune_at(i) == Some(' ')) {
            tab_size
        } else {
            0
        };
        if count == 0 {
            return Ok(at);
        }

        let start = Position::new(at.line, 0);
        let runes = self.splice_out(start, count)?;
        self.history.push(Modification::DeleteRunes { at: start, runes });
        Ok(Position::new(at.line, at.col.saturating_sub(count)))
    }
}
