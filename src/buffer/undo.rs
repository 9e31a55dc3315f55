//! Undo
//!
//! Undo pops the newest modification, replays its inverse, and keeps going
//! while the next entry has the same kind. A burst of typing is therefore
//! undone in one step, and so is a run of deleted lines.

use super::LineBuffer;
use crate::error::Result;
use crate::gap_buffer::GapBuffer;
use crate::history::{Modification, Position};
use tracing::{debug, trace};

impl LineBuffer {
    /// Revert the newest group of same-kind modifications
    ///
    /// Returns the cursor position after the last replayed entry, or `None`
    /// when there is nothing left to undo.
    pub fn undo(&mut self) -> Result<Option<Position>> {
        let mut result = None;
        let mut replayed = 0usize;

        while let Some(modification) = self.history.pop() {
            let kind = modification.kind();
            result = Some(self.revert(modification)?);
            replayed += 1;
            if self.history.top_kind() != Some(kind) {
                break;
            }
        }

        if replayed > 0 {
            debug!(replayed, remaining = self.history.len(), "undo");
        }
        Ok(result)
    }

    fn revert(&mut self, modification: Modification) -> Result<Position> {
        trace!(%modification, "revert");
        match modification {
            Modification::InsertRunes { at, runes } => {
                self.splice_out(at, runes.len())?;
                Ok(at)
            }
            Modification::Linefeed { at } => {
                self.join_with_next(at.line)?;
                Ok(at)
            }
            Modification::DeleteRunes { at, runes } => {
                self.splice_in(at, &runes)?;
                Ok(Position::new(at.line, at.col + runes.len()))
            }
            Modification::DeleteLine { line } => {
                let line = line.min(self.lines.len());
                self.lines.insert(line, GapBuffer::new());
                Ok(Position::new(line, 0))
            }
            Modification::MoveRunes { from, to, runes } => {
                self.splice_out(to, runes.len())?;
                self.splice_in(from, &runes)?;
                Ok(from)
            }
            Modification::ReplaceRunes { at, from, to } => {
                self.splice_out(at, to.len())?;
                self.splice_in(at, &from)?;
                Ok(at)
            }
            Modification::Breakpoint { at } => Ok(at),
        }
    }
}
