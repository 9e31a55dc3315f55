//! Literal search and replace
//!
//! Matching is case-insensitive and never crosses a line boundary. The end
//! column of a `SearchLimit` is inclusive and clamped to its line.

use super::LineBuffer;
use crate::error::Result;
use crate::history::{Modification, Position};
use tracing::debug;

/// Region a search is confined to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimit {
    pub start: Position,
    /// Last column a match may touch
    pub end: Position,
}

impl SearchLimit {
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl LineBuffer {
    /// Region covering the whole document
    #[must_use]
    pub fn whole_document(&self) -> SearchLimit {
        let last = self.lines.len() - 1;
        SearchLimit::new(
            Position::new(0, 0),
            Position::new(last, self.lines[last].len()),
        )
    }

    /// First match of `term` in the document
    #[must_use]
    pub fn search(&self, term: &[char]) -> Option<Position> {
        self.search_range(term, &self.whole_document())
    }

    /// First match of `term` inside `limits`, scanning in document order
    #[must_use]
    pub fn search_range(&self, term: &[char], limits: &SearchLimit) -> Option<Position> {
        if term.is_empty() || self.lines.is_empty() {
            return None;
        }
        let needle: Vec<char> = term.iter().copied().map(fold).collect();
        let last_line = limits.end.line.min(self.lines.len() - 1);

        for line in limits.start.line..=last_line {
            let runes = self.lines[line].get();
            let from = if line == limits.start.line {
                limits.start.col
            } else {
                0
            };
            let stop = if line == limits.end.line {
                limits.end.col.saturating_add(1).min(runes.len())
            } else {
                runes.len()
            };
            if stop < from + needle.len() {
                continue;
            }

            let hay: Vec<char> = runes[..stop].iter().copied().map(fold).collect();
            if let Some(offset) = hay[from..]
                .windows(needle.len())
                .position(|window| window == needle.as_slice())
            {
                return Some(Position::new(line, from + offset));
            }
        }
        None
    }

    /// Replace every match of `from` in the document
    pub fn replace(&mut self, from: &[char], to: &[char]) -> Result<Option<Position>> {
        let limits = self.whole_document();
        self.replace_range(from, to, &limits)
    }

    /// Replace every match of `from` inside `limits`
    ///
    /// Scanning resumes after each inserted replacement, so a replacement that
    /// contains its own pattern is not matched again. Returns the start of the
    /// last replacement made.
    pub fn replace_range(
        &mut self,
        from: &[char],
        to: &[char],
        limits: &SearchLimit,
    ) -> Result<Option<Position>> {
        if from.is_empty() {
            return Ok(None);
        }

        let mut limits = *limits;
        let mut last = None;
        let mut count = 0usize;

        while let Some(hit) = self.search_range(from, &limits) {
            let original = self.splice_out(hit, from.len())?;
            self.splice_in(hit, to)?;
            self.history.push(Modification::ReplaceRunes {
                at: hit,
                from: original,
                to: to.to_vec(),
            });
            debug!(at = %hit, "replaced match");
            count += 1;
            last = Some(hit);

            if hit.line == limits.end.line {
                limits.end.col = (limits.end.col + to.len()).saturating_sub(from.len());
            }
            limits.start = Position::new(hit.line, hit.col + to.len());
        }

        if count > 0 {
            debug!(count, "replace finished");
        }
        Ok(last)
    }
}
