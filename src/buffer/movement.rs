//! Word-wise cursor movement and rune peeking

use super::LineBuffer;
use crate::history::Position;

impl LineBuffer {
    fn is_delim(&self, c: char) -> bool {
        self.config.is_word_delimiter(c)
    }

    /// Position of the next (or previous) word start from `at`
    ///
    /// Moving right lands just past the last delimiter of the next delimiter
    /// run; the end of a line counts as a delimiter. Moving left lands on the
    /// first rune of the word before `at`. Both directions cross lines.
    #[must_use]
    pub fn jump_word(&self, at: Position, leftward: bool) -> Position {
        if at.line >= self.lines.len() {
            return at;
        }
        if leftward {
            self.jump_word_left(at)
        } else {
            self.jump_word_right(at)
        }
    }

    fn jump_word_right(&self, at: Position) -> Position {
        let mut line = at.line;
        let mut runes = self.lines[line].get();
        let mut col = at.col.min(runes.len());

        loop {
            if col >= runes.len() {
                if line + 1 >= self.lines.len() {
                    return Position::new(line, runes.len());
                }
                line += 1;
                runes = self.lines[line].get();
                col = 0;
                if runes.first().is_some_and(|&c| !self.is_delim(c)) {
                    return Position::new(line, 0);
                }
                continue;
            }

            if self.is_delim(runes[col]) {
                match runes.get(col + 1) {
                    Some(&next) if self.is_delim(next) => {}
                    Some(_) => return Position::new(line, col + 1),
                    None => {}
                }
            }
            col += 1;
        }
    }

    fn jump_word_left(&self, at: Position) -> Position {
        let mut line = at.line;
        let mut runes = self.lines[line].get();
        let mut col = at.col.min(runes.len());

        loop {
            if col == 0 {
                if line == 0 {
                    return at;
                }
                line -= 1;
                runes = self.lines[line].get();
                col = runes.len();
                continue;
            }

            let p = col - 1;
            if !self.is_delim(runes[p]) && (p == 0 || self.is_delim(runes[p - 1])) {
                return Position::new(line, p);
            }
            col -= 1;
        }
    }

    /// Rune after `at`, looking into following lines past the end of a line
    #[must_use]
    pub fn next_rune(&self, at: Position) -> Option<char> {
        let line = self.lines.get(at.line)?;
        if let Some(c) = line.rune_at(at.col + 1) {
            return Some(c);
        }
        self.lines[at.line + 1..]
            .iter()
            .find_map(|l| l.rune_at(0))
    }

    /// Rune before `at`, looking into preceding lines at the start of a line
    #[must_use]
    pub fn prev_rune(&self, at: Position) -> Option<char> {
        let line = self.lines.get(at.line)?;
        let col = at.col.min(line.len());
        if col > 0 {
            return line.rune_at(col - 1);
        }
        self.lines[..at.line]
            .iter()
            .rev()
            .find_map(|l| l.len().checked_sub(1).and_then(|i| l.rune_at(i)))
    }
}
