//! Undo log
//!
//! Every primitive mutation of a `LineBuffer` is recorded as one
//! `Modification`. Entries are never changed after they are pushed; undo pops
//! them and replays their inverse, coalescing runs of the same kind.

use std::fmt;

// =============================================================================
// Position
// =============================================================================

/// Position in document (line, column), both counted in runes from zero
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.col)
    }
}

// =============================================================================
// Modifications
// =============================================================================

/// Kind of a recorded mutation; undo coalesces runs of equal kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModificationKind {
    InsertRunes,
    Linefeed,
    DeleteRunes,
    DeleteLine,
    MoveRunes,
    ReplaceRunes,
    Breakpoint,
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InsertRunes => "InsertRunes",
            Self::Linefeed => "Linefeed",
            Self::DeleteRunes => "DeleteRunes",
            Self::DeleteLine => "DeleteLine",
            Self::MoveRunes => "MoveRunes",
            Self::ReplaceRunes => "ReplaceRunes",
            Self::Breakpoint => "Breakpoint",
        };
        write!(f, "{name}")
    }
}

/// A single reversible mutation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modification {
    /// `runes` were inserted starting at `at`
    InsertRunes { at: Position, runes: Vec<char> },

    /// Line `at.line` was split at `at.col`
    Linefeed { at: Position },

    /// `runes` were removed; they used to start at `at`
    DeleteRunes { at: Position, runes: Vec<char> },

    /// The (empty) line `line` was removed
    DeleteLine { line: usize },

    /// `runes` were cut from `from` and appended at `to`
    MoveRunes {
        from: Position,
        to: Position,
        runes: Vec<char>,
    },

    /// `from` was replaced by `to`, starting at `at`
    ReplaceRunes {
        at: Position,
        from: Vec<char>,
        to: Vec<char>,
    },

    /// Marks a save point; undoing it changes nothing
    Breakpoint { at: Position },
}

impl Modification {
    #[must_use]
    pub fn breakpoint() -> Self {
        Modification::Breakpoint {
            at: Position::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ModificationKind {
        match self {
            Modification::InsertRunes { .. } => ModificationKind::InsertRunes,
            Modification::Linefeed { .. } => ModificationKind::Linefeed,
            Modification::DeleteRunes { .. } => ModificationKind::DeleteRunes,
            Modification::DeleteLine { .. } => ModificationKind::DeleteLine,
            Modification::MoveRunes { .. } => ModificationKind::MoveRunes,
            Modification::ReplaceRunes { .. } => ModificationKind::ReplaceRunes,
            Modification::Breakpoint { .. } => ModificationKind::Breakpoint,
        }
    }

    /// Position recorded with the entry
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Modification::InsertRunes { at, .. }
            | Modification::Linefeed { at }
            | Modification::DeleteRunes { at, .. }
            | Modification::ReplaceRunes { at, .. }
            | Modification::Breakpoint { at } => *at,
            Modification::DeleteLine { line } => Position::new(*line, 0),
            Modification::MoveRunes { to, .. } => *to,
        }
    }
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modification{{kind={}, position={}", self.kind(), self.position())?;
        match self {
            Modification::InsertRunes { runes, .. }
            | Modification::DeleteRunes { runes, .. }
            | Modification::MoveRunes { runes, .. } => {
                write!(f, ", data={:?}", runes.iter().collect::<String>())?;
            }
            Modification::ReplaceRunes { from, to, .. } => {
                write!(
                    f,
                    ", data={:?}->{:?}",
                    from.iter().collect::<String>(),
                    to.iter().collect::<String>()
                )?;
            }
            _ => {}
        }
        write!(f, "}}")
    }
}

// =============================================================================
// Undo Log
// =============================================================================

/// Stack of modifications, newest last
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoLog {
    entries: Vec<Modification>,
}

impl UndoLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modification: Modification) {
        self.entries.push(modification);
    }

    pub fn pop(&mut self) -> Option<Modification> {
        self.entries.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&Modification> {
        self.entries.last()
    }

    /// Kind of the newest entry
    #[must_use]
    pub fn top_kind(&self) -> Option<ModificationKind> {
        self.peek().map(Modification::kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Modification> {
        self.entries.iter()
    }
}
