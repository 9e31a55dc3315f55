//! Errors raised by the editing core
//!
//! A failure the caller can recover from (a file that cannot be read or
//! written, a bad highlight pattern or option value, a surface that rejects
//! a cell) has severity `Error`. A caller handing the core coordinates it
//! never produced breaks a precondition; those errors are `Critical` and the
//! caller should stop trusting its own cursor state.

use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The operation failed and changed nothing
    Error,
    /// A caller precondition was violated
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Subsystem an error comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Loading or saving a document
    Io,
    /// Highlight patterns and option values that do not parse
    Parse,
    /// Option or rule values that parse but are not allowed
    Settings,
    /// Painting to a terminal surface
    Renderer,
    /// Coordinates outside the document
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Parse => write!(f, "Parse"),
            Self::Settings => write!(f, "Settings"),
            Self::Renderer => write!(f, "Renderer"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiftError {
    pub severity: ErrorSeverity,
    pub kind: ErrorType,
    /// Stable code from `constants::errors`
    pub code: String,
    pub message: String,
}

impl RiftError {
    /// Recoverable failure
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Coordinates handed in by the caller do not exist in the document
    pub fn precondition(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind: ErrorType::Internal,
            code: code.into(),
            message: message.into(),
        }
    }

    /// File-system failure while working on `path`
    pub fn io(code: impl Into<String>, path: &Path, err: &io::Error) -> Self {
        Self::new(ErrorType::Io, code, format!("{}: {}", path.display(), err))
    }

    #[must_use]
    pub fn is_precondition(&self) -> bool {
        self.severity == ErrorSeverity::Critical
    }
}

impl fmt::Display for RiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for RiftError {}

pub type Result<T> = std::result::Result<T, RiftError>;
