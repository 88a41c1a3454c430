//! Grading error types.
//!
//! Every fallible registry operation returns a [`GradingError`]. The set is
//! deliberately flat so callers can classify failures with a `match` instead
//! of walking a hierarchy.

use std::fmt;

use thiserror::Error;

/// The kind of record an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => write!(f, "student"),
            EntityKind::Course => write!(f, "course"),
        }
    }
}

/// Errors raised by the grading registry and its records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradingError {
    /// A value was outside its accepted domain (e.g. a score not in [0, 100]).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An identifier was already registered.
    #[error("{kind} with id '{id}' already exists")]
    DuplicateId { kind: EntityKind, id: String },

    /// An identifier did not resolve to a registered record.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl GradingError {
    pub(crate) fn duplicate(kind: EntityKind, id: &str) -> Self {
        GradingError::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn not_found(kind: EntityKind, id: &str) -> Self {
        GradingError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Returns `true` for [`GradingError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GradingError::InvalidArgument(_))
    }

    /// Returns `true` for [`GradingError::DuplicateId`].
    pub fn is_duplicate(&self) -> bool {
        matches!(self, GradingError::DuplicateId { .. })
    }

    /// Returns `true` for [`GradingError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, GradingError::NotFound { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GradingError>;
