//! Core error types.

use std::fmt;

use thiserror::Error;

/// Kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Activity,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "User"),
            EntityKind::Activity => write!(f, "Activity"),
        }
    }
}

/// Core store errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The referenced identifier does not exist in the target collection.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Seed fixtures could not be loaded into a fresh store.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl Error {
    /// Build a not-found error for a user id.
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: EntityKind::User,
            id: id.into(),
        }
    }

    /// Build a not-found error for an activity id.
    pub fn activity_not_found(id: impl Into<String>) -> Self {
        Error::NotFound {
            kind: EntityKind::Activity,
            id: id.into(),
        }
    }

    /// Check whether this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;
