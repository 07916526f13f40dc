//! Server error types.

use thiserror::Error;

/// Server errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Store error, including not-found lookups.
    #[error(transparent)]
    Store(#[from] daylog_core::Error),

    /// Unknown subscription ID.
    #[error("subscription {0} not found")]
    SubscriptionNotFound(u64),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check whether this error reports a missing entity or subscription.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Store(e) => e.is_not_found(),
            Error::SubscriptionNotFound(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_pass_through() {
        let err: Error = daylog_core::Error::activity_not_found("a1").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Activity not found: a1");
    }

    #[test]
    fn test_config_error_is_not_not_found() {
        assert!(!Error::Config("bad".into()).is_not_found());
    }
}
