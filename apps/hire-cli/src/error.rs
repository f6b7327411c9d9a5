//! Error types for the input collector.

use hire_core::CoreError;

/// Why the collector could not produce a rental request.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// A bounded prompt ran out of attempts.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// stdin closed before the field was answered.
    #[error("input closed while waiting for {field}")]
    InputClosed { field: &'static str },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CollectError {
    /// True when a bounded prompt gave up.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, CollectError::Core(CoreError::AttemptsExhausted { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_detection() {
        let err: CollectError = CoreError::AttemptsExhausted {
            field: "customer type".to_string(),
            attempts: 3,
        }
        .into();
        assert!(err.is_exhausted());
        assert_eq!(err.to_string(), "customer type: no valid answer after 3 attempts");

        let closed = CollectError::InputClosed { field: "days hired" };
        assert!(!closed.is_exhausted());
        assert_eq!(closed.to_string(), "input closed while waiting for days hired");
    }
}
