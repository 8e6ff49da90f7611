//! Error types for tracesimp configuration.

use thiserror::Error;

/// Errors raised when building a simplification configuration.
///
/// The simplification routines themselves never fail; only user supplied
/// settings are validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Tolerance is negative, NaN or infinite.
    #[error("invalid tolerance {value}: must be finite and non-negative")]
    InvalidTolerance {
        /// The rejected value, widened to `f64` for reporting.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SimplifyError::InvalidTolerance { value: -2.5 };
        assert_eq!(
            err.to_string(),
            "invalid tolerance -2.5: must be finite and non-negative"
        );
    }
}
