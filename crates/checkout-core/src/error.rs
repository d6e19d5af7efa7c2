//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Pricing domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-session errors (separate crate)                              │
//! │  ├── SessionError     - Cart/session operation failures                │
//! │  └── PaymentError     - Payment initiation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → Frontend           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (carrier id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Silent fallbacks (unknown product id, unknown region) are NOT errors -
//!    they are specified behavior and never surface here

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing logic errors.
///
/// These errors represent caller precondition violations. The silent
/// fallbacks of the pricing contract (unknown product weight, unknown
/// region) never produce a `CoreError`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Carrier id does not exist in the static rate table.
    ///
    /// ## When This Occurs
    /// - Frontend sends a carrier id that was never in the selector
    /// - A stale client uses an id for a retired carrier tier
    ///
    /// Carriers form a closed set, so an unknown id is a caller bug
    /// and fails fast rather than pricing at a guessed rate.
    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., malformed region code or ZIP).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownCarrier("DHL_Express".to_string());
        assert_eq!(err.to_string(), "Unknown carrier: DHL_Express");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "region".to_string(),
        };
        assert_eq!(err.to_string(), "region is required");

        let err = ValidationError::InvalidFormat {
            field: "region".to_string(),
            reason: "must be a 2-letter state code".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "region has invalid format: must be a 2-letter state code"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "region".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
