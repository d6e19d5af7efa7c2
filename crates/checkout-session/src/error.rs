//! # Session Error Types
//!
//! Errors raised by checkout session operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Checkout                           │
//! │                                                                         │
//! │  checkout-core                  checkout-session (this file)            │
//! │  ─────────────                  ────────────────────────────            │
//! │                                                                         │
//! │  ValidationError ──────────────► SessionError::Validation               │
//! │  CoreError::UnknownCarrier ────► SessionError::Core                     │
//! │                                                                         │
//! │  Cart-shape violations (too many items, item not in cart) originate     │
//! │  here directly.                                                         │
//! │                                                                         │
//! │  PaymentError lives in the payment module - a failed payment            │
//! │  initiation never invalidates the session.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use checkout_core::{CoreError, ValidationError};

/// Errors from checkout session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Cart has reached the maximum number of distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Requested quantity would exceed the per-item cap.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Product is not in the cart.
    #[error("Product {0} not in cart")]
    ItemNotInCart(String),

    /// Input validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Pricing domain error (e.g., unknown carrier id).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SessionError::ItemNotInCart("65w-laptop-charger".to_string());
        assert_eq!(err.to_string(), "Product 65w-laptop-charger not in cart");

        let err = SessionError::QuantityTooLarge {
            requested: 1500,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1500 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_core_error_passes_through() {
        let err: SessionError = checkout_core::Carrier::from_id("Pony_Express")
            .unwrap_err()
            .into();
        assert_eq!(err.to_string(), "Unknown carrier: Pony_Express");
    }
}
