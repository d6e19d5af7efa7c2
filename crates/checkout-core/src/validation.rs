//! # Validation Module
//!
//! Input validation utilities for the checkout flow.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session setters (Rust)                                       │
//! │  └── THIS MODULE: format and range validation                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing contract fallbacks                                   │
//! │  ├── Unknown product id → default weight (silent)                      │
//! │  └── Unknown region code → zero tax (silent)                           │
//! │                                                                         │
//! │  Validation rejects MALFORMED input; well-formed-but-unknown values     │
//! │  flow through to the contract's silent fallbacks.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog product id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_id;
///
/// assert!(validate_product_id("65w-laptop-charger").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("has space").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a region code (2-letter US state code).
///
/// ## Rules
/// - Exactly two ASCII uppercase letters
///
/// Well-formed codes that are not in the tax table are still accepted:
/// they price at zero tax per the contract, so only shape is checked here.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_region_code;
///
/// assert!(validate_region_code("CA").is_ok());
/// assert!(validate_region_code("ZZ").is_ok()); // unknown but well-formed
/// assert!(validate_region_code("ca").is_err());
/// assert!(validate_region_code("CAL").is_err());
/// ```
pub fn validate_region_code(region: &str) -> ValidationResult<()> {
    if region.is_empty() {
        return Err(ValidationError::Required {
            field: "region".to_string(),
        });
    }

    if region.len() != 2 || !region.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "region".to_string(),
            reason: "must be a 2-letter state code".to_string(),
        });
    }

    Ok(())
}

/// Validates a US ZIP code.
///
/// ## Rules
/// - Exactly five ASCII digits
///
/// The ZIP is captured for the shipping label; rate and tax lookup never
/// use it (jurisdiction lookup by ZIP is a non-goal).
pub fn validate_zip_code(zip: &str) -> ValidationResult<()> {
    if zip.is_empty() {
        return Err(ValidationError::Required {
            field: "zip code".to_string(),
        });
    }

    if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "zip code".to_string(),
            reason: "must be five digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for promotional items)
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
