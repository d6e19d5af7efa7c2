//! # checkout-core: Pure Pricing Logic for the Checkout Flow
//!
//! This crate is the **heart** of the checkout pricing engine. It contains
//! the shipping and tax math as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Pricing Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Checkout Frontend                        │   │
//! │  │    Cart UI ──► Shipping Selector ──► Order Summary ──► Pay     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   checkout-session                              │   │
//! │  │    CheckoutSession: cart, region, carrier, recompute-on-change │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rates   │  │  weight   │  │  pricing  │  │   │
//! │  │   │ CartItem  │  │  Carrier  │  │ estimate  │  │  quotes   │  │   │
//! │  │   │  quotes   │  │ tax table │  │  weight   │  │ free ship │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem, PricingResult, FreeShippingBasis)
//! - [`rates`] - Static lookup tables (carriers, per-state tax rates)
//! - [`weight`] - Shipment weight estimation from cart contents
//! - [`pricing`] - Shipping cost and tax computation
//! - [`money`] - Display-time rounding and currency formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Exact Decimals**: All amounts are `rust_decimal::Decimal`; no rounding
//!    happens inside the pricing math - only the display layer rounds to cents
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{estimate_weight, compute_pricing, CartItem, Carrier};
//! use rust_decimal_macros::dec;
//!
//! let cart = vec![CartItem::new("65w-laptop-charger", "65W Laptop Charger", dec!(25), 2)];
//!
//! // Two chargers at 0.45 lb each
//! let weight = estimate_weight(&cart);
//! assert_eq!(weight, dec!(0.90));
//!
//! // $50 subtotal, shipped USPS Ground to California
//! let quote = compute_pricing(dec!(50), weight, "CA", Carrier::UspsGround);
//! assert_eq!(quote.shipping_cost, dec!(5.715)); // 4.95 + 0.85 × 0.90, unrounded
//! assert_eq!(quote.tax_amount, dec!(3.625));    // 50 × 0.0725, unrounded
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod rates;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Carrier` instead of
// `use checkout_core::rates::Carrier`

pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{compute_pricing, free_shipping_basis, qualifies_for_free_shipping};
pub use rates::{tax_rate, Carrier, CarrierRate};
pub use types::{CartItem, FreeShippingBasis, PricingResult};
pub use weight::estimate_weight;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shipment weight at or above which shipping is free, in pounds.
///
/// ## Business Reason
/// Heavy orders are cheaper to consolidate onto pallet freight than to price
/// per-pound, so the store absorbs the carrier cost above this cutoff.
pub const FREE_SHIPPING_WEIGHT_LBS: Decimal = dec!(35);

/// Order subtotal at or above which shipping is free.
pub const FREE_SHIPPING_SUBTOTAL: Decimal = dec!(85);

/// Fallback per-unit weight for products missing from the weight table,
/// in pounds. Matches the lightest catalog entries (the 6ft cables).
pub const DEFAULT_ITEM_WEIGHT_LBS: Decimal = dec!(0.18);

/// Maximum distinct items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in a cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;
