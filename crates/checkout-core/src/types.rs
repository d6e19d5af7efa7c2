//! # Domain Types
//!
//! Core domain types used throughout the checkout pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │  PricingResult  │   │FreeShippingBasis│       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (catalog)   │   │  shipping_cost  │   │  Weight         │       │
//! │  │  name           │   │  tax_amount     │   │  Subtotal       │       │
//! │  │  price          │   │  (unrounded)    │   └─────────────────┘       │
//! │  │  qty (u32)      │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity is Unsigned
//! Cart quantity is `u32`, not a signed integer. A negative quantity would
//! silently reduce shipment weight, so the type system makes it
//! unrepresentable instead of leaving it to runtime checks.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the cart, as seen by the pricing logic.
///
/// Owned by the enclosing checkout session; the pricing functions only
/// ever read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog product id (e.g., `65w-laptop-charger`).
    /// Also the key into the static weight table.
    pub id: String,

    /// Display name shown in the cart and on the receipt.
    pub name: String,

    /// Unit price. Exact decimal; never rounded internally.
    #[ts(type = "string")]
    pub price: Decimal,

    /// Quantity in cart. Unsigned: negative quantities are unrepresentable.
    pub qty: u32,
}

impl CartItem {
    /// Creates a cart item.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal, qty: u32) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            price,
            qty,
        }
    }

    /// Line total (unit price × quantity), exact.
    #[inline]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

// =============================================================================
// Pricing Result
// =============================================================================

/// The outcome of one pricing computation: shipping cost plus tax amount.
///
/// ## Precision
/// Both fields are exact decimals with no rounding applied. A USPS Ground
/// quote for a 0.90 lb package is `5.715`, not `5.72` - rounding to cents
/// is strictly a display concern (see [`crate::money`]).
///
/// ## Lifecycle
/// Recomputed from scratch whenever any input changes; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Shipping cost. Zero when the order qualifies for free shipping.
    #[ts(type = "string")]
    pub shipping_cost: Decimal,

    /// Sales tax on the subtotal. Zero for regions without sales tax
    /// and for unknown region codes.
    #[ts(type = "string")]
    pub tax_amount: Decimal,
}

// =============================================================================
// Free Shipping Basis
// =============================================================================

/// Which threshold qualified the order for free shipping.
///
/// The checkout UI surfaces this ("Weight threshold met" vs "Price
/// threshold met"), so it is part of the pricing vocabulary rather than
/// a presentation detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FreeShippingBasis {
    /// Total shipment weight reached the weight cutoff.
    /// Takes precedence when both thresholds are met.
    Weight,
    /// Order subtotal reached the price cutoff.
    Subtotal,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        let item = CartItem::new("usb-c-to-usb-c", "USB-C to USB-C Cable", dec!(12.99), 3);
        assert_eq!(item.line_total(), dec!(38.97));
    }

    #[test]
    fn test_line_total_zero_quantity() {
        let item = CartItem::new("usb-c-to-usb-c", "USB-C to USB-C Cable", dec!(12.99), 0);
        assert_eq!(item.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_item_wire_format() {
        let item = CartItem::new("20w-dual-adapter", "20W Dual Adapter", dec!(19.99), 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "20w-dual-adapter");
        assert_eq!(json["price"], "19.99");
        assert_eq!(json["qty"], 1);
    }

    #[test]
    fn test_pricing_result_wire_format() {
        let result = PricingResult {
            shipping_cost: dec!(5.715),
            tax_amount: dec!(3.625),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["shippingCost"], "5.715");
        assert_eq!(json["taxAmount"], "3.625");
    }
}
