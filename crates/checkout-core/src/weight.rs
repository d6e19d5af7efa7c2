//! # Weight Estimation
//!
//! Maps cart line items to a total shipment weight.
//!
//! ## Estimation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shipment Weight Estimation                           │
//! │                                                                         │
//! │  Cart                          Weight Table          Contribution       │
//! │  ────                          ────────────          ────────────       │
//! │  65w-laptop-charger × 2  ──►   0.45 lb/unit   ──►    0.90 lb           │
//! │  usb-c-to-usb-c     × 1  ──►   0.18 lb/unit   ──►    0.18 lb           │
//! │  mystery-sku        × 3  ──►   (not found)    ──►    3 × 0.18 default  │
//! │                                                      ─────────────      │
//! │                                                      total: 1.62 lb     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Weights are packed shipping weights in pounds, not bare product weights.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::CartItem;
use crate::DEFAULT_ITEM_WEIGHT_LBS;

// =============================================================================
// Product Weight Table
// =============================================================================

/// Looks up the per-unit packed weight for a catalog product id, in pounds.
///
/// Returns `None` for products missing from the table; callers fall back to
/// [`DEFAULT_ITEM_WEIGHT_LBS`]. Cable weights assume the 6ft length.
pub fn product_weight(product_id: &str) -> Option<Decimal> {
    match product_id {
        "20w-dual-adapter" => Some(dec!(0.25)),
        "65w-laptop-charger" => Some(dec!(0.45)),
        "100w-hub-charger" => Some(dec!(0.55)),
        "usb-c-to-usb-c" => Some(dec!(0.18)),
        "usb-c-to-usb-a" => Some(dec!(0.18)),
        "usb-c-to-lightning" => Some(dec!(0.18)),
        _ => None,
    }
}

// =============================================================================
// Weight Estimator
// =============================================================================

/// Estimates the total shipment weight for a cart, in pounds.
///
/// Sums `weight(item) × qty` over all items, with unknown product ids
/// falling back to the default per-unit weight (silently - not an error).
///
/// Pure and deterministic; an empty cart weighs exactly zero.
///
/// ## Example
/// ```rust
/// use checkout_core::{estimate_weight, CartItem};
/// use rust_decimal_macros::dec;
///
/// let cart = vec![CartItem::new("65w-laptop-charger", "65W Laptop Charger", dec!(25), 2)];
/// assert_eq!(estimate_weight(&cart), dec!(0.90));
/// assert_eq!(estimate_weight(&[]), dec!(0));
/// ```
pub fn estimate_weight(cart: &[CartItem]) -> Decimal {
    cart.iter()
        .map(|item| {
            let per_unit = product_weight(&item.id).unwrap_or(DEFAULT_ITEM_WEIGHT_LBS);
            per_unit * Decimal::from(item.qty)
        })
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, qty: u32) -> CartItem {
        CartItem::new(id, format!("Product {id}"), dec!(10), qty)
    }

    #[test]
    fn test_empty_cart_weighs_zero() {
        assert_eq!(estimate_weight(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_single_item_weight() {
        // Two 65W chargers at 0.45 lb each
        let cart = vec![item("65w-laptop-charger", 2)];
        assert_eq!(estimate_weight(&cart), dec!(0.90));
    }

    #[test]
    fn test_mixed_cart_weight() {
        let cart = vec![
            item("20w-dual-adapter", 1),   // 0.25
            item("100w-hub-charger", 2),   // 1.10
            item("usb-c-to-lightning", 3), // 0.54
        ];
        assert_eq!(estimate_weight(&cart), dec!(1.89));
    }

    #[test]
    fn test_unknown_product_uses_default_weight() {
        let cart = vec![item("mystery-sku", 3)];
        assert_eq!(estimate_weight(&cart), dec!(0.54)); // 3 × 0.18
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let cart = vec![item("100w-hub-charger", 0), item("20w-dual-adapter", 1)];
        assert_eq!(estimate_weight(&cart), dec!(0.25));
    }

    #[test]
    fn test_weight_never_negative() {
        // qty is u32, so any cart of non-negative quantities weighs >= 0
        let cart = vec![item("usb-c-to-usb-a", 0), item("unknown", 0)];
        assert!(estimate_weight(&cart) >= Decimal::ZERO);
    }
}
