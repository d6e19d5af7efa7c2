//! # Pricing Calculator
//!
//! Computes shipping cost and tax for one set of checkout inputs.
//!
//! ## Computation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Computation                                │
//! │                                                                         │
//! │  (subtotal, weight, region, carrier)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  weight >= 35 lb OR subtotal >= $85 ?                                   │
//! │       │                                                                 │
//! │       ├── yes ──► shipping = 0                  (free shipping)         │
//! │       │                                                                 │
//! │       └── no ───► shipping = base + per_lb × weight                     │
//! │                                                                         │
//! │  tax = subtotal × tax_rate(region)      (0 for unknown regions)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingResult { shipping_cost, tax_amount }    ← exact, unrounded      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Statelessness
//! Every call is a fresh, idempotent computation from its inputs. The
//! "recompute when region/carrier/weight/subtotal changes" behavior lives
//! in the session layer, which simply calls back into here.

use rust_decimal::Decimal;

use crate::rates::{tax_rate, Carrier};
use crate::types::{FreeShippingBasis, PricingResult};
use crate::{FREE_SHIPPING_SUBTOTAL, FREE_SHIPPING_WEIGHT_LBS};

// =============================================================================
// Free Shipping Policy
// =============================================================================

/// Whether an order ships free: total weight at or above the weight cutoff,
/// or subtotal at or above the price cutoff.
///
/// Derived, never stored - recomputed from the current weight/subtotal.
#[inline]
pub fn qualifies_for_free_shipping(subtotal: Decimal, total_weight: Decimal) -> bool {
    total_weight >= FREE_SHIPPING_WEIGHT_LBS || subtotal >= FREE_SHIPPING_SUBTOTAL
}

/// Which threshold qualified the order, if any.
///
/// Weight takes precedence when both thresholds are met, matching what the
/// free-shipping banner reports.
pub fn free_shipping_basis(subtotal: Decimal, total_weight: Decimal) -> Option<FreeShippingBasis> {
    if total_weight >= FREE_SHIPPING_WEIGHT_LBS {
        Some(FreeShippingBasis::Weight)
    } else if subtotal >= FREE_SHIPPING_SUBTOTAL {
        Some(FreeShippingBasis::Subtotal)
    } else {
        None
    }
}

// =============================================================================
// Pricing Calculator
// =============================================================================

/// Computes shipping cost and tax amount for one order.
///
/// ## Algorithm
/// 1. Free shipping check: weight >= 35 lb or subtotal >= $85 → shipping 0
/// 2. Otherwise `shipping = base + per_lb × weight` for the selected carrier
/// 3. `tax = subtotal × tax_rate(region)`, rate 0 for unknown regions
///
/// ## Precision
/// No rounding is applied - `5.715` stays `5.715`. Display rounding to
/// cents is the caller's job (see [`crate::money::round_to_cents`]).
///
/// ## Example
/// ```rust
/// use checkout_core::{compute_pricing, Carrier};
/// use rust_decimal_macros::dec;
///
/// let quote = compute_pricing(dec!(50), dec!(0.90), "CA", Carrier::UspsGround);
/// assert_eq!(quote.shipping_cost, dec!(5.715));
/// assert_eq!(quote.tax_amount, dec!(3.625));
/// ```
pub fn compute_pricing(
    subtotal: Decimal,
    total_weight: Decimal,
    region: &str,
    carrier: Carrier,
) -> PricingResult {
    let shipping_cost = if qualifies_for_free_shipping(subtotal, total_weight) {
        Decimal::ZERO
    } else {
        let rate = carrier.rate();
        rate.base + rate.per_lb * total_weight
    };

    let tax_amount = subtotal * tax_rate(region);

    PricingResult {
        shipping_cost,
        tax_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usps_ground_to_california_quote() {
        // $50 subtotal, 0.90 lb (two 65W chargers), CA, USPS Ground
        let quote = compute_pricing(dec!(50), dec!(0.90), "CA", Carrier::UspsGround);
        assert_eq!(quote.shipping_cost, dec!(5.715)); // 4.95 + 0.85 × 0.90
        assert_eq!(quote.tax_amount, dec!(3.625)); // 50 × 0.0725

        let final_total = dec!(50) + quote.shipping_cost + quote.tax_amount;
        assert_eq!(final_total, dec!(59.34));
    }

    #[test]
    fn test_subtotal_threshold_waives_shipping() {
        // $90 subtotal clears the $85 cutoff regardless of weight or carrier
        let quote = compute_pricing(dec!(90), dec!(2.5), "NY", Carrier::FedexExpress);
        assert_eq!(quote.shipping_cost, Decimal::ZERO);
        assert_eq!(quote.tax_amount, dec!(7.20)); // 90 × 0.08

        let final_total = dec!(90) + quote.shipping_cost + quote.tax_amount;
        assert_eq!(final_total, dec!(97.20));
    }

    #[test]
    fn test_free_shipping_by_weight() {
        for carrier in Carrier::ALL {
            let quote = compute_pricing(dec!(20), dec!(35), "TX", carrier);
            assert_eq!(quote.shipping_cost, Decimal::ZERO, "{}", carrier.id());
        }
    }

    #[test]
    fn test_free_shipping_thresholds_are_inclusive() {
        assert!(qualifies_for_free_shipping(dec!(85), dec!(0)));
        assert!(qualifies_for_free_shipping(dec!(0), dec!(35)));
        assert!(!qualifies_for_free_shipping(dec!(84.99), dec!(34.99)));
    }

    #[test]
    fn test_paid_shipping_is_exact() {
        // Below both thresholds: shipping = base + per_lb × weight, unrounded
        let quote = compute_pricing(dec!(30), dec!(2.2), "FL", Carrier::UpsGround);
        assert_eq!(quote.shipping_cost, dec!(7.95) + dec!(1.15) * dec!(2.2)); // 10.48
        assert_eq!(quote.shipping_cost, dec!(10.48));
    }

    #[test]
    fn test_tax_free_regions() {
        for region in ["AK", "OR", "NH", "MT", "DE"] {
            let quote = compute_pricing(dec!(50), dec!(1), region, Carrier::UspsGround);
            assert_eq!(quote.tax_amount, Decimal::ZERO, "{region}");
        }
    }

    #[test]
    fn test_unknown_region_taxed_at_zero() {
        let quote = compute_pricing(dec!(50), dec!(1), "ZZ", Carrier::UspsGround);
        assert_eq!(quote.tax_amount, Decimal::ZERO);
        // Shipping is still priced normally
        assert_eq!(quote.shipping_cost, dec!(5.80)); // 4.95 + 0.85 × 1
    }

    #[test]
    fn test_zero_subtotal_zero_weight() {
        let quote = compute_pricing(Decimal::ZERO, Decimal::ZERO, "CA", Carrier::AmazonStandard);
        assert_eq!(quote.shipping_cost, dec!(4.50)); // base only
        assert_eq!(quote.tax_amount, Decimal::ZERO);
    }

    #[test]
    fn test_idempotent_recomputation() {
        let a = compute_pricing(dec!(42.42), dec!(3.3), "WA", Carrier::UspsPriority);
        let b = compute_pricing(dec!(42.42), dec!(3.3), "WA", Carrier::UspsPriority);
        assert_eq!(a, b);
    }

    #[test]
    fn test_free_shipping_basis_weight_wins() {
        assert_eq!(
            free_shipping_basis(dec!(100), dec!(40)),
            Some(FreeShippingBasis::Weight)
        );
        assert_eq!(
            free_shipping_basis(dec!(100), dec!(1)),
            Some(FreeShippingBasis::Subtotal)
        );
        assert_eq!(free_shipping_basis(dec!(10), dec!(1)), None);
    }
}
