//! # Money Display Helpers
//!
//! Display-time rounding and currency formatting.
//!
//! ## Why Rounding Lives Here and Nowhere Else
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE ROUNDING CONTRACT                                                  │
//! │                                                                         │
//! │  Pricing math is exact:                                                 │
//! │    4.95 + 0.85 × 0.90 = 5.715        ← stays 5.715 internally           │
//! │                                                                         │
//! │  Rounding happens once, at the display boundary:                        │
//! │    round_to_cents(5.715) = 5.72                                         │
//! │    format_usd(5.715)     = "$5.72"                                      │
//! │                                                                         │
//! │  Rounding inside the math would compound: a quote re-derived from a     │
//! │  rounded intermediate can differ from one derived from exact inputs.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Half-cent values round away from zero, matching how the web frontend's
//! `toFixed(2)` renders the same numbers.

use rust_decimal::{Decimal, RoundingStrategy};

// =============================================================================
// Display Rounding
// =============================================================================

/// Rounds an exact amount to 2 decimal places for display.
///
/// Uses round-half-away-from-zero: `5.715` → `5.72`, `3.625` → `3.63`.
///
/// ## Example
/// ```rust
/// use checkout_core::money::round_to_cents;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_to_cents(dec!(5.715)), dec!(5.72));
/// assert_eq!(round_to_cents(dec!(3.625)), dec!(3.63));
/// assert_eq!(round_to_cents(dec!(7.20)), dec!(7.20));
/// ```
#[inline]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as a US dollar string with exactly two decimals.
///
/// ## Example
/// ```rust
/// use checkout_core::money::format_usd;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_usd(dec!(5.715)), "$5.72");
/// assert_eq!(format_usd(dec!(0)), "$0.00");
/// assert_eq!(format_usd(dec!(-5.5)), "-$5.50");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    if rounded.is_sign_negative() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded)
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
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(dec!(5.715)), dec!(5.72));
        assert_eq!(round_to_cents(dec!(3.625)), dec!(3.63));
        assert_eq!(round_to_cents(dec!(59.34)), dec!(59.34));
        assert_eq!(round_to_cents(dec!(0)), dec!(0));
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(round_to_cents(dec!(0.005)), dec!(0.01));
        assert_eq!(round_to_cents(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(59.34)), "$59.34");
        assert_eq!(format_usd(dec!(5)), "$5.00");
        assert_eq!(format_usd(dec!(5.715)), "$5.72");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(dec!(-5.50)), "-$5.50");
    }
}
