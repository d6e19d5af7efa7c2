//! # Static Rate Tables
//!
//! The carrier rate table and the per-state sales tax table.
//!
//! ## Lookup Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rate Table Lookups                                │
//! │                                                                         │
//! │  Carrier id ("USPS_Ground") ──► Carrier::from_id()                     │
//! │       │                              │                                  │
//! │       │ known                        │ unknown                          │
//! │       ▼                              ▼                                  │
//! │  CarrierRate { base, per_lb }   CoreError::UnknownCarrier (fail fast)  │
//! │                                                                         │
//! │  Region code ("CA") ──► tax_rate()                                     │
//! │       │                      │                                          │
//! │       │ known                │ unknown                                  │
//! │       ▼                      ▼                                          │
//! │  Decimal rate in [0, 1)   Decimal::ZERO (silent, NOT an error)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The asymmetry is deliberate: region codes come from free-ish input and an
//! unknown one prices tax-free, while carrier ids come from our own selector
//! and an unknown one is a caller bug.
//!
//! Rates are simplified flat tables - a production system would use a
//! rate API and jurisdiction lookup, which are explicit non-goals here.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Carrier
// =============================================================================

/// A shipping provider/service tier.
///
/// Carriers form a closed set, so they are an enum rather than a string key.
/// The serde renames preserve the wire ids the frontend already uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Carrier {
    #[serde(rename = "USPS_Ground")]
    UspsGround,
    #[serde(rename = "USPS_Priority")]
    UspsPriority,
    #[serde(rename = "UPS_Ground")]
    UpsGround,
    #[serde(rename = "UPS_3Day")]
    Ups3Day,
    #[serde(rename = "FedEx_Ground")]
    FedexGround,
    #[serde(rename = "FedEx_Express")]
    FedexExpress,
    #[serde(rename = "Amazon_Standard")]
    AmazonStandard,
}

/// Flat base cost plus a per-pound rate for one carrier tier.
///
/// Invariant: `base >= 0` and `per_lb >= 0` for every table entry
/// (asserted by tests below).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRate {
    /// Flat cost charged regardless of weight.
    #[ts(type = "string")]
    pub base: Decimal,

    /// Additional cost per pound of shipment weight.
    #[ts(type = "string")]
    pub per_lb: Decimal,

    /// Human-readable name for the shipping method selector.
    pub display_name: &'static str,
}

impl Carrier {
    /// Every carrier in the rate table, in selector display order.
    pub const ALL: [Carrier; 7] = [
        Carrier::UspsGround,
        Carrier::UspsPriority,
        Carrier::UpsGround,
        Carrier::Ups3Day,
        Carrier::FedexGround,
        Carrier::FedexExpress,
        Carrier::AmazonStandard,
    ];

    /// Resolves a wire id to a carrier.
    ///
    /// ## Errors
    /// Returns [`CoreError::UnknownCarrier`] for ids not in the rate table.
    /// Absence is a caller precondition violation, not a silent fallback.
    pub fn from_id(id: &str) -> CoreResult<Carrier> {
        match id {
            "USPS_Ground" => Ok(Carrier::UspsGround),
            "USPS_Priority" => Ok(Carrier::UspsPriority),
            "UPS_Ground" => Ok(Carrier::UpsGround),
            "UPS_3Day" => Ok(Carrier::Ups3Day),
            "FedEx_Ground" => Ok(Carrier::FedexGround),
            "FedEx_Express" => Ok(Carrier::FedexExpress),
            "Amazon_Standard" => Ok(Carrier::AmazonStandard),
            other => Err(CoreError::UnknownCarrier(other.to_string())),
        }
    }

    /// The carrier's wire id (the key the frontend sends back).
    pub const fn id(&self) -> &'static str {
        match self {
            Carrier::UspsGround => "USPS_Ground",
            Carrier::UspsPriority => "USPS_Priority",
            Carrier::UpsGround => "UPS_Ground",
            Carrier::Ups3Day => "UPS_3Day",
            Carrier::FedexGround => "FedEx_Ground",
            Carrier::FedexExpress => "FedEx_Express",
            Carrier::AmazonStandard => "Amazon_Standard",
        }
    }

    /// The carrier's rate table entry.
    pub const fn rate(&self) -> CarrierRate {
        match self {
            Carrier::UspsGround => CarrierRate {
                base: dec!(4.95),
                per_lb: dec!(0.85),
                display_name: "USPS Ground",
            },
            Carrier::UspsPriority => CarrierRate {
                base: dec!(8.95),
                per_lb: dec!(1.25),
                display_name: "USPS Priority",
            },
            Carrier::UpsGround => CarrierRate {
                base: dec!(7.95),
                per_lb: dec!(1.15),
                display_name: "UPS Ground",
            },
            Carrier::Ups3Day => CarrierRate {
                base: dec!(12.95),
                per_lb: dec!(2.25),
                display_name: "UPS 3-Day",
            },
            Carrier::FedexGround => CarrierRate {
                base: dec!(8.45),
                per_lb: dec!(1.35),
                display_name: "FedEx Ground",
            },
            Carrier::FedexExpress => CarrierRate {
                base: dec!(15.95),
                per_lb: dec!(2.85),
                display_name: "FedEx Express",
            },
            Carrier::AmazonStandard => CarrierRate {
                base: dec!(4.50),
                per_lb: dec!(0.99),
                display_name: "Amazon Standard",
            },
        }
    }

    /// Human-readable name for the shipping method selector.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        self.rate().display_name
    }
}

// =============================================================================
// Sales Tax Table
// =============================================================================

/// Looks up the sales tax rate for a 2-letter US state code.
///
/// ## Fallback
/// Unknown region codes yield `0` - silently, per the pricing contract.
/// The five no-sales-tax states (AK, DE, MT, NH, OR) are listed explicitly
/// so a reader can tell "known, tax-free" from "unknown".
///
/// ## Example
/// ```rust
/// use checkout_core::tax_rate;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(tax_rate("CA"), dec!(0.0725));
/// assert_eq!(tax_rate("OR"), dec!(0));
/// assert_eq!(tax_rate("ZZ"), dec!(0)); // unknown: not an error
/// ```
pub fn tax_rate(region: &str) -> Decimal {
    match region {
        "AL" => dec!(0.04),
        "AK" => dec!(0.00),
        "AZ" => dec!(0.056),
        "AR" => dec!(0.065),
        "CA" => dec!(0.0725),
        "CO" => dec!(0.029),
        "CT" => dec!(0.0635),
        "DE" => dec!(0.00),
        "FL" => dec!(0.06),
        "GA" => dec!(0.04),
        "HI" => dec!(0.04),
        "ID" => dec!(0.06),
        "IL" => dec!(0.0625),
        "IN" => dec!(0.07),
        "IA" => dec!(0.06),
        "KS" => dec!(0.065),
        "KY" => dec!(0.06),
        "LA" => dec!(0.0445),
        "ME" => dec!(0.055),
        "MD" => dec!(0.06),
        "MA" => dec!(0.0625),
        "MI" => dec!(0.06),
        "MN" => dec!(0.06875),
        "MS" => dec!(0.07),
        "MO" => dec!(0.0423),
        "MT" => dec!(0.00),
        "NE" => dec!(0.055),
        "NV" => dec!(0.0685),
        "NH" => dec!(0.00),
        "NJ" => dec!(0.06625),
        "NM" => dec!(0.05125),
        "NY" => dec!(0.08),
        "NC" => dec!(0.0475),
        "ND" => dec!(0.05),
        "OH" => dec!(0.0575),
        "OK" => dec!(0.045),
        "OR" => dec!(0.00),
        "PA" => dec!(0.06),
        "RI" => dec!(0.07),
        "SC" => dec!(0.06),
        "SD" => dec!(0.045),
        "TN" => dec!(0.07),
        "TX" => dec!(0.0625),
        "UT" => dec!(0.0485),
        "VT" => dec!(0.06),
        "VA" => dec!(0.053),
        "WA" => dec!(0.065),
        "WV" => dec!(0.06),
        "WI" => dec!(0.05),
        "WY" => dec!(0.04),
        _ => Decimal::ZERO,
    }
}

/// The region codes present in the tax table, in table order.
///
/// Used by the frontend to populate the state selector.
pub const KNOWN_REGIONS: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

// =============================================================================
// Unit Tests
// =============================================================================
