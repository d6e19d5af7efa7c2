//! # Payment Initiation
//!
//! The payment surface of the checkout session.
//!
//! ## Provider Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Payment Initiation Paths                             │
//! │                                                                         │
//! │  Method        Integration            Result                            │
//! │  ──────        ───────────            ──────                            │
//! │                                                                         │
//! │  Card          none yet ────────────► Err(ProviderNotConfigured)       │
//! │  Crypto        none yet ────────────► Err(ProviderNotConfigured)       │
//! │  CashManual    manual settlement ───► instructions text                │
//! │  QrReceipt     external QR endpoint ► receipt URL (fire-and-forget)    │
//! │                                                                         │
//! │  Card and crypto are integration points without a protocol yet; a       │
//! │  real provider must define its own handshake. The QR path only builds   │
//! │  the URL - fetching the image is the frontend's problem, with no        │
//! │  retry.                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;
use url::Url;

use checkout_core::money::format_usd;

use crate::session::SessionTotals;

// =============================================================================
// Constants
// =============================================================================

/// External QR code generation endpoint.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Requested QR image size in pixels.
pub const QR_IMAGE_SIZE: &str = "300x300";

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer wants to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment via an external processor.
    Card,
    /// Cryptocurrency payment via an external wallet provider.
    Crypto,
    /// Cash or other manually settled payment.
    CashManual,
    /// Plain-text receipt rendered as a scannable QR code.
    QrReceipt,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Crypto => "crypto",
            PaymentMethod::CashManual => "cash/manual",
            PaymentMethod::QrReceipt => "qr-receipt",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Payment Error
// =============================================================================

/// Errors from payment initiation.
///
/// A failed initiation never invalidates the session; the customer can
/// simply pick another method.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The method has no provider integration yet.
    #[error("{method} payments are not configured yet")]
    ProviderNotConfigured { method: PaymentMethod },

    /// Building the QR receipt URL failed.
    #[error("Failed to build QR receipt URL: {0}")]
    QrUrl(#[from] url::ParseError),
}

// =============================================================================
// Payment Intent
// =============================================================================

/// A successfully initiated payment, ready for the frontend to act on.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    /// The method being initiated.
    pub method: PaymentMethod,

    /// Amount due (`final_total` at initiation time), exact.
    #[ts(type = "string")]
    pub amount: Decimal,

    /// Human-readable instructions or receipt text, when the method has any.
    pub instructions: Option<String>,

    /// URL of the rendered QR receipt, for [`PaymentMethod::QrReceipt`].
    pub receipt_url: Option<String>,
}

// =============================================================================
// Receipt Formatting
// =============================================================================

/// Renders the plain-text order receipt.
///
/// Amounts are rounded to cents here - this is the display boundary.
///
/// ## Example Output
/// ```text
/// Order Summary:
/// Subtotal: $50.00
/// Shipping: $5.72
/// Tax: $3.63
/// Total: $59.34
/// ```
pub fn format_receipt(totals: &SessionTotals) -> String {
    format!(
        "Order Summary:\nSubtotal: {}\nShipping: {}\nTax: {}\nTotal: {}",
        format_usd(totals.subtotal),
        format_usd(totals.shipping_cost),
        format_usd(totals.tax_amount),
        format_usd(totals.final_total),
    )
}

/// Builds the external QR endpoint URL for a receipt string.
///
/// The receipt is carried URL-encoded in the `data` query parameter.
/// Fetching the image is left to the caller (fire-and-forget, no retry).
pub fn qr_receipt_url(receipt: &str) -> Result<Url, PaymentError> {
    let url = Url::parse_with_params(QR_ENDPOINT, &[("size", QR_IMAGE_SIZE), ("data", receipt)])?;
    Ok(url)
}

// =============================================================================
// Payment Initiation
// =============================================================================

/// Initiates a payment for the given totals.
///
/// ## Per-Method Behavior
/// - `Card` / `Crypto`: no provider protocol is defined yet, so these fail
///   with [`PaymentError::ProviderNotConfigured`]
/// - `CashManual`: returns manual settlement instructions carrying the total
/// - `QrReceipt`: renders the receipt and returns the QR endpoint URL
pub fn initiate_payment(
    totals: &SessionTotals,
    method: PaymentMethod,
) -> Result<PaymentIntent, PaymentError> {
    debug!(%method, amount = %totals.final_total, "initiating payment");

    match method {
        PaymentMethod::Card | PaymentMethod::Crypto => {
            Err(PaymentError::ProviderNotConfigured { method })
        }
        PaymentMethod::CashManual => Ok(PaymentIntent {
            method,
            amount: totals.final_total,
            instructions: Some(format!(
                "Manual payment instructions:\n\
                 Contact the store to arrange cash payment or an escrow transaction.\n\
                 Total: {}",
                format_usd(totals.final_total)
            )),
            receipt_url: None,
        }),
        PaymentMethod::QrReceipt => {
            let receipt = format_receipt(totals);
            let url = qr_receipt_url(&receipt)?;
            Ok(PaymentIntent {
                method,
                amount: totals.final_total,
                instructions: Some(receipt),
                receipt_url: Some(url.into()),
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
