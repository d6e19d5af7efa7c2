//! # checkout-session: Stateful Checkout Session
//!
//! The layer between the web checkout frontend and the pure pricing logic
//! in `checkout-core`.
//!
//! ## Recompute-on-Change
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Session Recompute Pipeline                          │
//! │                                                                         │
//! │  Frontend Action            Session Mutation        Quote               │
//! │  ───────────────            ────────────────        ─────               │
//! │                                                                         │
//! │  Add to cart ─────────────► add_item() ───────┐                        │
//! │  Change quantity ─────────► update_quantity() ─┤                        │
//! │  Select state ────────────► set_region() ──────┼──► recompute()        │
//! │  Select carrier ──────────► set_carrier() ─────┘         │             │
//! │                                                           ▼             │
//! │                                     region & carrier selected?          │
//! │                                        │                │               │
//! │                                        │ yes            │ no            │
//! │                                        ▼                ▼               │
//! │                                 Some(PricingResult)   None              │
//! │                                                    ("not ready")        │
//! │                                                                         │
//! │  The session holds no derived state beyond the quote itself; every      │
//! │  mutation recomputes from the current inputs.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - [`CheckoutSession`], [`SessionTotals`], [`SessionState`]
//! - [`payment`] - Payment initiation: receipt text, QR URL, provider stubs
//! - [`error`] - Session error types

pub mod error;
pub mod payment;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use payment::{
    format_receipt, qr_receipt_url, PaymentError, PaymentIntent, PaymentMethod,
};
pub use session::{CheckoutSession, SessionState, SessionTotals};
