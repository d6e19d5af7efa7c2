//! # Checkout Session State
//!
//! Owns the per-session inputs and keeps the pricing quote in sync.
//!
//! ## Ownership
//! Each session exclusively owns its inputs (cart, region, carrier); nothing
//! is shared across concurrent sessions. All computation is synchronous and
//! completes immediately, so there are no cancellation semantics.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Session Method           State Change         │
//! │  ───────────────          ──────────────           ────────────         │
//! │                                                                         │
//! │  Click Product ──────────► add_item() ───────────► items.push(item)    │
//! │                                                                         │
//! │  Change Quantity ────────► update_quantity() ────► items[i].qty = n    │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ────────► items.remove(i)     │
//! │                                                                         │
//! │  Select State ───────────► set_region() ─────────► region = Some(..)   │
//! │                                                                         │
//! │  Select Carrier ─────────► set_carrier() ────────► carrier = Some(..)  │
//! │                                                                         │
//! │  View Summary ───────────► totals() ─────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Every write operation ends by calling recompute(), so the quote  │
//! │        can never be stale with respect to the inputs.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use checkout_core::rates::KNOWN_REGIONS;
use checkout_core::validation::{
    validate_price, validate_product_id, validate_quantity, validate_region_code,
    validate_zip_code,
};
use checkout_core::{
    compute_pricing, estimate_weight, free_shipping_basis, Carrier, CartItem, FreeShippingBasis,
    PricingResult, MAX_CART_ITEMS, MAX_ITEM_QUANTITY,
};

use crate::error::{SessionError, SessionResult};
use crate::payment::{initiate_payment, PaymentError, PaymentIntent, PaymentMethod};

// =============================================================================
// Checkout Session
// =============================================================================

/// One customer's checkout in progress.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product merges quantity)
/// - Quantity is 1..=999 (updating to 0 removes the item)
/// - Maximum distinct items: 100
/// - `quote` is `Some` exactly when both region and carrier are selected,
///   and always reflects the current inputs
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    /// Session identity (UUID v4).
    #[ts(as = "String")]
    id: Uuid,

    /// Items in the cart.
    items: Vec<CartItem>,

    /// Destination ZIP, captured for the shipping label only.
    /// Never consulted for rates or tax (jurisdiction-by-ZIP is a non-goal).
    zip_code: Option<String>,

    /// Selected 2-letter state code, if any.
    region: Option<String>,

    /// Selected shipping carrier, if any.
    carrier: Option<Carrier>,

    /// Current pricing quote; `None` until region and carrier are selected.
    quote: Option<PricingResult>,

    /// When the session was created.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,

    /// When the session was last mutated.
    #[ts(as = "String")]
    updated_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Creates a new empty session.
    pub fn new() -> Self {
        let now = Utc::now();
        CheckoutSession {
            id: Uuid::new_v4(),
            items: Vec::new(),
            zip_code: None,
            region: None,
            carrier: None,
            quote: None,
            created_at: now,
            updated_at: now,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Session id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Items currently in the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Selected region code, if any.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Selected carrier, if any.
    pub fn carrier(&self) -> Option<Carrier> {
        self.carrier
    }

    /// Captured ZIP code, if any.
    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    /// Current quote, or `None` while region or carrier is unselected.
    pub fn quote(&self) -> Option<PricingResult> {
        self.quote
    }

    /// Whether the session has everything it needs to price shipping and tax.
    pub fn is_ready(&self) -> bool {
        self.quote.is_some()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.qty).sum()
    }

    /// Cart subtotal (sum of line totals), exact.
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Estimated shipment weight in pounds, exact.
    pub fn total_weight(&self) -> Decimal {
        estimate_weight(&self.items)
    }

    /// Order summary totals snapshot.
    pub fn totals(&self) -> SessionTotals {
        SessionTotals::from(self)
    }

    // -------------------------------------------------------------------------
    // Cart Operations
    // -------------------------------------------------------------------------

    /// Adds an item to the cart, merging quantity if the product is already
    /// present. The first-seen name and price are kept on merge.
    pub fn add_item(&mut self, item: CartItem) -> SessionResult<()> {
        validate_product_id(&item.id)?;
        validate_quantity(item.qty)?;
        validate_price(item.price)?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let merged = existing.qty.saturating_add(item.qty);
            if merged > MAX_ITEM_QUANTITY {
                return Err(SessionError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.qty = merged;
        } else {
            if self.items.len() >= MAX_CART_ITEMS {
                return Err(SessionError::CartTooLarge {
                    max: MAX_CART_ITEMS,
                });
            }
            self.items.push(item);
        }

        self.recompute();
        Ok(())
    }

    /// Sets the quantity of an item already in the cart.
    /// A quantity of 0 removes the item.
    pub fn update_quantity(&mut self, product_id: &str, qty: u32) -> SessionResult<()> {
        if qty == 0 {
            return self.remove_item(product_id);
        }

        if qty > MAX_ITEM_QUANTITY {
            return Err(SessionError::QuantityTooLarge {
                requested: qty,
                max: MAX_ITEM_QUANTITY,
            });
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or_else(|| SessionError::ItemNotInCart(product_id.to_string()))?;
        item.qty = qty;

        self.recompute();
        Ok(())
    }

    /// Removes an item from the cart by product id.
    pub fn remove_item(&mut self, product_id: &str) -> SessionResult<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != product_id);

        if self.items.len() == before {
            return Err(SessionError::ItemNotInCart(product_id.to_string()));
        }

        self.recompute();
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.recompute();
    }

    // -------------------------------------------------------------------------
    // Destination & Carrier Selection
    // -------------------------------------------------------------------------

    /// Selects the destination state.
    ///
    /// A well-formed code outside the tax table is accepted and prices
    /// tax-free, per the contract; it is logged since it usually means the
    /// frontend selector and the tax table have drifted apart.
    pub fn set_region(&mut self, region: &str) -> SessionResult<()> {
        validate_region_code(region)?;

        if !KNOWN_REGIONS.contains(&region) {
            warn!(region, "region not in tax table; pricing tax-free");
        }

        self.region = Some(region.to_string());
        self.recompute();
        Ok(())
    }

    /// Selects the shipping carrier.
    pub fn set_carrier(&mut self, carrier: Carrier) {
        self.carrier = Some(carrier);
        self.recompute();
    }

    /// Selects the shipping carrier from its wire id.
    ///
    /// ## Errors
    /// Unknown ids fail fast with [`checkout_core::CoreError::UnknownCarrier`].
    pub fn set_carrier_by_id(&mut self, carrier_id: &str) -> SessionResult<()> {
        let carrier = Carrier::from_id(carrier_id)?;
        self.set_carrier(carrier);
        Ok(())
    }

    /// Captures the destination ZIP code.
    pub fn set_zip_code(&mut self, zip: &str) -> SessionResult<()> {
        validate_zip_code(zip)?;
        self.zip_code = Some(zip.to_string());
        // ZIP is not a pricing input; the quote is unaffected
        self.updated_at = Utc::now();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    /// Initiates a payment for the current totals.
    ///
    /// See [`crate::payment::initiate_payment`] for per-method behavior.
    pub fn initiate_payment(&self, method: PaymentMethod) -> Result<PaymentIntent, PaymentError> {
        initiate_payment(&self.totals(), method)
    }

    // -------------------------------------------------------------------------
    // Recompute
    // -------------------------------------------------------------------------

    /// Rebuilds the quote from the current inputs.
    ///
    /// Called at the end of every pricing-relevant mutation. The quote is
    /// withheld (set to `None`) until both region and carrier are selected.
    fn recompute(&mut self) {
        self.updated_at = Utc::now();

        let (Some(region), Some(carrier)) = (self.region.as_deref(), self.carrier) else {
            self.quote = None;
            debug!(
                session = %self.id,
                "pricing not ready: region or carrier unselected"
            );
            return;
        };

        let subtotal = self.subtotal();
        let weight = self.total_weight();
        let quote = compute_pricing(subtotal, weight, region, carrier);

        debug!(
            session = %self.id,
            %subtotal,
            %weight,
            region,
            carrier = carrier.id(),
            shipping = %quote.shipping_cost,
            tax = %quote.tax_amount,
            "quote recomputed"
        );

        self.quote = Some(quote);
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Session Totals
// =============================================================================

/// Order summary snapshot for the frontend.
///
/// Shipping and tax are zero while the quote is not ready, so
/// `final_total` always equals `subtotal + shipping_cost + tax_amount`.
/// All amounts are exact; the frontend rounds for display.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    pub item_count: usize,
    pub total_quantity: u32,
    #[ts(type = "string")]
    pub subtotal: Decimal,
    /// Estimated shipment weight in pounds.
    #[ts(type = "string")]
    pub total_weight: Decimal,
    #[ts(type = "string")]
    pub shipping_cost: Decimal,
    #[ts(type = "string")]
    pub tax_amount: Decimal,
    /// `subtotal + shipping_cost + tax_amount`.
    #[ts(type = "string")]
    pub final_total: Decimal,
    /// Which threshold earned free shipping, if any. Derived from the
    /// current weight/subtotal even before a carrier is selected, so the
    /// banner can show ahead of the quote.
    pub free_shipping: Option<FreeShippingBasis>,
    /// Whether shipping and tax reflect a real quote yet.
    pub ready: bool,
}

impl From<&CheckoutSession> for SessionTotals {
    fn from(session: &CheckoutSession) -> Self {
        let subtotal = session.subtotal();
        let total_weight = session.total_weight();
        let (shipping_cost, tax_amount) = match session.quote() {
            Some(quote) => (quote.shipping_cost, quote.tax_amount),
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        SessionTotals {
            item_count: session.item_count(),
            total_quantity: session.total_quantity(),
            subtotal,
            total_weight,
            shipping_cost,
            tax_amount,
            final_total: subtotal + shipping_cost + tax_amount,
            free_shipping: free_shipping_basis(subtotal, total_weight),
            ready: session.is_ready(),
        }
    }
}

// =============================================================================
// Shared Session State
// =============================================================================

/// Shared handle to a checkout session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<CheckoutSession>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one caller mutates the session at a time
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them mutate state; a RwLock
/// would add complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<CheckoutSession>>,
}

impl SessionState {
    /// Creates state around a fresh session.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(CheckoutSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CheckoutSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CheckoutSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }

    fn charger(qty: u32) -> CartItem {
        CartItem::new("65w-laptop-charger", "65W Laptop Charger", dec!(25), qty)
    }

    #[test]
    fn test_new_session_not_ready() {
        let session = CheckoutSession::new();
        assert!(session.is_empty());
        assert!(!session.is_ready());
        assert_eq!(session.quote(), None);
        assert_eq!(session.subtotal(), Decimal::ZERO);
        assert_eq!(session.total_weight(), Decimal::ZERO);
    }

    #[test]
    fn test_quote_withheld_until_region_and_carrier() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();

        // Only region selected: still not ready
        session.set_region("CA").unwrap();
        assert_eq!(session.quote(), None);

        // Carrier completes the inputs
        session.set_carrier(Carrier::UspsGround);
        assert!(session.is_ready());
    }

    #[test]
    fn test_full_checkout_quote_end_to_end() {
        init_tracing();

        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap(); // subtotal $50, weight 0.90 lb
        session.set_region("CA").unwrap();
        session.set_carrier_by_id("USPS_Ground").unwrap();

        let totals = session.totals();
        assert_eq!(totals.subtotal, dec!(50));
        assert_eq!(totals.total_weight, dec!(0.90));
        assert_eq!(totals.shipping_cost, dec!(5.715));
        assert_eq!(totals.tax_amount, dec!(3.625));
        assert_eq!(totals.final_total, dec!(59.34));
        assert_eq!(totals.free_shipping, None);
        assert!(totals.ready);
    }

    #[test]
    fn test_recompute_on_every_input_change() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.set_region("CA").unwrap();
        session.set_carrier(Carrier::UspsGround);
        let first = session.quote().unwrap();

        // Changing quantity changes weight and subtotal, hence the quote
        session.update_quantity("65w-laptop-charger", 1).unwrap();
        let second = session.quote().unwrap();
        assert_ne!(first, second);
        assert_eq!(second.shipping_cost, dec!(5.3325)); // 4.95 + 0.85 × 0.45

        // Changing region changes only tax
        session.set_region("OR").unwrap();
        let third = session.quote().unwrap();
        assert_eq!(third.shipping_cost, second.shipping_cost);
        assert_eq!(third.tax_amount, Decimal::ZERO);

        // Changing carrier changes only shipping
        session.set_carrier(Carrier::FedexExpress);
        let fourth = session.quote().unwrap();
        assert_eq!(fourth.shipping_cost, dec!(15.95) + dec!(2.85) * dec!(0.45));
        assert_eq!(fourth.tax_amount, third.tax_amount);
    }

    #[test]
    fn test_free_shipping_by_subtotal() {
        let mut session = CheckoutSession::new();
        session
            .add_item(CartItem::new(
                "100w-hub-charger",
                "100W Hub Charger",
                dec!(45),
                2,
            ))
            .unwrap(); // subtotal $90
        session.set_region("NY").unwrap();
        session.set_carrier(Carrier::Ups3Day);

        let totals = session.totals();
        assert_eq!(totals.shipping_cost, Decimal::ZERO);
        assert_eq!(totals.tax_amount, dec!(7.20));
        assert_eq!(totals.final_total, dec!(97.20));
        assert_eq!(totals.free_shipping, Some(FreeShippingBasis::Subtotal));
    }

    #[test]
    fn test_free_shipping_banner_before_carrier_selected() {
        let mut session = CheckoutSession::new();
        session
            .add_item(CartItem::new("heavy-kit", "Heavy Kit", dec!(10), 200))
            .unwrap(); // 200 × 0.18 default = 36 lb

        let totals = session.totals();
        assert!(!totals.ready);
        assert_eq!(totals.free_shipping, Some(FreeShippingBasis::Weight));
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.add_item(charger(3)).unwrap();

        assert_eq!(session.item_count(), 1);
        assert_eq!(session.total_quantity(), 5);
    }

    #[test]
    fn test_update_quantity_to_zero_removes() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.update_quantity("65w-laptop-charger", 0).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_remove_missing_item_fails() {
        let mut session = CheckoutSession::new();
        let err = session.remove_item("not-there").unwrap_err();
        assert!(matches!(err, SessionError::ItemNotInCart(_)));
    }

    #[test]
    fn test_quantity_caps_enforced() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(999)).unwrap();
        let err = session.add_item(charger(1)).unwrap_err();
        assert!(matches!(err, SessionError::QuantityTooLarge { .. }));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut session = CheckoutSession::new();

        assert!(session
            .add_item(CartItem::new("", "Nameless", dec!(1), 1))
            .is_err());
        assert!(session
            .add_item(CartItem::new("ok-id", "Free?", dec!(-1), 1))
            .is_err());
        assert!(session.set_region("cal").is_err());
        assert!(session.set_zip_code("9410").is_err());
        assert!(matches!(
            session.set_carrier_by_id("Pony_Express").unwrap_err(),
            SessionError::Core(_)
        ));
    }

    #[test]
    fn test_zip_code_does_not_affect_quote() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.set_region("CA").unwrap();
        session.set_carrier(Carrier::UspsGround);
        let before = session.quote().unwrap();

        session.set_zip_code("94107").unwrap();
        assert_eq!(session.quote().unwrap(), before);
        assert_eq!(session.zip_code(), Some("94107"));
    }

    #[test]
    fn test_clear_cart_resets_quote_amounts() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.set_region("CA").unwrap();
        session.set_carrier(Carrier::UspsGround);

        session.clear_cart();
        let totals = session.totals();
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        // Empty cart below both thresholds: shipping is the carrier base
        assert_eq!(totals.shipping_cost, dec!(4.95));
    }

    #[test]
    fn test_session_state_shared_access() {
        let state = SessionState::new();
        state.with_session_mut(|s| s.add_item(charger(1))).unwrap();

        let qty = state.with_session(|s| s.total_quantity());
        assert_eq!(qty, 1);
    }

    #[test]
    fn test_totals_wire_format() {
        let mut session = CheckoutSession::new();
        session.add_item(charger(2)).unwrap();
        session.set_region("CA").unwrap();
        session.set_carrier(Carrier::UspsGround);

        let json = serde_json::to_value(session.totals()).unwrap();
        // Amounts serialize as strings; scale may carry trailing zeros,
        // so compare numerically after parsing
        let shipping: Decimal = json["shippingCost"].as_str().unwrap().parse().unwrap();
        let final_total: Decimal = json["finalTotal"].as_str().unwrap().parse().unwrap();
        assert_eq!(shipping, dec!(5.715));
        assert_eq!(final_total, dec!(59.34));
        assert_eq!(json["ready"], true);
    }
}
