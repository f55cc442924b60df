//! Integration tests for EliteShop.
//!
//! Drives full shopper flows across the storefront and admin crates over
//! an in-memory backend and a recording notifier.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart and wishlist behavior through the dispatch table
//! - `checkout_flow` - Checkout, order history, reorder, and admin stats
//! - `persistence` - Backend round-trips and failure surfacing

use std::sync::Arc;

use eliteshop_storefront::checkout::{PaymentForm, ShippingForm};
use eliteshop_storefront::config::StoreConfig;
use eliteshop_storefront::notify::RecordingNotifier;
use eliteshop_storefront::state::Shop;
use eliteshop_storefront::storage::MemoryBackend;

/// A fully assembled shop over fakes, plus handles to observe it.
pub struct TestContext {
    pub shop: Shop,
    pub backend: Arc<MemoryBackend>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    /// Build a fresh shop over an empty in-memory backend.
    ///
    /// # Panics
    ///
    /// Panics if the shop cannot be assembled (nothing is persisted yet,
    /// so this only happens on programmer error).
    #[must_use]
    pub fn new() -> Self {
        init_tracing();

        let backend = Arc::new(MemoryBackend::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let shop = Shop::open(StoreConfig::default(), backend.clone(), notifier.clone())
            .expect("fresh shop assembles");

        Self {
            shop,
            backend,
            notifier,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize test logging once; respects `RUST_LOG`.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A complete, valid shipping form.
#[must_use]
pub fn filled_shipping() -> ShippingForm {
    ShippingForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane.doe@example.com".to_owned(),
        phone: "+1 (555) 000-1111".to_owned(),
        address: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        state: "IL".to_owned(),
        zip_code: "62701".to_owned(),
        country: "US".to_owned(),
    }
}

/// A complete, valid card payment form.
#[must_use]
pub fn filled_payment() -> PaymentForm {
    PaymentForm {
        card_number: "4242 4242 4242 4242".to_owned(),
        expiry_date: "12/27".to_owned(),
        cvv: "123".to_owned(),
        card_name: "Jane Doe".to_owned(),
        ..PaymentForm::default()
    }
}
