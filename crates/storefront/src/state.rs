//! The assembled shop.
//!
//! [`Shop`] wires configuration, catalog, storage backend, notifier, cart
//! store, order history, account manager, and content store behind one
//! constructor, so embedders and tests build the whole thing in one call.

use std::sync::Arc;

use crate::account::AccountManager;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutFlow, PaymentGateway};
use crate::config::StoreConfig;
use crate::content::ContentStore;
use crate::error::StorefrontError;
use crate::notify::{Notifier, TracingNotifier};
use crate::orders::{Order, OrderHistory};
use crate::storage::{SledBackend, StorageBackend};
use crate::store::{CartStore, StoreError};

use eliteshop_core::OrderId;

/// The assembled storefront state.
pub struct Shop {
    config: StoreConfig,
    notifier: Arc<dyn Notifier>,
    store: CartStore,
    orders: OrderHistory,
    account: AccountManager,
    content: ContentStore,
}

impl Shop {
    /// Assemble a shop over an explicit backend and notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if persisted state cannot be loaded.
    pub fn open(
        config: StoreConfig,
        backend: Arc<dyn StorageBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StorefrontError> {
        let catalog = Arc::new(Catalog::sample());
        let store = CartStore::open(catalog, backend.clone(), notifier.clone())?;
        let orders = OrderHistory::open(backend.clone())?;
        let account = AccountManager::new(backend, notifier.clone());
        let content = ContentStore::load();

        Ok(Self {
            config,
            notifier,
            store,
            orders,
            account,
            content,
        })
    }

    /// Assemble a shop over the durable backend at the configured data
    /// directory, with toasts forwarded to `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or persisted state
    /// cannot be loaded.
    pub fn open_durable(config: StoreConfig) -> Result<Self, StorefrontError> {
        let backend = Arc::new(SledBackend::open(&config.data_dir)?);
        Self::open(config, backend, Arc::new(TracingNotifier))
    }

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The static catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    /// The cart/wishlist store.
    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// Mutable access to the cart/wishlist store.
    pub fn store_mut(&mut self) -> &mut CartStore {
        &mut self.store
    }

    /// The order history.
    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    /// Mutable access to the order history.
    pub fn orders_mut(&mut self) -> &mut OrderHistory {
        &mut self.orders
    }

    /// The account manager.
    #[must_use]
    pub const fn account(&self) -> &AccountManager {
        &self.account
    }

    /// The blog/FAQ content store.
    #[must_use]
    pub const fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The toast presenter.
    #[must_use]
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Re-add a past order's lines to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a product no longer resolves or persisting
    /// fails.
    pub fn reorder(&mut self, id: &OrderId) -> Result<(), StoreError> {
        self.orders.reorder(id, &mut self.store)
    }

    /// Run a checkout against this shop's cart and history.
    ///
    /// # Errors
    ///
    /// See [`CheckoutFlow::place_order`].
    pub async fn place_order<G: PaymentGateway>(
        &mut self,
        flow: &mut CheckoutFlow,
        gateway: &G,
    ) -> Result<Order, crate::checkout::CheckoutError> {
        flow.place_order(gateway, &mut self.store, &mut self.orders, &self.config)
            .await
    }
}
