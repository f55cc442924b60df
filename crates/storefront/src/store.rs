//! Cart and wishlist state management.
//!
//! [`CartStore`] is the single source of truth for the shopping cart and
//! wishlist of the current profile. It mediates every mutation, persists
//! after each one, and emits a user-visible toast through the injected
//! [`Notifier`].
//!
//! Failure semantics are uniform: any operation referencing a product id
//! that does not resolve in the catalog fails with
//! [`StoreError::ProductNotFound`] and changes no state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use eliteshop_core::{CurrencyCode, Price, ProductId};

use crate::catalog::{Catalog, Product};
use crate::notify::{Notifier, Severity};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Smallest quantity a cart line may carry.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a cart line may carry.
pub const MAX_QUANTITY: u32 = 99;

/// Errors from cart and wishlist operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced product id does not exist in the catalog.
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),

    /// The persistence layer failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One product's entry in the cart.
///
/// Name, price, and image are snapshotted from the catalog at add time; a
/// later catalog change does not retroactively reprice a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Single source of truth for the cart and wishlist.
pub struct CartStore {
    catalog: Arc<Catalog>,
    backend: Arc<dyn StorageBackend>,
    notifier: Arc<dyn Notifier>,
    currency: CurrencyCode,
    cart: Vec<CartLine>,
    wishlist: Vec<ProductId>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("currency", &self.currency)
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open a store, loading any persisted cart and wishlist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if persisted state cannot be read or
    /// decoded.
    pub fn open(
        catalog: Arc<Catalog>,
        backend: Arc<dyn StorageBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StoreError> {
        let cart: Vec<CartLine> = storage::read_json(backend.as_ref(), keys::CART)?;
        let wishlist: Vec<ProductId> = storage::read_json(backend.as_ref(), keys::WISHLIST)?;
        let currency = catalog
            .products()
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code());

        Ok(Self {
            catalog,
            backend,
            notifier,
            currency,
            cart,
            wishlist,
        })
    }

    /// The catalog backing this store.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The notifier toasts are sent through.
    #[must_use]
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Current cart lines, in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// The cart line for a product, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.cart.iter().find(|l| l.product_id == product_id)
    }

    /// Σ price × quantity over all lines. Display rounding is deferred.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart
            .iter()
            .fold(Price::zero(self.currency), |total, line| {
                total.plus(&line.line_total())
            })
    }

    /// Σ quantities over all lines (badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// A product appears at most once: repeated adds accumulate quantity.
    /// Quantities clamp to [1, 99] on every path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown id (no state
    /// change), or [`StoreError::Storage`] if persisting fails.
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: u32) -> Result<(), StoreError> {
        let product = self.lookup(product_id)?.clone();

        if let Some(line) = self.cart.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = clamp_quantity(line.quantity.saturating_add(quantity));
        } else {
            self.cart.push(CartLine {
                product_id,
                name: product.name.clone(),
                price: product.price,
                image: product.image,
                quantity: clamp_quantity(quantity),
            });
        }

        self.save_cart()?;
        self.notifier
            .notify(&format!("{} added to cart", product.name), Severity::Success);
        Ok(())
    }

    /// Remove a product's line from the cart. Removing an absent product is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if persisting fails.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        let Some(position) = self.cart.iter().position(|l| l.product_id == product_id) else {
            return Ok(());
        };
        let removed = self.cart.remove(position);

        self.save_cart()?;
        self.notifier.notify(
            &format!("{} removed from cart", removed.name),
            Severity::Info,
        );
        Ok(())
    }

    /// Set a line's quantity directly.
    ///
    /// A quantity of zero or less removes the line; anything else clamps to
    /// [1, 99]. No toast is emitted for plain quantity edits.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if persisting fails.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i32) -> Result<(), StoreError> {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        #[allow(clippy::cast_sign_loss)]
        let requested = quantity as u32;
        let Some(line) = self.cart.iter_mut().find(|l| l.product_id == product_id) else {
            return Ok(());
        };
        line.quantity = clamp_quantity(requested);

        self.save_cart()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if persisting fails.
    pub fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.save_cart()?;
        self.notifier.notify("Cart cleared", Severity::Info);
        Ok(())
    }

    /// Empty the cart without a toast (checkout confirmation path).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if persisting fails.
    pub(crate) fn clear_cart_silent(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.save_cart()
    }

    // =========================================================================
    // Wishlist operations
    // =========================================================================

    /// Wishlisted product ids, in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[ProductId] {
        &self.wishlist
    }

    /// Whether a product is currently wishlisted.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(&product_id)
    }

    /// Wishlisted products resolved against the catalog.
    ///
    /// Ids that no longer resolve are skipped.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.wishlist
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    /// Toggle a product's wishlist membership.
    ///
    /// Returns `true` if the product is wishlisted after the call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown id (no state
    /// change), or [`StoreError::Storage`] if persisting fails.
    pub fn toggle_wishlist(&mut self, product_id: ProductId) -> Result<bool, StoreError> {
        let product = self.lookup(product_id)?;
        let name = product.name.clone();

        if let Some(position) = self.wishlist.iter().position(|&id| id == product_id) {
            self.wishlist.remove(position);
            self.save_wishlist()?;
            self.notifier
                .notify(&format!("{name} removed from wishlist"), Severity::Info);
            Ok(false)
        } else {
            self.wishlist.push(product_id);
            self.save_wishlist()?;
            self.notifier
                .notify(&format!("{name} added to wishlist"), Severity::Success);
            Ok(true)
        }
    }

    /// Move a cart line to the wishlist.
    ///
    /// The product ends up wishlisted (whether or not it already was) and
    /// out of the cart; one toast covers the whole move.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProductNotFound`] for an unknown id, or
    /// [`StoreError::Storage`] if persisting fails.
    pub fn move_to_wishlist(&mut self, product_id: ProductId) -> Result<(), StoreError> {
        let product = self.lookup(product_id)?;
        let name = product.name.clone();

        if !self.wishlist.contains(&product_id) {
            self.wishlist.push(product_id);
            self.save_wishlist()?;
        }
        if let Some(position) = self.cart.iter().position(|l| l.product_id == product_id) {
            self.cart.remove(position);
            self.save_cart()?;
        }

        self.notifier
            .notify(&format!("{name} moved to wishlist"), Severity::Success);
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lookup(&self, product_id: ProductId) -> Result<&Product, StoreError> {
        self.catalog
            .get(product_id)
            .ok_or(StoreError::ProductNotFound(product_id))
    }

    fn save_cart(&self) -> Result<(), StoreError> {
        storage::write_json(self.backend.as_ref(), keys::CART, &self.cart)?;
        Ok(())
    }

    fn save_wishlist(&self) -> Result<(), StoreError> {
        storage::write_json(self.backend.as_ref(), keys::WISHLIST, &self.wishlist)?;
        Ok(())
    }
}

const fn clamp_quantity(quantity: u32) -> u32 {
    if quantity < MIN_QUANTITY {
        MIN_QUANTITY
    } else if quantity > MAX_QUANTITY {
        MAX_QUANTITY
    } else {
        quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryBackend;

    fn store() -> (CartStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CartStore::open(
            Arc::new(Catalog::sample()),
            Arc::new(MemoryBackend::new()),
            notifier.clone(),
        )
        .unwrap();
        (store, notifier)
    }

    #[test]
    fn test_repeated_adds_accumulate_into_one_line() {
        let (mut store, _) = store();
        store.add_to_cart(ProductId::new(1), 2).unwrap();
        store.add_to_cart(ProductId::new(1), 3).unwrap();

        assert_eq!(store.cart().len(), 1);
        assert_eq!(store.line(ProductId::new(1)).unwrap().quantity, 5);
    }

    #[test]
    fn test_add_unknown_product_changes_nothing() {
        let (mut store, notifier) = store();
        let err = store.add_to_cart(ProductId::new(999), 1).unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(store.cart().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_add_emits_success_toast() {
        let (mut store, notifier) = store();
        store.add_to_cart(ProductId::new(5), 1).unwrap();

        let toast = notifier.last().unwrap();
        assert_eq!(toast.message, "The Art of Programming added to cart");
        assert_eq!(toast.severity, Severity::Success);
    }

    #[test]
    fn test_quantity_clamps_on_every_path() {
        let (mut store, _) = store();

        // Accumulation clamps at 99
        store.add_to_cart(ProductId::new(1), 98).unwrap();
        store.add_to_cart(ProductId::new(1), 10).unwrap();
        assert_eq!(store.line(ProductId::new(1)).unwrap().quantity, 99);

        // Direct input clamps too
        store.update_quantity(ProductId::new(1), 500).unwrap();
        assert_eq!(store.line(ProductId::new(1)).unwrap().quantity, 99);

        // A zero add still yields a valid line
        store.add_to_cart(ProductId::new(2), 0).unwrap();
        assert_eq!(store.line(ProductId::new(2)).unwrap().quantity, 1);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let (mut store, _) = store();
        store.add_to_cart(ProductId::new(1), 2).unwrap();
        store.update_quantity(ProductId::new(1), 0).unwrap();
        assert!(store.cart().is_empty());

        store.add_to_cart(ProductId::new(1), 2).unwrap();
        store.update_quantity(ProductId::new(1), -5).unwrap();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (mut store, notifier) = store();
        store.remove_from_cart(ProductId::new(3)).unwrap();
        assert!(store.cart().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[test]
    fn test_total_restored_after_add_then_remove() {
        let (mut store, _) = store();
        store.add_to_cart(ProductId::new(1), 1).unwrap();
        let before = store.cart_total();

        store.add_to_cart(ProductId::new(7), 2).unwrap();
        store.remove_from_cart(ProductId::new(7)).unwrap();

        assert_eq!(store.cart_total(), before);
    }

    #[test]
    fn test_cart_total_and_item_count() {
        let (mut store, _) = store();
        store.add_to_cart(ProductId::new(1), 2).unwrap(); // 2 × 199.99
        store.add_to_cart(ProductId::new(7), 1).unwrap(); // 1 × 29.99

        assert_eq!(store.cart_total().display(), "$429.97");
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_wishlist_toggle_pair_is_identity() {
        let (mut store, _) = store();
        assert!(store.toggle_wishlist(ProductId::new(2)).unwrap());
        assert!(store.is_in_wishlist(ProductId::new(2)));

        assert!(!store.toggle_wishlist(ProductId::new(2)).unwrap());
        assert!(!store.is_in_wishlist(ProductId::new(2)));
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_wishlist_unknown_product_fails_uniformly() {
        let (mut store, _) = store();
        let err = store.toggle_wishlist(ProductId::new(999)).unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_wishlist_products_resolve() {
        let (mut store, _) = store();
        store.toggle_wishlist(ProductId::new(4)).unwrap();
        store.toggle_wishlist(ProductId::new(8)).unwrap();

        let names: Vec<&str> = store
            .wishlist_products()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Designer Leather Wallet", "Minimalist Watch"]);
    }

    #[test]
    fn test_move_to_wishlist() {
        let (mut store, notifier) = store();
        store.add_to_cart(ProductId::new(3), 1).unwrap();
        notifier.take();

        store.move_to_wishlist(ProductId::new(3)).unwrap();
        assert!(store.cart().is_empty());
        assert!(store.is_in_wishlist(ProductId::new(3)));

        let toasts = notifier.take();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Premium Coffee Maker moved to wishlist");
    }

    #[test]
    fn test_clear_cart() {
        let (mut store, notifier) = store();
        store.add_to_cart(ProductId::new(1), 1).unwrap();
        store.add_to_cart(ProductId::new(2), 1).unwrap();
        notifier.take();

        store.clear_cart().unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(notifier.last().unwrap().message, "Cart cleared");
    }

    #[test]
    fn test_state_survives_reopen() {
        let backend = Arc::new(MemoryBackend::new());
        let catalog = Arc::new(Catalog::sample());
        let notifier = Arc::new(RecordingNotifier::new());

        {
            let mut store = CartStore::open(
                catalog.clone(),
                backend.clone(),
                notifier.clone(),
            )
            .unwrap();
            store.add_to_cart(ProductId::new(1), 2).unwrap();
            store.toggle_wishlist(ProductId::new(5)).unwrap();
        }

        let reopened = CartStore::open(catalog, backend, notifier).unwrap();
        assert_eq!(reopened.line(ProductId::new(1)).unwrap().quantity, 2);
        assert!(reopened.is_in_wishlist(ProductId::new(5)));
    }

    #[test]
    fn test_scripted_cart_scenario() {
        // empty → add(1, 2) → add(1, 3) → set(1, 0) → empty
        let (mut store, _) = store();
        assert!(store.cart().is_empty());

        store.add_to_cart(ProductId::new(1), 2).unwrap();
        let line = store.line(ProductId::new(1)).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(store.cart_total(), line.price.times(2));

        store.add_to_cart(ProductId::new(1), 3).unwrap();
        assert_eq!(store.line(ProductId::new(1)).unwrap().quantity, 5);

        store.update_quantity(ProductId::new(1), 0).unwrap();
        assert!(store.cart().is_empty());
    }
}
