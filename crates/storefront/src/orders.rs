//! Order records and order history.
//!
//! An order is an immutable snapshot of a completed checkout; only its
//! status may change afterwards. History is persisted newest-first and is
//! never pruned by normal user flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

use eliteshop_core::{Email, OrderId, OrderStatus, PaymentMethod, Price};

use crate::store::{CartLine, CartStore, StoreError};
use crate::storage::{self, StorageBackend, StorageError, keys};

/// Shipping address captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    /// "First Last" for order cards and admin tables.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payment details captured at checkout.
///
/// Never holds a full card number; only the method tag and the last four
/// digits survive into the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSnapshot {
    pub method: PaymentMethod,
    /// Last four card digits, when the method is a card.
    pub card_last4: Option<String>,
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub shipping: ShippingAddress,
    pub payment: PaymentSnapshot,
    pub items: Vec<CartLine>,
    pub total: Price,
}

impl Order {
    /// Σ quantities across the order's lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// Generate an order id: `ORD-<unix millis>-<5 uppercase alphanumerics>`.
#[must_use]
pub fn generate_order_id(placed_at: DateTime<Utc>) -> OrderId {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(5)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();
    OrderId::new(format!("ORD-{}-{suffix}", placed_at.timestamp_millis()))
}

/// Persisted order history, newest first.
pub struct OrderHistory {
    backend: Arc<dyn StorageBackend>,
    orders: Vec<Order>,
}

impl OrderHistory {
    /// Open the history, loading any persisted orders.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisted orders cannot be read or
    /// decoded.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StorageError> {
        let orders: Vec<Order> = storage::read_json(backend.as_ref(), keys::ORDERS)?;
        Ok(Self { backend, orders })
    }

    /// All orders, newest first.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by id.
    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Prepend a new order to the history.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn record(&mut self, order: Order) -> Result<(), StorageError> {
        tracing::info!(order_id = %order.id, total = %order.total, "Order recorded");
        self.orders.insert(0, order);
        self.save()
    }

    /// Update an order's status. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting fails.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), StorageError> {
        let Some(order) = self.orders.iter_mut().find(|o| &o.id == id) else {
            return Ok(());
        };
        order.status = status;
        self.save()
    }

    /// Add an order's lines back into the cart ("Reorder").
    ///
    /// Unknown order ids are a no-op; lines whose products have left the
    /// catalog abort the whole reorder with `ProductNotFound`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a product no longer resolves or persisting
    /// fails.
    pub fn reorder(&self, id: &OrderId, cart: &mut CartStore) -> Result<(), StoreError> {
        let Some(order) = self.get(id) else {
            return Ok(());
        };
        for line in &order.items {
            cart.add_to_cart(line.product_id, line.quantity)?;
        }
        Ok(())
    }

    fn save(&self) -> Result<(), StorageError> {
        storage::write_json(self.backend.as_ref(), keys::ORDERS, &self.orders)
    }
}
