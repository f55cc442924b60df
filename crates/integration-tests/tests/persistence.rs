//! Persistence behavior across backends.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use eliteshop_core::ProductId;
use eliteshop_storefront::catalog::Catalog;
use eliteshop_storefront::config::StoreConfig;
use eliteshop_storefront::notify::RecordingNotifier;
use eliteshop_storefront::state::Shop;
use eliteshop_storefront::storage::{
    MemoryBackend, SledBackend, StorageBackend, StorageError, keys,
};
use eliteshop_storefront::store::{CartStore, StoreError};

fn open_shop(backend: Arc<dyn StorageBackend>) -> Shop {
    Shop::open(
        StoreConfig::default(),
        backend,
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap()
}

#[test]
fn sled_backend_round_trips_a_whole_session() {
    let backend = Arc::new(SledBackend::temporary().unwrap());

    {
        let mut shop = open_shop(backend.clone());
        shop.store_mut().add_to_cart(ProductId::new(1), 2).unwrap();
        shop.store_mut().toggle_wishlist(ProductId::new(5)).unwrap();

        let mut settings = shop.account().settings().unwrap();
        settings.sms_notifications = true;
        shop.account().save_settings(&settings).unwrap();
    }

    let shop = open_shop(backend);
    assert_eq!(shop.store().line(ProductId::new(1)).unwrap().quantity, 2);
    assert!(shop.store().is_in_wishlist(ProductId::new(5)));
    assert!(shop.account().settings().unwrap().sms_notifications);
}

#[test]
fn stored_shapes_are_json_under_fixed_keys() {
    let backend = Arc::new(MemoryBackend::new());
    let mut shop = open_shop(backend.clone());
    shop.store_mut().add_to_cart(ProductId::new(7), 3).unwrap();
    shop.store_mut().toggle_wishlist(ProductId::new(2)).unwrap();

    let cart_raw = backend.get(keys::CART).unwrap().unwrap();
    let cart: serde_json::Value = serde_json::from_str(&cart_raw).unwrap();
    assert_eq!(cart[0]["product_id"], 7);
    assert_eq!(cart[0]["quantity"], 3);

    let wishlist_raw = backend.get(keys::WISHLIST).unwrap().unwrap();
    assert_eq!(wishlist_raw, "[2]");
}

#[test]
fn corrupt_stored_cart_surfaces_as_storage_error() {
    let backend = Arc::new(MemoryBackend::new());
    backend.set(keys::CART, "{definitely not json").unwrap();

    let err = CartStore::open(
        Arc::new(Catalog::sample()),
        backend,
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        StoreError::Storage(StorageError::Corrupt { .. })
    ));
}

#[test]
fn shared_backend_is_last_write_wins() {
    let backend = Arc::new(MemoryBackend::new());
    let catalog = Arc::new(Catalog::sample());

    let mut first = CartStore::open(
        catalog.clone(),
        backend.clone(),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();
    let mut second = CartStore::open(
        catalog.clone(),
        backend.clone(),
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();

    // Two "tabs" mutate independently; whoever writes last owns the key.
    first.add_to_cart(ProductId::new(1), 1).unwrap();
    second.add_to_cart(ProductId::new(2), 1).unwrap();

    let reloaded = CartStore::open(
        catalog,
        backend,
        Arc::new(RecordingNotifier::new()),
    )
    .unwrap();
    assert_eq!(reloaded.cart().len(), 1);
    assert_eq!(
        reloaded.cart().first().unwrap().product_id,
        ProductId::new(2)
    );
}

#[test]
fn removing_a_key_resets_that_slice_of_state() {
    let backend = Arc::new(MemoryBackend::new());
    {
        let mut shop = open_shop(backend.clone());
        shop.store_mut().add_to_cart(ProductId::new(1), 1).unwrap();
        shop.store_mut().toggle_wishlist(ProductId::new(2)).unwrap();
    }

    backend.remove(keys::CART).unwrap();

    let shop = open_shop(backend);
    assert!(shop.store().cart().is_empty());
    // The wishlist key was untouched
    assert!(shop.store().is_in_wishlist(ProductId::new(2)));
}
