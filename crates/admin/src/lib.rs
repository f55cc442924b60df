//! EliteShop Admin - dashboard read models.
//!
//! The admin panel is a mock dashboard over the same catalog and order
//! history the storefront uses: summary stats, the first page of product
//! and order tables, and a static top-sellers list. Its only mutation is
//! the order-status update.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dashboard;

pub use dashboard::*;
