//! EliteShop Core - Shared types library.
//!
//! This crate provides common types used across all EliteShop components:
//! - `storefront` - Catalog, cart, checkout, and content library
//! - `admin` - Dashboard read models over the same data
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
