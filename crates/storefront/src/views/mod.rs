//! Typed view models for every page of the shop.
//!
//! View builders read the catalog, cart store, and order history and
//! produce plain data structures. No rendering technology is assumed;
//! any template layer can consume these.

pub mod cart;
pub mod orders;
pub mod pagination;
pub mod products;
