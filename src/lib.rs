//! Till
//!
//! Till is a checkout pricing engine: given a catalog of unit prices, bulk
//! tier offers, free-item promotions and cross-SKU group bundles, it computes
//! the minimum total price of a basket.
//!
//! Pricing one basket is a pure, bounded computation over an immutable
//! [`catalog::Catalog`] and a per-call [`basket::Basket`] multiset; the
//! engine owns no persistence, UI or transport.

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod promotions;
pub mod receipt;
pub mod sku;
