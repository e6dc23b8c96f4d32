//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    basket::Basket,
    catalog::{Catalog, CatalogBuilder},
    checkout::{Checkout, CheckoutError},
    fixtures::{CatalogFixture, FixtureError},
    promotions::{FreeItemRule, GroupOffer, TierOffer},
    receipt::Receipt,
    sku::{Sku, SkuError},
};
