//! Promotions
//!
//! The three promotion shapes the engine understands, one module each:
//! bulk tier offers on a single SKU, free-item grants, and cross-SKU group
//! bundles. The basket pricer applies them in a fixed order: free items
//! first, then group bundles, then per-SKU tiered pricing on whatever
//! remains.

pub mod bulk_tier;
pub mod free_item;
pub mod group_bundle;

pub use bulk_tier::{TierOffer, best_price};
pub use free_item::{FreeItemRule, apply_free_items};
pub use group_bundle::{GroupOffer, apply_group_offers};
