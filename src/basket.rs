//! Baskets

use rustc_hash::FxHashMap;

use crate::sku::Sku;

/// The multiset of SKUs being priced in one transaction.
///
/// A basket is built fresh for each pricing call and mutated in place by the
/// promotion resolvers; it is never shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    counts: FxHashMap<Sku, u64>,
}

impl Basket {
    /// Create an empty basket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a raw basket string into a SKU multiset.
    ///
    /// Only ASCII letters count as SKUs; whitespace, punctuation and any
    /// other characters are discarded, never treated as errors.
    pub fn parse(raw: &str) -> Self {
        let mut basket = Self::new();
        for sku in raw.chars().filter_map(Sku::from_char) {
            basket.add(sku, 1);
        }

        basket
    }

    /// Add `quantity` units of a SKU.
    pub fn add(&mut self, sku: Sku, quantity: u64) {
        if quantity > 0 {
            *self.counts.entry(sku).or_insert(0) += quantity;
        }
    }

    /// The recorded quantity of a SKU, zero when absent.
    pub fn quantity(&self, sku: Sku) -> u64 {
        self.counts.get(&sku).copied().unwrap_or(0)
    }

    /// Remove up to `quantity` units of a SKU, returning how many were
    /// actually removed. An entry that reaches zero is dropped entirely, so
    /// the multiset never records zero or negative counts.
    pub fn remove_up_to(&mut self, sku: Sku, quantity: u64) -> u64 {
        let Some(count) = self.counts.get_mut(&sku) else {
            return 0;
        };

        let removed = quantity.min(*count);
        *count -= removed;
        if *count == 0 {
            self.counts.remove(&sku);
        }

        removed
    }

    /// Whether the basket holds no units at all.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of units across all SKUs.
    pub fn unit_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The distinct SKUs present, in sorted order.
    ///
    /// The backing map iterates in arbitrary order; resolvers and the pricer
    /// iterate this instead so one call is deterministic end to end.
    pub fn skus_sorted(&self) -> Vec<Sku> {
        let mut skus: Vec<Sku> = self.counts.keys().copied().collect();
        skus.sort_unstable();

        skus
    }
}
