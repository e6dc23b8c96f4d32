//! Bulk Tier Offers
//!
//! A tier offer sells exactly `size` units of one SKU for a fixed total
//! price. A SKU may carry several competing tiers (say 3-for-130 and
//! 5-for-200 at once); larger tiers are not always better value than
//! stacking smaller ones, nor always worse, so the optimizer decides by
//! exhaustive decomposition rather than a fixed greedy rule.

/// A bulk offer: exactly `size` units of one SKU for `price` minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierOffer {
    size: u64,
    price: i64,
}

impl TierOffer {
    /// Create a new tier offer. `size` must be at least one; the catalog
    /// loader enforces this for configured catalogs.
    pub fn new(size: u64, price: i64) -> Self {
        Self { size, price }
    }

    /// Number of units the tier covers.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Total price for the whole tier, in minor units.
    pub fn price(&self) -> i64 {
        self.price
    }
}

/// Minimum achievable price for `quantity` units of a SKU with the given
/// unit price and tier offers.
///
/// Dynamic programming over remaining quantity: the cheapest price for `q`
/// units is the cheapest of buying one unit on top of `q - 1`, or any whole
/// tier on top of `q - size`. Every decomposition of the quantity into
/// single units and whole tiers is considered, so the result is a true
/// minimum and never exceeds `quantity * unit_price`.
///
/// Zero quantity prices to zero without consulting the tiers.
pub fn best_price(unit_price: i64, quantity: u64, tiers: &[TierOffer]) -> i64 {
    // best[q] = minimum price for q units; grown one quantity at a time.
    let mut best: Vec<i64> = Vec::with_capacity(usize::try_from(quantity).unwrap_or(0) + 1);
    best.push(0);

    for _ in 0..quantity {
        let q = best.len();
        let from_unit = best.last().copied().unwrap_or(0).saturating_add(unit_price);

        let cheapest = tiers
            .iter()
            .filter_map(|tier| {
                let size = usize::try_from(tier.size()).ok()?;
                let below = q.checked_sub(size).and_then(|idx| best.get(idx))?;
                Some(below.saturating_add(tier.price()))
            })
            .fold(from_unit, i64::min);

        best.push(cheapest);
    }

    best.last().copied().unwrap_or(0)
}
