//! Group Bundle Offers
//!
//! A group offer prices any `size` units drawn from a named set of member
//! SKUs, in any combination, at a fixed bundle price. The bundle price is
//! the same no matter which member units it covers, so the resolver drains
//! the most expensive members first: that removes the priciest units from
//! full-price consideration and is the cheapest assignment for the customer.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::{basket::Basket, catalog::Catalog, sku::Sku};

/// A cross-SKU bundle: any `size` units from `members` for `price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOffer {
    name: String,
    members: SmallVec<[Sku; 8]>,
    size: u64,
    price: i64,
}

impl GroupOffer {
    /// Create a new group offer. `size` must be at least one; the catalog
    /// loader enforces this for configured catalogs.
    pub fn new(name: impl Into<String>, members: impl Into<SmallVec<[Sku; 8]>>, size: u64, price: i64) -> Self {
        Self {
            name: name.into(),
            members: members.into(),
            size,
            price,
        }
    }

    /// Human-readable offer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The SKUs whose units may fill a bundle.
    pub fn members(&self) -> &[Sku] {
        &self.members
    }

    /// Units per bundle.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Fixed price per bundle, in minor units.
    pub fn price(&self) -> i64 {
        self.price
    }
}

/// Extract as many group bundles as the basket allows, consuming member
/// units in place, and return the accumulated bundle price.
///
/// Groups are processed independently in catalog order; a group whose
/// members cannot fill one whole bundle is skipped without touching the
/// basket. Within a group, member SKUs are drained in descending unit-price
/// order (ties broken by SKU order for determinism). Catalogs are assumed
/// not to place one SKU in two overlapping groups.
pub fn apply_group_offers(basket: &mut Basket, catalog: &Catalog) -> i64 {
    let mut accumulated = 0i64;

    for group in catalog.group_offers() {
        let eligible: u64 = group.members().iter().map(|&m| basket.quantity(m)).sum();
        let bundles = eligible / group.size();
        if bundles == 0 {
            continue;
        }

        let mut ordered: SmallVec<[Sku; 8]> = SmallVec::from_slice(group.members());
        ordered.sort_by_key(|&m| (Reverse(catalog.unit_price(m).unwrap_or(0)), m));

        let mut to_drain = bundles * group.size();
        for &member in &ordered {
            if to_drain == 0 {
                break;
            }
            to_drain -= basket.remove_up_to(member, to_drain);
        }

        let bundle_total = i64::try_from(bundles)
            .unwrap_or(i64::MAX)
            .saturating_mul(group.price());
        accumulated = accumulated.saturating_add(bundle_total);
    }

    accumulated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(c: char) -> Sku {
        Sku::from_char(c).unwrap_or_else(|| unreachable!("test SKUs are letters"))
    }

    fn members(letters: &str) -> SmallVec<[Sku; 8]> {
        letters.chars().filter_map(Sku::from_char).collect()
    }

    fn catalog() -> Catalog {
        Catalog::builder()
            .price(sku('S'), 70)
            .price(sku('T'), 60)
            .price(sku('X'), 17)
            .price(sku('Y'), 20)
            .price(sku('Z'), 21)
            .group(GroupOffer::new("buy any 3", members("STXYZ"), 3, 45))
            .build()
    }

    #[test]
    fn full_bundles_consume_all_member_units() {
        // Six eligible units make exactly two bundles; nothing is left to
        // price individually.
        let mut basket = Basket::parse("SSTTTT");

        let price = apply_group_offers(&mut basket, &catalog());

        assert_eq!(price, 90);
        assert!(basket.is_empty());
    }

    #[test]
    fn cheapest_member_units_are_left_behind() {
        // One bundle of three: both S (70) and one T (60) are drained,
        // leaving the cheaper T for individual pricing.
        let mut basket = Basket::parse("SSTT");

        let price = apply_group_offers(&mut basket, &catalog());

        assert_eq!(price, 45);
        assert_eq!(basket.quantity(sku('S')), 0);
        assert_eq!(basket.quantity(sku('T')), 1);
    }

    #[test]
    fn short_of_a_bundle_leaves_basket_untouched() {
        let mut basket = Basket::parse("ST");

        let price = apply_group_offers(&mut basket, &catalog());

        assert_eq!(price, 0);
        assert_eq!(basket.quantity(sku('S')), 1);
        assert_eq!(basket.quantity(sku('T')), 1);
    }

    #[test]
    fn non_member_skus_are_ignored() {
        let catalog = Catalog::builder()
            .price(sku('S'), 70)
            .price(sku('T'), 60)
            .price(sku('Q'), 10)
            .group(GroupOffer::new("buy any 3", members("ST"), 3, 45))
            .build();
        let mut basket = Basket::parse("SSTQQ");

        let price = apply_group_offers(&mut basket, &catalog);

        assert_eq!(price, 45);
        assert_eq!(basket.quantity(sku('Q')), 2);
    }

    #[test]
    fn mixed_cheap_members_fill_after_expensive_ones() {
        // Five eligible units, one bundle: Z (21), Y (20) and X (17) are the
        // cheapest members, so S and T go into the bundle first, then Z.
        let mut basket = Basket::parse("STXYZ");

        let price = apply_group_offers(&mut basket, &catalog());

        assert_eq!(price, 45);
        assert_eq!(basket.quantity(sku('X')), 1);
        assert_eq!(basket.quantity(sku('Y')), 1);
        assert_eq!(basket.quantity(sku('Z')), 0);
    }
}
