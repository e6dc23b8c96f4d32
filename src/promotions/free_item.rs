//! Free Item Promotions
//!
//! Buying a multiple of a trigger SKU grants one free unit of a target SKU.
//! The resolver removes granted units from the basket before any pricing
//! happens, so freebies never reach the tiered optimizer.

use crate::{basket::Basket, catalog::Catalog, sku::Sku};

/// A free-item rule: every `multiple` units of the trigger SKU grant one
/// free unit of `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeItemRule {
    multiple: u64,
    target: Sku,
}

impl FreeItemRule {
    /// Create a new rule. `multiple` must be at least one; the catalog
    /// loader enforces this for configured catalogs.
    pub fn new(multiple: u64, target: Sku) -> Self {
        Self { multiple, target }
    }

    /// How many trigger units earn one freebie.
    pub fn multiple(&self) -> u64 {
        self.multiple
    }

    /// The SKU granted for free.
    pub fn target(&self) -> Sku {
        self.target
    }

    /// Units of the trigger consumed per grant.
    ///
    /// For a self-referential rule (target == trigger) the granted unit
    /// itself must not count toward triggering another freebie, so the
    /// grouping unit is one larger than the multiple.
    pub fn grouping_size(&self, trigger: Sku) -> u64 {
        if self.target == trigger {
            self.multiple + 1
        } else {
            self.multiple
        }
    }
}

/// Apply every free-item rule whose trigger SKU is present in the basket,
/// reducing target quantities in place.
///
/// Triggers are processed in sorted SKU order so a call is deterministic;
/// well-balanced catalogs make the order immaterial. A target that is absent
/// from the basket grants nothing, and a target entry driven to zero is
/// removed outright. A trigger's own quantity is only ever reduced when it is
/// also the rule's target.
pub fn apply_free_items(basket: &mut Basket, catalog: &Catalog) {
    for trigger in basket.skus_sorted() {
        let Some(rule) = catalog.free_rule_of(trigger) else {
            continue;
        };

        let freebies = basket.quantity(trigger) / rule.grouping_size(trigger);
        basket.remove_up_to(rule.target(), freebies);
    }
}
