//! Catalogs

use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use smallvec::SmallVec;

use crate::{
    fixtures::FixtureError,
    promotions::{FreeItemRule, GroupOffer, TierOffer},
    sku::Sku,
};

/// The pricing configuration for one store: unit prices, bulk tier offers,
/// free-item rules and group bundle offers, all keyed by SKU.
///
/// A catalog is pure data and read-only during evaluation; no promotion ever
/// mutates it, only the per-call basket. Sharing one catalog across threads
/// is safe, and a reload is a whole-catalog swap performed by the embedder.
///
/// Well-formedness (positive tier and bundle sizes, promotions that do not
/// compete for the same units) is a precondition on the supplied
/// configuration; [`Catalog::from_yaml`] validates what is cheap to check.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: &'static Currency,
    prices: FxHashMap<Sku, i64>,
    tiers: FxHashMap<Sku, SmallVec<[TierOffer; 4]>>,
    free_rules: FxHashMap<Sku, FreeItemRule>,
    groups: Vec<GroupOffer>,
}

impl Default for Catalog {
    /// An empty catalog denominated in GBP.
    fn default() -> Self {
        Self {
            currency: iso::GBP,
            prices: FxHashMap::default(),
            tiers: FxHashMap::default(),
            free_rules: FxHashMap::default(),
            groups: Vec::new(),
        }
    }
}

impl Catalog {
    /// Start building a catalog programmatically.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Load a catalog from a YAML configuration document.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the document cannot be parsed or fails
    /// validation (non-positive sizes, negative prices, rules referencing
    /// unpriced SKUs).
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        crate::fixtures::catalog_from_yaml(yaml)
    }

    /// Load a catalog from a YAML file on disk.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read, parsed or
    /// validated.
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self, FixtureError> {
        crate::fixtures::catalog_from_yaml_file(path.as_ref())
    }

    /// The currency all catalog prices are denominated in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// The unit price of a SKU in minor units, or `None` for a SKU the
    /// catalog does not price. Absence is a distinguishable condition, never
    /// a silent zero; the basket pricer turns it into an unknown-SKU error.
    pub fn unit_price(&self, sku: Sku) -> Option<i64> {
        self.prices.get(&sku).copied()
    }

    /// The bulk tier offers for a SKU, possibly empty.
    pub fn tiers_of(&self, sku: Sku) -> &[TierOffer] {
        self.tiers.get(&sku).map_or(&[], SmallVec::as_slice)
    }

    /// The free-item rule triggered by a SKU, if any.
    pub fn free_rule_of(&self, sku: Sku) -> Option<&FreeItemRule> {
        self.free_rules.get(&sku)
    }

    /// All group bundle offers, in catalog order.
    pub fn group_offers(&self) -> &[GroupOffer] {
        &self.groups
    }
}

/// Builder for programmatic catalog construction, used by embedders that
/// already hold their configuration in memory and by tests.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Set the catalog currency. Defaults to GBP.
    pub fn currency(mut self, currency: &'static Currency) -> Self {
        self.catalog.currency = currency;
        self
    }

    /// Price a SKU at `minor_units` per unit.
    pub fn price(mut self, sku: Sku, minor_units: i64) -> Self {
        self.catalog.prices.insert(sku, minor_units);
        self
    }

    /// Add a bulk tier offer for a SKU.
    pub fn tier(mut self, sku: Sku, offer: TierOffer) -> Self {
        self.catalog.tiers.entry(sku).or_default().push(offer);
        self
    }

    /// Add a free-item rule triggered by a SKU.
    pub fn free_item(mut self, trigger: Sku, rule: FreeItemRule) -> Self {
        self.catalog.free_rules.insert(trigger, rule);
        self
    }

    /// Add a group bundle offer.
    pub fn group(mut self, offer: GroupOffer) -> Self {
        self.catalog.groups.push(offer);
        self
    }

    /// Finish building.
    pub fn build(self) -> Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(c: char) -> Sku {
        Sku::from_char(c).unwrap_or_else(|| unreachable!("test SKUs are letters"))
    }

    #[test]
    fn unit_price_distinguishes_absence_from_zero() {
        let catalog = Catalog::builder().price(sku('A'), 0).build();

        assert_eq!(catalog.unit_price(sku('A')), Some(0));
        assert_eq!(catalog.unit_price(sku('B')), None);
    }

    #[test]
    fn tiers_of_unknown_sku_is_empty() {
        let catalog = Catalog::builder()
            .price(sku('A'), 50)
            .tier(sku('A'), TierOffer::new(3, 130))
            .build();

        assert_eq!(catalog.tiers_of(sku('A')).len(), 1);
        assert!(catalog.tiers_of(sku('B')).is_empty());
    }

    #[test]
    fn tiers_accumulate_per_sku() {
        let catalog = Catalog::builder()
            .price(sku('A'), 50)
            .tier(sku('A'), TierOffer::new(5, 200))
            .tier(sku('A'), TierOffer::new(7, 270))
            .build();

        assert_eq!(catalog.tiers_of(sku('A')).len(), 2);
    }

    #[test]
    fn builder_defaults_to_gbp() {
        let catalog = Catalog::builder().build();

        assert_eq!(catalog.currency(), iso::GBP);
    }

    #[test]
    fn currency_is_configurable() {
        let catalog = Catalog::builder().currency(iso::USD).build();

        assert_eq!(catalog.currency(), iso::USD);
    }
}
