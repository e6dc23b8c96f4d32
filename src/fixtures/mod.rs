//! Catalog Fixtures
//!
//! Loads a [`Catalog`] from a YAML configuration document. The document is
//! deserialized into plain fixture structs and then validated while
//! converting into domain types, so a malformed catalog fails at load time
//! instead of producing wrong prices mid-run.

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    promotions::{FreeItemRule, GroupOffer, TierOffer},
    sku::Sku,
};

/// Fixture parsing and validation errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown ISO currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A unit, tier or bundle price was negative.
    #[error("Negative price for {0}")]
    NegativePrice(String),

    /// A tier size, trigger multiple or bundle size was zero.
    #[error("Size must be positive for {0}")]
    NonPositiveSize(String),

    /// A promotion references a SKU with no price entry.
    #[error("Rule {rule} references unpriced SKU {sku}")]
    UnpricedSku {
        /// The rule naming the SKU.
        rule: String,
        /// The SKU lacking a price entry.
        sku: Sku,
    },

    /// A group offer has no member SKUs.
    #[error("Group {0} has no members")]
    EmptyGroup(String),
}

/// Top-level catalog document.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO alpha code of the catalog currency.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Unit prices in minor units, keyed by SKU.
    #[serde(default)]
    pub prices: FxHashMap<Sku, i64>,

    /// Bulk tier offers, keyed by SKU.
    #[serde(default)]
    pub offers: FxHashMap<Sku, Vec<TierOfferFixture>>,

    /// Free-item rules, keyed by trigger SKU.
    #[serde(default)]
    pub free_items: FxHashMap<Sku, FreeItemFixture>,

    /// Group bundle offers, applied in document order.
    #[serde(default)]
    pub groups: Vec<GroupOfferFixture>,
}

fn default_currency() -> String {
    "GBP".to_string()
}

/// One bulk tier in YAML.
#[derive(Debug, Deserialize)]
pub struct TierOfferFixture {
    /// Units the tier covers.
    pub size: u64,

    /// Total price for the tier, in minor units.
    pub price: i64,
}

/// One free-item rule in YAML.
#[derive(Debug, Deserialize)]
pub struct FreeItemFixture {
    /// Trigger units per grant.
    pub multiple: u64,

    /// SKU granted for free; may equal the trigger.
    pub target: Sku,
}

/// One group bundle offer in YAML.
#[derive(Debug, Deserialize)]
pub struct GroupOfferFixture {
    /// Offer name, for diagnostics.
    pub name: String,

    /// Member SKUs whose units may fill a bundle.
    pub members: Vec<Sku>,

    /// Units per bundle.
    pub size: u64,

    /// Fixed bundle price, in minor units.
    pub price: i64,
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let mut builder = Catalog::builder().currency(currency);

        for (&sku, &price) in &fixture.prices {
            if price < 0 {
                return Err(FixtureError::NegativePrice(format!("SKU {sku}")));
            }
            builder = builder.price(sku, price);
        }

        for (&sku, tiers) in &fixture.offers {
            require_priced(&fixture.prices, sku, || format!("offer on {sku}"))?;
            for tier in tiers {
                if tier.size == 0 {
                    return Err(FixtureError::NonPositiveSize(format!("offer on {sku}")));
                }
                if tier.price < 0 {
                    return Err(FixtureError::NegativePrice(format!("offer on {sku}")));
                }
                builder = builder.tier(sku, TierOffer::new(tier.size, tier.price));
            }
        }

        for (&trigger, rule) in &fixture.free_items {
            let name = || format!("free item on {trigger}");
            if rule.multiple == 0 {
                return Err(FixtureError::NonPositiveSize(name()));
            }
            require_priced(&fixture.prices, trigger, name)?;
            require_priced(&fixture.prices, rule.target, name)?;
            builder = builder.free_item(trigger, FreeItemRule::new(rule.multiple, rule.target));
        }

        for group in fixture.groups {
            if group.size == 0 {
                return Err(FixtureError::NonPositiveSize(format!("group {}", group.name)));
            }
            if group.price < 0 {
                return Err(FixtureError::NegativePrice(format!("group {}", group.name)));
            }
            if group.members.is_empty() {
                return Err(FixtureError::EmptyGroup(group.name));
            }
            for &member in &group.members {
                require_priced(&fixture.prices, member, || format!("group {}", group.name))?;
            }
            builder = builder.group(GroupOffer::new(
                group.name,
                group.members,
                group.size,
                group.price,
            ));
        }

        Ok(builder.build())
    }
}

/// Resolve an ISO alpha currency code to a currency handle.
fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

fn require_priced(
    prices: &FxHashMap<Sku, i64>,
    sku: Sku,
    rule: impl FnOnce() -> String,
) -> Result<(), FixtureError> {
    if prices.contains_key(&sku) {
        Ok(())
    } else {
        Err(FixtureError::UnpricedSku { rule: rule(), sku })
    }
}

/// Parse and validate a catalog from a YAML string.
///
/// # Errors
///
/// Returns a [`FixtureError`] for YAML syntax errors or validation failures.
pub fn catalog_from_yaml(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    Catalog::try_from(fixture)
}

/// Read, parse and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns a [`FixtureError`] for IO, YAML syntax or validation failures.
pub fn catalog_from_yaml_file(path: &Path) -> Result<Catalog, FixtureError> {
    let yaml = fs::read_to_string(path)?;

    catalog_from_yaml(&yaml)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sku(c: char) -> Sku {
        Sku::from_char(c).unwrap_or_else(|| unreachable!("test SKUs are letters"))
    }

    const CATALOG: &str = "
currency: GBP

prices:
  A: 50
  B: 30
  E: 40

offers:
  A:
    - { size: 3, price: 130 }
    - { size: 5, price: 200 }

free_items:
  E: { multiple: 2, target: B }

groups:
  - name: any two of A and B
    members: [A, B]
    size: 2
    price: 70
";

    #[test]
    fn parses_a_full_catalog() -> TestResult {
        let catalog = catalog_from_yaml(CATALOG)?;

        assert_eq!(catalog.currency(), GBP);
        assert_eq!(catalog.unit_price(sku('A')), Some(50));
        assert_eq!(catalog.tiers_of(sku('A')).len(), 2);
        assert_eq!(
            catalog.free_rule_of(sku('E')).map(FreeItemRule::target),
            Some(sku('B'))
        );
        assert_eq!(catalog.group_offers().len(), 1);
        assert_eq!(catalog.group_offers().first().map(GroupOffer::size), Some(2));

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let catalog = catalog_from_yaml("prices:\n  A: 50\n")?;

        assert_eq!(catalog.currency(), GBP);
        assert!(catalog.tiers_of(sku('A')).is_empty());
        assert!(catalog.group_offers().is_empty());

        Ok(())
    }

    #[test]
    fn unknown_currency_errors() {
        let result = catalog_from_yaml("currency: XXA\nprices:\n  A: 50\n");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(_))));
    }

    #[test]
    fn negative_unit_price_errors() {
        let result = catalog_from_yaml("prices:\n  A: -5\n");

        assert!(matches!(result, Err(FixtureError::NegativePrice(_))));
    }

    #[test]
    fn zero_tier_size_errors() {
        let yaml = "
prices:
  A: 50
offers:
  A:
    - { size: 0, price: 130 }
";

        assert!(matches!(
            catalog_from_yaml(yaml),
            Err(FixtureError::NonPositiveSize(_))
        ));
    }

    #[test]
    fn free_item_on_unpriced_target_errors() {
        let yaml = "
prices:
  E: 40
free_items:
  E: { multiple: 2, target: B }
";

        assert!(matches!(
            catalog_from_yaml(yaml),
            Err(FixtureError::UnpricedSku { .. })
        ));
    }

    #[test]
    fn group_without_members_errors() {
        let yaml = "
prices:
  A: 50
groups:
  - name: empty
    members: []
    size: 2
    price: 10
";

        assert!(matches!(
            catalog_from_yaml(yaml),
            Err(FixtureError::EmptyGroup(_))
        ));
    }

    #[test]
    fn non_letter_sku_key_is_a_yaml_error() {
        let result = catalog_from_yaml("prices:\n  '9': 50\n");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}
