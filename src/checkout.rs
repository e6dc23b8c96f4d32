//! Checkout

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    basket::Basket,
    catalog::Catalog,
    promotions::{apply_free_items, apply_group_offers, best_price},
    receipt::Receipt,
    sku::Sku,
};

/// Errors from pricing a basket or a single line item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// A SKU in the basket has no price entry in the catalog. One unknown
    /// SKU invalidates the whole basket result; no partial sum is reported.
    #[error("unknown SKU {0}")]
    UnknownSku(Sku),
}

/// The basket pricer: applies free-item rules, extracts group bundles, then
/// prices every remaining SKU through the tiered optimizer, and sums.
///
/// Each call owns a fresh basket multiset; the catalog is never mutated, so
/// one `Checkout` may serve any number of sequential or concurrent callers.
#[derive(Debug, Clone)]
pub struct Checkout {
    catalog: Catalog,
}

impl Checkout {
    /// Create a pricer over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this pricer evaluates against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Price a raw basket string. Non-letter characters are discarded during
    /// tokenization; an empty basket prices at exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownSku`] if any SKU left after promotion
    /// resolution has no catalog price. The error is the distinguished
    /// invalid-basket signal; it can never be confused with a zero total.
    pub fn total(&self, raw: &str) -> Result<Money<'static, Currency>, CheckoutError> {
        self.total_of(Basket::parse(raw))
    }

    /// Price an already-parsed basket multiset.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownSku`] as [`Checkout::total`] does.
    pub fn total_of(&self, basket: Basket) -> Result<Money<'static, Currency>, CheckoutError> {
        let minor = self.total_minor(basket)?;

        Ok(Money::from_minor(minor, self.catalog.currency()))
    }

    /// Price `quantity` units of one SKU, independent of any basket context:
    /// the unit price and the SKU's own tier offers apply, basket-wide
    /// promotions do not. Zero quantity prices to zero.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownSku`] for a SKU the catalog does not
    /// price, never a numeric price.
    pub fn item_price(
        &self,
        sku: Sku,
        quantity: u64,
    ) -> Result<Money<'static, Currency>, CheckoutError> {
        let unit = self
            .catalog
            .unit_price(sku)
            .ok_or(CheckoutError::UnknownSku(sku))?;
        let minor = best_price(unit, quantity, self.catalog.tiers_of(sku));

        Ok(Money::from_minor(minor, self.catalog.currency()))
    }

    /// Price a raw basket and report the undiscounted subtotal alongside the
    /// optimized total.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownSku`] as [`Checkout::total`] does.
    pub fn receipt(&self, raw: &str) -> Result<Receipt<'static>, CheckoutError> {
        let basket = Basket::parse(raw);

        let mut subtotal = 0i64;
        for sku in basket.skus_sorted() {
            let unit = self
                .catalog
                .unit_price(sku)
                .ok_or(CheckoutError::UnknownSku(sku))?;
            let quantity = i64::try_from(basket.quantity(sku)).unwrap_or(i64::MAX);
            subtotal = subtotal.saturating_add(unit.saturating_mul(quantity));
        }

        let total = self.total_minor(basket)?;
        let currency = self.catalog.currency();

        Ok(Receipt::new(
            Money::from_minor(subtotal, currency),
            Money::from_minor(total, currency),
        ))
    }

    /// Run the promotion pipeline over an owned basket and sum in minor
    /// units: free-item resolution, group extraction, then per-SKU tiered
    /// pricing of the remainder in sorted SKU order.
    fn total_minor(&self, mut basket: Basket) -> Result<i64, CheckoutError> {
        apply_free_items(&mut basket, &self.catalog);

        let mut total = apply_group_offers(&mut basket, &self.catalog);

        for sku in basket.skus_sorted() {
            let unit = self
                .catalog
                .unit_price(sku)
                .ok_or(CheckoutError::UnknownSku(sku))?;
            let line = best_price(unit, basket.quantity(sku), self.catalog.tiers_of(sku));
            total = total.saturating_add(line);
        }

        Ok(total)
    }
}
