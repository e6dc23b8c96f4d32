//! Receipts

use rusty_money::{Money, MoneyError, iso::Currency};

/// Final receipt for a priced basket: the undiscounted subtotal and the
/// optimized total, both in the catalog currency.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    subtotal: Money<'a, Currency>,
    total: Money<'a, Currency>,
}

impl<'a> Receipt<'a> {
    /// Create a receipt from the full-price subtotal and the payable total.
    pub fn new(subtotal: Money<'a, Currency>, total: Money<'a, Currency>) -> Self {
        Self { subtotal, total }
    }

    /// Total cost with every unit at full price, before any promotions.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Amount actually payable after all promotion applications.
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Whether any promotion reduced the payable amount.
    pub fn is_discounted(&self) -> bool {
        self.total.to_minor_units() < self.subtotal.to_minor_units()
    }

    /// The amount saved by promotions, `subtotal - total`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction fails; with both values
    /// taken from one catalog the currencies always agree.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn savings_is_subtotal_minus_total() -> TestResult {
        let receipt = Receipt::new(
            Money::from_minor(355, iso::GBP),
            Money::from_minor(300, iso::GBP),
        );

        assert_eq!(receipt.subtotal(), Money::from_minor(355, iso::GBP));
        assert_eq!(receipt.total(), Money::from_minor(300, iso::GBP));
        assert_eq!(receipt.savings()?, Money::from_minor(55, iso::GBP));
        assert!(receipt.is_discounted());

        Ok(())
    }

    #[test]
    fn undiscounted_receipt_saves_nothing() -> TestResult {
        let receipt = Receipt::new(
            Money::from_minor(120, iso::GBP),
            Money::from_minor(120, iso::GBP),
        );

        assert!(!receipt.is_discounted());
        assert_eq!(receipt.savings()?, Money::from_minor(0, iso::GBP));

        Ok(())
    }
}
