//! # Product
//!
//! One inventory line item. `total` is derived from quantity and unit price
//! and has no setter: it is computed in [`Product::new`] and recomputed in
//! [`Product::revise`], so `total == quantity * unit_price` always holds.

use rust_decimal::Decimal;
use std::fmt;

/// Identifier of a product. Always positive, assigned once by the
/// inventory service and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(u32);

impl ProductId {
    pub const FIRST: ProductId = ProductId(1);

    /// Returns `None` for 0, which is not a valid id.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// `None` once the id space is used up.
    pub(crate) fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Decimal,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            unit_price,
            total: quantity * unit_price,
        }
    }

    /// Replaces everything but the id.
    pub fn revise(&mut self, name: impl Into<String>, quantity: Decimal, unit_price: Decimal) {
        self.name = name.into();
        self.quantity = quantity;
        self.unit_price = unit_price;
        self.total = quantity * unit_price;
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Formats an amount with two decimal places, e.g. `25.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_id_rejects_zero() {
        assert!(ProductId::new(0).is_none());
        assert_eq!(ProductId::new(7).map(ProductId::get), Some(7));
    }

    #[test]
    fn test_successor_increments() {
        assert_eq!(ProductId::FIRST.successor().map(ProductId::get), Some(2));
    }

    #[test]
    fn test_successor_of_last_id_is_none() {
        assert!(ProductId::new(u32::MAX).and_then(ProductId::successor).is_none());
    }

    #[test]
    fn test_new_computes_total() {
        let product = Product::new(ProductId::FIRST, "Pen", dec!(10), dec!(2.50));
        assert_eq!(product.total(), dec!(25.00));
    }

    #[test]
    fn test_revise_recomputes_total_and_keeps_id() {
        let mut product = Product::new(ProductId::FIRST, "Pen", dec!(10), dec!(2.50));
        product.revise("Blue Pen", dec!(4), dec!(1.25));

        assert_eq!(product.id(), ProductId::FIRST);
        assert_eq!(product.name(), "Blue Pen");
        assert_eq!(product.quantity(), dec!(4));
        assert_eq!(product.unit_price(), dec!(1.25));
        assert_eq!(product.total(), dec!(5.00));
    }

    #[test]
    fn test_format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec!(25)), "25.00");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(3.333)), "3.33");
    }
}
