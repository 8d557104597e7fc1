//! # Input Validation
//!
//! Turns raw text from the prompts into typed values the inventory service
//! can trust. Every failure is a [`ValidationError`] whose message is shown
//! to the user before the same field is asked again.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::core::form::Field;
use crate::core::inventory;
use crate::core::product::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name cannot be empty.")]
    EmptyName,
    #[error("Product name already exists.")]
    NameTaken,
    #[error("Invalid number format.")]
    NotANumber,
    #[error("{0} must be greater than 0.00")]
    NotPositive(&'static str),
    #[error("{0} is too large.")]
    TooLarge(&'static str),
    #[error("The grand total would be too large.")]
    GrandTotalTooLarge,
    #[error("Product Id must be a whole number greater than 0.")]
    InvalidId,
}

/// Trimmed name, provided it is non-empty and not used by another product.
pub fn product_name(
    input: &str,
    exclude: Option<ProductId>,
    products: &[Product],
) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if inventory::is_name_taken(name, exclude, products) {
        return Err(ValidationError::NameTaken);
    }
    Ok(name.to_string())
}

/// A strictly positive decimal, e.g. a quantity or a unit price.
pub fn positive_amount(input: &str, field: Field) -> Result<Decimal, ValidationError> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| ValidationError::NotANumber)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field.label()));
    }
    Ok(amount)
}

/// The line total, as long as it fits in a `Decimal`.
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, ValidationError> {
    quantity
        .checked_mul(unit_price)
        .ok_or(ValidationError::TooLarge(Field::UnitPrice.label()))
}

/// Checks that adding `line_total` keeps the grand total inside the
/// `Decimal` range. The product being edited (`exclude`) is left out since
/// its current total is about to be replaced.
pub fn fits_grand_total(
    line_total: Decimal,
    exclude: Option<ProductId>,
    products: &[Product],
) -> Result<(), ValidationError> {
    products
        .iter()
        .filter(|p| Some(p.id()) != exclude)
        .try_fold(line_total, |sum, p| sum.checked_add(p.total()))
        .map(|_| ())
        .ok_or(ValidationError::GrandTotalTooLarge)
}

pub fn product_id(input: &str) -> Result<ProductId, ValidationError> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(ProductId::new)
        .ok_or(ValidationError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{id, sample_products};
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_name_trims() {
        assert_eq!(product_name("  Stapler ", None, &[]), Ok("Stapler".to_string()));
    }

    #[test]
    fn test_product_name_rejects_blank() {
        assert_eq!(product_name("   ", None, &[]), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_product_name_rejects_collision() {
        let products = sample_products();
        assert_eq!(product_name("PEN", None, &products), Err(ValidationError::NameTaken));
        assert_eq!(product_name("pen", Some(id(2)), &products), Err(ValidationError::NameTaken));
    }

    #[test]
    fn test_product_name_allows_own_name_when_editing() {
        let products = sample_products();
        assert_eq!(product_name("Pen", Some(id(1)), &products), Ok("Pen".to_string()));
    }

    #[test]
    fn test_positive_amount_accepts_decimals() {
        assert_eq!(positive_amount("2.50", Field::UnitPrice), Ok(dec!(2.50)));
        assert_eq!(positive_amount(" 10 ", Field::Quantity), Ok(dec!(10)));
    }

    #[test]
    fn test_positive_amount_rejects_bad_input() {
        assert_eq!(positive_amount("abc", Field::Quantity), Err(ValidationError::NotANumber));
        assert_eq!(positive_amount("", Field::Quantity), Err(ValidationError::NotANumber));
        assert_eq!(
            positive_amount("-5", Field::Quantity),
            Err(ValidationError::NotPositive("Quantity"))
        );
        assert_eq!(
            positive_amount("0", Field::UnitPrice),
            Err(ValidationError::NotPositive("Price"))
        );
    }

    #[test]
    fn test_not_positive_message() {
        let err = positive_amount("0", Field::Quantity).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0.00");
    }

    #[test]
    fn test_line_total_overflow() {
        assert_eq!(line_total(dec!(2), dec!(3)), Ok(dec!(6)));
        assert_eq!(
            line_total(Decimal::MAX, dec!(2)),
            Err(ValidationError::TooLarge("Price"))
        );
    }

    #[test]
    fn test_grand_total_must_fit() {
        let huge = dec!(72000000000000000000000000000);
        let products = vec![Product::new(id(1), "Bolt", huge, dec!(1))];

        assert_eq!(fits_grand_total(dec!(40), None, &products), Ok(()));
        assert_eq!(
            fits_grand_total(huge, None, &products),
            Err(ValidationError::GrandTotalTooLarge)
        );
        // Replacing the same product does not count it twice
        assert_eq!(fits_grand_total(huge, Some(id(1)), &products), Ok(()));
    }

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(product_id(" 3 "), Ok(id(3)));
        assert_eq!(product_id("0"), Err(ValidationError::InvalidId));
        assert_eq!(product_id("-1"), Err(ValidationError::InvalidId));
        assert_eq!(product_id("one"), Err(ValidationError::InvalidId));
    }
}
