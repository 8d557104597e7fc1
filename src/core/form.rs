//! # Field Collection
//!
//! The Add and Edit screens share one loop: ask for the name, then the
//! quantity, then the price. Each stage carries what has been collected so
//! far, so a finished [`Draft`] can only be produced once all three fields
//! passed validation.
//!
//! ```text
//! Name ──ok──▶ Quantity { name } ──ok──▶ UnitPrice { name, quantity } ──ok──▶ Draft
//!  ▲ err         ▲ err                     ▲ err
//!  └─┘           └─┘                       └─┘
//! ```

use rust_decimal::Decimal;

use crate::core::product::{Product, ProductId, format_amount};
use crate::core::prompt::Prompt;
use crate::core::validate::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Quantity,
    UnitPrice,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Product Name",
            Field::Quantity => "Quantity",
            Field::UnitPrice => "Price",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Name => "Name must be unique",
            Field::Quantity => "Quantity must be a positive number",
            Field::UnitPrice => "Price must be a positive number",
        }
    }
}

/// A fully validated set of product fields, ready for the inventory service.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Name,
    Quantity { name: String },
    UnitPrice { name: String, quantity: Decimal },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    /// Product being edited; excluded from the name uniqueness check.
    editing: Option<ProductId>,
    /// Current values offered as prefilled input while editing.
    defaults: Option<Draft>,
    stage: Stage,
}

impl Form {
    pub fn new() -> Self {
        Self {
            editing: None,
            defaults: None,
            stage: Stage::Name,
        }
    }

    pub fn editing(product: &Product) -> Self {
        Self {
            editing: Some(product.id()),
            defaults: Some(Draft {
                name: product.name().to_string(),
                quantity: product.quantity(),
                unit_price: product.unit_price(),
            }),
            stage: Stage::Name,
        }
    }

    pub fn field(&self) -> Field {
        match self.stage {
            Stage::Name => Field::Name,
            Stage::Quantity { .. } => Field::Quantity,
            Stage::UnitPrice { .. } => Field::UnitPrice,
        }
    }

    /// Validates `input` for the current field.
    ///
    /// Returns `Ok(None)` after advancing to the next field, `Ok(Some(draft))`
    /// once the price has been accepted. On error the form stays where it is.
    pub fn submit(&mut self, input: &str, products: &[Product]) -> Result<Option<Draft>, ValidationError> {
        match &self.stage {
            Stage::Name => {
                let name = validate::product_name(input, self.editing, products)?;
                self.stage = Stage::Quantity { name };
                Ok(None)
            }
            Stage::Quantity { name } => {
                let quantity = validate::positive_amount(input, Field::Quantity)?;
                self.stage = Stage::UnitPrice {
                    name: name.clone(),
                    quantity,
                };
                Ok(None)
            }
            Stage::UnitPrice { name, quantity } => {
                let unit_price = validate::positive_amount(input, Field::UnitPrice)?;
                let total = validate::line_total(*quantity, unit_price)?;
                validate::fits_grand_total(total, self.editing, products)?;
                Ok(Some(Draft {
                    name: name.clone(),
                    quantity: *quantity,
                    unit_price,
                }))
            }
        }
    }

    pub fn prompt(&self) -> Prompt {
        let field = self.field();
        let initial = self.defaults.as_ref().map(|d| match field {
            Field::Name => d.name.clone(),
            Field::Quantity => d.quantity.normalize().to_string(),
            // Prefill must round-trip to the stored price
            Field::UnitPrice if d.unit_price.round_dp(2) == d.unit_price => format_amount(d.unit_price),
            Field::UnitPrice => d.unit_price.normalize().to_string(),
        });
        Prompt::Text {
            label: field.label(),
            hint: field.hint(),
            initial,
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{id, sample_products};
    use rust_decimal_macros::dec;

    #[test]
    fn test_walks_all_three_fields() {
        let mut form = Form::new();
        assert_eq!(form.field(), Field::Name);
        assert_eq!(form.submit("Stapler", &[]), Ok(None));
        assert_eq!(form.field(), Field::Quantity);
        assert_eq!(form.submit("3", &[]), Ok(None));
        assert_eq!(form.field(), Field::UnitPrice);

        let draft = form.submit("4.20", &[]).unwrap().unwrap();
        assert_eq!(
            draft,
            Draft {
                name: "Stapler".to_string(),
                quantity: dec!(3),
                unit_price: dec!(4.20),
            }
        );
    }

    #[test]
    fn test_error_keeps_current_field() {
        let products = sample_products();
        let mut form = Form::new();

        assert_eq!(form.submit("pen", &products), Err(ValidationError::NameTaken));
        assert_eq!(form.field(), Field::Name);

        form.submit("Stapler", &products).unwrap();
        for bad in ["abc", "-5", "0"] {
            assert!(form.submit(bad, &products).is_err());
            assert_eq!(form.field(), Field::Quantity);
        }

        form.submit("1", &products).unwrap();
        assert!(form.submit("free", &products).is_err());
        assert_eq!(form.field(), Field::UnitPrice);
    }

    #[test]
    fn test_editing_allows_own_name() {
        let products = sample_products();
        let mut form = Form::editing(&products[0]);
        assert_eq!(form.submit("PEN", &products), Ok(None));
    }

    #[test]
    fn test_editing_blocks_other_names() {
        let products = sample_products();
        let mut form = Form::editing(&products[0]);
        assert_eq!(form.submit("cup", &products), Err(ValidationError::NameTaken));
    }

    #[test]
    fn test_unchanged_edit_keeps_exact_price() {
        let products = vec![Product::new(id(1), "Bolt", dec!(1000), dec!(0.125))];
        let mut form = Form::editing(&products[0]);

        // Accept every prefilled value as-is
        let mut draft = None;
        while draft.is_none() {
            let Prompt::Text { initial: Some(value), .. } = form.prompt() else {
                panic!("editing prompts are prefilled");
            };
            draft = form.submit(&value, &products).unwrap();
        }

        let draft = draft.unwrap();
        assert_eq!(draft.unit_price, dec!(0.125));
        assert_eq!(draft.quantity, dec!(1000));
    }

    #[test]
    fn test_tiny_price_prefill_is_accepted() {
        let products = vec![Product::new(id(1), "Washer", dec!(5), dec!(0.001))];
        let mut form = Form::editing(&products[0]);
        form.submit("Washer", &products).unwrap();
        form.submit("5", &products).unwrap();

        assert!(matches!(form.prompt(), Prompt::Text { initial: Some(ref v), .. } if v == "0.001"));
        assert!(form.submit("0.001", &products).is_ok());
    }

    #[test]
    fn test_rejects_price_that_overflows_grand_total() {
        let products = vec![Product::new(
            id(1),
            "Bolt",
            dec!(8000000000000000000000000000),
            dec!(9),
        )];
        let mut form = Form::new();
        form.submit("Nut", &products).unwrap();
        form.submit("8000000000000000000000000000", &products).unwrap();

        assert_eq!(
            form.submit("9", &products),
            Err(ValidationError::GrandTotalTooLarge)
        );
        assert_eq!(form.field(), Field::UnitPrice);
    }

    #[test]
    fn test_new_form_prompt_has_no_prefill() {
        let form = Form::new();
        assert_eq!(
            form.prompt(),
            Prompt::Text {
                label: "Product Name",
                hint: "Name must be unique",
                initial: None,
            }
        );
    }

    #[test]
    fn test_editing_prompt_prefills_current_values() {
        let products = sample_products();
        let mut form = Form::editing(&products[0]);
        assert!(matches!(form.prompt(), Prompt::Text { initial: Some(ref v), .. } if v == "Pen"));

        form.submit("Pen", &products).unwrap();
        assert!(matches!(form.prompt(), Prompt::Text { initial: Some(ref v), .. } if v == "10"));

        form.submit("10", &products).unwrap();
        assert!(matches!(form.prompt(), Prompt::Text { initial: Some(ref v), .. } if v == "2.50"));
    }
}
