//! # Inventory Service
//!
//! Stateless operations over a product collection. Mutating operations take
//! the collection by value and hand back the updated one, so the caller keeps
//! sole ownership between calls:
//!
//! ```text
//! Vec<Product>  →  add_product / update_product / remove_product  →  Vec<Product>
//! ```
//!
//! "Not found" is a normal outcome here, never an error: lookups return
//! `Option`, and updates or removals of unknown ids leave the collection as-is.
//! Input validation happens before these functions are called (see
//! [`crate::core::validate`]).

use rust_decimal::Decimal;

use crate::core::product::{Product, ProductId};

/// Products in insertion order plus the sum of their totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing<'a> {
    pub products: &'a [Product],
    pub grand_total: Decimal,
}

/// 1 for an empty collection, otherwise the highest id plus one.
///
/// Ids freed by removals are never handed out again: only the current
/// maximum matters, so gaps stay gaps. `None` when the highest id is
/// already `u32::MAX`.
pub fn next_id(products: &[Product]) -> Option<ProductId> {
    match products.iter().map(Product::id).max() {
        Some(max) => max.successor(),
        None => Some(ProductId::FIRST),
    }
}

/// Whether `name` collides with a product other than `exclude`.
///
/// Comparison ignores case and surrounding whitespace. Pass `None` when
/// checking a brand-new product; pass the product's own id when editing so
/// it can keep its current name.
pub fn is_name_taken(name: &str, exclude: Option<ProductId>, products: &[Product]) -> bool {
    let needle = normalize(name);
    products
        .iter()
        .any(|p| normalize(p.name()) == needle && Some(p.id()) != exclude)
}

pub fn add_product(
    mut products: Vec<Product>,
    name: impl Into<String>,
    quantity: Decimal,
    unit_price: Decimal,
) -> Vec<Product> {
    // No id left: structural no-op, like updates of unknown ids
    if let Some(id) = next_id(&products) {
        products.push(Product::new(id, name, quantity, unit_price));
    }
    products
}

pub fn update_product(
    mut products: Vec<Product>,
    id: ProductId,
    name: impl Into<String>,
    quantity: Decimal,
    unit_price: Decimal,
) -> Vec<Product> {
    if let Some(product) = products.iter_mut().find(|p| p.id() == id) {
        product.revise(name, quantity, unit_price);
    }
    products
}

pub fn remove_product(mut products: Vec<Product>, id: ProductId) -> Vec<Product> {
    products.retain(|p| p.id() != id);
    products
}

pub fn get_by_id(products: &[Product], id: ProductId) -> Option<&Product> {
    products.iter().find(|p| p.id() == id)
}

/// Validated input keeps the sum inside the `Decimal` range (see
/// [`crate::core::validate::fits_grand_total`]), so the saturation below
/// never kicks in for collections built through the forms.
pub fn list_with_total(products: &[Product]) -> Listing<'_> {
    let grand_total = products
        .iter()
        .fold(Decimal::ZERO, |sum, p| sum.checked_add(p.total()).unwrap_or(Decimal::MAX));
    Listing {
        products,
        grand_total,
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
