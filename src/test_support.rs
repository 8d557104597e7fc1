//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rust_decimal_macros::dec;

use crate::core::action::{Action, Effect, update};
use crate::core::product::{Product, ProductId};
use crate::core::state::{App, ListStep, Screen};

/// Shorthand for a known-valid id.
pub fn id(raw: u32) -> ProductId {
    ProductId::new(raw).expect("test ids are positive")
}

/// Pen (#1, total 25.00) and Cup (#2, total 15.00).
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(id(1), "Pen", dec!(10), dec!(2.50)),
        Product::new(id(2), "Cup", dec!(5), dec!(3.00)),
    ]
}

/// An app already sitting on the inventory list menu.
pub fn app_on_list(products: Vec<Product>) -> App {
    let mut app = App::with_products(products);
    app.screen = Screen::InventoryList(ListStep::Menu);
    app
}

/// Feeds every action through `update`, collecting the effects.
pub fn run(app: &mut App, actions: impl IntoIterator<Item = Action>) -> Vec<Effect> {
    actions.into_iter().map(|action| update(app, action)).collect()
}
