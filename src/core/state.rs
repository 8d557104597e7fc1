//! # Application State
//!
//! Core session state for Stockroom. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── products: Vec<Product>   // the collection, insertion order
//! ├── screen: Screen           // where we are in the menu graph
//! └── notice: Option<Notice>   // feedback from the last transition
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::form::{Draft, Form};
use crate::core::inventory::{self, Listing};
use crate::core::product::Product;
use crate::core::prompt::{self, Prompt};

/// Why the list screen is asking for a product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Edit,
    Remove,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListStep {
    Menu,
    EnterId(Intent),
    ConfirmBack,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddStep {
    Form(Form),
    /// Shown after a successful add (or a cancelled form) to allow chaining.
    Menu,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditStep {
    Form(Form),
    ConfirmSave(Draft),
}

/// One node of the navigation graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    MainMenu,
    InventoryList(ListStep),
    AddProduct(AddStep),
    EditProduct { target: Product, step: EditStep },
    RemoveProduct { target: Product, confirming: bool },
    About,
    ConfirmExit,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::MainMenu => "Inventory Menu",
            Screen::InventoryList(_) => "Inventory List",
            Screen::AddProduct(_) => "Add Product",
            Screen::EditProduct { .. } => "Edit Product",
            Screen::RemoveProduct { .. } => "Remove Product",
            Screen::About => "About",
            Screen::ConfirmExit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

pub struct App {
    pub products: Vec<Product>,
    pub screen: Screen,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            screen: Screen::MainMenu,
            notice: None,
        }
    }

    pub fn listing(&self) -> Listing<'_> {
        inventory::list_with_total(&self.products)
    }

    pub fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            severity,
        });
    }

    /// The question the presentation layer should put to the user now.
    pub fn prompt(&self) -> Prompt {
        match &self.screen {
            Screen::MainMenu => Prompt::Choice {
                title: "Inventory Menu",
                options: prompt::MAIN_MENU,
            },
            Screen::InventoryList(ListStep::Menu) => Prompt::Choice {
                title: "Inventory Actions",
                options: prompt::LIST_MENU,
            },
            Screen::InventoryList(ListStep::EnterId(intent)) => Prompt::Text {
                label: "Product Id",
                hint: match intent {
                    Intent::Edit => "Id of the product to edit",
                    Intent::Remove => "Id of the product to remove",
                },
                initial: None,
            },
            Screen::InventoryList(ListStep::ConfirmBack) => Prompt::Confirm {
                message: "Go back to the main menu?".to_string(),
                default_yes: true,
            },
            Screen::AddProduct(AddStep::Form(form)) => form.prompt(),
            Screen::AddProduct(AddStep::Menu) => Prompt::Choice {
                title: "Add Product",
                options: prompt::ADD_MENU,
            },
            Screen::EditProduct {
                step: EditStep::Form(form),
                ..
            } => form.prompt(),
            Screen::EditProduct {
                target,
                step: EditStep::ConfirmSave(_),
            } => Prompt::Confirm {
                message: format!("Save changes to product #{}?", target.id()),
                default_yes: true,
            },
            Screen::RemoveProduct {
                confirming: false, ..
            } => Prompt::Choice {
                title: "Remove Product",
                options: prompt::REMOVE_MENU,
            },
            Screen::RemoveProduct {
                target,
                confirming: true,
            } => Prompt::Confirm {
                message: format!(
                    "This action is irreversible. Remove \"{}\" (#{})?",
                    target.name(),
                    target.id()
                ),
                default_yes: false,
            },
            Screen::About => Prompt::Confirm {
                message: "Do you want to go back to the menu?".to_string(),
                default_yes: true,
            },
            Screen::ConfirmExit => Prompt::Confirm {
                message: "Do you want to close this program?".to_string(),
                default_yes: true,
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_products;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert!(app.products.is_empty());
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.notice.is_none());
        assert_eq!(app.listing().grand_total, Decimal::ZERO);
    }

    #[test]
    fn test_main_menu_prompt() {
        let app = App::new();
        assert_eq!(
            app.prompt(),
            Prompt::Choice {
                title: "Inventory Menu",
                options: prompt::MAIN_MENU,
            }
        );
    }

    #[test]
    fn test_remove_confirmation_defaults_to_no() {
        let products = sample_products();
        let mut app = App::with_products(products.clone());
        app.screen = Screen::RemoveProduct {
            target: products[0].clone(),
            confirming: true,
        };
        match app.prompt() {
            Prompt::Confirm {
                message,
                default_yes,
            } => {
                assert!(message.contains("irreversible"));
                assert!(message.contains("Pen"));
                assert!(!default_yes);
            }
            other => panic!("expected a confirmation, got {other:?}"),
        }
    }

    #[test]
    fn test_notify_replaces_notice() {
        let mut app = App::new();
        app.notify(Severity::Info, "first");
        app.notify(Severity::Warning, "second");
        assert_eq!(
            app.notice,
            Some(Notice {
                text: "second".to_string(),
                severity: Severity::Warning,
            })
        );
    }
}
