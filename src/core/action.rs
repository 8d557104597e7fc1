//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! User picks "Add Product" from a menu? That's `Action::Select(Choice::AddProduct)`.
//! User types a price and presses Enter? That's `Action::Submit("2.50")`.
//!
//! The `update()` function takes the current state and an action,
//! moves the app to the next screen and returns an `Effect` for the
//! presentation layer. No I/O here besides logging.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the whole menu graph testable without a terminal:
//! feed actions in, assert on `app.screen`, `app.products` and `app.notice`.
//!
//! Input problems never end the session. Bad text re-asks the same
//! question with a warning, unknown ids bounce back to the list menu, and
//! actions that don't fit the current screen are ignored.

use log::{debug, info, warn};
use std::mem;

use crate::core::form::{Draft, Form};
use crate::core::inventory;
use crate::core::product::Product;
use crate::core::prompt::Choice;
use crate::core::state::{AddStep, App, EditStep, Intent, ListStep, Screen, Severity};
use crate::core::validate;

pub const NOT_FOUND: &str = "Product with this Id does not exist.";
pub const IDS_EXHAUSTED: &str = "No product ids are left. The product was not added.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A menu entry was picked.
    Select(Choice),
    /// A line of text was entered.
    Submit(String),
    /// A yes/no question was answered.
    Confirm(bool),
    /// The user backed out of the current prompt (Esc).
    Cancel,
    /// The user asked to leave from anywhere (Ctrl+C).
    RequestExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A different screen is now active; the shell should clear before drawing.
    ScreenChanged,
    /// Exit was confirmed.
    Quit,
}

enum Transition {
    To(Screen),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {}", action, app.screen.title());
    app.notice = None;

    let screen = mem::replace(&mut app.screen, Screen::MainMenu);
    let before = mem::discriminant(&screen);

    let transition = match (screen, action) {
        (Screen::ConfirmExit, Action::RequestExit) => Transition::Quit,
        (_, Action::RequestExit) => Transition::To(Screen::ConfirmExit),
        (Screen::MainMenu, action) => main_menu(action),
        (Screen::InventoryList(step), action) => inventory_list(app, step, action),
        (Screen::AddProduct(step), action) => add_product(app, step, action),
        (Screen::EditProduct { target, step }, action) => edit_product(app, target, step, action),
        (Screen::RemoveProduct { target, confirming }, action) => {
            remove_product(app, target, confirming, action)
        }
        (Screen::About, action) => about(action),
        (Screen::ConfirmExit, action) => confirm_exit(action),
    };

    match transition {
        Transition::Quit => {
            info!("Exit confirmed with {} product(s) in memory", app.products.len());
            app.screen = Screen::ConfirmExit;
            Effect::Quit
        }
        Transition::To(next) => {
            let changed = mem::discriminant(&next) != before;
            if changed {
                debug!("screen: {}", next.title());
            }
            app.screen = next;
            if changed { Effect::ScreenChanged } else { Effect::None }
        }
    }
}

fn ignored(screen: Screen, action: Action) -> Transition {
    warn!("Ignoring {:?} on {}", action, screen.title());
    Transition::To(screen)
}

fn list_menu() -> Transition {
    Transition::To(Screen::InventoryList(ListStep::Menu))
}

fn main_menu(action: Action) -> Transition {
    match action {
        Action::Select(Choice::InventoryList) => list_menu(),
        Action::Select(Choice::AddProduct) => Transition::To(Screen::AddProduct(AddStep::Form(Form::new()))),
        Action::Select(Choice::About) => Transition::To(Screen::About),
        Action::Select(Choice::Exit) => Transition::To(Screen::ConfirmExit),
        other => ignored(Screen::MainMenu, other),
    }
}

fn inventory_list(app: &mut App, step: ListStep, action: Action) -> Transition {
    match (step, action) {
        (ListStep::Menu, Action::Select(Choice::AddProduct)) => {
            Transition::To(Screen::AddProduct(AddStep::Form(Form::new())))
        }
        (ListStep::Menu, Action::Select(Choice::EditProduct)) => begin_lookup(app, Intent::Edit),
        (ListStep::Menu, Action::Select(Choice::RemoveProduct)) => begin_lookup(app, Intent::Remove),
        (ListStep::Menu, Action::Select(Choice::BackToMenu)) => {
            Transition::To(Screen::InventoryList(ListStep::ConfirmBack))
        }
        (ListStep::EnterId(intent), Action::Submit(text)) => resolve_id(app, intent, &text),
        (ListStep::EnterId(_), Action::Cancel) => list_menu(),
        (ListStep::ConfirmBack, Action::Confirm(true)) => Transition::To(Screen::MainMenu),
        (ListStep::ConfirmBack, Action::Confirm(false) | Action::Cancel) => list_menu(),
        (step, other) => ignored(Screen::InventoryList(step), other),
    }
}

fn begin_lookup(app: &mut App, intent: Intent) -> Transition {
    if app.products.is_empty() {
        app.notify(Severity::Warning, "The inventory is empty. Add a product first.");
        return list_menu();
    }
    Transition::To(Screen::InventoryList(ListStep::EnterId(intent)))
}

fn resolve_id(app: &mut App, intent: Intent, text: &str) -> Transition {
    let id = match validate::product_id(text) {
        Ok(id) => id,
        Err(e) => {
            app.notify(Severity::Warning, e.to_string());
            return Transition::To(Screen::InventoryList(ListStep::EnterId(intent)));
        }
    };

    let Some(target) = inventory::get_by_id(&app.products, id).cloned() else {
        debug!("No product with id {}", id);
        app.notify(Severity::Warning, NOT_FOUND);
        return list_menu();
    };

    match intent {
        Intent::Edit => Transition::To(Screen::EditProduct {
            step: EditStep::Form(Form::editing(&target)),
            target,
        }),
        Intent::Remove => Transition::To(Screen::RemoveProduct {
            target,
            confirming: false,
        }),
    }
}

fn add_product(app: &mut App, step: AddStep, action: Action) -> Transition {
    match (step, action) {
        (AddStep::Form(mut form), Action::Submit(text)) => match form.submit(&text, &app.products) {
            Ok(None) => Transition::To(Screen::AddProduct(AddStep::Form(form))),
            Ok(Some(draft)) => {
                commit_add(app, draft);
                Transition::To(Screen::AddProduct(AddStep::Menu))
            }
            Err(e) => {
                app.notify(Severity::Warning, e.to_string());
                Transition::To(Screen::AddProduct(AddStep::Form(form)))
            }
        },
        (AddStep::Form(_), Action::Cancel) => {
            app.notify(Severity::Info, "Nothing was added.");
            Transition::To(Screen::AddProduct(AddStep::Menu))
        }
        (AddStep::Menu, Action::Select(Choice::AddProduct)) => {
            Transition::To(Screen::AddProduct(AddStep::Form(Form::new())))
        }
        (AddStep::Menu, Action::Select(Choice::InventoryList)) => list_menu(),
        (AddStep::Menu, Action::Select(Choice::BackToMenu)) => Transition::To(Screen::MainMenu),
        (step, other) => ignored(Screen::AddProduct(step), other),
    }
}

fn commit_add(app: &mut App, draft: Draft) {
    if inventory::next_id(&app.products).is_none() {
        warn!("Id space exhausted, \"{}\" not added", draft.name);
        app.notify(Severity::Error, IDS_EXHAUSTED);
        return;
    }
    let products = mem::take(&mut app.products);
    app.products = inventory::add_product(products, draft.name, draft.quantity, draft.unit_price);
    if let Some(added) = app.products.last() {
        info!(
            "Added product #{} \"{}\" (qty {}, price {})",
            added.id(),
            added.name(),
            added.quantity(),
            added.unit_price()
        );
    }
    app.notify(Severity::Success, "Product added successfully.");
}

fn edit_product(app: &mut App, target: Product, step: EditStep, action: Action) -> Transition {
    match (step, action) {
        (EditStep::Form(mut form), Action::Submit(text)) => match form.submit(&text, &app.products) {
            Ok(None) => Transition::To(Screen::EditProduct {
                target,
                step: EditStep::Form(form),
            }),
            Ok(Some(draft)) => Transition::To(Screen::EditProduct {
                target,
                step: EditStep::ConfirmSave(draft),
            }),
            Err(e) => {
                app.notify(Severity::Warning, e.to_string());
                Transition::To(Screen::EditProduct {
                    target,
                    step: EditStep::Form(form),
                })
            }
        },
        (EditStep::Form(_), Action::Cancel) => {
            app.notify(Severity::Info, "Edit cancelled. No changes were made.");
            list_menu()
        }
        (EditStep::ConfirmSave(draft), Action::Confirm(true)) => {
            let products = mem::take(&mut app.products);
            app.products =
                inventory::update_product(products, target.id(), draft.name, draft.quantity, draft.unit_price);
            info!("Updated product #{}", target.id());
            app.notify(Severity::Success, "Product updated successfully.");
            list_menu()
        }
        (EditStep::ConfirmSave(_), Action::Confirm(false) | Action::Cancel) => {
            app.notify(Severity::Info, "No changes were made.");
            list_menu()
        }
        (step, other) => ignored(Screen::EditProduct { target, step }, other),
    }
}

fn remove_product(app: &mut App, target: Product, confirming: bool, action: Action) -> Transition {
    match (confirming, action) {
        (false, Action::Select(Choice::RemoveProduct)) => Transition::To(Screen::RemoveProduct {
            target,
            confirming: true,
        }),
        (false, Action::Select(Choice::BackToList)) => list_menu(),
        (true, Action::Confirm(true)) => {
            let products = mem::take(&mut app.products);
            app.products = inventory::remove_product(products, target.id());
            info!("Removed product #{} \"{}\"", target.id(), target.name());
            app.notify(Severity::Success, "Product removed.");
            list_menu()
        }
        (true, Action::Confirm(false) | Action::Cancel) => Transition::To(Screen::RemoveProduct {
            target,
            confirming: false,
        }),
        (confirming, other) => ignored(Screen::RemoveProduct { target, confirming }, other),
    }
}

fn about(action: Action) -> Transition {
    match action {
        Action::Confirm(_) | Action::Cancel => Transition::To(Screen::MainMenu),
        other => ignored(Screen::About, other),
    }
}

fn confirm_exit(action: Action) -> Transition {
    match action {
        Action::Confirm(true) => Transition::Quit,
        Action::Confirm(false) | Action::Cancel => Transition::To(Screen::MainMenu),
        other => ignored(Screen::ConfirmExit, other),
    }
}
