//! # Prompts
//!
//! What the presentation layer has to ask the user next. The core never
//! reads input itself; it describes the question with a [`Prompt`] and waits
//! for the answer to come back as an [`Action`](crate::core::action::Action).

/// A menu entry. Menus are fixed slices of these, see the `*_MENU` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    InventoryList,
    AddProduct,
    EditProduct,
    RemoveProduct,
    About,
    Exit,
    BackToMenu,
    BackToList,
}

impl Choice {
    pub fn label(self) -> &'static str {
        match self {
            Choice::InventoryList => "Inventory List",
            Choice::AddProduct => "Add Product",
            Choice::EditProduct => "Edit Product",
            Choice::RemoveProduct => "Remove Product",
            Choice::About => "About",
            Choice::Exit => "Exit",
            Choice::BackToMenu => "Back to Menu",
            Choice::BackToList => "Back to Inventory List",
        }
    }
}

pub const MAIN_MENU: &[Choice] = &[
    Choice::InventoryList,
    Choice::AddProduct,
    Choice::About,
    Choice::Exit,
];

pub const LIST_MENU: &[Choice] = &[
    Choice::AddProduct,
    Choice::EditProduct,
    Choice::RemoveProduct,
    Choice::BackToMenu,
];

pub const ADD_MENU: &[Choice] = &[Choice::AddProduct, Choice::InventoryList, Choice::BackToMenu];

pub const REMOVE_MENU: &[Choice] = &[Choice::RemoveProduct, Choice::BackToList];

#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Pick one of `options`. Answered with `Action::Select`.
    Choice {
        title: &'static str,
        options: &'static [Choice],
    },
    /// Free text, optionally prefilled. Answered with `Action::Submit`.
    Text {
        label: &'static str,
        hint: &'static str,
        initial: Option<String>,
    },
    /// Yes or no. Answered with `Action::Confirm`.
    Confirm { message: String, default_yes: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menus_have_distinct_entries() {
        for menu in [MAIN_MENU, LIST_MENU, ADD_MENU, REMOVE_MENU] {
            for (i, a) in menu.iter().enumerate() {
                assert!(!menu[i + 1..].contains(a), "{} listed twice", a.label());
            }
        }
    }

    #[test]
    fn test_main_menu_order() {
        let labels: Vec<&str> = MAIN_MENU.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["Inventory List", "Add Product", "About", "Exit"]);
    }
}
