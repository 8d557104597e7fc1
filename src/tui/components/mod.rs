//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top line with the screen title and product count
//! - `StatusBar`: Bottom line with the latest notice or key help
//! - `InventoryTable`: The product table with its grand total
//! - `LandingPage`, `AboutPanel`: Banner screens
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `MenuState`: Highlighted option of a choice prompt
//! - `InputBox`: Text buffer and cursor of a text prompt
//! - `ConfirmState`: Highlighted answer of a yes/no prompt
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top line)
//! ├── status_bar.rs       (Bottom line)
//! ├── inventory_table.rs  (Product table)
//! ├── landing.rs          (Intro and banner)
//! ├── about.rs            (About panel)
//! ├── menu.rs             (Choice prompt)
//! ├── input_box.rs        (Text prompt)
//! └── confirm.rs          (Yes/no prompt)
//! ```

pub mod about;
pub mod confirm;
pub mod input_box;
pub mod inventory_table;
pub mod landing;
pub mod menu;
mod status_bar;
mod title_bar;

pub use about::AboutPanel;
pub use confirm::{CONFIRM_HEIGHT, ConfirmDialog, ConfirmEvent, ConfirmState};
pub use input_box::{INPUT_HEIGHT, InputBox, InputEvent};
pub use inventory_table::InventoryTable;
pub use landing::LandingPage;
pub use menu::{Menu, MenuEvent, MenuState};
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
