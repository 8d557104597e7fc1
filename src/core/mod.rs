//! # Core Application Logic
//!
//! This module contains Stockroom's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screen, data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • inventory (service)  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Prompt out, Action in
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: The `Product` record and its `ProductId`
//! - [`inventory`]: Stateless operations over a `Vec<Product>`
//! - [`validate`]: Parsing and checking of user-entered text
//! - [`form`]: The name → quantity → price loop shared by Add and Edit
//! - [`prompt`]: What the UI should ask next
//! - [`state`]: The `App` struct and the `Screen` graph
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings file and resolution

pub mod action;
pub mod config;
pub mod form;
pub mod inventory;
pub mod product;
pub mod prompt;
pub mod state;
pub mod validate;
