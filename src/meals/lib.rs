//! # Meals Architecture
//!
//! Meals is a small journal of meals: each entry has a name, an optional
//! photo and a star rating, kept in the order the user added them and saved
//! to a single local file. The library holds all of the behavior; the `meals`
//! binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Owns the session's MealList and DataStore                │
//! │  - Turns 1-based index strings into positions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Mutate the list, then save the whole list                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection (collection.rs) + Storage (store/)              │
//! │  - Ordered Vec<Meal>; DataStore save/load of the whole list │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! - Invalid input (empty name, negative rating) is a [`error::ValidationError`]
//!   and nothing changes.
//! - A failed save leaves the in-memory list changed, logs a warning and is
//!   reported through `CmdResult::saved`; it never aborts the command.
//! - A missing or unreadable data file loads as "nothing saved", and the
//!   session starts from the sample meals.
//!
//! Everything runs synchronously on one thread; the data file belongs to this
//! process alone.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`collection`]: The ordered meal list
//! - [`store`]: Persistence trait and implementations
//! - [`model`]: `Meal` and `Photo`
//! - [`index`]: 1-based display indexes
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
