//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway: it saves the whole meal
//! list as one unit and loads it back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file at a path chosen by
//!   the caller. Writes go to a temp file that is renamed over the target.
//! - [`memory::InMemoryStore`]: keeps the last saved list in memory, and can be
//!   told to fail saves so callers' fallback paths can be tested.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── meals.json     # {"meals": [{"name", "photo" (base64 or null), "rating"}]}
//! └── config.json    # MealsConfig
//! ```
//!
//! There is a single schema and no migrations. A file that does not decode
//! into it is treated the same as no file at all.

use crate::error::Result;
use crate::model::Meal;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for meal persistence.
pub trait DataStore {
    /// Persist the full, ordered list, replacing whatever was saved before.
    fn save(&mut self, meals: &[Meal]) -> Result<()>;

    /// Load the last saved list.
    ///
    /// Returns `None` when there is nothing usable: no data yet, an unreadable
    /// file, or contents that do not decode. None of these are errors.
    fn load(&self) -> Option<Vec<Meal>>;

    /// Where the data lives, for stores backed by a file.
    fn location(&self) -> Option<&Path> {
        None
    }
}

/// The document written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct MealArchive {
    pub meals: Vec<Meal>,
}
