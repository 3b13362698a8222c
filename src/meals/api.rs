//! # API Facade
//!
//! [`MealsApi`] is the single entry point for a session: it owns the meal list
//! and the store, and dispatches each user action to its command.
//!
//! It normalizes inputs on the way in (index strings become
//! [`DisplayIndex`]es, ratings are checked against the configured scale) and
//! returns [`CmdResult`]s. It never prints. Business logic lives in
//! `commands/*.rs`.
//!
//! ## Generic Over DataStore
//!
//! `MealsApi<S: DataStore>` works with any store:
//! - Production: `MealsApi<FileStore>`
//! - Testing: `MealsApi<InMemoryStore>`

use crate::collection::MealList;
use crate::commands;
use crate::config::MealsConfig;
use crate::error::{MealsError, Result};
use crate::index::DisplayIndex;
use crate::model::{Meal, Photo};
use crate::store::DataStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct MealsPaths {
    /// Directory holding the data file and `config.json`
    pub data_dir: PathBuf,
}

pub struct MealsApi<S: DataStore> {
    store: S,
    meals: MealList,
    config: MealsConfig,
    paths: MealsPaths,
}

impl<S: DataStore> MealsApi<S> {
    /// Starts a session: loads saved meals, or falls back to samples.
    ///
    /// The returned result carries any startup messages.
    pub fn open(store: S, config: MealsConfig, paths: MealsPaths) -> (Self, commands::CmdResult) {
        let (meals, result) = commands::load::run(&store, config.seed_on_first_run);
        let api = Self {
            store,
            meals,
            config,
            paths,
        };
        (api, result)
    }

    pub fn add_meal(
        &mut self,
        name: impl Into<String>,
        photo: Option<Photo>,
        rating: i32,
    ) -> Result<commands::CmdResult> {
        self.check_rating(rating)?;
        let meal = Meal::new(name, photo, rating)?;
        commands::add::run(&mut self.store, &mut self.meals, meal)
    }

    pub fn edit_meal(
        &mut self,
        index: &str,
        update: commands::edit::MealUpdate,
    ) -> Result<commands::CmdResult> {
        if let Some(rating) = update.rating {
            self.check_rating(rating)?;
        }
        let index = parse_index(index)?;
        commands::edit::update(&mut self.store, &mut self.meals, index, update)
    }

    pub fn delete_meals<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::delete::run(&mut self.store, &mut self.meals, &indexes)
    }

    pub fn move_meal(&mut self, from: &str, to: &str) -> Result<commands::CmdResult> {
        let from = parse_index(from)?;
        let to = parse_index(to)?;
        commands::move_meal::run(&mut self.store, &mut self.meals, from, to)
    }

    pub fn list_meals(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.meals)
    }

    pub fn view_meals<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&self.meals, &indexes)
    }

    pub fn export_photo(&self, index: &str, output: &Path) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::photo::export(&self.meals, index, output)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths.data_dir, action)
    }

    /// Where the meal list is stored, if the store is file-backed.
    pub fn data_path(&self) -> Option<&Path> {
        self.store.location()
    }

    pub fn meals(&self) -> &MealList {
        &self.meals
    }

    pub fn settings(&self) -> &MealsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn check_rating(&self, rating: i32) -> Result<()> {
        if rating > self.config.max_rating {
            return Err(MealsError::Api(format!(
                "Rating must be between 0 and {} (got {})",
                self.config.max_rating, rating
            )));
        }
        Ok(())
    }
}

fn parse_index(input: &str) -> Result<DisplayIndex> {
    DisplayIndex::from_str(input).map_err(MealsError::Api)
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs.iter().map(|s| parse_index(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::{MealUpdate, PhotoChange};
pub use crate::config::ConfigKey;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn open_with(store: InMemoryStore) -> (TempDir, MealsApi<InMemoryStore>) {
        let dir = TempDir::new().unwrap();
        let paths = MealsPaths {
            data_dir: dir.path().to_path_buf(),
        };
        let (api, _) = MealsApi::open(store, MealsConfig::default(), paths);
        (dir, api)
    }

    #[test]
    fn first_open_shows_samples() {
        let (_dir, api) = open_with(InMemoryStore::new());
        assert_eq!(api.meals().count(), 3);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn add_then_reopen_loads_saved() {
        let (_dir, mut api) = open_with(InMemoryStore::new());
        api.add_meal("Newest Meal", None, 5).unwrap();

        let saved = api.store().load().unwrap();
        assert_eq!(saved.len(), 4);

        let (_dir2, reopened) = open_with(InMemoryStore::with_saved(saved));
        assert_eq!(reopened.meals().get(3).unwrap().name(), "Newest Meal");
    }

    #[test]
    fn add_reports_validation_reason() {
        let (_dir, mut api) = open_with(InMemoryStore::new());
        let err = api.add_meal("", None, 0).unwrap_err();
        assert!(matches!(
            err,
            MealsError::Validation(ValidationError::EmptyName)
        ));
        let err = api.add_meal("Really bad rating", None, -1).unwrap_err();
        assert!(matches!(
            err,
            MealsError::Validation(ValidationError::NegativeRating(-1))
        ));
        assert_eq!(api.meals().count(), 3);
    }

    #[test]
    fn ratings_above_scale_are_refused() {
        let (_dir, mut api) = open_with(InMemoryStore::new());
        assert!(matches!(
            api.add_meal("Too good", None, 6),
            Err(MealsError::Api(_))
        ));
        let update = MealUpdate {
            rating: Some(9),
            ..Default::default()
        };
        assert!(api.edit_meal("1", update).is_err());
    }

    #[test]
    fn index_strings_are_one_based() {
        let (_dir, mut api) = open_with(InMemoryStore::new());
        api.delete_meals(&["1"]).unwrap();
        assert_eq!(api.meals().get(0).unwrap().name(), "Chicken and Potatoes");

        assert!(api.delete_meals(&["0"]).is_err());
        assert!(api.delete_meals(&["first"]).is_err());
    }

    #[test]
    fn move_meal_dispatches() {
        let (_dir, mut api) = open_with(InMemoryStore::new());
        api.move_meal("1", "3").unwrap();
        assert_eq!(api.meals().get(2).unwrap().name(), "Caprese Salad");
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn config_uses_data_dir() {
        let (dir, api) = open_with(InMemoryStore::new());
        api.config(ConfigAction::Set(ConfigKey::MaxRating, "10".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }

    #[test]
    fn memory_store_has_no_data_path() {
        let (_dir, api) = open_with(InMemoryStore::new());
        assert!(api.data_path().is_none());
    }
}
