use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MealsError, Result, ValidationError};
use crate::index::DisplayIndex;
use crate::model::{Meal, Photo};
use crate::store::DataStore;

use super::helpers::persist_into;

#[derive(Debug, Clone, Default)]
pub enum PhotoChange {
    #[default]
    Keep,
    Set(Photo),
    Remove,
}

/// Changes to apply to an existing meal. Unset fields keep their old value.
#[derive(Debug, Clone, Default)]
pub struct MealUpdate {
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub photo: PhotoChange,
}

impl MealUpdate {
    /// Builds the replacement meal, validating it like any new meal.
    pub fn apply(self, current: &Meal) -> std::result::Result<Meal, ValidationError> {
        let name = self.name.unwrap_or_else(|| current.name().to_string());
        let rating = self.rating.unwrap_or(current.rating());
        let photo = match self.photo {
            PhotoChange::Keep => current.photo().cloned(),
            PhotoChange::Set(photo) => Some(photo),
            PhotoChange::Remove => None,
        };
        Meal::new(name, photo, rating)
    }

    pub fn is_empty(&self) -> bool {
        let keeps_photo = matches!(self.photo, PhotoChange::Keep);
        self.name.is_none() && self.rating.is_none() && keeps_photo
    }
}

/// Replaces the meal at `index` with a fully built meal.
pub fn run<S: DataStore>(
    store: &mut S,
    list: &mut MealList,
    index: DisplayIndex,
    meal: Meal,
) -> Result<CmdResult> {
    let position = index.resolve(list)?;
    let previous = list.replace(position, meal.clone())?;

    let mut result = CmdResult::default();
    let (old_name, new_name) = (previous.name(), meal.name());
    let message = if old_name == new_name {
        format!("Meal updated ({}): {}", index, new_name)
    } else {
        format!("Meal updated ({}): {} -> {}", index, old_name, new_name)
    };
    result.add_message(CmdMessage::success(message));
    persist_into(store, list, &mut result);
    Ok(result.with_affected_meals(vec![meal]))
}

/// Applies `update` to the meal at `index` and saves the replacement.
pub fn update<S: DataStore>(
    store: &mut S,
    list: &mut MealList,
    index: DisplayIndex,
    update: MealUpdate,
) -> Result<CmdResult> {
    let position = index.resolve(list)?;
    if update.is_empty() {
        let mut result = CmdResult::default();
        let message = format!("Nothing to change for meal {}", index);
        result.add_message(CmdMessage::info(message));
        return Ok(result);
    }
    let len = list.count();
    let current = list
        .get(position)
        .ok_or(MealsError::PositionOutOfRange { position, len })?;
    let replacement = update.apply(current)?;
    run(store, list, index, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::new(n).unwrap()
    }

    #[test]
    fn replaces_only_the_target() {
        let mut fixture = StoreFixture::new().with_meal("A", 1).with_meal("B", 2);
        let mut list = MealList::from(fixture.store.load().unwrap());
        let c = Meal::new("C", None, 5).unwrap();

        let result = run(&mut fixture.store, &mut list, idx(1), c.clone()).unwrap();

        assert_eq!(result.saved, Some(true));
        assert_eq!(list.count(), 2);
        assert_eq!(list.get(0), Some(&c));
        assert_eq!(list.get(1).unwrap().name(), "B");
        assert_eq!(fixture.store.load().unwrap()[0], c);
    }

    #[test]
    fn bad_index_changes_nothing() {
        let mut fixture = StoreFixture::new().with_meal("A", 1);
        let mut list = MealList::from(fixture.store.load().unwrap());
        let c = Meal::new("C", None, 5).unwrap();

        let err = run(&mut fixture.store, &mut list, idx(2), c).unwrap_err();
        assert!(matches!(err, MealsError::Api(_)));
        assert_eq!(list.get(0).unwrap().name(), "A");
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn update_keeps_unset_fields() {
        let mut fixture = StoreFixture::new().with_photo_meal("Soup", 3);
        let mut list = MealList::from(fixture.store.load().unwrap());

        let change = MealUpdate {
            rating: Some(4),
            ..Default::default()
        };
        update(&mut fixture.store, &mut list, idx(1), change).unwrap();

        let meal = list.get(0).unwrap();
        assert_eq!(meal.name(), "Soup");
        assert_eq!(meal.rating(), 4);
        assert!(meal.has_photo());
    }

    #[test]
    fn update_can_remove_photo() {
        let mut fixture = StoreFixture::new().with_photo_meal("Soup", 3);
        let mut list = MealList::from(fixture.store.load().unwrap());

        let change = MealUpdate {
            photo: PhotoChange::Remove,
            ..Default::default()
        };
        update(&mut fixture.store, &mut list, idx(1), change).unwrap();
        assert!(!list.get(0).unwrap().has_photo());
    }

    #[test]
    fn invalid_update_is_rejected_before_saving() {
        let mut fixture = StoreFixture::new().with_meal("Soup", 3);
        let mut list = MealList::from(fixture.store.load().unwrap());

        let change = MealUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        let err = update(&mut fixture.store, &mut list, idx(1), change).unwrap_err();

        assert!(matches!(
            err,
            MealsError::Validation(ValidationError::EmptyName)
        ));
        assert_eq!(list.get(0).unwrap().name(), "Soup");
        assert_eq!(fixture.store.save_count(), 0);
    }

    #[test]
    fn empty_update_does_not_save() {
        let mut fixture = StoreFixture::new().with_meal("Soup", 3);
        let mut list = MealList::from(fixture.store.load().unwrap());

        let change = MealUpdate::default();
        let result = update(&mut fixture.store, &mut list, idx(1), change).unwrap();
        assert_eq!(result.saved, None);
        assert_eq!(fixture.store.save_count(), 0);
    }
}
