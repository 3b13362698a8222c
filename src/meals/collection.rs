//! The in-memory, ordered list of meals for the current session.
//!
//! Positions are zero-based and the order is exactly the order the user sees:
//! no sorting, no filtering, duplicates allowed. Every position-taking method
//! checks its bounds and returns [`MealsError::PositionOutOfRange`] instead of
//! panicking; the API layer resolves user indexes before calling in, so that
//! error only shows up when a caller gets the contract wrong.

use crate::error::{MealsError, Result};
use crate::model::{Meal, Photo};

const SAMPLE_PHOTOS: [&[u8]; 3] = [
    include_bytes!("../../assets/meal1.png"),
    include_bytes!("../../assets/meal2.png"),
    include_bytes!("../../assets/meal3.png"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealList {
    meals: Vec<Meal>,
}

impl MealList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in examples used when there is nothing saved yet.
    pub fn seeded() -> Self {
        let samples = [
            ("Caprese Salad", 4),
            ("Chicken and Potatoes", 5),
            ("Pasta with Meatballs", 3),
        ];

        let meals = samples
            .iter()
            .zip(SAMPLE_PHOTOS)
            .filter_map(|((name, rating), bytes)| {
                let photo = Photo::from_bytes(bytes);
                Meal::new(*name, Some(photo), *rating).ok()
            })
            .collect();

        Self { meals }
    }

    /// Adds a meal at the end and returns its position.
    pub fn append(&mut self, meal: Meal) -> usize {
        let position = self.meals.len();
        self.meals.push(meal);
        position
    }

    /// Puts `meal` at `position`, handing back the meal it replaced.
    pub fn replace(&mut self, position: usize, meal: Meal) -> Result<Meal> {
        self.check(position)?;
        Ok(std::mem::replace(&mut self.meals[position], meal))
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Meal> {
        self.check(position)?;
        Ok(self.meals.remove(position))
    }

    /// Moves the meal at `from` so that it ends up at `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        if from != to {
            let meal = self.meals.remove(from);
            self.meals.insert(to, meal);
        }
        Ok(())
    }

    pub fn get(&self, position: usize) -> Option<&Meal> {
        self.meals.get(position)
    }

    pub fn count(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meal> {
        self.meals.iter()
    }

    pub fn as_slice(&self) -> &[Meal] {
        &self.meals
    }

    fn check(&self, position: usize) -> Result<()> {
        if position >= self.meals.len() {
            return Err(MealsError::PositionOutOfRange {
                position,
                len: self.meals.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Meal>> for MealList {
    fn from(meals: Vec<Meal>) -> Self {
        Self { meals }
    }
}

impl<'a> IntoIterator for &'a MealList {
    type Item = &'a Meal;
    type IntoIter = std::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhotoFormat;

    fn meal(name: &str) -> Meal {
        Meal::new(name, None, 3).unwrap()
    }

    fn two_meals() -> MealList {
        let mut list = MealList::new();
        list.append(meal("A"));
        list.append(meal("B"));
        list
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut list = MealList::new();
        assert_eq!(list.append(meal("A")), 0);
        assert_eq!(list.append(meal("B")), 1);

        assert_eq!(list.count(), 2);
        assert_eq!(list.get(0).unwrap().name(), "A");
        assert_eq!(list.get(1).unwrap().name(), "B");
    }

    #[test]
    fn replace_overwrites_in_place() {
        let mut list = two_meals();
        let old = list.replace(0, meal("C")).unwrap();

        assert_eq!(old.name(), "A");
        assert_eq!(list.count(), 2);
        assert_eq!(list.get(0).unwrap().name(), "C");
        assert_eq!(list.get(1).unwrap().name(), "B");
    }

    #[test]
    fn remove_shifts_later_meals_down() {
        let mut list = two_meals();
        let removed = list.remove_at(0).unwrap();

        assert_eq!(removed.name(), "A");
        assert_eq!(list.count(), 1);
        assert_eq!(list.get(0).unwrap().name(), "B");
    }

    #[test]
    fn out_of_range_positions_are_errors() {
        let mut list = two_meals();
        assert!(matches!(
            list.replace(2, meal("X")),
            Err(MealsError::PositionOutOfRange { position: 2, len: 2 })
        ));
        assert!(matches!(
            list.remove_at(5),
            Err(MealsError::PositionOutOfRange { position: 5, len: 2 })
        ));
        assert!(list.move_item(0, 2).is_err());
        assert_eq!(list, two_meals());
    }

    #[test]
    fn move_item_reorders() {
        let mut list = two_meals();
        list.append(meal("C"));

        list.move_item(0, 2).unwrap();
        let names: Vec<_> = list.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["B", "C", "A"]);

        list.move_item(2, 0).unwrap();
        let names: Vec<_> = list.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut list = MealList::new();
        list.append(meal("A"));
        list.append(meal("A"));
        assert_eq!(list.count(), 2);
    }

    #[test]
    fn seeded_has_sample_meals_with_photos() {
        let list = MealList::seeded();
        let summary: Vec<_> = list.iter().map(|m| (m.name(), m.rating())).collect();
        assert_eq!(
            summary,
            [
                ("Caprese Salad", 4),
                ("Chicken and Potatoes", 5),
                ("Pasta with Meatballs", 3),
            ]
        );
        let all_png = list
            .iter()
            .all(|m| m.photo().map(|p| p.format()) == Some(PhotoFormat::Png));
        assert!(all_png);
    }
}
