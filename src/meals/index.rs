//! # Display Indexes
//!
//! Users refer to meals by their 1-based place in the list as printed
//! (`1`, `2`, ...). Internally the collection is addressed by 0-based
//! positions. [`DisplayIndex`] is the only place that conversion happens, and
//! [`DisplayIndex::resolve`] is where a user's index is checked against the
//! current list length, so out-of-range input becomes a readable error
//! instead of reaching the collection.

use crate::collection::MealList;
use crate::error::{MealsError, Result};
use crate::model::Meal;

/// A user-facing, 1-based index into the meal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Returns `None` for zero, which is never a valid display index.
    pub fn new(n: usize) -> Option<Self> {
        (n > 0).then_some(Self(n))
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Maps to a position in `list`, or fails if the list is too short.
    pub fn resolve(&self, list: &MealList) -> Result<usize> {
        if self.0 > list.count() {
            return Err(MealsError::Api(format!(
                "Meal {} not found ({} meals in the list)",
                self,
                list.count()
            )));
        }
        Ok(self.position())
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayIndex::new)
            .ok_or_else(|| format!("Invalid index: '{}' (indexes start at 1)", s))
    }
}

/// A meal paired with the index it is shown under.
#[derive(Debug, Clone)]
pub struct DisplayMeal {
    pub index: DisplayIndex,
    pub meal: Meal,
}

/// Pairs every meal in `list` with its display index, in list order.
pub fn index_meals(list: &MealList) -> Vec<DisplayMeal> {
    list.iter()
        .enumerate()
        .map(|(position, meal)| DisplayMeal {
            index: DisplayIndex::from_position(position),
            meal: meal.clone(),
        })
        .collect()
}
