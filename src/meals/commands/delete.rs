use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::{persist_into, resolve_indexes};

/// Removes the meals at `indexes` and saves once afterwards.
///
/// Indexes refer to the list as it was before the call; repeated indexes
/// remove a single meal.
pub fn run<S: DataStore>(
    store: &mut S,
    list: &mut MealList,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let mut positions = resolve_indexes(list, indexes)?;
    positions.sort_unstable();
    positions.dedup();

    let mut result = CmdResult::default();
    let mut removed = Vec::with_capacity(positions.len());

    // Highest first, so earlier positions are not shifted.
    for &position in positions.iter().rev() {
        let meal = list.remove_at(position)?;
        result.add_message(CmdMessage::success(format!(
            "Meal deleted ({}): {}",
            DisplayIndex::from_position(position),
            meal.name()
        )));
        removed.push(meal);
    }
    removed.reverse();
    result.messages.reverse();

    persist_into(store, list, &mut result);
    Ok(result.with_affected_meals(removed))
}
