use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayMeal};
use crate::store::DataStore;
use tracing::warn;

/// Saves the whole list and reports whether it worked.
///
/// A failed save is never an error for the caller: the list stays as it is in
/// memory and the failure is logged. There is no retry.
pub fn persist<S: DataStore>(store: &mut S, list: &MealList) -> bool {
    match store.save(list.as_slice()) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, count = list.count(), "failed to save meals");
            false
        }
    }
}

/// Runs [`persist`] and records the outcome on `result`.
pub fn persist_into<S: DataStore>(store: &mut S, list: &MealList, result: &mut CmdResult) {
    let saved = persist(store, list);
    if !saved {
        result.add_message(CmdMessage::warning(
            "Failed to save meals; changes are kept for this session only",
        ));
    }
    result.saved = Some(saved);
}

/// Resolves every index up front so a bad one fails before anything changes.
pub fn resolve_indexes(list: &MealList, indexes: &[DisplayIndex]) -> Result<Vec<usize>> {
    indexes.iter().map(|idx| idx.resolve(list)).collect()
}

pub fn meals_by_indexes(list: &MealList, indexes: &[DisplayIndex]) -> Result<Vec<DisplayMeal>> {
    let positions = resolve_indexes(list, indexes)?;
    Ok(positions
        .into_iter()
        .filter_map(|position| {
            list.get(position).map(|meal| DisplayMeal {
                index: DisplayIndex::from_position(position),
                meal: meal.clone(),
            })
        })
        .collect())
}
