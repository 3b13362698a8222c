use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::persist_into;

/// Moves the meal at `from` to `to` and saves the new order.
pub fn run<S: DataStore>(
    store: &mut S,
    list: &mut MealList,
    from: DisplayIndex,
    to: DisplayIndex,
) -> Result<CmdResult> {
    let from_pos = from.resolve(list)?;
    let to_pos = to.resolve(list)?;

    let mut result = CmdResult::default();
    if from_pos == to_pos {
        result.add_message(CmdMessage::info(format!("Meal {} is already there", from)));
        return Ok(result);
    }

    list.move_item(from_pos, to_pos)?;
    let moved = list.get(to_pos).cloned();
    if let Some(meal) = &moved {
        result.add_message(CmdMessage::success(format!(
            "Meal moved ({} -> {}): {}",
            from,
            to,
            meal.name()
        )));
    }
    persist_into(store, list, &mut result);
    Ok(result.with_affected_meals(moved.into_iter().collect()))
}
