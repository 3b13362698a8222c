use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::Meal;
use crate::store::DataStore;

use super::helpers::persist_into;

pub fn run<S: DataStore>(store: &mut S, list: &mut MealList, meal: Meal) -> Result<CmdResult> {
    let position = list.append(meal.clone());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Meal added ({}): {}",
        DisplayIndex::from_position(position),
        meal.name()
    )));
    persist_into(store, list, &mut result);
    Ok(result.with_affected_meals(vec![meal]))
}
