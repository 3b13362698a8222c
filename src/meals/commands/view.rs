use crate::collection::MealList;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;

use super::helpers::meals_by_indexes;

pub fn run(list: &MealList, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let meals = meals_by_indexes(list, indexes)?;
    Ok(CmdResult::default().with_listed_meals(meals))
}
