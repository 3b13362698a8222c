use crate::collection::MealList;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_meals;

pub fn run(list: &MealList) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_meals(index_meals(list)))
}
