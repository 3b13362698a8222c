use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;
use tracing::info;

/// Builds the session's list: saved meals if there are any, otherwise the
/// sample meals (or nothing, when `seed` is off).
///
/// Seed data is not saved here; it becomes persistent with the first change.
pub fn run<S: DataStore>(store: &S, seed: bool) -> (MealList, CmdResult) {
    let mut result = CmdResult::default();

    let list = match store.load() {
        Some(meals) => MealList::from(meals),
        None if seed => {
            info!("no saved meals, starting with samples");
            result.add_message(CmdMessage::info("No saved meals yet; showing samples"));
            MealList::seeded()
        }
        None => MealList::new(),
    };

    (list, result)
}
