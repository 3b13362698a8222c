use crate::collection::MealList;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MealsError, Result};
use crate::index::DisplayIndex;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the photo of the meal at `index` to `output`.
///
/// When `output` is an existing directory the file is named after the meal
/// position with an extension matching the image format.
pub fn export(list: &MealList, index: DisplayIndex, output: &Path) -> Result<CmdResult> {
    let position = index.resolve(list)?;
    let meal = list.get(position).ok_or(MealsError::PositionOutOfRange {
        position,
        len: list.count(),
    })?;
    let photo = meal
        .photo()
        .ok_or_else(|| MealsError::Api(format!("Meal {} has no photo", index)))?;

    let target: PathBuf = if output.is_dir() {
        output.join(format!("meal-{}.{}", index, photo.format().extension()))
    } else {
        output.to_path_buf()
    };
    fs::write(&target, photo.as_bytes()).map_err(MealsError::Io)?;

    let mut result = CmdResult::default().with_paths(vec![target.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Photo of {} written to {}",
        meal.name(),
        target.display()
    )));
    Ok(result)
}
