use super::{DataStore, MealArchive};
use crate::error::{MealsError, Result};
use crate::model::Meal;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store that keeps its data in the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store for `file_name` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(MealsError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("meals");
        let tmp_name = format!(".{}-{}.tmp", name, Uuid::new_v4());
        self.path.with_file_name(tmp_name)
    }
}

impl DataStore for FileStore {
    fn save(&mut self, meals: &[Meal]) -> Result<()> {
        self.ensure_parent()?;

        let archive = MealArchive {
            meals: meals.to_vec(),
        };
        let content = serde_json::to_string_pretty(&archive)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(MealsError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(MealsError::Io(e));
        }

        debug!(path = %self.path.display(), count = meals.len(), "saved meals");
        Ok(())
    }

    fn load(&self) -> Option<Vec<Meal>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved meals");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read saved meals");
                return None;
            }
        };

        match serde_json::from_str::<MealArchive>(&content) {
            Ok(archive) => {
                debug!(path = %self.path.display(), count = archive.meals.len(), "loaded meals");
                Some(archive.meals)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "saved meals are not readable");
                None
            }
        }
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
