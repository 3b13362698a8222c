use super::DataStore;
use crate::error::{MealsError, Result};
use crate::model::Meal;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Vec<Meal>>,
    fail_saves: bool,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `meals`, as if saved by an earlier run.
    pub fn with_saved(meals: Vec<Meal>) -> Self {
        Self {
            saved: Some(meals),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with an IO error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl DataStore for InMemoryStore {
    fn save(&mut self, meals: &[Meal]) -> Result<()> {
        if self.fail_saves {
            let err = std::io::Error::other("in-memory store is set to fail");
            return Err(MealsError::Io(err));
        }
        self.saved = Some(meals.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> Option<Vec<Meal>> {
        self.saved.clone()
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        assert_eq!(InMemoryStore::new().load(), None);
    }

    #[test]
    fn returns_what_was_saved() {
        let mut store = InMemoryStore::new();
        let meals = vec![Meal::new("Rice", None, 2).unwrap()];
        store.save(&meals).unwrap();
        assert_eq!(store.load(), Some(meals));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn failing_store_keeps_previous_data() {
        let meals = vec![Meal::new("Rice", None, 2).unwrap()];
        let mut store = InMemoryStore::with_saved(meals.clone()).failing_saves();

        assert!(store.save(&[]).is_err());
        assert_eq!(store.load(), Some(meals));
        assert_eq!(store.save_count(), 0);
    }
}
