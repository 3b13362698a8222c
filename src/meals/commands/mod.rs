use crate::config::MealsConfig;
use crate::index::DisplayMeal;
use crate::model::Meal;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod list;
pub mod load;
pub mod move_meal;
pub mod photo;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_meals: Vec<Meal>,
    pub listed_meals: Vec<DisplayMeal>,
    pub paths: Vec<PathBuf>,
    pub config: Option<MealsConfig>,
    /// Outcome of the save that followed a mutation; `None` when nothing was saved.
    pub saved: Option<bool>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_meals(mut self, meals: Vec<Meal>) -> Self {
        self.affected_meals = meals;
        self
    }

    pub fn with_listed_meals(mut self, meals: Vec<DisplayMeal>) -> Self {
        self.listed_meals = meals;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: MealsConfig) -> Self {
        self.config = Some(config);
        self
    }
}
