use thiserror::Error;

/// Why a [`Meal`](crate::model::Meal) could not be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Meal name cannot be empty")]
    EmptyName,

    #[error("Rating cannot be negative (got {0})")]
    NegativeRating(i32),
}

#[derive(Error, Debug)]
pub enum MealsError {
    #[error("Invalid meal: {0}")]
    Validation(#[from] ValidationError),

    #[error("Position {position} is out of range for a list of {len} meals")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MealsError>;
