use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid calories: {0} (must be a finite, non-negative number)")]
    InvalidCalories(f64),

    #[error("Invalid daily limit: {0} (must be a finite, non-negative number)")]
    InvalidLimit(f64),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl TrackerError {
    /// Errors caused by bad user input rather than by the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            TrackerError::Validation(_)
                | TrackerError::InvalidCalories(_)
                | TrackerError::InvalidLimit(_)
                | TrackerError::UnknownCommand(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
