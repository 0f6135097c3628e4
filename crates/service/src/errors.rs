use thiserror::Error;

/// Failures surfaced by the record store and its input parsing.
///
/// The display strings double as the user-facing messages of the HTTP API
/// and the interactive menu.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),
    #[error("Employee ID already exists")]
    DuplicateId,
    #[error("{0}")]
    NotFound(String),
    #[error("Error saving employee")]
    SaveFailed,
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Validation-class errors leave the store untouched and are the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::MissingField(_) | Self::InvalidField(_) | Self::DuplicateId
        )
    }
}
