use thiserror::Error;
use validator::ValidationErrors;
use wellness_guide_data::repository::RepositoryError;

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Validation(msg) => ServiceError::ValidationError(msg),
            _ => ServiceError::RepositoryError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::SerializationError(err.to_string())
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");

        ServiceError::ValidationError(message)
    }
}
