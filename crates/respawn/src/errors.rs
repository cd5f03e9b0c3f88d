//! Shared error types for the respawn crates.

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a post draft is refused before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("All fields are required")]
    MissingFields,
}

/// Why a post submission did not produce a post.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error("Failed to create post: {0}")]
    Api(#[from] crate::api::ApiError),
}

impl SubmitError {
    /// The inline message shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::Api(_) => "Failed to create post. Please try again.".to_string(),
        }
    }
}
