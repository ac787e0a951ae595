use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Image data is required")]
    MissingImage,

    #[error("No response from OpenAI")]
    EmptyModelResponse,

    #[error("Invalid response format from AI")]
    InvalidModelResponse,

    #[error("Incomplete analysis from AI")]
    IncompleteAnalysis,

    #[error("OpenAI API quota exceeded. Please check your billing.")]
    QuotaExceeded,

    #[error("{0}")]
    ExternalServiceError(String),

    #[error("Missing fields")]
    MissingFields,

    #[error("New password must be at least 6 characters")]
    PasswordTooShort,

    #[error("User exists")]
    UserExists,

    #[error("User not found")]
    UserNotFound,

    #[error("No password set for this account")]
    NoPasswordSet,

    #[error("Current password is incorrect")]
    InvalidPassword,

    #[error("Hash password error: {0}")]
    HashPasswordError(String),

    #[error("Database unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}
