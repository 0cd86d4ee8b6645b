//! Shared error types for the application

use thiserror::Error;

/// Main error type for estatemap operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before any calculation ran
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A derived denominator reached zero
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Simulation errors
    #[error("Simulation error: {0}")]
    Simulation(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a division-by-zero error naming the denominator
    pub fn division_by_zero(denominator: impl Into<String>) -> Self {
        Self::DivisionByZero(denominator.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
