//! Error types for Little List-O-Maker

use thiserror::Error;

/// Main error type for to-do list operations
#[derive(Error, Debug)]
pub enum TodoError {
    /// Registration attempted with a username that already exists
    #[error("Username is taken: {0}")]
    UsernameTaken(String),

    /// No user with the given username
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Item does not exist or is not linked to the requesting user
    #[error("Invalid ID")]
    InvalidId(i64),

    /// Item ID input was not a number
    #[error("Invalid ID")]
    InvalidIdInput(String),

    /// The user has no items to operate on
    #[error("No items found for this user")]
    NoItems,

    /// Username was empty
    #[error("Username cannot be empty")]
    EmptyUsername,

    /// Item name was empty
    #[error("Item name cannot be empty")]
    EmptyItemName,

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Password hashing or verification failed
    #[error("Hash error: {0}")]
    HashError(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Console prompt failed
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for TodoError {
    fn from(err: rusqlite::Error) -> Self {
        TodoError::DatabaseError(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for TodoError {
    fn from(err: bcrypt::BcryptError) -> Self {
        TodoError::HashError(err.to_string())
    }
}

impl From<toml::de::Error> for TodoError {
    fn from(err: toml::de::Error) -> Self {
        TodoError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for TodoError {
    fn from(err: dialoguer::Error) -> Self {
        TodoError::PromptError(err.to_string())
    }
}

/// Result type alias for to-do list operations
pub type Result<T> = std::result::Result<T, TodoError>;
