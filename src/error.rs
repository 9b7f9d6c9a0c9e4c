use thiserror::Error;

/// Errors raised while talking to the remote recipe service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport failure, timeout or non-success status
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors that can occur during a search.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Query was empty after trimming; no request was issued
    #[error("Please enter a search term.")]
    EmptyQuery,

    #[error("Failed to fetch recipes.")]
    Network(#[source] ServiceError),
}

/// Errors that can occur while loading a single meal
#[derive(Error, Debug)]
pub enum DetailError {
    /// The lookup returned no meal for this id
    #[error("Failed to load details.")]
    NotFound(String),

    #[error("Failed to load details.")]
    Network(#[source] ServiceError),
}

/// Errors raised when writing the favorites list
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level errors for building and running the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
