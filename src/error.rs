//! Error types for the widget engine

use thiserror::Error;

/// Result type alias for widget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the widget engine
#[derive(Error, Debug)]
pub enum Error {
    /// A selector string failed to parse
    #[error("Invalid selector '{0}': {1}")]
    SelectorError(String, String),

    /// No element in the page matched the selector
    #[error("No element matches selector: {0}")]
    ElementNotFound(String),

    /// Neither a sibling container nor the fallback target exists
    #[error("No render container available for {0}")]
    ContainerNotFound(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to load a document
    #[error("Failed to load document: {0}")]
    LoadError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
