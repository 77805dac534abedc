use std::io;

/// Errors that can occur while extracting plugin goal descriptors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid property for parameter '{parameter}', forbidden characters '${{}}': {property}")]
    InvalidParameter { parameter: String, property: String },

    #[error("Duplicate parameter '{parameter}' in goal '{goal}'")]
    DuplicateParameter { goal: String, parameter: String },

    #[error("Extraction failed: {message}")]
    Extraction {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Documentation backend '{backend}' failed: {message}")]
    Backend { backend: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a collaborator failure as a generic extraction failure
    pub fn extraction<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Extraction {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for mojodoc operations
pub type Result<T> = std::result::Result<T, Error>;
