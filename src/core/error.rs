//! Error types for log formatting

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The sink rejected or failed a write
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field value has no JSON representation
    #[error("Failed to serialize field '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl FormatError {
    /// Classify a `serde_json` failure for the field `key`.
    ///
    /// Failures raised by the underlying writer are sink errors, not
    /// serialization errors.
    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        if source.is_io() {
            FormatError::Io(source.into())
        } else {
            FormatError::Serialization {
                key: key.into(),
                source,
            }
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        FormatError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, FormatError::Io(_))
    }
}
