//! Error types for tabspec
//!
//! The inference pipeline itself is total and never fails. Errors only arise
//! at the edges: decoding input documents, loading option files, serving HTTP
//! requests and writing output.

use thiserror::Error;

/// The main error type for tabspec
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // ============================================================================
    // Request / Input Errors
    // ============================================================================
    /// Required input absent or unusable
    #[error("{message}")]
    Validation { message: String },

    /// Input document could not be decoded in its format
    #[error("Failed to decode input: {message}")]
    Decode { message: String },

    /// JSON (de)serialization failure
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML (de)serialization failure
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid options or server settings
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Pipeline / Server Errors
    // ============================================================================
    /// Unexpected failure while generating or serving
    #[error("{message}")]
    Internal { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input or options file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a validation error (required input absent or unusable)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to at the transport boundary
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation { .. } | Error::Decode { .. } | Error::JsonParse(_) => 400,
            _ => 500,
        }
    }

    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for tabspec
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::internal(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::internal(format!("{}: {}", f(), inner))
        })
    }
}
