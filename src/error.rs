//! Error types and handling for `packgen`

use thiserror::Error;

/// Main error type for the packing dataset generator
#[derive(Error, Debug)]
pub enum PackGenError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Destination catalog could not be read or is incomplete
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Trip parameters outside their domain
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Record serialization errors
    #[error("Output error: {message}")]
    Output { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PackGenError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PackGenError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PackGenError::Catalog { message } => {
                format!("Destination catalog is unusable: {message}")
            }
            PackGenError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PackGenError::Output { .. } => {
                "Writing the dataset failed. Please check the output path.".to_string()
            }
            PackGenError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<csv::Error> for PackGenError {
    fn from(err: csv::Error) -> Self {
        PackGenError::output(err.to_string())
    }
}
