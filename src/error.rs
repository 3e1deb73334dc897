use std::fmt;

/// Result type for lossviz operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// Main error type for the lossviz library
#[derive(Debug, Clone)]
pub enum PlotError {
    /// Invalid dimensions for operations
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Drawing backend failure
    Render(String),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            PlotError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            PlotError::Render(msg) => write!(f, "Render error: {}", msg),
            PlotError::IoError(msg) => write!(f, "IO error: {}", msg),
            PlotError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {}

// Conversion from std::io::Error
impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        PlotError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl PlotError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        PlotError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        PlotError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
