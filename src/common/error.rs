//! Error types for reeds_shepp_motion

use std::fmt;

/// Main error type for motion plan evaluation and sampling
#[derive(Debug)]
pub enum MotionError {
    /// Invalid parameter (negative length, bad turn radius, bad weights)
    InvalidParameter(String),
    /// Numerical computation produced a non-finite value
    NumericalError(String),
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            MotionError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
            MotionError::IoError(e) => write!(f, "I/O error: {}", e),
            MotionError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MotionError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MotionError {
    fn from(e: std::io::Error) -> Self {
        MotionError::IoError(e)
    }
}

/// Result type alias for motion plan operations
pub type MotionResult<T> = Result<T, MotionError>;
