/// Centralized error types for the market clock
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    // Timezone Errors
    #[error("Timezone unavailable: {0}")]
    TimezoneUnavailable(String),

    // Calendar Errors
    #[error("Next-open search exhausted: {0}")]
    NextOpenExhausted(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    // Generic Errors
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;

impl ClockError {
    /// Check if error requires immediate abort (engine cannot run without it)
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClockError::TimezoneUnavailable(_))
    }

    /// Check if error marks an internal invariant violation rather than bad input
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, ClockError::NextOpenExhausted(_))
    }

    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            ClockError::TimezoneUnavailable(_) => "TZ_001",
            ClockError::NextOpenExhausted(_) => "CAL_001",
            ClockError::ConfigError(_) => "CFG_001",
            ClockError::InvalidParameter(_) => "CFG_002",
            ClockError::FileError(_) => "FILE_001",
            ClockError::Other(_) => "GEN_001",
        }
    }
}
