use thiserror::Error;

/// Custom error types for ghostpad
#[derive(Debug, Error)]
pub enum PadError {
    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
