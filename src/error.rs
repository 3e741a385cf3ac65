use thiserror::Error;

/// Errors produced while looking up candidates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The request was superseded by a newer one or the control was torn down
    #[error("Lookup cancelled")]
    Cancelled,

    /// No endpoint is configured
    #[error("Lookup not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The lookup service answered with a non-success status
    #[error("Lookup service error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The response body was not valid JSON
    #[error("Malformed response: {0}")]
    Parse(String),
}

impl LookupError {
    /// Cancellation is silent and never reported as a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LookupError::Cancelled)
    }
}

/// Errors produced while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
