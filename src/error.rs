//! Error types for pagekeeper
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every failure a fetch can produce is folded into one of three kinds
//! (network, HTTP status, decode) at the fetcher boundary; nothing below
//! this taxonomy escapes to callers.

use thiserror::Error;

/// The main error type for pagekeeper
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Viewer Errors
    // ============================================================================
    #[error("Viewer loop stopped: {message}")]
    LoopStopped { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, reason: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            reason: reason.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a loop-stopped error
    pub fn loop_stopped(message: impl Into<String>) -> Self {
        Self::LoopStopped {
            message: message.into(),
        }
    }

    /// The user-facing description shown in place of the list while set
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // Body-level failures are decode problems; everything transport-side
        // (connect, timeout, no response) is a network failure. Status errors
        // never reach here: the fetcher checks the status before consuming
        // the body.
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

/// Result type alias for pagekeeper
pub type Result<T> = std::result::Result<T, Error>;
