//! Unified error types for ClaimLens

use thiserror::Error;

/// Unified error type for all ClaimLens operations
#[derive(Error, Debug)]
pub enum ClaimLensError {
    // Gateway errors
    #[error("Session creation failed with status {status}: {body}")]
    SessionCreation { status: u16, body: String },

    #[error("Run request failed with status {status}: {body}")]
    RunRequest { status: u16, body: String },

    #[error("Received an empty or invalid response from the agent")]
    EmptyResponse,

    #[error("Invalid analyze request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    // Analysis failures relayed back over the message channel
    #[error("Analysis failed: {0}")]
    Analysis(String),

    // Widget errors
    #[error("Widget error: {0}")]
    Widget(String),

    // Bridge errors
    #[error("Bridge channel error: {0}")]
    Bridge(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using ClaimLensError
pub type Result<T> = std::result::Result<T, ClaimLensError>;
