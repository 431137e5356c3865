//! Core error types for greenpantry-core.
//!
//! This module defines the error hierarchy using thiserror. Generation
//! errors are split in two layers: [`BackendError`] carries the real cause
//! of a failed call and is only ever logged, while [`GenerationFailure`] is
//! the single opaque error the generator hands back to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Static message carried by [`GenerationFailure`].
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate recipes. Please try again.";

/// Core error type for greenpantry-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Recipe generation failed
    #[error(transparent)]
    Generation(#[from] GenerationFailure),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential storage errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The one error a generation attempt can surface.
///
/// Network errors, HTTP errors, malformed payloads, schema mismatches and
/// timeouts all collapse into this value. The underlying cause is logged
/// by the generator and intentionally not attached here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", GENERATION_FAILED_MESSAGE)]
pub struct GenerationFailure;

/// Cause of a failed call to a generation backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error status or error body
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The call did not settle in time
    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not determine or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    /// No API key found in the environment or the keyring
    #[error("No Gemini API key configured. Set GEMINI_API_KEY or run `greenpantry auth set-key <KEY>`")]
    MissingApiKey,
}

/// Credential storage errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    /// The OS keyring rejected the operation
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Refused to store an empty credential
    #[error("Refusing to store an empty {0}")]
    Empty(&'static str),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
