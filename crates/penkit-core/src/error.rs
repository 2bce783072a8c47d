//! Error types for the Penkit core crate.
//!
//! This module provides structured error types for G-code processing and
//! parameter validation.

use std::io;
use thiserror::Error;

/// Errors that can occur while post-processing a G-code program.
#[derive(Error, Debug)]
pub enum PenToolError {
    /// Segmentation found no pen-down shapes in the input.
    #[error("No pen-down shapes (M03 ... G1 ... G0) found")]
    NoShapes,

    /// The config file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Errors related to pen-tool parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A required parameter is missing or empty.
    #[error("Missing required parameter: {0}")]
    Missing(String),

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for pen-tool operations.
pub type PenToolResult<T> = Result<T, PenToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
