//! Error types for transformer model operations.

use thiserror::Error;

/// Errors raised by transformer models and the factory.
///
/// All variants are unrecoverable at the point of detection: the caller
/// reports the condition and discards the run. No partial result is produced.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Unsupported CT type: {ct_type:?}")]
    UnsupportedType { ct_type: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Insufficient data: {what}")]
    InsufficientData { what: String },

    #[error("Invalid state: {what}")]
    InvalidState { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;
