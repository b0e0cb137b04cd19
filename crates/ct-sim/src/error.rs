//! Error types for simulation runs.

use thiserror::Error;

/// Errors surfaced by the orchestrator.
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Model(#[from] ct_model::ModelError),

    #[error(transparent)]
    Numeric(#[from] ct_core::CtError),
}

pub type SimResult<T> = Result<T, SimError>;
