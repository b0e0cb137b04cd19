//! ct-core: stable foundation for the CT saturation simulator.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CtError, CtResult};
pub use numeric::*;
