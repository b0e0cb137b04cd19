//! ct-model: current-transformer parameter model, transformer physics, and
//! the CT-type factory.
//!
//! Provides:
//! - `CtParams` / `SimSettings` immutable value types with range validation
//! - `Transformer` trait (saturation voltage, waveform synthesis, required
//!   voltages) with the shared sliding-RMS derivation as a provided method
//! - `TpxTransformer`: nonlinear flux/excitation recurrence for TPX-class CTs
//! - `TransformerFactory`: CT type name → model instance

pub mod error;
pub mod factory;
pub mod params;
pub mod tpx;
pub mod transformer;
pub mod waveforms;

// Re-exports for public API
pub use error::{ModelError, ModelResult};
pub use factory::TransformerFactory;
pub use params::{CtParams, DEFAULT_SAMPLES_PER_CYCLE, SimSettings};
pub use tpx::TpxTransformer;
pub use transformer::Transformer;
pub use waveforms::Waveforms;
