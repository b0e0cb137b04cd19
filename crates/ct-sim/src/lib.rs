//! Simulation orchestrator for the CT saturation engine.
//!
//! One `run_simulation` call performs one bounded, deterministic batch
//! computation: saturation voltage → waveforms → required voltages →
//! saturation time, assembled into a single `SimulationResult`.

pub mod error;
pub mod result;
pub mod sim;

pub use error::{SimError, SimResult};
pub use result::SimulationResult;
pub use sim::{run_simulation, saturation_time};
