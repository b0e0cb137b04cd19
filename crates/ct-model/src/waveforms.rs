//! Time-domain signals produced by one simulation run.

use ct_core::Real;
use serde::{Deserialize, Serialize};

/// Equal-length ordered time series, immutable once produced.
///
/// Sample 0 always has zero flux and zero excitation current: the core
/// starts cold, with no remanence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waveforms {
    /// Time grid [s].
    pub t: Vec<Real>,
    /// Ideal (unsaturated) secondary current [A].
    pub i_ideal: Vec<Real>,
    /// Real secondary current [A].
    pub i_real: Vec<Real>,
    /// Excitation (magnetization) current [A].
    pub i_excitation: Vec<Real>,
    /// Core flux linkage [Wb-turns].
    pub flux: Vec<Real>,
    /// Instantaneous required voltage [V], ohmic approximation.
    pub v_req_instant: Vec<Real>,
}

impl Waveforms {
    /// Number of samples (identical across all six series).
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
