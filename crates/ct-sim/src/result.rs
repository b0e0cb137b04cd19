//! Aggregate result of one simulation run.

use ct_core::Real;
use ct_model::{CtParams, SimSettings, Waveforms};
use serde::{Deserialize, Serialize};

/// Everything one run produced, constructed once and never mutated.
///
/// Each result exclusively owns its waveforms; nothing is shared across
/// runs. `settings` carries the post-resolution time step, so consumers
/// always see the `dt` the integration actually used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub ct_params: CtParams,
    pub settings: SimSettings,
    pub waveforms: Waveforms,

    /// Saturation voltage [V].
    pub v_sat: Real,
    /// Steady-state required voltage [V] (final-cycle RMS).
    pub v_req_perm: Real,
    /// Transient required voltage [V] (worst-cycle RMS).
    pub v_req_trans: Real,

    /// Time to saturation [s]; `+inf` when the CT never saturates.
    pub t_sat: Real,
    pub saturated_perm: bool,
    pub saturated_trans: bool,
}
