//! Simulation runner.

use crate::error::SimResult;
use crate::result::SimulationResult;
use ct_core::{Real, ensure_finite, ensure_not_nan};
use ct_model::{CtParams, SimSettings, TransformerFactory, Waveforms};
use tracing::{debug, info};

/// Run one complete CT saturation study.
///
/// Straight-line synchronous pipeline: resolve the time step once up front,
/// obtain a model from the factory, then saturation voltage → waveforms →
/// required voltages → saturation flags → saturation time. Pure function of
/// its inputs; on any error the partial computation is discarded.
pub fn run_simulation(
    ct_params: &CtParams,
    settings: &SimSettings,
    ct_type: &str,
) -> SimResult<SimulationResult> {
    ct_params.validate()?;
    settings.validate()?;

    // Resolve dt before anything else so the returned settings carry the
    // value every later stage used.
    let settings = settings.resolve_dt();
    debug!(ct_type, dt = settings.resolved_dt(), "starting run");

    let mut model = TransformerFactory::create(ct_type, ct_params.clone())?;

    let v_sat = ensure_finite(model.saturation_voltage(), "v_sat")?;
    let waveforms = model.simulate_waveforms(&settings)?;
    let (v_req_perm, v_req_trans) = model.required_voltages(&settings)?;
    let v_req_perm = ensure_finite(v_req_perm, "v_req_perm")?;
    let v_req_trans = ensure_finite(v_req_trans, "v_req_trans")?;

    // Strict inequality: equality counts as not saturated.
    let saturated_perm = v_sat < v_req_perm;
    let saturated_trans = v_sat < v_req_trans;

    // The flags above come from cycle-RMS estimates while the saturation
    // time scans the instantaneous series; near the margin the two criteria
    // can disagree, and +inf is the answer when no sample actually crosses.
    let t_sat = if saturated_trans {
        saturation_time(&waveforms, v_sat)
    } else {
        Real::INFINITY
    };
    let t_sat = ensure_not_nan(t_sat, "t_sat")?;

    info!(
        v_sat,
        v_req_perm, v_req_trans, t_sat, saturated_perm, saturated_trans, "run complete"
    );

    Ok(SimulationResult {
        ct_params: ct_params.clone(),
        settings,
        waveforms,
        v_sat,
        v_req_perm,
        v_req_trans,
        t_sat,
        saturated_perm,
        saturated_trans,
    })
}

/// Timestamp of the first sample whose instantaneous required voltage
/// strictly exceeds `v_sat`, scanning in time order; `+inf` when no sample
/// crosses.
pub fn saturation_time(waveforms: &Waveforms, v_sat: Real) -> Real {
    waveforms
        .v_req_instant
        .iter()
        .position(|&v| v > v_sat)
        .map(|k| waveforms.t[k])
        .unwrap_or(Real::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_time_below_threshold_is_infinite() {
        let waveforms = Waveforms {
            t: vec![0.0, 0.1, 0.2],
            i_ideal: vec![0.0; 3],
            i_real: vec![0.0; 3],
            i_excitation: vec![0.0; 3],
            flux: vec![0.0; 3],
            v_req_instant: vec![1.0, 2.0, 1.5],
        };
        assert_eq!(saturation_time(&waveforms, 2.0), Real::INFINITY);
    }

    #[test]
    fn saturation_time_picks_first_crossing() {
        let waveforms = Waveforms {
            t: vec![0.0, 0.1, 0.2, 0.3],
            i_ideal: vec![0.0; 4],
            i_real: vec![0.0; 4],
            i_excitation: vec![0.0; 4],
            flux: vec![0.0; 4],
            v_req_instant: vec![1.0, 2.5, 2.6, 2.4],
        };
        assert_eq!(saturation_time(&waveforms, 2.0), 0.1);
    }
}
