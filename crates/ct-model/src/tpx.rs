//! TPX-class transformer physics.

use crate::error::{ModelError, ModelResult};
use crate::params::{CtParams, SimSettings};
use crate::transformer::Transformer;
use crate::waveforms::Waveforms;
use ct_core::Real;
use std::f64::consts::{PI, SQRT_2};
use tracing::debug;

/// TPX-type CT model.
///
/// The secondary fault current carries a decaying DC offset reflected
/// through the turns ratio; the core state is integrated with a
/// one-step-lagged explicit scheme (previous excitation current in the flux
/// update, new flux in the excitation law). The lag keeps the update stable
/// against the stiffness of large magnetization exponents at the cost of a
/// one-sample delay.
pub struct TpxTransformer {
    params: CtParams,
    cache: Option<(SimSettings, Waveforms)>,
}

impl TpxTransformer {
    pub fn new(params: CtParams) -> Self {
        Self {
            params,
            cache: None,
        }
    }

    /// Ideal (unsaturated) secondary current at time `t`:
    /// `(√2·ip/ratio)·(e^(−t/Tp) − cos(ωt))`.
    fn ideal_current(&self, t: Real, settings: &SimSettings) -> Real {
        let omega = 2.0 * PI * settings.frequency_hz;
        (SQRT_2 * settings.ip_fault / self.params.ct_ratio)
            * ((-t / settings.t_const_primary).exp() - (omega * t).cos())
    }

    /// One flux step: `λ + ratio·(i_ideal − i_exc_prev)/denom · dt` with the
    /// nonlinear damping `denom = 1 + s·a·|λ|^(s−1)`.
    ///
    /// At `s == 1` the exponent degenerates to `0^0`; the power term is
    /// pinned to 1 there so `denom = 1 + s·a`.
    fn update_flux(&self, flux_prev: Real, i_ideal_k: Real, i_exc_prev: Real, dt: Real) -> Real {
        let s = self.params.s;
        let a = self.params.a;
        let pow = if s == 1.0 {
            1.0
        } else {
            flux_prev.abs().powf(s - 1.0)
        };
        let denom = 1.0 + s * a * pow;
        let d_flux = self.params.ct_ratio * (i_ideal_k - i_exc_prev) / denom * dt;
        flux_prev + d_flux
    }

    /// Static magnetization law `i_e(λ) = a·|λ|^s·sign(λ)`, odd extension.
    fn excitation_current(&self, flux: Real) -> Real {
        if flux == 0.0 {
            return 0.0;
        }
        self.params.a * flux.abs().powf(self.params.s) * flux.signum()
    }
}

impl Transformer for TpxTransformer {
    fn params(&self) -> &CtParams {
        &self.params
    }

    fn saturation_voltage(&self) -> Real {
        if let Some(v_sat) = self.params.v_sat {
            return v_sat;
        }
        let p = &self.params;
        p.k_h * p.k_ssc * p.k_td * (p.r_ct + p.r_b) * p.i_sn
    }

    fn simulate_waveforms(&mut self, settings: &SimSettings) -> ModelResult<Waveforms> {
        let dt = settings.resolved_dt();
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ModelError::InvalidConfiguration {
                what: format!("resolved dt = {dt} s is not a positive time step"),
            });
        }

        let total_time = settings.total_time();
        let n_samples = (total_time / dt).ceil() as usize;
        debug!(n_samples, dt, total_time, "simulating TPX waveforms");

        // Uniform grid with the endpoint excluded: the last sample stays
        // strictly before total_time.
        let t: Vec<Real> = (0..n_samples)
            .map(|k| k as Real * total_time / n_samples as Real)
            .collect();
        let i_ideal: Vec<Real> = t
            .iter()
            .map(|&tk| self.ideal_current(tk, settings))
            .collect();

        // Cold-start core: sample 0 keeps zero flux and zero excitation.
        let mut flux = vec![0.0; n_samples];
        let mut i_excitation = vec![0.0; n_samples];
        let mut i_real = vec![0.0; n_samples];

        for k in 1..n_samples {
            let flux_k = self.update_flux(flux[k - 1], i_ideal[k], i_excitation[k - 1], dt);
            let i_exc_k = self.excitation_current(flux_k);

            flux[k] = flux_k;
            i_excitation[k] = i_exc_k;
            i_real[k] = i_ideal[k] - i_exc_k;
        }

        // Ohmic approximation of the voltage needed to sustain the real
        // current, not a full burden impedance model.
        let r_total = self.params.r_total();
        let v_req_instant = i_real.iter().map(|i| r_total * i.abs()).collect();

        let waveforms = Waveforms {
            t,
            i_ideal,
            i_real,
            i_excitation,
            flux,
            v_req_instant,
        };
        self.cache = Some((settings.clone(), waveforms.clone()));
        Ok(waveforms)
    }

    fn cached_waveforms(&self, settings: &SimSettings) -> Option<&Waveforms> {
        self.cache
            .as_ref()
            .filter(|(s, _)| s == settings)
            .map(|(_, w)| w)
    }
}
