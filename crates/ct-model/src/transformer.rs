//! Transformer trait: the capability set every CT class implements.

use crate::error::{ModelError, ModelResult};
use crate::params::{CtParams, SimSettings};
use crate::waveforms::Waveforms;
use ct_core::Real;

/// A CT-class-specific transformer model.
///
/// A model instance is scoped to one `CtParams` value and may cache the most
/// recent waveforms it produced, keyed by the settings they were computed
/// with. The cache exists to avoid recomputation within one run; it is per
/// instance and must not be shared across threads running different settings.
///
/// `required_voltages` is a provided method: the sliding-RMS derivation from
/// the real secondary current is shared across CT classes, while saturation
/// voltage and waveform synthesis are class-specific.
pub trait Transformer {
    /// Parameters this instance was built for.
    fn params(&self) -> &CtParams;

    /// Saturation voltage [V] of this CT.
    fn saturation_voltage(&self) -> Real;

    /// Run the time-domain simulation and return all waveforms.
    ///
    /// Implementations must also store the result in their cache so that
    /// `required_voltages` can reuse it within the same run.
    fn simulate_waveforms(&mut self, settings: &SimSettings) -> ModelResult<Waveforms>;

    /// Cached waveforms, only when they were produced for `settings`.
    fn cached_waveforms(&self, settings: &SimSettings) -> Option<&Waveforms>;

    /// Reuse the cached waveforms or compute them if absent.
    fn ensure_waveforms(&mut self, settings: &SimSettings) -> ModelResult<&Waveforms> {
        if self.cached_waveforms(settings).is_none() {
            self.simulate_waveforms(settings)?;
        }
        self.cached_waveforms(settings)
            .ok_or(ModelError::InvalidState {
                what: "waveform cache empty after simulation",
            })
    }

    /// Permanent- and transient-regime required voltages [V].
    ///
    /// Slides a one-cycle window across the real secondary current computing
    /// the RMS of each window. The permanent estimate uses exactly the window
    /// ending at the final sample; the transient estimate uses the worst
    /// window anywhere in the run.
    fn required_voltages(&mut self, settings: &SimSettings) -> ModelResult<(Real, Real)> {
        let Some(dt) = settings.dt else {
            return Err(ModelError::InvalidState {
                what: "time step must be resolved before deriving required voltages",
            });
        };

        let r_total = self.params().r_total();

        let samples_per_cycle = (1.0 / (settings.frequency_hz * dt)).round() as i64;
        if samples_per_cycle <= 0 {
            return Err(ModelError::InvalidConfiguration {
                what: format!(
                    "samples per cycle rounds to {samples_per_cycle} (dt = {dt} s is too coarse for {} Hz)",
                    settings.frequency_hz
                ),
            });
        }
        let window = samples_per_cycle as usize;

        let waveforms = self.ensure_waveforms(settings)?;
        let i_real = &waveforms.i_real;
        let n = i_real.len();
        if n < window {
            return Err(ModelError::InsufficientData {
                what: format!("{n} samples available, {window} needed for one full-cycle RMS"),
            });
        }

        let mut rms_perm = 0.0;
        let mut rms_trans: Real = 0.0;
        for end in window..=n {
            let w = &i_real[end - window..end];
            let mean_sq = w.iter().map(|i| i * i).sum::<Real>() / window as Real;
            let rms = mean_sq.sqrt();
            rms_perm = rms;
            rms_trans = rms_trans.max(rms);
        }

        Ok((r_total * rms_perm, r_total * rms_trans))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal transformer whose real secondary current is a constant level.
    struct ConstantCurrent {
        params: CtParams,
        level: Real,
        n_samples: usize,
        cache: Option<(SimSettings, Waveforms)>,
    }

    impl ConstantCurrent {
        fn new(level: Real, n_samples: usize) -> Self {
            Self {
                params: CtParams {
                    ct_ratio: 3000.0,
                    r_ct: 0.5,
                    r_b: 1.0,
                    i_sn: 1.0,
                    k_h: 1.0,
                    k_ssc: 1.0,
                    k_td: 1.0,
                    v_sat: None,
                    s: 2.0,
                    a: 1.0,
                },
                level,
                n_samples,
                cache: None,
            }
        }
    }

    impl Transformer for ConstantCurrent {
        fn params(&self) -> &CtParams {
            &self.params
        }

        fn saturation_voltage(&self) -> Real {
            0.0
        }

        fn simulate_waveforms(&mut self, settings: &SimSettings) -> ModelResult<Waveforms> {
            let n = self.n_samples;
            let dt = settings.resolved_dt();
            let waveforms = Waveforms {
                t: (0..n).map(|k| k as Real * dt).collect(),
                i_ideal: vec![self.level; n],
                i_real: vec![self.level; n],
                i_excitation: vec![0.0; n],
                flux: vec![0.0; n],
                v_req_instant: vec![self.params.r_total() * self.level.abs(); n],
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

    fn settings_with_dt(dt: Real) -> SimSettings {
        SimSettings {
            frequency_hz: 60.0,
            n_cycles: 5,
            ip_fault: 10_000.0,
            t_const_primary: 0.05,
            dt: Some(dt),
        }
    }

    #[test]
    fn constant_signal_rms_equals_level() {
        // 200 samples per cycle at 60 Hz, 1000 samples total
        let mut model = ConstantCurrent::new(-4.0, 1000);
        let settings = settings_with_dt(1.0 / 12_000.0);

        let (v_perm, v_trans) = model.required_voltages(&settings).unwrap();
        let expected = model.params().r_total() * 4.0;
        assert_eq!(v_perm, expected);
        assert_eq!(v_trans, expected);
    }

    #[test]
    fn unresolved_dt_is_invalid_state() {
        let mut model = ConstantCurrent::new(1.0, 1000);
        let settings = SimSettings {
            dt: None,
            ..settings_with_dt(1.0)
        };

        let err = model.required_voltages(&settings).unwrap_err();
        assert!(matches!(err, ModelError::InvalidState { .. }));
    }

    #[test]
    fn coarse_dt_is_invalid_configuration() {
        let mut model = ConstantCurrent::new(1.0, 10);
        // One second per step against a 60 Hz fundamental: zero samples/cycle
        let settings = settings_with_dt(1.0);

        let err = model.required_voltages(&settings).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfiguration { .. }));
    }

    #[test]
    fn short_record_is_insufficient_data() {
        // 50 samples cannot cover a 200-sample cycle window
        let mut model = ConstantCurrent::new(1.0, 50);
        let settings = settings_with_dt(1.0 / 12_000.0);

        let err = model.required_voltages(&settings).unwrap_err();
        assert!(matches!(err, ModelError::InsufficientData { .. }));
    }

    #[test]
    fn cache_reused_for_matching_settings() {
        let mut model = ConstantCurrent::new(1.0, 1000);
        let settings = settings_with_dt(1.0 / 12_000.0);

        assert!(model.cached_waveforms(&settings).is_none());
        model.required_voltages(&settings).unwrap();
        assert!(model.cached_waveforms(&settings).is_some());

        // A different dt must not hit the stale cache
        let other = settings_with_dt(1.0 / 6_000.0);
        assert!(model.cached_waveforms(&other).is_none());
    }
}
