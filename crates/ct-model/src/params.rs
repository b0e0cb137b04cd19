//! Immutable parameter value types.
//!
//! All quantities are plain SI scalars (A, V, Ω, s, Hz).

use crate::error::{ModelError, ModelResult};
use ct_core::Real;
use serde::{Deserialize, Serialize};

/// Samples per fundamental cycle used when no explicit time step is given.
pub const DEFAULT_SAMPLES_PER_CYCLE: Real = 200.0;

/// Parameters that characterize a current transformer (CT).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtParams {
    /// Turns ratio primary/secondary (e.g. 3000 for a 3000/1 A CT).
    pub ct_ratio: Real,
    /// Secondary winding resistance [Ω].
    pub r_ct: Real,
    /// Burden resistance [Ω].
    pub r_b: Real,
    /// Nominal secondary current [A] (typically 1 or 5 A).
    pub i_sn: Real,

    /// IEC-based saturation factors (dimensionless).
    #[serde(default = "default_factor")]
    pub k_h: Real,
    #[serde(default = "default_factor")]
    pub k_ssc: Real,
    #[serde(default = "default_factor")]
    pub k_td: Real,

    /// Direct saturation voltage override [V]. Takes precedence over the
    /// derived IEC product whenever set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_sat: Option<Real>,

    /// Magnetization curve exponent (i_e ≈ a·|λ|^s·sign(λ)).
    #[serde(default = "default_curve_exponent")]
    pub s: Real,
    /// Magnetization curve gain.
    #[serde(default = "default_factor")]
    pub a: Real,
}

fn default_factor() -> Real {
    1.0
}

fn default_curve_exponent() -> Real {
    2.0
}

impl CtParams {
    /// Total secondary-loop resistance: winding plus burden [Ω].
    pub fn r_total(&self) -> Real {
        self.r_ct + self.r_b
    }

    /// Check the ranges required to keep the flux recurrence well-defined.
    pub fn validate(&self) -> ModelResult<()> {
        require(self.ct_ratio > 0.0, "ct_ratio must be positive")?;
        require(self.r_ct >= 0.0, "r_ct must be non-negative")?;
        require(self.r_b >= 0.0, "r_b must be non-negative")?;
        require(self.i_sn > 0.0, "i_sn must be positive")?;
        require(self.k_h >= 0.0, "k_h must be non-negative")?;
        require(self.k_ssc >= 0.0, "k_ssc must be non-negative")?;
        require(self.k_td >= 0.0, "k_td must be non-negative")?;
        require(self.s > 0.0, "s must be positive")?;
        require(self.a >= 0.0, "a must be non-negative")?;
        if let Some(v_sat) = self.v_sat {
            require(v_sat.is_finite(), "v_sat override must be finite")?;
        }
        Ok(())
    }
}

/// Fault scenario and time-stepping settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    /// System frequency [Hz].
    pub frequency_hz: Real,
    /// Number of fundamental cycles to simulate.
    pub n_cycles: u32,
    /// Primary fault current amplitude [A].
    pub ip_fault: Real,
    /// Primary DC time constant T_p [s].
    pub t_const_primary: Real,
    /// Fixed time step [s]. When absent the engine picks
    /// `1/(frequency_hz * 200)`, i.e. 200 samples per cycle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<Real>,
}

impl SimSettings {
    /// Time step actually used for integration.
    pub fn resolved_dt(&self) -> Real {
        self.dt
            .unwrap_or(1.0 / (self.frequency_hz * DEFAULT_SAMPLES_PER_CYCLE))
    }

    /// Copy of these settings with the time step filled in.
    pub fn resolve_dt(&self) -> Self {
        Self {
            dt: Some(self.resolved_dt()),
            ..self.clone()
        }
    }

    /// Simulated span [s]: `n_cycles` fundamental periods.
    pub fn total_time(&self) -> Real {
        self.n_cycles as Real / self.frequency_hz
    }

    pub fn validate(&self) -> ModelResult<()> {
        require(
            self.frequency_hz.is_finite() && self.frequency_hz > 0.0,
            "frequency_hz must be positive",
        )?;
        require(self.n_cycles >= 1, "n_cycles must be at least 1")?;
        require(self.ip_fault >= 0.0, "ip_fault must be non-negative")?;
        require(
            self.t_const_primary > 0.0,
            "t_const_primary must be positive",
        )?;
        if let Some(dt) = self.dt {
            require(dt.is_finite() && dt > 0.0, "dt must be positive")?;
        }
        Ok(())
    }
}

fn require(ok: bool, what: &'static str) -> ModelResult<()> {
    if ok {
        Ok(())
    } else {
        Err(ModelError::InvalidConfiguration {
            what: what.to_string(),
        })
    }
}
