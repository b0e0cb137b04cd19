//! Preset validation logic.

use crate::schema::Preset;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub fn validate_preset(preset: &Preset) -> Result<(), ValidationError> {
    let ct = &preset.ct_params;
    check(ct.ct_ratio, "ct_ratio", ct.ct_ratio > 0.0, "must be > 0")?;
    check(ct.r_ct, "r_ct", ct.r_ct >= 0.0, "must be >= 0")?;
    check(ct.r_b, "r_b", ct.r_b >= 0.0, "must be >= 0")?;
    check(ct.i_sn, "i_sn", ct.i_sn > 0.0, "must be > 0")?;
    check(ct.k_h, "k_h", ct.k_h >= 0.0, "must be >= 0")?;
    check(ct.k_ssc, "k_ssc", ct.k_ssc >= 0.0, "must be >= 0")?;
    check(ct.k_td, "k_td", ct.k_td >= 0.0, "must be >= 0")?;
    check(ct.s, "s", ct.s > 0.0, "must be > 0")?;
    check(ct.a, "a", ct.a >= 0.0, "must be >= 0")?;
    if let Some(v_sat) = ct.v_sat {
        check(v_sat, "v_sat", v_sat.is_finite(), "must be finite")?;
    }

    let sim = &preset.sim_params;
    check(
        sim.frequency_hz,
        "frequency_hz",
        sim.frequency_hz > 0.0,
        "must be > 0",
    )?;
    check(
        sim.n_cycles as f64,
        "n_cycles",
        sim.n_cycles >= 1,
        "must be >= 1",
    )?;
    check(
        sim.ip_fault,
        "ip_fault",
        sim.ip_fault >= 0.0,
        "must be >= 0",
    )?;
    check(
        sim.t_const_primary,
        "t_const_primary",
        sim.t_const_primary > 0.0,
        "must be > 0",
    )?;
    if let Some(dt) = sim.dt {
        check(dt, "dt", dt > 0.0 && dt.is_finite(), "must be > 0")?;
    }

    Ok(())
}

fn check(
    value: f64,
    field: &'static str,
    ok: bool,
    reason: &'static str,
) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::default_preset;

    #[test]
    fn default_preset_is_valid() {
        validate_preset(&default_preset()).unwrap();
    }

    #[test]
    fn negative_burden_is_rejected() {
        let mut preset = default_preset();
        preset.ct_params.r_b = -2.0;

        let err = validate_preset(&preset).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("r_b"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let mut preset = default_preset();
        preset.sim_params.frequency_hz = 0.0;
        assert!(validate_preset(&preset).is_err());
    }
}
