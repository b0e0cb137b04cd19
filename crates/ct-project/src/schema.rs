//! Preset file schema.

use ct_model::{CtParams, SimSettings};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name returned when a preset file holds nothing yet, and the preset every
/// lookup falls back to.
pub const DEFAULT_PRESET_NAME: &str = "Default_TPX";

/// On-disk preset file: named parameter/scenario pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

/// One named pairing of CT parameters and a fault scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub ct_params: CtParams,
    pub sim_params: SimSettings,
}

/// Built-in fallback: a 3000/1 A TPX against a 10 kA fault at 60 Hz.
pub fn default_preset() -> Preset {
    Preset {
        ct_params: CtParams {
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
        sim_params: SimSettings {
            frequency_hz: 60.0,
            n_cycles: 5,
            ip_fault: 10_000.0,
            t_const_primary: 0.05,
            dt: None,
        },
    }
}
