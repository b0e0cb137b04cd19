use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use ct_project::{
    DEFAULT_PRESET_NAME, default_preset, list_presets, load_preset, save_preset, validate_preset,
};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

#[test]
fn save_list_load_roundtrip_json() {
    let dir = unique_temp_dir("ct_presets_json");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("presets.json");

    let mut preset = default_preset();
    preset.ct_params.ct_ratio = 1200.0;
    preset.sim_params.ip_fault = 25_000.0;

    save_preset("Line_7_fault", &preset, &path).expect("failed to save preset");

    let names = list_presets(&path).expect("failed to list presets");
    assert_eq!(names, vec!["Line_7_fault".to_string()]);

    let loaded = load_preset("Line_7_fault", &path).expect("failed to load preset");
    assert_eq!(loaded, preset);
}

#[test]
fn save_list_load_roundtrip_yaml() {
    let dir = unique_temp_dir("ct_presets_yaml");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("presets.yaml");

    let preset = default_preset();
    save_preset("Station_A", &preset, &path).expect("failed to save preset");

    let loaded = load_preset("Station_A", &path).expect("failed to load preset");
    assert_eq!(loaded, preset);
}

#[test]
fn missing_file_lists_default_name() {
    let dir = unique_temp_dir("ct_presets_missing");
    let path = dir.join("nowhere.json");

    let names = list_presets(&path).expect("listing a missing file must work");
    assert_eq!(names, vec![DEFAULT_PRESET_NAME.to_string()]);
}

#[test]
fn unknown_name_falls_back_to_default() {
    let dir = unique_temp_dir("ct_presets_fallback");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("presets.json");

    save_preset("Existing", &default_preset(), &path).expect("failed to save preset");

    let loaded = load_preset("NoSuchPreset", &path).expect("fallback must succeed");
    assert_eq!(loaded, default_preset());
}

#[test]
fn invalid_preset_is_rejected_on_save() {
    let dir = unique_temp_dir("ct_presets_invalid");
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join("presets.json");

    let mut preset = default_preset();
    preset.ct_params.r_ct = -1.0;

    assert!(validate_preset(&preset).is_err());
    assert!(save_preset("Broken", &preset, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = unique_temp_dir("ct_presets_ext");
    let path = dir.join("presets.toml");

    assert!(list_presets(&path).is_err());
}
