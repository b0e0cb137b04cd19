//! ct-project: named preset persistence for CT parameter sets.
//!
//! A preset file maps names to `{ ct_params, sim_params }` pairs, stored as
//! JSON or YAML (chosen by file extension). A missing file reads as empty,
//! and lookups fall back to a built-in default preset, so the simulator is
//! usable before anything has been saved.

pub mod schema;
pub mod validate;

pub use schema::{DEFAULT_PRESET_NAME, Preset, PresetFile, default_preset};
pub use validate::{ValidationError, validate_preset};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported preset file extension: {path}")]
    UnsupportedExtension { path: String },
}

#[derive(Clone, Copy, PartialEq)]
enum Format {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> ProjectResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(ProjectError::UnsupportedExtension {
            path: path.display().to_string(),
        }),
    }
}

/// Read a preset file; a missing file reads as an empty one.
pub fn load_file(path: &Path) -> ProjectResult<PresetFile> {
    let format = format_for(path)?;
    if !path.exists() {
        return Ok(PresetFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    let file = match format {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(file)
}

pub fn save_file(path: &Path, file: &PresetFile) -> ProjectResult<()> {
    let content = match format_for(path)? {
        Format::Json => {
            let mut s = serde_json::to_string_pretty(file)?;
            s.push('\n');
            s
        }
        Format::Yaml => serde_yaml::to_string(file)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Sorted preset names; the built-in default name when nothing is stored.
pub fn list_presets(path: &Path) -> ProjectResult<Vec<String>> {
    let file = load_file(path)?;
    let names: Vec<String> = file.presets.keys().cloned().collect();
    if names.is_empty() {
        Ok(vec![DEFAULT_PRESET_NAME.to_string()])
    } else {
        Ok(names)
    }
}

/// Load one preset by name, falling back to the built-in default when the
/// name (or the whole file) is absent. Validated before it is handed out.
pub fn load_preset(name: &str, path: &Path) -> ProjectResult<Preset> {
    let file = load_file(path)?;
    let preset = file
        .presets
        .get(name)
        .cloned()
        .unwrap_or_else(default_preset);
    validate_preset(&preset)?;
    Ok(preset)
}

/// Store one preset under `name`, read-modify-write. Creates the file.
pub fn save_preset(name: &str, preset: &Preset, path: &Path) -> ProjectResult<()> {
    validate_preset(preset)?;
    let mut file = load_file(path)?;
    file.presets.insert(name.to_string(), preset.clone());
    save_file(path, &file)
}
