//! Scenario file schema, validation and built-in presets.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gf_model::{GridParams, ImbalanceMode};

use crate::error::{AppError, AppResult};

/// Current scenario file schema version.
pub const LATEST_VERSION: u32 = 1;

/// A scenario file: a named collection of runnable parameter sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

/// One runnable scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    pub params: GridParams,
}

/// Structural and parameter validation of a scenario file.
pub fn validate_file(file: &ScenarioFile) -> AppResult<()> {
    if file.version > LATEST_VERSION {
        return Err(AppError::Validation(format!(
            "unsupported scenario file version {} (latest is {})",
            file.version, LATEST_VERSION
        )));
    }

    let mut ids = HashSet::new();
    for scenario in &file.scenarios {
        if !ids.insert(&scenario.id) {
            return Err(AppError::Validation(format!(
                "duplicate scenario id '{}'",
                scenario.id
            )));
        }
        scenario
            .params
            .validate()
            .map_err(|e| AppError::Validation(format!("scenario '{}': {}", scenario.id, e)))?;
    }

    Ok(())
}

pub fn load_yaml(path: &Path) -> AppResult<ScenarioFile> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ScenarioFile = serde_yaml::from_str(&content)?;
    validate_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &ScenarioFile) -> AppResult<()> {
    validate_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content).map_err(|source| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Find a scenario by id within a loaded file.
pub fn find_scenario<'a>(file: &'a ScenarioFile, id: &str) -> AppResult<&'a ScenarioDef> {
    file.scenarios
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::ScenarioNotFound(id.to_string()))
}

/// Built-in presets covering the classic frequency response cases.
pub fn presets() -> Vec<ScenarioDef> {
    let base = GridParams {
        delta_p_load_pu: 0.1,
        inertia_h_s: 4.0,
        droop: 0.05,
        t_fcr_s: 1.0,
        imbalance_mode: ImbalanceMode::Permanent,
        fcr_enabled: false,
        fcr_lag_enabled: false,
    };

    vec![
        ScenarioDef {
            id: "inertia-only".to_string(),
            name: "Step imbalance, no regulation".to_string(),
            params: base.clone(),
        },
        ScenarioDef {
            id: "ideal-fcr".to_string(),
            name: "Ideal droop regulation".to_string(),
            params: GridParams {
                fcr_enabled: true,
                ..base.clone()
            },
        },
        ScenarioDef {
            id: "lagged-fcr".to_string(),
            name: "Droop regulation with actuation lag".to_string(),
            params: GridParams {
                fcr_enabled: true,
                fcr_lag_enabled: true,
                ..base.clone()
            },
        },
        ScenarioDef {
            id: "transient-event".to_string(),
            name: "Imbalance clearing after 4 s, lagged droop".to_string(),
            params: GridParams {
                imbalance_mode: ImbalanceMode::Transient4s,
                fcr_enabled: true,
                fcr_lag_enabled: true,
                ..base.clone()
            },
        },
        ScenarioDef {
            id: "low-inertia".to_string(),
            name: "Light grid with lagged droop".to_string(),
            params: GridParams {
                inertia_h_s: 1.0,
                fcr_enabled: true,
                fcr_lag_enabled: true,
                ..base
            },
        },
    ]
}

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> AppResult<ScenarioDef> {
    let all = presets();
    if let Some(preset) = all.iter().find(|p| p.id == id) {
        return Ok(preset.clone());
    }
    let known: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
    Err(AppError::PresetNotFound(format!(
        "{id} (known presets: {})",
        known.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_file() -> ScenarioFile {
        ScenarioFile {
            version: LATEST_VERSION,
            name: "Test".to_string(),
            scenarios: presets(),
        }
    }

    #[test]
    fn presets_are_valid_and_unique() {
        validate_file(&minimal_file()).unwrap();
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut file = minimal_file();
        let dup = file.scenarios[0].clone();
        file.scenarios.push(dup);
        let err = validate_file(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate scenario id"));
        assert!(err.to_string().contains("inertia-only"));
    }

    #[test]
    fn newer_versions_are_rejected() {
        let mut file = minimal_file();
        file.version = LATEST_VERSION + 1;
        let err = validate_file(&file).unwrap_err();
        assert!(err.to_string().contains("unsupported scenario file version"));
    }

    #[test]
    fn bad_params_are_reported_with_scenario_context() {
        let mut file = minimal_file();
        file.scenarios[1].params.droop = 0.5;
        let err = validate_file(&file).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ideal-fcr"), "missing context in: {msg}");
        assert!(msg.contains("droop"), "missing field in: {msg}");
    }

    #[test]
    fn unknown_preset_error_lists_the_known_ids() {
        assert!(find_preset("inertia-only").is_ok());
        let err = find_preset("no-such-preset").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("no-such-preset"));
        assert!(msg.contains("inertia-only"), "missing hint in: {msg}");
    }
}
