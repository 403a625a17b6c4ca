//! JSON persistence for plan history and profiles.
//!
//! Everything serializes as pretty, field-named JSON so optional profile
//! fields can come and go without breaking older files. Writes stage to a
//! temporary sibling and rename into place.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::EngineError, history::BudgetHistory, profile::FinancialProfile};

/// Writes the provided history to disk atomically by staging to a temporary file.
pub fn save_history_to_file(history: &BudgetHistory, path: &Path) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(history)?;
    write_atomic(path, &json)
}

/// Loads a history snapshot from disk, returning structured errors on failure.
pub fn load_history_from_file(path: &Path) -> Result<BudgetHistory, EngineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads a history if the file exists, otherwise starts an empty one.
pub fn load_history_or_default(path: &Path) -> Result<BudgetHistory, EngineError> {
    if path.exists() {
        load_history_from_file(path)
    } else {
        Ok(BudgetHistory::new())
    }
}

pub fn save_profile_to_file(profile: &FinancialProfile, path: &Path) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(profile)?;
    write_atomic(path, &json)
}

pub fn load_profile_from_file(path: &Path) -> Result<FinancialProfile, EngineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub fn ensure_dir(path: &Path) -> Result<(), EngineError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub(crate) fn write_atomic(path: &Path, data: &str) -> Result<(), EngineError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
