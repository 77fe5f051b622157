//! Config file maintenance: detect keys missing from an older file and add
//! them with their default values, leaving the user's values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys of `Config::known_keys()` absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(Config::known_keys()
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Insert every missing key with its default value.
/// Returns the keys that were added (empty → file left as is).
pub fn migrate_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;

    let defaults = match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in Config::known_keys() {
        let k = Value::String((*key).to_string());
        if !map.contains_key(&k) {
            let v = defaults.get(&k).cloned().unwrap_or(Value::Null);
            map.insert(k, v);
            added.push(*key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
        tracing::info!(keys = ?added, "config migrated");
    }

    Ok(added)
}
