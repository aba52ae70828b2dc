//! Detect and fill configuration keys missing from older config files.

use crate::config::{default_color, default_language, default_separator_char, default_snapshot};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key the current Config expects, with its default value.
fn expected_fields() -> Vec<(&'static str, Value)> {
    vec![
        ("snapshot", Value::String(default_snapshot())),
        ("language", Value::String(default_language())),
        ("separator_char", Value::String(default_separator_char())),
        ("color", Value::Bool(default_color())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the config file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let mapping = read_mapping(path)?;
    Ok(expected_fields()
        .into_iter()
        .filter(|(key, _)| !mapping.contains_key(*key))
        .map(|(key, _)| key)
        .collect())
}

/// Add the missing keys with their defaults. Returns true when the file changed.
pub fn migrate_config(path: &Path) -> AppResult<bool> {
    let mut mapping = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, default) in expected_fields() {
        let k = Value::String(key.to_string());
        if !mapping.contains_key(&k) {
            mapping.insert(k, default);
            added.push(key);
        }
    }

    if added.is_empty() {
        info("Configuration already up to date.");
        return Ok(false);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(mapping))?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!("Configuration migrated, added: {}", added.join(", ")));
    Ok(true)
}
