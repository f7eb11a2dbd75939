//! The config file recording deployed contract addresses.
//!
//! The file is a nested JSON object: top-level keys are network names, nested
//! keys are contract names mapping to address strings. Values are addressed by
//! dotted key paths, e.g. `dev.MyCar`.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};
use tokio::fs;
use tracing::debug;

use crate::{constants::CONFIG_KEY_SEPARATOR, errors::ScriptError};

/// An in-memory copy of the config file, tied to the path it was loaded from
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// The file backing this config
    path: PathBuf,
    /// The parsed contents of the file
    document: Map<String, Value>,
}

impl DeployConfig {
    /// Loads the config at `path`, starting from an empty document if the file
    /// does not exist yet. Nothing is written until [`DeployConfig::persist`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref().to_path_buf();

        let document = match fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| ScriptError::ReadConfig(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config found at {}, starting empty", path.display());
                Map::new()
            }
            Err(e) => {
                return Err(ScriptError::ReadConfig(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        };

        Ok(Self { path, document })
    }

    /// The file this config is persisted to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the string stored at the dotted `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        let segments = split_key(key).ok()?;
        let (first, rest) = segments.split_first()?;

        let mut node = self.document.get(*first)?;
        for segment in rest {
            node = node.get(*segment)?;
        }

        node.as_str()
    }

    /// Sets the dotted `key` to `value`, creating intermediate objects as
    /// needed. An intermediate value that is not an object is replaced.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ScriptError> {
        let segments = split_key(key)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(ScriptError::InvalidConfigKey(key.to_string()));
        };

        let mut node = &mut self.document;
        for segment in parents {
            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }

            node = entry
                .as_object_mut()
                .ok_or_else(|| ScriptError::InvalidConfigKey(key.to_string()))?;
        }

        node.insert(last.to_string(), Value::String(value.into()));
        Ok(())
    }

    /// Writes the whole document back to the file it was loaded from
    pub async fn persist(&self) -> Result<(), ScriptError> {
        let contents = serde_json::to_string_pretty(&self.document)
            .map_err(|e| ScriptError::WriteConfig(e.to_string()))?;

        fs::write(&self.path, contents)
            .await
            .map_err(|e| ScriptError::WriteConfig(format!("{}: {}", self.path.display(), e)))
    }
}

/// Builds the config key under which `contract`'s address on `network` is recorded
pub fn deployment_key(network: &str, contract: &str) -> Result<String, ScriptError> {
    let key = format!("{network}{CONFIG_KEY_SEPARATOR}{contract}");

    // Each part must be exactly one segment
    if split_key(&key)?.len() != 2 {
        return Err(ScriptError::InvalidConfigKey(key));
    }

    Ok(key)
}

/// Splits a dotted key into its segments, rejecting empty segments
fn split_key(key: &str) -> Result<Vec<&str>, ScriptError> {
    let segments: Vec<&str> = key.split(CONFIG_KEY_SEPARATOR).collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(ScriptError::InvalidConfigKey(key.to_string()));
    }

    Ok(segments)
}
