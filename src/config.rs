use crate::error::{Error, Result};
use crate::resolve::FeatureFlags;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level rootpatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootpatchConfig {
    pub graphics: GraphicsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Keep AMDRadeonX3000.kext in the TeraScale 2 patch set.
    pub allow_terascale2_acceleration: bool,
    /// Darwin majors where TeraScale 2 acceleration is known to be stable.
    pub legacy_acceleration_os: Vec<u32>,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        let flags = FeatureFlags::default();
        Self {
            allow_terascale2_acceleration: flags.allow_terascale2_acceleration,
            legacy_acceleration_os: flags.legacy_acceleration_os,
        }
    }
}

impl RootpatchConfig {
    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            allow_terascale2_acceleration: self.graphics.allow_terascale2_acceleration,
            legacy_acceleration_os: self.graphics.legacy_acceleration_os.clone(),
        }
    }
}

const SYSTEM_CONFIG: &str = "/Library/Application Support/rootpatch/config.toml";

fn user_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("rootpatch").join("config.toml"))
}

/// Read a TOML file as a raw value. Missing files are `None`; unreadable
/// or malformed ones warn and are skipped.
fn load_value(path: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring malformed config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Recursively merge two TOML values. Tables are merged key-by-key;
/// all other types in `overlay` replace `base`.
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Parse a single config file.
pub fn parse_file(path: &Path) -> Result<RootpatchConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

fn load_from_path(path: &Path) -> RootpatchConfig {
    parse_file(path).unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        RootpatchConfig::default()
    })
}

/// Merge `system` then `user` layers. Either may be absent.
fn load_layers(system: Option<&Path>, user: Option<&Path>) -> RootpatchConfig {
    let system = system.and_then(load_value);
    let user = user.and_then(load_value);

    let merged = match (system, user) {
        (Some(s), Some(u)) => Some(merge_values(s, u)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    };

    match merged {
        Some(value) => value.try_into().unwrap_or_else(|e| {
            tracing::warn!("failed to deserialize config: {}", e);
            RootpatchConfig::default()
        }),
        None => RootpatchConfig::default(),
    }
}

/// Load the merged config: system defaults, then user overrides.
/// If `override_path` is provided, use only that file instead.
pub fn load(override_path: Option<&PathBuf>) -> RootpatchConfig {
    if let Some(path) = override_path {
        return load_from_path(path);
    }
    let user = user_config_path();
    load_layers(Some(Path::new(SYSTEM_CONFIG)), user.as_deref())
}
