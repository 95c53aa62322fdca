//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/confsplit/confsplit.toml`
//! 3. Environment variables: `CONFSPLIT_*` prefix
//!
//! CLI flags override loaded settings at dispatch time.

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, DEFAULT_MAX_NAME_LEN};
use crate::domain::Dialect;

/// Naming defaults applied when flags don't override them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NamingConfig {
    /// Maximum total length of a derived resource name
    pub max_name_len: usize,
    /// Default owner prefix for derived names
    pub owner_prefix: String,
    /// Default endpoint identifier attached to artifacts
    pub endpoint: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            owner_prefix: String::new(),
            endpoint: String::new(),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified" during layered merging).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    dialect: RawDialect,
    naming: RawNaming,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawDialect {
    comment_marker: Option<char>,
    terminator: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawNaming {
    max_name_len: Option<usize>,
    owner_prefix: Option<String>,
    endpoint: Option<String>,
}

/// Unified configuration for confsplit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Comment marker and terminator keyword of the input dialect
    pub dialect: Dialect,
    /// Naming defaults
    pub naming: NamingConfig,
}

/// Get the XDG config directory for confsplit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "confsplit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("confsplit.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Apply a raw overlay: specified fields replace, missing fields keep.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            dialect: Dialect {
                comment_marker: overlay
                    .dialect
                    .comment_marker
                    .unwrap_or(self.dialect.comment_marker),
                terminator: overlay
                    .dialect
                    .terminator
                    .clone()
                    .unwrap_or_else(|| self.dialect.terminator.clone()),
            },
            naming: NamingConfig {
                max_name_len: overlay
                    .naming
                    .max_name_len
                    .unwrap_or(self.naming.max_name_len),
                owner_prefix: overlay
                    .naming
                    .owner_prefix
                    .clone()
                    .unwrap_or_else(|| self.naming.owner_prefix.clone()),
                endpoint: overlay
                    .naming
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| self.naming.endpoint.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/confsplit/confsplit.toml`
    /// 3. Environment variables: `CONFSPLIT_*` prefix (explicit override)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        Ok(current)
    }

    /// Load defaults plus one specific TOML file (no global, no env).
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(path)?;
        Ok(Self::default().merge_with(&raw))
    }

    /// Apply CONFSPLIT_* environment variables as explicit overrides,
    /// e.g. `CONFSPLIT_DIALECT__TERMINATOR=exit`.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("CONFSPLIT").separator("__"))
            .build()
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })?;

        if let Ok(val) = config.get_string("dialect.comment_marker") {
            let mut chars = val.chars();
            match (chars.next(), chars.next()) {
                (Some(marker), None) => settings.dialect.comment_marker = marker,
                _ => {
                    return Err(ApplicationError::Config {
                        message: format!("comment marker must be a single character: {:?}", val),
                    })
                }
            }
        }
        if let Ok(val) = config.get_string("dialect.terminator") {
            settings.dialect.terminator = val;
        }
        if let Ok(val) = config.get_int("naming.max_name_len") {
            settings.naming.max_name_len = val.max(0) as usize;
        }
        if let Ok(val) = config.get_string("naming.owner_prefix") {
            settings.naming.owner_prefix = val;
        }
        if let Ok(val) = config.get_string("naming.endpoint") {
            settings.naming.endpoint = val;
        }

        Ok(settings)
    }
}
