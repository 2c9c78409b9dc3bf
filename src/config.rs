//! Generator configuration loaded from an optional YAML file.
//!
//! The configuration lives in `postman-from-source.yaml` at the project root
//! and controls which route-manifest files are loaded, which URI prefix is
//! kept, and the display name used in the collection `info` block. A missing
//! file is not an error; defaults apply.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file name, resolved against the project root.
pub const CONFIG_FILE_NAME: &str = "postman-from-source.yaml";

/// Configuration for a generation run.
///
/// All fields have defaults so an empty (or absent) configuration file
/// produces a usable setup:
///
/// ```yaml
/// app_name: My Service
/// route_files:
///   - routes/api.json
///   - routes/api-admin.json
/// prefix: api
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Display name used for `info.name` (`"<app_name> API"`). When absent,
    /// the project directory name is used.
    pub app_name: Option<String>,
    /// Route-manifest files to load, relative to the project root.
    pub route_files: Vec<String>,
    /// Only routes whose path starts with `<prefix>/` are included.
    pub prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            route_files: vec!["routes/api.json".to_string()],
            prefix: "api".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads the configuration for a project.
    ///
    /// Looks for [`CONFIG_FILE_NAME`] in `project_root` unless an explicit
    /// `config_path` override is given. A missing file yields the defaults;
    /// a file that exists but cannot be read or parsed is an error.
    pub fn load(project_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => project_root.join(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            debug!(
                "No config file at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: GeneratorConfig =
            serde_yaml::from_str(&content).map_err(|e| Error::ConfigError {
                file: path.clone(),
                message: e.to_string(),
            })?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// The display name for the collection, falling back to the project
    /// directory name when `app_name` is not configured.
    pub fn display_name(&self, project_root: &Path) -> String {
        if let Some(name) = &self.app_name {
            return name.clone();
        }
        project_root
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "Application".to_string())
    }
}
