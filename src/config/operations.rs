//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{GenError, Result};
use crate::generator;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GenError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if given, otherwise use the built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GenError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the template and output directory with any values given on
    /// the command line.
    pub fn with_overrides(mut self, template: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(template) = template {
            self.template = template;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `template` must be non-empty
    /// - `names` must be non-empty
    /// - each name must be usable as a file stem: non-empty, not `.` or `..`,
    ///   and free of path separators
    pub fn validate(&self) -> Result<()> {
        if self.template.as_os_str().is_empty() {
            return Err(GenError::UserError(
                "config validation failed: template must not be empty".to_string(),
            ));
        }

        if self.names.is_empty() {
            return Err(GenError::UserError(
                "config validation failed: names must list at least one worker".to_string(),
            ));
        }

        for name in &self.names {
            if name.is_empty() {
                return Err(GenError::UserError(
                    "config validation failed: names entries must be non-empty".to_string(),
                ));
            }
            if name == "." || name == ".." || name.contains(['/', '\\']) {
                return Err(GenError::UserError(format!(
                    "config validation failed: '{}' is not a valid worker name (names become <name>.yaml files)",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Path of the output file for a worker.
    pub fn output_path(&self, name: &str) -> PathBuf {
        generator::output_path(&self.output_dir, name)
    }
}
