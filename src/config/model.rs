//! Configuration model for gen-slaves.

use crate::fleet;
use serde::Deserialize;
use std::path::PathBuf;

/// Template file read when no other path is configured.
pub const DEFAULT_TEMPLATE: &str = "slave.yaml.tmpl";

/// Output directory used when no other path is configured.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Configuration for a generation run.
///
/// Represents the contents of an optional fleet config file such as:
///
/// ```yaml
/// template: kube/slave.yaml.tmpl
/// output_dir: kube
/// names:
///   - slave-android
///   - slave-mingw
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the template source.
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Directory that receives the `<name>.yaml` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Worker names, in generation order.
    #[serde(default = "fleet::default_workers")]
    pub names: Vec<String>,
}

fn default_template() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            output_dir: default_output_dir(),
            names: fleet::default_workers(),
        }
    }
}
