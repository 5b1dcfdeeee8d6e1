//! Gateway configuration via `graphscript.toml`
//!
//! Every field is optional in the file; missing fields take their defaults.
//! On first start a commented default file can be written next to the
//! host's data. To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use graphscript_core::{Error, Result};

use crate::library::{ScriptLibrary, DEFAULT_SCRIPT_EXTENSION};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "graphscript.toml";

/// Cache size above which the evaluator is replaced
pub const DEFAULT_CACHE_RESET_THRESHOLD: usize = 500;

/// Gateway configuration loaded from `graphscript.toml`.
///
/// # Example
///
/// ```toml
/// # script_dir = "/var/lib/graph/scripts"
/// script_extension = "gremlin"
/// cache_reset_threshold = 500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Library script directory. Unset means `<install root>/scripts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_dir: Option<PathBuf>,
    /// Library file extension, without the leading dot.
    #[serde(default = "default_script_extension")]
    pub script_extension: String,
    /// Number of cached scripts above which the evaluator is replaced and
    /// the cache cleared.
    #[serde(default = "default_cache_reset_threshold")]
    pub cache_reset_threshold: usize,
}

fn default_script_extension() -> String {
    DEFAULT_SCRIPT_EXTENSION.to_string()
}

fn default_cache_reset_threshold() -> usize {
    DEFAULT_CACHE_RESET_THRESHOLD
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            script_dir: None,
            script_extension: default_script_extension(),
            cache_reset_threshold: default_cache_reset_threshold(),
        }
    }
}

impl GatewayConfig {
    /// Use `dir` as the library directory
    pub fn with_script_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.script_dir = Some(dir.into());
        self
    }

    /// Override the reset threshold
    pub fn with_cache_reset_threshold(mut self, threshold: usize) -> Self {
        self.cache_reset_threshold = threshold;
        self
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# graphscript gateway configuration
#
# Directory holding library scripts loaded with `load=name1,name2`.
# Defaults to the `scripts` directory of the installation.
# script_dir = "/var/lib/graph/scripts"

# Library file extension (without the dot).
script_extension = "gremlin"

# When more than this many distinct scripts have been cached, the script
# engine is replaced and the cache is cleared.
cache_reset_threshold = 500
"#
    }

    /// Parse config from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GatewayConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(reason) => Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                reason
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Reject values the gateway cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.script_extension.is_empty() {
            return Err(Error::Config("script_extension must not be empty".into()));
        }
        if self.script_extension.starts_with('.') {
            return Err(Error::Config(format!(
                "script_extension '{}' must not start with '.'",
                self.script_extension
            )));
        }
        Ok(())
    }

    /// Script library described by this config
    pub fn library(&self) -> ScriptLibrary {
        let dir = self
            .script_dir
            .clone()
            .unwrap_or_else(ScriptLibrary::default_dir);
        ScriptLibrary::new(dir, self.script_extension.clone())
    }
}
