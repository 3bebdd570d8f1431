//! Configuration for the scaffold command
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CORDOVA_SCAFFOLD_` prefix, `__` for nesting)
//! 2. `./cordova-scaffold.toml`
//! 3. `~/.config/cordova-scaffold/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [defaults]
//! author = "Jane Doe <jane@example.com>"
//! license = "Apache-2.0"
//! platforms = ["android", "ios"]
//!
//! [templates]
//! dir = "/home/jane/.config/cordova-scaffold/templates"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::answers::Platform;

/// Application directory name under the XDG config dir
pub const APP_DIR: &str = "cordova-scaffold";

/// Default values offered by each prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    /// Plugin id
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description
    pub description: String,
    /// License identifier
    pub license: String,
    /// Author
    pub author: String,
    /// Platforms preselected in the multi-select
    pub platforms: Vec<Platform>,
    /// API name
    pub api_name: String,
    /// Android package
    pub android_package: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            id: "cordova-plugin-sample".to_string(),
            name: "Sample Plugin".to_string(),
            description: "A sample Cordova plugin.".to_string(),
            license: "MIT".to_string(),
            author: String::new(),
            platforms: vec![Platform::Ios, Platform::Android],
            api_name: "SamplePlugin".to_string(),
            android_package: "com.example.sampleplugin".to_string(),
        }
    }
}

/// Template asset settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory searched for template overrides before the embedded defaults
    pub dir: Option<PathBuf>,
}

/// Complete scaffold configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Prompt defaults
    #[serde(default)]
    pub defaults: PromptDefaults,

    /// Template settings
    #[serde(default)]
    pub templates: TemplateSettings,
}

impl ScaffoldConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file exists but contains invalid TOML
    /// - A value has the wrong type (e.g. an unknown platform name)
    pub fn load(working_dir: &Path) -> anyhow::Result<Self> {
        Self::load_layers(Self::recommended_path(), working_dir)
    }

    /// Merge defaults, `user_config`, the local file in `working_dir` and the environment
    fn load_layers(user_config: Option<PathBuf>, working_dir: &Path) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(user_config) = user_config.filter(|path| path.exists()) {
            tracing::debug!(path = %user_config.display(), "loading user config");
            figment = figment.merge(Toml::file(user_config));
        }

        let local_config = working_dir.join("cordova-scaffold.toml");
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading local config");
            figment = figment.merge(Toml::file(local_config));
        }

        figment = figment.merge(Env::prefixed("CORDOVA_SCAFFOLD_").split("__").lowercase(true));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is invalid TOML or holds mistyped values.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CORDOVA_SCAFFOLD_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// XDG path of the user configuration file
    #[must_use]
    pub fn recommended_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Directory to search for template overrides
    ///
    /// Uses `templates.dir` when set, otherwise `~/.config/cordova-scaffold/templates`.
    #[must_use]
    pub fn template_dir(&self) -> Option<PathBuf> {
        self.templates
            .dir
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join("templates")))
    }
}
