//! On-disk layout of a generated plugin
//!
//! A [`LocationPlan`] maps logical location names to absolute directories.
//! Every entry lives under `pluginDir`; later steps look entries up by key,
//! so the key names (`pluginDir`, `srcDir`, `wwwDir`, `platform<Name>`) are stable.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::answers::{AnswerSet, Platform};
use crate::error::ScaffoldError;

/// Key of the plugin root directory
pub const PLUGIN_DIR: &str = "pluginDir";
/// Key of the native sources directory
pub const SRC_DIR: &str = "srcDir";
/// Key of the web assets directory
pub const WWW_DIR: &str = "wwwDir";

/// Location key for a platform directory (`platformAndroid`, `platformIos`, ...)
#[must_use]
pub fn platform_key(platform: Platform) -> String {
    format!("platform{}", capitalize(platform.as_str()))
}

/// Upper-case the first character, leave the rest unchanged
fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Turn `com.example.app` into `com/example/app` using the platform separator
#[must_use]
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').collect()
}

/// Planned plugin directories, in creation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPlan {
    locations: Vec<(String, PathBuf)>,
}

impl LocationPlan {
    /// Derive the layout for `answers` under `working_dir`
    ///
    /// A relative `working_dir` is resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `working_dir` cannot be made absolute, or if
    /// Android is selected without an Android package.
    pub fn new(answers: &AnswerSet, working_dir: &Path) -> Result<Self> {
        let working_dir = std::path::absolute(working_dir).with_context(|| {
            format!("Failed to resolve working directory: {}", working_dir.display())
        })?;

        let plugin_dir = working_dir.join(&answers.id);
        let src_dir = plugin_dir.join("src");
        let www_dir = plugin_dir.join("www");

        let mut locations = vec![
            (PLUGIN_DIR.to_string(), plugin_dir),
            (SRC_DIR.to_string(), src_dir.clone()),
            (WWW_DIR.to_string(), www_dir),
        ];

        for &platform in &answers.platforms {
            let dir = match platform {
                Platform::Android => {
                    let package = answers
                        .android_package
                        .as_deref()
                        .ok_or(ScaffoldError::MissingAndroidPackage)?;
                    src_dir.join(platform.as_str()).join(package_path(package))
                }
                Platform::Ios | Platform::Electron => src_dir.join(platform.as_str()),
            };
            locations.push((platform_key(platform), dir));
        }

        Ok(Self { locations })
    }

    /// Look up a location by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Path> {
        self.locations
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, path)| path.as_path())
    }

    /// Look up a location that must exist in the plan
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownLocation`] if the key is not planned.
    pub fn require(&self, key: &str) -> Result<&Path, ScaffoldError> {
        self.get(key)
            .ok_or_else(|| ScaffoldError::UnknownLocation(key.to_string()))
    }

    /// Plugin root directory
    #[must_use]
    pub fn plugin_dir(&self) -> &Path {
        &self.locations[0].1
    }

    /// `src` directory
    #[must_use]
    pub fn src_dir(&self) -> &Path {
        &self.locations[1].1
    }

    /// `www` directory
    #[must_use]
    pub fn www_dir(&self) -> &Path {
        &self.locations[2].1
    }

    /// Directory of a selected platform
    #[must_use]
    pub fn platform_dir(&self, platform: Platform) -> Option<&Path> {
        self.get(&platform_key(platform))
    }

    /// All planned locations as `(key, path)` pairs
    #[must_use]
    pub fn locations(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.locations
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    /// Create every planned directory and its missing ancestors
    ///
    /// Existing directories are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created, for example when a
    /// regular file occupies the path or permissions are missing.
    pub fn materialize(&self) -> Result<()> {
        for (key, path) in self.locations() {
            tracing::debug!(location = key, path = %path.display(), "creating directory");
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        }
        Ok(())
    }
}
