//! `package.json` manifests for the plugin and its Electron service

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::answers::{AnswerSet, Platform};
use crate::writer::format_and_write_file;

/// Manifest file name
pub const PACKAGE_JSON: &str = "package.json";

/// Plugin-system metadata stored under the `cordova` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CordovaSection {
    /// Plugin root: id and supported platforms
    Plugin {
        /// Plugin id
        id: String,
        /// Selected platforms, in selection order
        platforms: Vec<Platform>,
    },
    /// Electron platform package: name of the service the plugin exposes
    Service {
        /// Service name (the API name)
        #[serde(rename = "serviceName")]
        service_name: String,
    },
}

/// Contents of a generated `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDocument {
    /// Package name
    pub name: String,
    /// Package version
    pub version: String,
    /// Description
    pub description: String,
    /// Entry point
    pub main: String,
    /// npm keywords
    pub keywords: Vec<String>,
    /// Author
    pub author: String,
    /// License
    pub license: String,
    /// Plugin-system metadata
    pub cordova: CordovaSection,
}

impl ManifestDocument {
    /// Manifest for the plugin root
    #[must_use]
    pub fn plugin(answers: &AnswerSet) -> Self {
        Self::base(
            answers,
            answers.id.clone(),
            CordovaSection::Plugin {
                id: answers.id.clone(),
                platforms: answers.platforms.clone(),
            },
        )
    }

    /// Manifest for the Electron platform package
    #[must_use]
    pub fn electron(answers: &AnswerSet) -> Self {
        let mut manifest = Self::base(
            answers,
            format!("{}-electron", answers.id),
            CordovaSection::Service {
                service_name: answers.api_name.clone(),
            },
        );
        manifest
            .keywords
            .extend(["electron", "native"].map(str::to_string));
        manifest
    }

    fn base(answers: &AnswerSet, name: String, cordova: CordovaSection) -> Self {
        Self {
            name,
            version: "1.0.0".to_string(),
            description: answers.description.clone(),
            main: "index.js".to_string(),
            keywords: vec!["cordova".to_string(), "plugin".to_string()],
            author: answers.author.clone(),
            license: answers.license.clone(),
            cordova,
        }
    }

    /// Merge this manifest into the `package.json` in `dir` and save it
    ///
    /// # Errors
    ///
    /// Returns an error if an existing manifest cannot be read or parsed, or
    /// if the result cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let mut package = PackageJson::load(dir)?;
        package.update(serde_json::to_value(self).context("Failed to serialize manifest")?)?;
        package.save()?;
        Ok(package.path().to_path_buf())
    }
}

/// A `package.json` file that is read, merged into and saved back
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: PathBuf,
    content: Map<String, Value>,
}

impl PackageJson {
    /// Load `dir/package.json`, or start from an empty object if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON object.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(PACKAGE_JSON);
        if !path.exists() {
            return Ok(Self {
                path,
                content: Map::new(),
            });
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let Value::Object(content) = serde_json::from_str::<Value>(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?
        else {
            bail!("Manifest is not a JSON object: {}", path.display());
        };

        Ok(Self { path, content })
    }

    /// Merge top-level keys of `value` into the manifest
    ///
    /// Existing keys are replaced in place; new keys are appended.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object.
    pub fn update(&mut self, value: Value) -> Result<()> {
        let Value::Object(fields) = value else {
            bail!("Manifest update must be a JSON object");
        };
        for (key, field) in fields {
            self.content.insert(key, field);
        }
        Ok(())
    }

    /// Current manifest content
    #[must_use]
    pub const fn content(&self) -> &Map<String, Value> {
        &self.content
    }

    /// Location of the manifest file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the manifest with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.content).context("Failed to serialize manifest")?;
        format_and_write_file(&self.path, &json)
    }
}
