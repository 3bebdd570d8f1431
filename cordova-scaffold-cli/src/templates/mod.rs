//! Template rendering for generated plugin files
//!
//! [`TemplateRenderer`] is the seam the generator renders through;
//! [`MiniJinjaRenderer`] is the default implementation backed by the
//! embedded sources in [`assets`], with optional per-file overrides read from
//! a template directory.

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::answers::{AnswerSet, Platform};

pub mod assets;

/// The templates a plugin is generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// `plugin.xml` descriptor
    PluginXml,
    /// Frontend API module in `www/`
    Api,
    /// Android service
    Android,
    /// iOS service
    Ios,
    /// Electron service
    Electron,
}

impl TemplateId {
    /// Every template
    pub const ALL: [Self; 5] = [
        Self::PluginXml,
        Self::Api,
        Self::Android,
        Self::Ios,
        Self::Electron,
    ];

    /// File name of the template asset
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::PluginXml => "plugin.xml.j2",
            Self::Api => "api.js.j2",
            Self::Android => "android.kt.j2",
            Self::Ios => "ios.swift.j2",
            Self::Electron => "electron.js.j2",
        }
    }

    /// Embedded default source
    #[must_use]
    pub const fn embedded_source(self) -> &'static str {
        match self {
            Self::PluginXml => assets::PLUGIN_XML,
            Self::Api => assets::API_JS,
            Self::Android => assets::ANDROID_KT,
            Self::Ios => assets::IOS_SWIFT,
            Self::Electron => assets::ELECTRON_JS,
        }
    }

    /// Native service template for a platform
    #[must_use]
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::Android,
            Platform::Ios => Self::Ios,
            Platform::Electron => Self::Electron,
        }
    }
}

/// Values available to templates: every answer plus derived fields
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext<'a> {
    #[serde(flatten)]
    answers: &'a AnswerSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    android_package_path: Option<String>,
    has_android: bool,
}

impl<'a> RenderContext<'a> {
    /// Build the context for `answers`
    #[must_use]
    pub fn new(answers: &'a AnswerSet) -> Self {
        Self {
            answers,
            android_package_path: answers
                .android_package
                .as_deref()
                .map(|package| package.replace('.', "/")),
            has_android: answers.has_platform(Platform::Android),
        }
    }

    /// Answers the context was built from
    #[must_use]
    pub const fn answers(&self) -> &AnswerSet {
        self.answers
    }

    /// Android package as a `/`-separated path, when Android is selected
    #[must_use]
    pub fn android_package_path(&self) -> Option<&str> {
        self.android_package_path.as_deref()
    }
}

/// Renders a template for a context
pub trait TemplateRenderer {
    /// Render `template` with `context`
    ///
    /// # Errors
    ///
    /// Returns an error if the template source cannot be loaded, is invalid,
    /// or references a value the context does not define.
    fn render(&self, template: TemplateId, context: &RenderContext<'_>) -> Result<String>;
}

/// Minijinja-backed renderer over embedded templates with directory overrides
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
    override_dir: Option<PathBuf>,
}

impl MiniJinjaRenderer {
    /// Renderer using only the embedded templates
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Generated files are source code, not HTML
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("xml", escape_xml);

        Self {
            env,
            override_dir: None,
        }
    }

    /// Renderer that prefers templates found in `dir`
    #[must_use]
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
            ..Self::new()
        }
    }

    /// Directory searched for template overrides, if any
    #[must_use]
    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    /// Source for `template`: the override file if present, else the embedded copy
    ///
    /// # Errors
    ///
    /// Returns an error if an override file exists but cannot be read.
    pub fn source(&self, template: TemplateId) -> Result<Cow<'static, str>> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(template.asset_name());
            if path.is_file() {
                tracing::warn!(path = %path.display(), "using template override");
                let source = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read template: {}", path.display()))?;
                return Ok(Cow::Owned(source));
            }
        }
        Ok(Cow::Borrowed(template.embedded_source()))
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: TemplateId, context: &RenderContext<'_>) -> Result<String> {
        let source = self.source(template)?;
        self.env
            .render_named_str(template.asset_name(), &source, context)
            .with_context(|| format!("Failed to render template: {}", template.asset_name()))
    }
}

/// Escape text for use in XML content and attribute values
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
