//! Cordova plugin scaffolding library
//!
//! Collects plugin metadata, plans the plugin layout and writes the
//! manifest, `plugin.xml`, the JavaScript API and one native service per
//! selected platform.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]

pub mod answers;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod observability;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod writer;

pub use answers::{AnswerSet, Platform};
pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use manifest::{ManifestDocument, PackageJson};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use scaffold::{GeneratedFile, LocationPlan, PluginGenerator};
pub use templates::{MiniJinjaRenderer, RenderContext, TemplateId, TemplateRenderer};
