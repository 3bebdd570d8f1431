//! Plugin scaffolding: layout planning and file generation

pub mod generator;
pub mod plan;

pub use generator::{GeneratedFile, PluginGenerator};
pub use plan::LocationPlan;
