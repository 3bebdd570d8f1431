//! Plugin answers collected from the developer
//!
//! The [`AnswerSet`] is built once by [`AnswerSet::collect`] from a
//! [`Prompter`] and is read-only for the rest of the run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::config::PromptDefaults;
use crate::error::ScaffoldError;
use crate::prompt::Prompter;

/// Pattern a plugin id must match (`cordova-plugin-sample`, `com.acme.thing`)
pub const ID_PATTERN: &str = r"^[a-z0-9]+(?:[-.][a-z0-9]+)*$";

/// Pattern an Android package identifier must match
pub const ANDROID_PACKAGE_PATTERN: &str = r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$";

/// Target platform a plugin can ship native code for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android (Kotlin)
    Android,
    /// iOS (Swift)
    Ios,
    /// Electron (Node.js)
    Electron,
}

impl Platform {
    /// Every platform, in prompt display order
    pub const ALL: [Self; 3] = [Self::Android, Self::Ios, Self::Electron];

    /// Lowercase identifier used in manifests and directory names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Electron => "electron",
        }
    }

    /// Human-readable label for prompts
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Android => "Android",
            Self::Ios => "iOS",
            Self::Electron => "Electron",
        }
    }

    /// Display group the platform belongs to
    #[must_use]
    pub const fn group(self) -> &'static str {
        match self {
            Self::Android | Self::Ios => "Mobile",
            Self::Electron => "Desktop",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    /// Plugin id, also the npm package name and the output directory name
    pub id: String,
    /// Human-readable plugin name
    pub name: String,
    /// Plugin description
    pub description: String,
    /// SPDX license identifier
    pub license: String,
    /// Author, may be empty
    pub author: String,
    /// Selected platforms, in selection order
    pub platforms: Vec<Platform>,
    /// Name used for generated classes and files
    pub api_name: String,
    /// Android package, present only when Android is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_package: Option<String>,
}

impl AnswerSet {
    /// Run the prompt sequence and build an answer set
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Cancelled`] if the user aborts any prompt,
    /// or [`ScaffoldError::Prompt`] if the terminal cannot be read.
    pub fn collect(
        prompter: &mut dyn Prompter,
        defaults: &PromptDefaults,
    ) -> Result<Self, ScaffoldError> {
        let id = prompter.input("id", "Plugin ID", &defaults.id, Some(validate_id))?;
        let name = prompter.input("name", "Plugin name", &defaults.name, None)?;
        let description =
            prompter.input("description", "Description", &defaults.description, None)?;
        let license = prompter.input("license", "License", &defaults.license, None)?;
        let author = prompter.input("author", "Author", &defaults.author, None)?;

        let items: Vec<String> = Platform::ALL
            .iter()
            .map(|p| format!("{} › {}", p.group(), p.label()))
            .collect();
        let preselected: Vec<bool> = Platform::ALL
            .iter()
            .map(|p| defaults.platforms.contains(p))
            .collect();
        let platforms: Vec<Platform> = prompter
            .multi_select("platforms", "Platforms", &items, &preselected)?
            .into_iter()
            .filter_map(|index| Platform::ALL.get(index).copied())
            .collect();

        let api_name = prompter.input("apiName", "API name", &defaults.api_name, None)?;

        let android_package = if platforms.contains(&Platform::Android) {
            Some(prompter.input(
                "androidPackage",
                "Android package",
                &defaults.android_package,
                Some(validate_android_package),
            )?)
        } else {
            None
        };

        Ok(Self {
            id,
            name,
            description,
            license,
            author,
            platforms,
            api_name,
            android_package,
        })
    }

    /// Whether the given platform was selected
    #[must_use]
    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

fn id_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(ID_PATTERN).expect("Invalid regex"))
}

fn android_package_regex() -> &'static regex::Regex {
    static RE: OnceLock<regex::Regex> = OnceLock::new();
    RE.get_or_init(|| regex::Regex::new(ANDROID_PACKAGE_PATTERN).expect("Invalid regex"))
}

/// Check a plugin id against [`ID_PATTERN`]
///
/// # Errors
///
/// Returns the message shown to the user before re-prompting.
pub fn validate_id(input: &str) -> Result<(), String> {
    if id_regex().is_match(input) {
        Ok(())
    } else {
        Err("Invalid plugin ID: use lowercase letters and digits separated by '-' or '.'".to_string())
    }
}

/// Check an Android package against [`ANDROID_PACKAGE_PATTERN`]
///
/// # Errors
///
/// Returns the message shown to the user before re-prompting.
pub fn validate_android_package(input: &str) -> Result<(), String> {
    if android_package_regex().is_match(input) {
        Ok(())
    } else {
        Err("Invalid package name: use lowercase dot-separated segments starting with a letter"
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    #[test]
    fn test_valid_ids() {
        for id in ["cordova-plugin-sample", "a", "a1", "com.example.plugin", "x-1.y-2"] {
            assert!(validate_id(id).is_ok(), "id should be valid: {id}");
        }
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["", "Cordova", "-plugin", "plugin-", "a..b", "a--b", "my plugin", "a_b"] {
            assert!(validate_id(id).is_err(), "id should be invalid: {id}");
        }
    }

    #[test]
    fn test_valid_android_packages() {
        for pkg in ["com.example.sampleplugin", "com", "io.my_app.v2", "a.b_c"] {
            assert!(validate_android_package(pkg).is_ok(), "package should be valid: {pkg}");
        }
    }

    #[test]
    fn test_invalid_android_packages() {
        for pkg in ["Com.Example", "com.1example", "com..example", ".com", "com.", "com-example"] {
            assert!(
                validate_android_package(pkg).is_err(),
                "package should be invalid: {pkg}"
            );
        }
    }

    #[test]
    fn test_platform_strings() {
        assert_eq!(Platform::Android.as_str(), "android");
        assert_eq!(Platform::Ios.to_string(), "ios");
        assert_eq!(Platform::Electron.group(), "Desktop");
        assert_eq!(Platform::Ios.group(), "Mobile");
    }

    #[test]
    fn test_collect_accepts_defaults() {
        let mut prompter = ScriptedPrompter::accepting_defaults();
        let answers = AnswerSet::collect(&mut prompter, &PromptDefaults::default()).unwrap();

        assert_eq!(answers.id, "cordova-plugin-sample");
        assert_eq!(answers.license, "MIT");
        assert_eq!(answers.author, "");
        assert_eq!(answers.api_name, "SamplePlugin");
        assert_eq!(answers.platforms, vec![Platform::Android, Platform::Ios]);
        assert_eq!(
            answers.android_package.as_deref(),
            Some("com.example.sampleplugin")
        );
    }

    #[test]
    fn test_collect_skips_package_without_android() {
        let mut prompter = ScriptedPrompter::accepting_defaults().with_selection(vec![1]);
        let answers = AnswerSet::collect(&mut prompter, &PromptDefaults::default()).unwrap();

        assert_eq!(answers.platforms, vec![Platform::Ios]);
        assert_eq!(answers.android_package, None);
        assert!(!prompter.was_asked("androidPackage"));
    }

    #[test]
    fn test_uppercase_package_is_reprompted() {
        let mut prompter = ScriptedPrompter::accepting_defaults()
            .with_selection(vec![0])
            .with_answers("androidPackage", ["Com.Example", "com.example"]);
        let answers = AnswerSet::collect(&mut prompter, &PromptDefaults::default()).unwrap();

        assert_eq!(answers.android_package.as_deref(), Some("com.example"));
        assert_eq!(prompter.rejections("androidPackage"), 1);
    }

    #[test]
    fn test_invalid_id_is_reprompted() {
        let mut prompter = ScriptedPrompter::accepting_defaults()
            .with_answers("id", ["My Plugin", "my-plugin"]);
        let answers = AnswerSet::collect(&mut prompter, &PromptDefaults::default()).unwrap();

        assert_eq!(answers.id, "my-plugin");
        assert_eq!(prompter.rejections("id"), 1);
    }

    #[test]
    fn test_cancellation_stops_collection() {
        let mut prompter = ScriptedPrompter::accepting_defaults().cancel_at("license");
        let result = AnswerSet::collect(&mut prompter, &PromptDefaults::default());

        assert!(matches!(result, Err(ScaffoldError::Cancelled)));
        assert!(!prompter.was_asked("platforms"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let answers = AnswerSet {
            id: "p".to_string(),
            name: "P".to_string(),
            description: String::new(),
            license: "MIT".to_string(),
            author: String::new(),
            platforms: vec![Platform::Ios],
            api_name: "Api".to_string(),
            android_package: None,
        };
        let value = serde_json::to_value(&answers).unwrap();
        assert_eq!(value["apiName"], "Api");
        assert_eq!(value["platforms"], serde_json::json!(["ios"]));
        assert!(value.get("androidPackage").is_none());
    }
}
