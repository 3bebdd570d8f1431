//! Plugin generator orchestrator
//!
//! Runs the generation steps in order:
//! 1. Create every planned directory
//! 2. Write the plugin manifest (`package.json`)
//! 3. Render `plugin.xml` and the frontend API module
//! 4. Render one native service per selected platform

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::plan::{platform_key, LocationPlan};
use crate::answers::{AnswerSet, Platform};
use crate::manifest::ManifestDocument;
use crate::templates::{RenderContext, TemplateId, TemplateRenderer};
use crate::writer::format_and_write_file;

/// Generates a plugin skeleton from an answer set
pub struct PluginGenerator<'a> {
    answers: &'a AnswerSet,
    plan: LocationPlan,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> PluginGenerator<'a> {
    /// Create a generator that writes under `working_dir/<id>`
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin layout cannot be planned.
    pub fn new(
        answers: &'a AnswerSet,
        working_dir: &Path,
        renderer: &'a dyn TemplateRenderer,
    ) -> Result<Self> {
        let plan = LocationPlan::new(answers, working_dir)?;
        Ok(Self {
            answers,
            plan,
            renderer,
        })
    }

    /// Create directories and write every file
    ///
    /// Stops at the first failure; files written before it are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written, or a
    /// template fails to render.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        tracing::info!(
            id = %self.answers.id,
            plugin_dir = %self.plan.plugin_dir().display(),
            "generating plugin"
        );

        self.plan.materialize()?;

        let context = RenderContext::new(self.answers);
        let mut generated_files = Vec::new();

        generated_files.push(GeneratedFile::new(
            ManifestDocument::plugin(self.answers).write_to(self.plan.plugin_dir())?,
            "Plugin manifest",
        ));
        generated_files.push(self.render_to(
            TemplateId::PluginXml,
            &context,
            self.plan.plugin_dir().join("plugin.xml"),
            "Plugin descriptor",
        )?);
        generated_files.push(self.render_to(
            TemplateId::Api,
            &context,
            self.plan.www_dir().join(format!("{}.js", self.answers.api_name)),
            "JavaScript API",
        )?);

        for &platform in &self.answers.platforms {
            generated_files.extend(self.generate_platform(platform, &context)?);
        }

        tracing::info!(files = generated_files.len(), "plugin generated");
        Ok(generated_files)
    }

    /// Files for one native platform
    fn generate_platform(
        &self,
        platform: Platform,
        context: &RenderContext<'_>,
    ) -> Result<Vec<GeneratedFile>> {
        let dir = self.plan.require(&platform_key(platform))?;
        let api_name = &self.answers.api_name;
        let mut files = Vec::new();

        let service_path = match platform {
            Platform::Android => dir.join(format!("{api_name}.kt")),
            Platform::Ios => dir.join(format!("{api_name}.swift")),
            Platform::Electron => {
                files.push(GeneratedFile::new(
                    ManifestDocument::electron(self.answers).write_to(dir)?,
                    "Electron manifest",
                ));
                dir.join("index.js")
            }
        };

        files.push(self.render_to(
            TemplateId::for_platform(platform),
            context,
            service_path,
            &format!("{} service", platform.label()),
        )?);

        Ok(files)
    }

    fn render_to(
        &self,
        template: TemplateId,
        context: &RenderContext<'_>,
        path: PathBuf,
        description: &str,
    ) -> Result<GeneratedFile> {
        let content = self.renderer.render(template, context)?;
        format_and_write_file(&path, &content)?;
        Ok(GeneratedFile::new(path, description))
    }
}

/// A file written by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File description for user feedback
    pub description: String,
}

impl GeneratedFile {
    fn new(path: PathBuf, description: &str) -> Self {
        Self {
            path,
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::MiniJinjaRenderer;
    use std::fs;
    use tempfile::tempdir;

    /// Renders the template id and API name, nothing else
    struct StubRenderer;

    impl TemplateRenderer for StubRenderer {
        fn render(&self, template: TemplateId, context: &RenderContext<'_>) -> Result<String> {
            Ok(format!("{} for {}   \n\n", template.asset_name(), context.answers().api_name))
        }
    }

    struct FailingRenderer;

    impl TemplateRenderer for FailingRenderer {
        fn render(&self, template: TemplateId, _context: &RenderContext<'_>) -> Result<String> {
            anyhow::bail!("cannot render {}", template.asset_name())
        }
    }

    fn answers(platforms: Vec<Platform>) -> AnswerSet {
        let android_package = platforms
            .contains(&Platform::Android)
            .then(|| "com.example.sampleplugin".to_string());
        AnswerSet {
            id: "cordova-plugin-sample".to_string(),
            name: "Sample Plugin".to_string(),
            description: "A sample Cordova plugin.".to_string(),
            license: "MIT".to_string(),
            author: String::new(),
            platforms,
            api_name: "SamplePlugin".to_string(),
            android_package,
        }
    }

    #[test]
    fn test_generate_uses_renderer_and_writer() {
        let dir = tempdir().unwrap();
        let set = answers(vec![Platform::Ios]);
        let generator = PluginGenerator::new(&set, dir.path(), &StubRenderer).unwrap();

        let files = generator.generate().unwrap();
        assert_eq!(files.len(), 4);

        let swift = dir.path().join("cordova-plugin-sample/src/ios/SamplePlugin.swift");
        assert_eq!(fs::read_to_string(swift).unwrap(), "ios.swift.j2 for SamplePlugin\n");
    }

    #[test]
    fn test_generate_all_platforms() {
        let dir = tempdir().unwrap();
        let set = answers(vec![Platform::Android, Platform::Ios, Platform::Electron]);
        let renderer = MiniJinjaRenderer::new();
        let generator = PluginGenerator::new(&set, dir.path(), &renderer).unwrap();

        let files = generator.generate().unwrap();
        let root = dir.path().join("cordova-plugin-sample");
        let expected = [
            root.join("package.json"),
            root.join("plugin.xml"),
            root.join("www/SamplePlugin.js"),
            root.join("src/android/com/example/sampleplugin/SamplePlugin.kt"),
            root.join("src/ios/SamplePlugin.swift"),
            root.join("src/electron/package.json"),
            root.join("src/electron/index.js"),
        ];

        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, expected);
        for path in &expected {
            assert!(path.is_file(), "File should exist: {}", path.display());
        }
    }

    #[test]
    fn test_electron_manifest_written_before_service() {
        let dir = tempdir().unwrap();
        let set = answers(vec![Platform::Electron]);
        let generator = PluginGenerator::new(&set, dir.path(), &StubRenderer).unwrap();

        let files = generator.generate().unwrap();
        let descriptions: Vec<_> = files.iter().map(|f| f.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Plugin manifest",
                "Plugin descriptor",
                "JavaScript API",
                "Electron manifest",
                "Electron service"
            ]
        );
    }

    #[test]
    fn test_each_platform_renders_its_own_template() {
        let dir = tempdir().unwrap();
        let set = answers(vec![Platform::Android, Platform::Ios, Platform::Electron]);
        let generator = PluginGenerator::new(&set, dir.path(), &StubRenderer).unwrap();
        generator.generate().unwrap();

        let src = dir.path().join("cordova-plugin-sample/src");
        let rendered = |path: &str| fs::read_to_string(src.join(path)).unwrap();
        assert_eq!(
            rendered("android/com/example/sampleplugin/SamplePlugin.kt"),
            "android.kt.j2 for SamplePlugin\n"
        );
        assert_eq!(rendered("ios/SamplePlugin.swift"), "ios.swift.j2 for SamplePlugin\n");
        assert_eq!(rendered("electron/index.js"), "electron.js.j2 for SamplePlugin\n");
    }

    #[test]
    fn test_render_failure_aborts() {
        let dir = tempdir().unwrap();
        let set = answers(vec![Platform::Ios]);
        let generator = PluginGenerator::new(&set, dir.path(), &FailingRenderer).unwrap();

        let err = generator.generate().unwrap_err();
        assert!(err.to_string().contains("plugin.xml.j2"));
        // Directories and the manifest are already in place
        assert!(dir.path().join("cordova-plugin-sample/package.json").is_file());
        assert!(!dir.path().join("cordova-plugin-sample/plugin.xml").exists());
    }
}
