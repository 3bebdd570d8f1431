//! Plugin scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use crate::answers::AnswerSet;
use crate::config::ScaffoldConfig;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::scaffold::{GeneratedFile, PluginGenerator};
use crate::templates::MiniJinjaRenderer;

/// Create a new Cordova plugin in the working directory
pub struct NewCommand {
    working_dir: PathBuf,
    config: ScaffoldConfig,
}

impl NewCommand {
    /// Create a command for `working_dir`, loading configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is invalid.
    pub fn new(working_dir: PathBuf) -> Result<Self> {
        let config = ScaffoldConfig::load(&working_dir).context("Failed to load configuration")?;
        Ok(Self::with_config(working_dir, config))
    }

    /// Create a command with an explicit configuration
    #[must_use]
    pub const fn with_config(working_dir: PathBuf, config: ScaffoldConfig) -> Self {
        Self { working_dir, config }
    }

    /// Execute the command with interactive terminal prompts
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaffoldError::Cancelled`] if the user aborts the
    /// prompts, or an error if generation fails.
    pub fn execute(&self) -> Result<Vec<GeneratedFile>> {
        let mut prompter = TerminalPrompter::new();
        self.run(&mut prompter)
    }

    /// Execute the command with answers from `prompter`
    ///
    /// Nothing is written to disk until every answer has been collected.
    ///
    /// # Errors
    ///
    /// Returns an error if answer collection or generation fails.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<Vec<GeneratedFile>> {
        println!(
            "{} {}",
            style("Creating").green().bold(),
            style("Cordova plugin").bold()
        );
        println!();

        let answers = AnswerSet::collect(prompter, &self.config.defaults)?;
        tracing::debug!(?answers, "answers collected");

        let renderer = self
            .config
            .template_dir()
            .map_or_else(MiniJinjaRenderer::new, MiniJinjaRenderer::with_override_dir);
        let generator = PluginGenerator::new(&answers, &self.working_dir, &renderer)?;

        #[allow(clippy::literal_string_with_formatting_args)]
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?;
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating plugin files...");

        let result = generator.generate();
        spinner.finish_and_clear();
        let files = result?;

        Self::print_success(&answers, &files);
        Ok(files)
    }

    /// Print the generated files and next steps
    fn print_success(answers: &AnswerSet, files: &[GeneratedFile]) {
        println!("{}", style("✓ Plugin created successfully!").green().bold());
        println!();
        for file in files {
            println!(
                "  {} {} {}",
                style("create").green(),
                file.path.display(),
                style(format!("({})", file.description)).dim()
            );
        }
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Add the plugin to a Cordova app:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cordova plugin add ../{}", answers.id)).cyan()
        );
        println!();
        println!("  {} Call it from JavaScript:", style("2.").cyan());
        println!(
            "     {}",
            style(format!(
                "cordova.plugins.{}.coolMethod('hello', console.log, console.error)",
                answers.api_name
            ))
            .cyan()
        );
        println!();
    }
}
