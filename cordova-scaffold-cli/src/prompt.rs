//! Prompt engine used by the answer collector
//!
//! [`TerminalPrompter`] drives `dialoguer` prompts on the user's terminal.
//! [`ScriptedPrompter`] replays recorded answers for non-interactive runs.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect};
use std::collections::{HashMap, VecDeque};
use std::io;

use crate::error::ScaffoldError;

/// Validation hook for free-text answers; the error is shown before re-prompting
pub type Validator = fn(&str) -> Result<(), String>;

/// Source of answers for the collector
pub trait Prompter {
    /// Ask for a single text value, re-prompting until `validator` accepts it
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Cancelled`] when the user aborts.
    fn input(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, ScaffoldError>;

    /// Ask the user to pick any number of `items`; returns selected indices in item order
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Cancelled`] when the user aborts.
    fn multi_select(
        &mut self,
        field: &'static str,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, ScaffoldError>;
}

/// Interactive prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        field: &'static str,
        prompt: &str,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, ScaffoldError> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true);

        if let Some(validate) = validator {
            input = input.validate_with(move |value: &String| validate(value));
        }

        input
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|err| prompt_error(field, err))
    }

    fn multi_select(
        &mut self,
        field: &'static str,
        prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, ScaffoldError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(defaults)
            .interact_opt()
            .map_err(|err| prompt_error(field, err))?
            .ok_or(ScaffoldError::Cancelled)
    }
}

/// Ctrl-C surfaces as an interrupted read; anything else is a terminal failure
fn prompt_error(field: &'static str, err: dialoguer::Error) -> ScaffoldError {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            ScaffoldError::Cancelled
        }
        other => ScaffoldError::Prompt {
            field,
            reason: other.to_string(),
        },
    }
}

/// Prompter that replays pre-recorded answers
///
/// Fields without a recorded answer take the prompt's default. Rejected
/// answers are counted and the next recorded answer is tried, the same way a
/// user would be asked again.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, VecDeque<String>>,
    selection: Option<Vec<usize>>,
    cancel_at: Option<String>,
    asked: Vec<String>,
    rejections: HashMap<String, usize>,
}

impl ScriptedPrompter {
    /// A prompter that accepts every default
    #[must_use]
    pub fn accepting_defaults() -> Self {
        Self::default()
    }

    /// Queue answers for `field`, consumed one per attempt
    #[must_use]
    pub fn with_answers<'a>(mut self, field: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        self.answers
            .entry(field.to_string())
            .or_default()
            .extend(values.into_iter().map(str::to_string));
        self
    }

    /// Indices to return from the multi-select prompt
    #[must_use]
    pub fn with_selection(mut self, selection: Vec<usize>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Simulate the user aborting when `field` is asked
    #[must_use]
    pub fn cancel_at(mut self, field: &str) -> Self {
        self.cancel_at = Some(field.to_string());
        self
    }

    /// Whether `field` was prompted for
    #[must_use]
    pub fn was_asked(&self, field: &str) -> bool {
        self.asked.iter().any(|asked| asked == field)
    }

    /// How many answers for `field` failed validation
    #[must_use]
    pub fn rejections(&self, field: &str) -> usize {
        self.rejections.get(field).copied().unwrap_or(0)
    }

    fn begin(&mut self, field: &'static str) -> Result<(), ScaffoldError> {
        self.asked.push(field.to_string());
        if self.cancel_at.as_deref() == Some(field) {
            return Err(ScaffoldError::Cancelled);
        }
        Ok(())
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &mut self,
        field: &'static str,
        _prompt: &str,
        default: &str,
        validator: Option<Validator>,
    ) -> Result<String, ScaffoldError> {
        self.begin(field)?;

        loop {
            let recorded = self.answers.get_mut(field).and_then(VecDeque::pop_front);
            let from_script = recorded.is_some();
            let value = recorded.unwrap_or_else(|| default.to_string());

            match validator.map_or(Ok(()), |validate| validate(&value)) {
                Ok(()) => return Ok(value),
                Err(reason) => {
                    *self.rejections.entry(field.to_string()).or_default() += 1;
                    if !from_script {
                        return Err(ScaffoldError::Prompt { field, reason });
                    }
                }
            }
        }
    }

    fn multi_select(
        &mut self,
        field: &'static str,
        _prompt: &str,
        items: &[String],
        defaults: &[bool],
    ) -> Result<Vec<usize>, ScaffoldError> {
        self.begin(field)?;

        let selection = self.selection.clone().unwrap_or_else(|| {
            defaults
                .iter()
                .enumerate()
                .filter_map(|(index, &on)| on.then_some(index))
                .collect()
        });
        let mut selection: Vec<usize> = selection.into_iter().filter(|&i| i < items.len()).collect();
        selection.sort_unstable();
        selection.dedup();
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reject_empty(value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("empty".to_string())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_scripted_uses_default_when_no_answer() {
        let mut prompter = ScriptedPrompter::accepting_defaults();
        let value = prompter.input("name", "Name", "fallback", None).unwrap();
        assert_eq!(value, "fallback");
        assert!(prompter.was_asked("name"));
    }

    #[test]
    fn test_scripted_retries_until_valid() {
        let mut prompter = ScriptedPrompter::accepting_defaults().with_answers("name", ["", "", "ok"]);
        let value = prompter
            .input("name", "Name", "fallback", Some(reject_empty))
            .unwrap();
        assert_eq!(value, "ok");
        assert_eq!(prompter.rejections("name"), 2);
    }

    #[test]
    fn test_scripted_invalid_default_is_an_error() {
        let mut prompter = ScriptedPrompter::accepting_defaults();
        let result = prompter.input("name", "Name", "", Some(reject_empty));
        assert!(matches!(result, Err(ScaffoldError::Prompt { field: "name", .. })));
    }

    #[test]
    fn test_scripted_selection_defaults() {
        let mut prompter = ScriptedPrompter::accepting_defaults();
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let picked = prompter
            .multi_select("platforms", "Pick", &items, &[true, false, true])
            .unwrap();
        assert_eq!(picked, vec![0, 2]);
    }

    #[test]
    fn test_scripted_selection_drops_out_of_range() {
        let mut prompter = ScriptedPrompter::accepting_defaults().with_selection(vec![2, 7, 0]);
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let picked = prompter.multi_select("platforms", "Pick", &items, &[]).unwrap();
        assert_eq!(picked, vec![0, 2]);
    }

    #[test]
    fn test_interrupted_read_is_cancellation() {
        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "ctrl-c"));
        assert!(prompt_error("id", err).is_cancelled());

        let err = dialoguer::Error::IO(io::Error::new(io::ErrorKind::NotFound, "no tty"));
        assert!(matches!(
            prompt_error("id", err),
            ScaffoldError::Prompt { field: "id", .. }
        ));
    }
}
