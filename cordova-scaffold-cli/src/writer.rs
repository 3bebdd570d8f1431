//! Normalized file output
//!
//! Every generated file goes through [`format_and_write_file`] so output is
//! stable across runs regardless of how templates are indented.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Strip trailing whitespace from each line and end with exactly one newline
///
/// `\r\n` line endings become `\n`. Trailing blank lines are dropped.
#[must_use]
pub fn normalize(content: &str) -> String {
    let mut output = String::with_capacity(content.len() + 1);
    for line in content.lines() {
        output.push_str(line.trim_end());
        output.push('\n');
    }

    let kept = output.trim_end_matches('\n').len();
    output.truncate(kept);
    output.push('\n');
    output
}

/// Normalize `content` and write it to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn format_and_write_file(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "writing file");
    fs::write(path, normalize(content))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
