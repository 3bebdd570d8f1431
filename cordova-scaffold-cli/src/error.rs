//! Domain errors the command entry point needs to tell apart
//!
//! Everything else (filesystem, rendering, manifest I/O) travels as
//! `anyhow::Error` with context attached at the failing step.

use thiserror::Error;

/// Errors raised while collecting answers or planning the plugin layout
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user aborted the interactive session
    #[error("plugin generation was cancelled by the user")]
    Cancelled,

    /// The prompt engine failed for a reason other than cancellation
    #[error("failed to read answer for '{field}': {reason}")]
    Prompt {
        /// Answer field being collected
        field: &'static str,
        /// Underlying terminal error
        reason: String,
    },

    /// Android was selected but no package identifier was collected
    #[error("android platform selected without an android package identifier")]
    MissingAndroidPackage,

    /// A location key was looked up that the plan does not contain
    #[error("location '{0}' is not part of the plugin layout")]
    UnknownLocation(String),
}

impl ScaffoldError {
    /// Whether this error represents a user cancellation
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_is_detected_through_anyhow() {
        let err = anyhow::Error::from(ScaffoldError::Cancelled);
        let cancelled = err
            .downcast_ref::<ScaffoldError>()
            .is_some_and(ScaffoldError::is_cancelled);
        assert!(cancelled);
    }

    #[test]
    fn test_prompt_error_message() {
        let err = ScaffoldError::Prompt {
            field: "id",
            reason: "not a terminal".to_string(),
        };
        assert_eq!(err.to_string(), "failed to read answer for 'id': not a terminal");
    }
}
