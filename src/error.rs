//! Error types for package name validation.
//!
//! [`ValidationError`] carries the three ways a candidate can fail and knows
//! how to render itself as the `ERROR:` lines the scaffolder shows the user.
//! [`ConfigError`] covers problems loading a policy file.

use crate::rules::{MAX_NAME_CHARS, ReservedReason};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Ways a candidate name and description can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name does not follow the package name syntax.
    #[error("'{name}' is not a valid npm package name")]
    MalformedName {
        /// The rejected name.
        name: String,
    },

    /// The name is well formed but reserved.
    #[error("'{name}' is reserved or forbidden ({reason})")]
    ReservedName {
        /// The rejected name.
        name: String,
        /// The rule that reserves it.
        reason: ReservedReason,
    },

    /// The trimmed description is shorter than the configured minimum.
    #[error("the description must be at least {min_chars} characters long")]
    DescriptionTooShort {
        /// Characters in the trimmed description.
        actual_chars: usize,
        /// Characters required.
        min_chars: usize,
    },
}

impl ValidationError {
    /// Renders the user-facing diagnostic, one entry per output line.
    ///
    /// The first line always starts with `ERROR:`.
    #[must_use]
    pub fn diagnostic_lines(&self) -> Vec<String> {
        match self {
            Self::MalformedName { name } => vec![
                format!("ERROR: '{name}' is not a valid npm package name."),
                format!(
                    "It must be 1-{MAX_NAME_CHARS} chars of lowercase letters, digits or single hyphens, with no leading or trailing hyphen."
                ),
            ],
            Self::ReservedName { name, reason } => {
                vec![format!("ERROR: '{name}' is reserved or forbidden ({reason}).")]
            }
            Self::DescriptionTooShort { min_chars, .. } => vec![format!(
                "ERROR: The description must be at least {min_chars} characters long."
            )],
        }
    }
}

/// Errors raised while loading a validation policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy file could not be read.
    #[error("failed to read policy file {path}")]
    Read {
        /// Path of the policy file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The policy source is not valid TOML or does not match the schema.
    #[error("invalid policy: {source}")]
    Parse {
        /// The underlying TOML error.
        #[source]
        source: Box<toml::de::Error>,
    },
}
