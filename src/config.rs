//! Validation policy loaded from TOML.
//!
//! The hook runs with [`GuardConfig::default`] unless the scaffolder points it
//! at a policy file. The defaults reproduce the built-in rules exactly; a
//! policy file can only tighten them by raising the description minimum or
//! reserving additional names and prefixes.

use crate::error::ConfigError;
use crate::rules::MIN_DESCRIPTION_CHARS;
use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

/// Validation policy for package names and descriptions.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuardConfig {
    /// Minimum number of characters in the trimmed description.
    pub min_description_chars: usize,
    /// Names rejected in addition to the Node.js core modules.
    pub extra_reserved_names: Vec<String>,
    /// Prefixes rejected in addition to `node-` and `npm-`.
    pub extra_reserved_prefixes: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_description_chars: MIN_DESCRIPTION_CHARS,
            extra_reserved_names: Vec::new(),
            extra_reserved_prefixes: Vec::new(),
        }
    }
}

impl GuardConfig {
    /// Parses a policy from TOML source.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected so
    /// that typos do not silently weaken the policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the source is not valid TOML or
    /// does not match the policy schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use pregen_guard::GuardConfig;
    ///
    /// let config = GuardConfig::from_toml_str("min_description_chars = 20\n")?;
    /// assert_eq!(config.min_description_chars, 20);
    /// assert!(config.extra_reserved_names.is_empty());
    /// # Ok::<(), pregen_guard::ConfigError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source_error| ConfigError::Parse {
            source: Box::new(source_error),
        })
    }

    /// Reads and parses the policy file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |candidate| std::fs::read_to_string(candidate))
    }

    /// Loads the policy at `path` using the supplied reader.
    ///
    /// This exists so tests can simulate file contents and read failures
    /// without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when `reader` fails and
    /// [`ConfigError::Parse`] when the returned contents are invalid.
    pub fn load_with<F>(path: &Utf8Path, reader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> std::io::Result<String>,
    {
        debug!("loading validation policy from {path}");
        let contents = reader(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(
            "validation policy: min_description_chars={}, extra names={}, extra prefixes={}",
            config.min_description_chars,
            config.extra_reserved_names.len(),
            config.extra_reserved_prefixes.len()
        );
        Ok(config)
    }
}
