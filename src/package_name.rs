//! Semantic wrapper for accepted package names.
//!
//! This module provides the [`PackageName`] newtype. Unlike a raw string, a
//! `PackageName` can only be obtained through [`PackageName::parse`], so
//! holding one proves the name passed both the syntax and reservation rules.

use crate::config::GuardConfig;
use crate::error::ValidationError;
use crate::rules::{is_well_formed, reserved_reason_with};
use std::fmt;
use std::str::FromStr;

/// A package name that is well formed and not reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    /// Validates `name` against the built-in rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedName`] or
    /// [`ValidationError::ReservedName`] when `name` is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pregen_guard::PackageName;
    ///
    /// let name = PackageName::parse("cool-tool")?;
    /// assert_eq!(name.as_str(), "cool-tool");
    /// assert!(PackageName::parse("http").is_err());
    /// # Ok::<(), pregen_guard::ValidationError>(())
    /// ```
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        Self::parse_with(name, &GuardConfig::default())
    }

    /// Validates `name` against the built-in rules and `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedName`] or
    /// [`ValidationError::ReservedName`] when `name` is rejected.
    pub fn parse_with(name: &str, config: &GuardConfig) -> Result<Self, ValidationError> {
        if !is_well_formed(name) {
            return Err(ValidationError::MalformedName {
                name: name.to_owned(),
            });
        }

        match reserved_reason_with(name, config) {
            Some(reason) => Err(ValidationError::ReservedName {
                name: name.to_owned(),
                reason,
            }),
            None => Ok(Self(name.to_owned())),
        }
    }

    /// Get the package name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for PackageName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ReservedReason;

    #[test]
    fn parse_accepts_valid_names() {
        let name: PackageName = "my-lib".parse().expect("valid name");
        assert_eq!(name.to_string(), "my-lib");
        assert_eq!(name.into_inner(), "my-lib");
    }

    #[test]
    fn parse_reports_malformed_before_reserved() {
        // `node-` names with uppercase are malformed first.
        let err = PackageName::parse("node-Foo").expect_err("malformed");
        assert!(matches!(err, ValidationError::MalformedName { .. }));
    }

    #[test]
    fn parse_reports_reserved_reason() {
        let err = PackageName::parse("npm-bar").expect_err("reserved");
        assert_eq!(
            err,
            ValidationError::ReservedName {
                name: "npm-bar".to_owned(),
                reason: ReservedReason::ReservedPrefix("npm-".to_owned()),
            }
        );
    }

    #[test]
    fn parse_with_consults_configuration() {
        let config = GuardConfig {
            extra_reserved_names: vec!["cool-tool".to_owned()],
            ..GuardConfig::default()
        };
        assert!(PackageName::parse("cool-tool").is_ok());
        assert!(PackageName::parse_with("cool-tool", &config).is_err());
    }
}
