//! Package name and description checks for scaffolding pre-generation hooks.
//!
//! A scaffolder substitutes the user's proposed package name and description
//! into its pre-generation hook. This crate decides whether both are
//! acceptable before any file is generated:
//!
//! - the name must be well formed (lowercase letters, digits and single
//!   hyphens, 1-214 characters);
//! - the name must not be reserved (a Node.js core module, a `node-` or
//!   `npm-` prefix, or a version-like suffix);
//! - the trimmed description must be long enough to be meaningful.
//!
//! # Modules
//!
//! - [`config`] - Validation policy loaded from TOML
//! - [`error`] - Validation and configuration error types
//! - [`package_name`] - Semantic wrapper for accepted package names
//! - [`rules`] - The name and description predicates
//! - [`validate`] - The ordered validation sequence and its diagnostics

pub mod config;
pub mod error;
pub mod package_name;
pub mod rules;
pub mod validate;

pub use config::GuardConfig;
pub use error::{ConfigError, ValidationError};
pub use package_name::PackageName;
pub use rules::{
    ReservedReason, is_description_long_enough, is_not_reserved, is_well_formed, reserved_reason,
    trim_description,
};
pub use validate::{validate, validate_and_report, validate_with};
