//! Pre-generation hook library.
//!
//! This crate wires the [`pregen_guard`] checks to the process boundary: it
//! parses the scaffolder's substituted values, loads an optional policy file,
//! and maps the outcome to an exit code. It backs the `pre-gen-project`
//! binary and can be driven directly from tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`runner`] - Policy loading and exit-code mapping

pub mod cli;
pub mod runner;
