//! Name and description predicates.
//!
//! This module holds the acceptance rules applied to a candidate package name
//! and description. Every function here is pure: identical input always gives
//! identical output, and nothing is logged or written.

use crate::config::GuardConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Maximum number of characters permitted in a package name.
pub const MAX_NAME_CHARS: usize = 214;

/// Default minimum number of characters in a trimmed description.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Node.js core module names that may not be used as package names.
pub const CORE_MODULES: &[&str] = &[
    "assert",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "https",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "stream",
    "string_decoder",
    "timers",
    "tls",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "zlib",
];

/// Prefixes that disqualify any name beginning with them.
pub const RESERVED_PREFIXES: &[&str] = &["node-", "npm-"];

static WELL_FORMED_NAME: Lazy<Regex> =
    Lazy::new(|| compile_regex(r"^[a-z0-9]+(?:-[a-z0-9]+)*$", "package name pattern"));

static VERSION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| compile_regex(r"-\d+\.\d+\.\d+$", "version suffix pattern"));

fn compile_regex(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("invalid {context}: {error}"))
}

/// Why a name was judged reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReservedReason {
    /// The name is a Node.js core module.
    CoreModule,
    /// The name starts with a reserved prefix.
    ReservedPrefix(String),
    /// The name ends with a `-<major>.<minor>.<patch>` suffix.
    VersionSuffix,
    /// The name appears in the configured list of extra reserved names.
    ConfiguredName,
}

impl fmt::Display for ReservedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoreModule => write!(f, "core module"),
            Self::ReservedPrefix(prefix) => write!(f, "reserved prefix `{prefix}`"),
            Self::VersionSuffix => write!(f, "version-like suffix"),
            Self::ConfiguredName => write!(f, "reserved by policy"),
        }
    }
}

/// Returns `true` when `name` is a syntactically legal package name.
///
/// A legal name has 1 to [`MAX_NAME_CHARS`] characters and consists of runs
/// of lowercase ASCII letters and digits separated by single hyphens. Leading,
/// trailing and consecutive hyphens are rejected.
///
/// # Examples
///
/// ```
/// use pregen_guard::is_well_formed;
///
/// assert!(is_well_formed("my-package"));
/// assert!(!is_well_formed("My-Package"));
/// assert!(!is_well_formed("a--b"));
/// ```
#[must_use]
pub fn is_well_formed(name: &str) -> bool {
    let length = name.chars().count();
    (1..=MAX_NAME_CHARS).contains(&length) && WELL_FORMED_NAME.is_match(name)
}

/// Returns `true` unless `name` is reserved by the built-in rules.
///
/// Safe on arbitrary strings, including ones that are not well formed.
///
/// # Examples
///
/// ```
/// use pregen_guard::is_not_reserved;
///
/// assert!(is_not_reserved("my-lib"));
/// assert!(!is_not_reserved("fs"));
/// assert!(!is_not_reserved("node-foo"));
/// ```
#[must_use]
pub fn is_not_reserved(name: &str) -> bool {
    reserved_reason(name).is_none()
}

/// Returns the first built-in rule that reserves `name`, if any.
///
/// Rules are checked in order: core module, reserved prefix, version suffix.
#[must_use]
pub fn reserved_reason(name: &str) -> Option<ReservedReason> {
    if CORE_MODULES.contains(&name) {
        return Some(ReservedReason::CoreModule);
    }

    if let Some(prefix) = RESERVED_PREFIXES
        .iter()
        .find(|prefix| name.starts_with(*prefix))
    {
        return Some(ReservedReason::ReservedPrefix((*prefix).to_owned()));
    }

    VERSION_SUFFIX
        .is_match(name)
        .then_some(ReservedReason::VersionSuffix)
}

/// Returns the first rule that reserves `name` under `config`, if any.
///
/// The built-in rules are consulted first; the configured extra names and
/// prefixes follow.
#[must_use]
pub fn reserved_reason_with(name: &str, config: &GuardConfig) -> Option<ReservedReason> {
    if let Some(reason) = reserved_reason(name) {
        return Some(reason);
    }

    if config.extra_reserved_names.iter().any(|extra| extra == name) {
        return Some(ReservedReason::ConfiguredName);
    }

    config
        .extra_reserved_prefixes
        .iter()
        .find(|prefix| !prefix.is_empty() && name.starts_with(prefix.as_str()))
        .map(|prefix| ReservedReason::ReservedPrefix(prefix.clone()))
}

/// Returns `description` without leading or trailing whitespace.
///
/// Whitespace is the Unicode `White_Space` set plus the ASCII information
/// separators U+001C to U+001F.
#[must_use]
pub fn trim_description(description: &str) -> &str {
    description.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Returns `true` when the trimmed description has at least `min_chars`
/// characters.
#[must_use]
pub fn is_description_long_enough(description: &str, min_chars: usize) -> bool {
    trim_description(description).chars().count() >= min_chars
}
