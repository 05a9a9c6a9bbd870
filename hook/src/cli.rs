//! CLI argument definitions for the pre-generation hook.
//!
//! The scaffolder substitutes the user's answers into the hook invocation, so
//! the interface is deliberately narrow: two required values and an optional
//! policy file.

use camino::Utf8PathBuf;
use clap::Parser;

/// Validate a package name and description before generation.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "pre-gen-project")]
#[command(version, about)]
#[command(long_about = concat!(
    "Validate a package name and description before generation.\n\n",
    "The name must be 1-214 characters of lowercase letters, digits and single ",
    "hyphens, with no leading or trailing hyphen. It must not be a Node.js core ",
    "module, start with `node-` or `npm-`, or end in a version such as `-1.2.3`. ",
    "The description must have at least 10 characters once surrounding ",
    "whitespace is removed.\n\n",
    "On failure an `ERROR:` diagnostic is printed to standard output and the ",
    "hook exits with status 1 so the scaffolder aborts generation.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Accept a valid package:\n",
    "    $ pre-gen-project --package-name cool-tool \\\n",
    "        --package-description \"A perfectly fine description\"\n\n",
    "  Apply a stricter policy:\n",
    "    $ pre-gen-project --config hooks/policy.toml \\\n",
    "        --package-name cool-tool --package-description \"A perfectly fine description\"\n",
))]
pub struct Cli {
    /// Proposed package name.
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub package_name: String,

    /// Proposed package description.
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub package_description: String,

    /// TOML policy file overriding the default validation rules.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}
