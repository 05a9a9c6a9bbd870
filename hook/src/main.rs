//! Pre-generation hook entrypoint.
//!
//! Validates the package name and description substituted by the scaffolder
//! and exits with status 1 when generation must not proceed.

use clap::Parser;
use pregen_guard_hook::cli::Cli;
use pregen_guard_hook::runner::run;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let exit_code = run(&cli, &mut stdout);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
