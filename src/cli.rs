//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lintsync",
    version,
    about = "Regenerate lint tables and registration lists",
    long_about = "lintsync — scan the source tree for `declare_lint!` invocations and regenerate the lint table and lint count in README.md and the lint group registration list in src/lib.rs.\n\nConfiguration precedence: CLI > lintsync.toml > defaults.",
    after_help = "Examples:\n  lintsync\n  lintsync -n\n  lintsync -c\n  lintsync --check --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue, help = "Only print the new lint table to stdout")]
    pub print_only: bool,
    #[arg(short = 'c', long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if a file would change (never writes)")]
    pub check: bool,
    #[arg(long, help = "Repository root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging")]
    pub verbose: bool,
}
