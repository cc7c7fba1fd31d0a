//! lintsync CLI binary entry point.
//! Collects lints, then prints the table or regenerates the target regions.

use clap::Parser;
use lintsync::cli::Cli;
use lintsync::config::{self, Effective};
use lintsync::{collect, output, update, utils};

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

/// Run one invocation and return the process exit status.
fn run(cli: &Cli, eff: &Effective) -> lintsync::Result<i32> {
    let lints = collect::collect_lints(
        &eff.repo_root,
        &eff.source_dir,
        &eff.extension,
        &eff.macro_name,
    )?;

    if cli.print_only {
        output::print_table(&lints, &eff.output)?;
        return Ok(0);
    }

    let write = !cli.check;
    let updates = update::run_update(eff, &lints, write)?;
    output::print_updates(&updates, lints.len(), &eff.output, write);

    if cli.check && updates.iter().any(|u| u.changed) {
        output::print_check_reminder(&eff.output);
        return Ok(1);
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let eff = config::resolve_effective(cli.repo_root.as_deref(), cli.output.as_deref());

    // Refuse to run outside a project checkout
    if !eff.has_marker() {
        eprintln!(
            "{} {} not found under {}; call lintsync from the project checkout directory (or pass --repo-root)",
            utils::error_prefix(),
            eff.marker,
            eff.repo_root.display()
        );
        std::process::exit(2);
    }
    if !eff.config_loaded {
        log::debug!("no lintsync config found; using defaults");
    }

    match run(&cli, &eff) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
