use clap::Parser;
use git_issues::{
    IssuesError,
    cli::{Cli, execute},
    config::QueryConfig,
    logging::init_logging,
};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = QueryConfig::from_cli(&cli).and_then(|config| execute(&config));

    if let Err(e) = result {
        handle_error(&e);
    }
}

/// Print a human-readable error with an optional hint and exit.
fn handle_error(err: &IssuesError) -> ! {
    let use_color = io::stderr().is_terminal();
    if use_color {
        eprintln!("\x1b[1;31merror:\x1b[0m {err}");
    } else {
        eprintln!("error: {err}");
    }
    if let Some(hint) = err.suggestion() {
        eprintln!("  hint: {hint}");
    }

    std::process::exit(err.exit_code());
}
