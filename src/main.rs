use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use nbtoc::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Debug output goes to stderr so stdout stays pure TOC.
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "nbtoc", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let Some(path) = cli.notebook.as_deref() else {
        eprintln!("error: no notebook given");
        return ExitCode::FAILURE;
    };

    let toc = match nbtoc::generate_toc_from_path(path, &cli.toc_options()) {
        Ok(toc) => toc,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    if let Err(e) = writeln!(out, "{toc}").and_then(|()| out.flush()) {
        eprintln!("error: writing output: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
