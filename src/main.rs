// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count normalized arrays of length `n` over `sigma` symbols and the number
//! of classes they form under unique-element subrange queries, then open an
//! interactive shell over the result.

use clap::Parser;
use distinct_arrays::shell::{write_summary, Shell};
use distinct_arrays::{ArrayParams, Census};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "count-distinct-arrays")]
#[command(about = "Count normalized arrays distinct under unique-element subrange queries")]
struct Cli {
    /// Array length (at most 16).
    n: usize,

    /// Number of distinct symbols (2 <= sigma <= n).
    sigma: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the result and exit without starting the shell.
    #[arg(long)]
    no_shell: bool,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(census: &Census, no_shell: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(census, &mut out)?;
    out.flush()?;
    if no_shell {
        return Ok(());
    }
    Shell::new(census, io::stdin().lock(), out).run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = match ArrayParams::new(cli.n, cli.sigma) {
        Ok(params) => params,
        Err(err) => {
            error!(%err, "invalid parameters");
            eprintln!("error: {}", err);
            return ExitCode::from(2);
        }
    };

    info!(%params, "enumerating normalized arrays");
    let census = Census::build(params);

    match run(&census, cli.no_shell) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "i/o failure");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
