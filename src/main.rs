// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Canonical run: c < 500, report m = 21
//! fibtriples
//!
//! # Smaller bound, also check that 21 is the only shared m-value
//! fibtriples --bound 100 --verify
//!
//! # More diagnostics on stderr
//! RUST_LOG=debug fibtriples
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use num_bigint::BigInt;
use tracing_subscriber::EnvFilter;

use fib_triples::constants::{C_MAX, M_OF_INTEREST, MIN_INDEX};
use fib_triples::report::write_report;
use fib_triples::{Result, SearchContext};

#[derive(Parser, Debug)]
#[command(
    name = "fibtriples",
    version,
    about = "Find m-values shared by more than one minimal Fibonacci triple"
)]
struct Cli {
    /// Exclusive upper bound on triple indices
    #[arg(long, default_value_t = C_MAX as u64, value_parser = clap::value_parser!(u64).range(MIN_INDEX as u64..))]
    bound: u64,

    /// m-value whose group is printed (and must exist)
    #[arg(long = "m", default_value_t = M_OF_INTEREST)]
    m_of_interest: u64,

    /// Fail unless the m-value of interest is the only shared one
    #[arg(long)]
    verify: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = SearchContext::new(cli.bound as usize);
    let outcome = ctx.search()?;
    let m = BigInt::from(cli.m_of_interest);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&outcome.groups, &m, &mut out)?;
    out.flush()?;

    if cli.verify {
        outcome.groups.verify_unique_shared(&m)?;
        tracing::info!(%m, "verified: only shared m-value");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "search failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
