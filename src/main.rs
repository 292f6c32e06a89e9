//! Ethereum Wallet Generator CLI
//!
//! Usage:
//!   eth_keygen          # Print a new address and private key
//!   eth_keygen --env    # Also print a .env snippet

use std::io;
use std::process;

use clap::Parser;

use eth_keygen::{app, Config, RandomSource, RunError};

fn main() {
    let config = Config::parse();
    config.setup_logging();

    let mut source = RandomSource::new();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = app::run(&mut source, &config, &mut stdout.lock(), &mut stderr.lock());

    match result {
        Ok(_) => {}
        // Already reported by `app::run`
        Err(RunError::Generation(_)) => process::exit(1),
        Err(e @ RunError::Output(_)) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
