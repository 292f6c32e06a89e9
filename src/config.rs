//! Command line configuration.

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

/// Generate a fresh Ethereum wallet and print its address and private key
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Also print a .env snippet (PRIVATE_KEY / WALLET_ADDRESS)
    #[arg(short, long, default_value = "false")]
    pub env: bool,

    /// Print debug logs to stderr
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Config {
    /// Installs the global logger.
    ///
    /// Without `--verbose` only errors would be shown, and this crate never logs at
    /// that level, so stderr stays reserved for the failure line.
    pub fn setup_logging(&self) {
        let mut builder = Builder::new();
        if self.verbose {
            builder.filter_module("eth_keygen", LevelFilter::Debug);
        }

        builder.init();
    }
}
