//! # eth_keygen
//!
//! Generates a single Ethereum wallet and prints its address and private key.
//!
//! ## Architecture
//!
//! - `crypto`: Key generation, address derivation and EIP-55 checksums
//! - `source`: The pluggable keypair source used by the CLI
//! - `report`: Console output
//! - `app`: Ties a source to the report for one run
//! - `config`: Command line configuration and logging setup

pub mod app;
pub mod config;
pub mod crypto;
pub mod report;
pub mod source;

pub use app::RunError;
pub use config::Config;
pub use crypto::{Address, AddressError, KeyError, Keypair};
pub use source::{GenerationError, KeypairSource, RandomSource};
