//! Sources of freshly generated keypairs.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::Keypair;

/// Something that can hand out a new keypair.
///
/// The CLI uses [`RandomSource`]; tests substitute deterministic or failing sources.
pub trait KeypairSource {
    fn generate(&mut self) -> Result<Keypair, GenerationError>;
}

/// Generates keypairs from a cryptographically secure RNG.
#[derive(Debug, Default)]
pub struct RandomSource<R = OsRng> {
    rng: R,
}

impl RandomSource {
    /// Creates a source backed by the operating system's entropy.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    /// Creates a source backed by the given RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> KeypairSource for RandomSource<R> {
    fn generate(&mut self) -> Result<Keypair, GenerationError> {
        Keypair::generate_with(&mut self.rng)
    }
}

/// Failure to produce a keypair.
///
/// The message carries only the cause; callers add their own context.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("{0}")]
    Entropy(#[from] rand::Error),
    #[error("no valid secret key after {attempts} attempts")]
    InvalidKey { attempts: u32 },
    #[error("{0}")]
    Source(String),
}
