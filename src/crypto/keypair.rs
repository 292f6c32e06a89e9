//! Ethereum keypair generation.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tiny_keccak::{Hasher, Keccak};

use super::Address;
use crate::source::GenerationError;

/// How many times a random draw is retried when it is not a valid secp256k1 scalar.
const MAX_ATTEMPTS: u32 = 8;

/// Represents an Ethereum keypair (private key + derived address).
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    /// The private key bytes (32 bytes)
    secret_key: [u8; 32],
    /// The derived Ethereum address
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair from the operating system's entropy source.
    pub fn generate() -> Result<Self, GenerationError> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new random keypair using the supplied RNG.
    ///
    /// Draws 32 bytes and keeps them if they form a valid secret key. Out of range
    /// draws are retried a bounded number of times.
    pub fn generate_with<R>(rng: &mut R) -> Result<Self, GenerationError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let secp = Secp256k1::signing_only();
        let mut secret_bytes = [0u8; 32];

        for attempt in 1..=MAX_ATTEMPTS {
            rng.try_fill_bytes(&mut secret_bytes)?;

            match SecretKey::from_slice(&secret_bytes) {
                Ok(secret_key) => {
                    let public_key = PublicKey::from_secret_key(&secp, &secret_key);
                    return Ok(Self {
                        secret_key: secret_key.secret_bytes(),
                        address: Self::derive_address(&public_key),
                    });
                }
                Err(_) => log::debug!("Discarding out of range scalar (attempt {})", attempt),
            }
        }

        Err(GenerationError::InvalidKey {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Builds a keypair from an existing secret key.
    pub fn from_secret_key(secret_bytes: [u8; 32]) -> Result<Self, KeyError> {
        let secp = Secp256k1::signing_only();
        let secret_key = SecretKey::from_slice(&secret_bytes).map_err(|_| KeyError::OutOfRange)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        Ok(Self {
            secret_key: secret_bytes,
            address: Self::derive_address(&public_key),
        })
    }

    /// Builds a keypair from a hex encoded secret key, with or without a 0x prefix.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(KeyError::InvalidLength(s.len()));
        }

        let mut secret_bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut secret_bytes).map_err(|_| KeyError::InvalidHex)?;

        Self::from_secret_key(secret_bytes)
    }

    /// Derives an Ethereum address from a secp256k1 public key.
    ///
    /// Process:
    /// 1. Serialize the public key in uncompressed form (65 bytes)
    /// 2. Remove the first byte (0x04 prefix)
    /// 3. Hash the remaining 64 bytes with Keccak-256
    /// 4. Take the last 20 bytes of the hash
    fn derive_address(public_key: &PublicKey) -> Address {
        let public_key_bytes = public_key.serialize_uncompressed();

        let mut hasher = Keccak::v256();
        hasher.update(&public_key_bytes[1..]);

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);

        Address::from_bytes(address_bytes)
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key)
    }

    /// Returns the private key as a 0x-prefixed hex string.
    pub fn private_key_hex_prefixed(&self) -> String {
        format!("0x{}", self.private_key_hex())
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> &[u8; 32] {
        &self.secret_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

// Keeps the secret out of debug output and logs.
impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("secret_key", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Private key must be 64 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("Private key contains non-hex characters")]
    InvalidHex,
    #[error("Private key is zero or not below the curve order")]
    OutOfRange,
}
