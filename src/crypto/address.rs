//! Ethereum address representation and utilities.

use std::fmt;
use std::str::FromStr;

use tiny_keccak::{Hasher, Keccak};

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let hash = keccak256(hex_addr.as_bytes());

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            if c.is_ascii_alphabetic() && nibble(&hash, i) >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }

    /// Returns true if `s` is a `0x`-prefixed address whose casing is a valid
    /// EIP-55 checksum.
    ///
    /// Unlike [`Address::from_str`], single-case input is rejected here unless it
    /// happens to equal the checksummed form.
    pub fn is_valid_checksum(s: &str) -> bool {
        match s.parse::<Address>() {
            Ok(addr) => addr.to_checksum() == s,
            Err(_) => false,
        }
    }
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);
    hash
}

#[inline]
fn nibble(hash: &[u8; 32], i: usize) -> u8 {
    let byte = hash[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parses a `0x`-prefixed address.
    ///
    /// All-lowercase and all-uppercase bodies carry no checksum and are accepted
    /// as is. Mixed case must match the EIP-55 encoding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix("0x").ok_or(AddressError::MissingPrefix)?;

        if body.len() != 40 {
            return Err(AddressError::InvalidLength(body.len()));
        }
        if !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex);
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressError::InvalidHex)?;
        let addr = Address::from_bytes(bytes);

        let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && addr.to_checksum() != s {
            return Err(AddressError::BadChecksum);
        }

        Ok(addr)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Address must start with 0x")]
    MissingPrefix,
    #[error("Address must be 40 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("Address contains non-hex characters")]
    InvalidHex,
    #[error("Address checksum mismatch")]
    BadChecksum,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from EIP-55
    const EIP55_VECTORS: &[&str] = &[
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_checksum_address() {
        for vector in EIP55_VECTORS {
            let bytes: [u8; 20] = hex::decode(&vector[2..]).unwrap().try_into().unwrap();
            let addr = Address::from_bytes(bytes);
            assert_eq!(&addr.to_checksum(), vector);
            assert!(Address::is_valid_checksum(vector));
        }
    }

    #[test]
    fn test_hex_output() {
        let addr = Address::from_bytes([0u8; 20]);
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            addr.to_checksum(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_parse_accepts_single_case() {
        let lower: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        let upper: Address = "0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(
            lower.to_checksum(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert!(!Address::is_valid_checksum(
            "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"
        ));
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        // Second to last letter uppercased
        assert_eq!(
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAEd".parse::<Address>(),
            Err(AddressError::BadChecksum)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse::<Address>(),
            Err(AddressError::MissingPrefix)
        );
        assert_eq!(
            "0x5aAeb6".parse::<Address>(),
            Err(AddressError::InvalidLength(6))
        );
        assert_eq!(
            "0xzzAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse::<Address>(),
            Err(AddressError::InvalidHex)
        );
    }
}
