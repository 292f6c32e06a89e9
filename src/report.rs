//! Console output for a generated wallet.

use std::io::{self, Write};

use crate::crypto::Keypair;

pub const SEPARATOR: &str = "---------------------------------------";
pub const BANNER: &str = "NEW WALLET GENERATED SUCCESSFULLY";
pub const SAVE_ADVICE: &str = "IMPORTANT: Save this Private Key in your .env file.";
pub const SHARE_WARNING: &str = "NEVER share this key with anyone or upload it to GitHub.";
pub const ERROR_PREFIX: &str = "Error generating wallet:";

/// Writes the success report for `keypair`.
pub fn write_wallet<W: Write>(out: &mut W, keypair: &Keypair) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Public Address: {}", keypair.address().to_checksum())?;
    writeln!(out, "Private Key:    {}", keypair.private_key_hex_prefixed())?;
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", SAVE_ADVICE)?;
    writeln!(out, "{}", SHARE_WARNING)?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

/// Writes a `.env` snippet with the variables the backend reads.
pub fn write_env_snippet<W: Write>(out: &mut W, keypair: &Keypair) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "# .env")?;
    writeln!(out, "PRIVATE_KEY={}", keypair.private_key_hex_prefixed())?;
    writeln!(out, "WALLET_ADDRESS={}", keypair.address().to_checksum())?;
    Ok(())
}

/// Writes the single failure line.
pub fn write_error<W: Write>(err: &mut W, message: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(err, "{} {}", ERROR_PREFIX, message)
}
