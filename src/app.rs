//! Generate one wallet and report it.

use std::io::{self, Write};

use crate::config::Config;
use crate::crypto::Keypair;
use crate::report;
use crate::source::{GenerationError, KeypairSource};

/// Outcome of a single run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Generation failed; the failure line has already been written.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Writing the report itself failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Asks `source` for exactly one keypair and writes the result.
///
/// On success the report goes to `stdout` and the keypair is returned. On
/// failure `stdout` is left untouched and one error line goes to `stderr`.
pub fn run<S, O, E>(
    source: &mut S,
    config: &Config,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<Keypair, RunError>
where
    S: KeypairSource + ?Sized,
    O: Write,
    E: Write,
{
    let keypair = match source.generate() {
        Ok(keypair) => keypair,
        Err(e) => {
            log::debug!("Key generation failed: {:?}", e);
            report::write_error(stderr, &e)?;
            stderr.flush()?;
            return Err(e.into());
        }
    };

    log::info!("Generated wallet {}", keypair.address());

    report::write_wallet(stdout, &keypair)?;
    if config.env {
        report::write_env_snippet(stdout, &keypair)?;
    }
    stdout.flush()?;

    Ok(keypair)
}
