//! Caller token generation, parsing, and hashing.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Caller token prefix.
pub const CALLER_TOKEN_PREFIX: &str = "sc";

/// Number of secret bytes encoded in a token.
pub const CALLER_TOKEN_SECRET_BYTES: usize = 32;

const CALLER_TOKEN_SECRET_HEX_CHARS: usize = CALLER_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Error)]
pub enum CallerTokenError {
    #[error("caller token format is invalid")]
    InvalidFormat,
}

/// Bearer token of a registered caller: `sc_` followed by 64 lower-case hex digits.
pub struct CallerToken {
    raw: String,
}

impl CallerToken {
    /// Generate a token from fresh OS randomness.
    #[must_use]
    pub fn generate() -> Self {
        let mut secret = [0_u8; CALLER_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut secret);

        let raw = format!("{CALLER_TOKEN_PREFIX}_{}", encode_hex(&secret));

        secret.zeroize();

        Self { raw }
    }

    /// Parse a token presented by a client.
    ///
    /// # Errors
    ///
    /// Returns [`CallerTokenError::InvalidFormat`] when the prefix or the secret encoding
    /// is wrong.
    pub fn parse(raw: &str) -> Result<Self, CallerTokenError> {
        let secret = raw
            .strip_prefix(CALLER_TOKEN_PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .ok_or(CallerTokenError::InvalidFormat)?;

        let well_formed = secret.len() == CALLER_TOKEN_SECRET_HEX_CHARS
            && secret
                .bytes()
                .all(|byte| matches!(byte, b'0'..=b'9' | b'a'..=b'f'));

        if !well_formed {
            return Err(CallerTokenError::InvalidFormat);
        }

        Ok(Self {
            raw: raw.to_owned(),
        })
    }

    /// The raw token, for showing once to the operator.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.raw
    }

    /// SHA-256 of the token as lower-case hex. Only this value is stored.
    #[must_use]
    pub fn hash(&self) -> String {
        format!("{:x}", Sha256::digest(self.raw.as_bytes()))
    }
}

impl fmt::Debug for CallerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallerToken(**redacted**)")
    }
}

impl Drop for CallerToken {
    fn drop(&mut self) {
        self.raw.zeroize();
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
