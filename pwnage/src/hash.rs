use std::fmt;

use sha1::{Digest, Sha1};

/// Length of the hex-encoded SHA-1 digest.
pub const HEX_LEN: usize = 40;

/// Length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// Length of the hash suffix matched locally (35 hex characters).
pub const SUFFIX_LEN: usize = HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest encoding.
const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex encoding of a password's SHA-1 digest, stack allocated.
///
/// Only the 5-character [`prefix`](Sha1Hex::prefix) ever goes on the wire;
/// the [`suffix`](Sha1Hex::suffix) is compared locally against the candidate
/// records the range API returns.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Sha1Hex {
    hex: [u8; HEX_LEN],
}

impl Sha1Hex {
    /// Hashes the UTF-8 bytes of `password` and encodes the digest as
    /// lowercase hex. The empty password is a legal input like any other.
    pub fn of_password(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let digest: [u8; 20] = hasher.finalize().into();

        let mut hex = [0u8; HEX_LEN];
        for (i, &byte) in digest.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }

        Self { hex }
    }

    /// The full 40-character hex digest.
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only contains ASCII characters from HEX_CHARS.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// First 5 hex characters, the only password-derived data that is ever
    /// transmitted.
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters, never transmitted.
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }
}

impl fmt::Display for Sha1Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
