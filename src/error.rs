//======================================================================
// src/error.rs
// Failure taxonomy for construction and decryption.
//======================================================================

use core::fmt;

/// Errors surfaced by [`SivCipher`](crate::SivCipher) and [`Siv`](crate::Siv).
///
/// All failures are synchronous and final: a cryptographic mismatch is
/// never transient and is never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key is empty or not one of the supported sizes
    /// (256, 384 or 512 bits).
    InvalidKeySize,
    /// The ciphertext is shorter than the 16-byte SIV prefix; no
    /// decryption was attempted.
    InvalidEnvelope,
    /// The recomputed SIV does not match the received one: the
    /// ciphertext or associated data was forged or corrupted. The
    /// plaintext candidate has been destroyed.
    Authentication,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize => {
                f.write_str("supported key sizes are 256, 384 and 512 bits")
            }
            Error::InvalidEnvelope => {
                f.write_str("ciphertext is shorter than the 16-byte SIV")
            }
            Error::Authentication => f.write_str("SIV authentication failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
