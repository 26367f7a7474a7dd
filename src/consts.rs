//======================================================================
// src/consts.rs
// Shared constants.
//======================================================================

/// Block size of the underlying cipher in bytes (AES: 128 bits).
pub const BLOCK_SIZE: usize = 16;

/// Length of the synthetic IV that prefixes every ciphertext.
pub const SIV_SIZE: usize = 16;

pub(crate) const ZERO_BLOCK: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

/// GF(2^128) reduction term for the doubling operation (x^128 + x^7 + x^2 + x + 1).
pub(crate) const DBL_POLY: u8 = 0x87;

/// Pad marker appended to partial CMAC/S2V blocks (a single 1 bit, then zeros).
pub(crate) const PAD_MARKER: u8 = 0x80;
