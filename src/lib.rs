#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: module wiring and the public API surface.
//======================================================================

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// --- Module declarations ---
mod cmac;
mod consts;
mod ctr;
mod dbl;
mod error;
mod s2v;

pub mod aead;
pub mod siv;

pub use crate::error::Error;
pub use crate::siv::{BlockCipher128, Siv, SivCipher};

pub use crate::consts::{BLOCK_SIZE, SIV_SIZE};

// Re-export the trait crates for downstream users.
pub use ::aead as aead_api;
pub use aes;
pub use cipher;

// --- Convenience Type Aliases for Users ---

/// AES-SIV with a 32-byte key (AES-CMAC-SIV-256).
pub type Aes128Siv = Siv<aes::Aes128>;
/// AES-SIV with a 48-byte key (AES-CMAC-SIV-384).
pub type Aes192Siv = Siv<aes::Aes192>;
/// AES-SIV with a 64-byte key (AES-CMAC-SIV-512).
pub type Aes256Siv = Siv<aes::Aes256>;

// -- Nonce-based AEAD mode (RFC 5297 §3) --
pub type Aes128SivAead = aead::SivAead<aes::Aes128>;
pub type Aes192SivAead = aead::SivAead<aes::Aes192>;
pub type Aes256SivAead = aead::SivAead<aes::Aes256>;
