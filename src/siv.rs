//======================================================================
// src/siv.rs
// Top-level SIV orchestration: key splitting, encrypt/decrypt, and
// constant-time tag verification.
//======================================================================

use alloc::vec::Vec;
use cipher::{BlockCipher, BlockEncrypt, BlockSizeUser, KeyInit};
use zeroize::Zeroize;

use crate::cmac::Cmac;
use crate::consts::SIV_SIZE;
use crate::ctr;
use crate::error::Error;
use crate::s2v::s2v;

/// A 128-bit block cipher usable as the SIV primitive.
///
/// The cipher is consumed encrypt-only, as a keyed pseudorandom
/// permutation; this crate never needs the decryption direction.
pub trait BlockCipher128:
    BlockCipher + BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = cipher::consts::U16>
{
}

impl<T> BlockCipher128 for T where
    T: BlockCipher + BlockEncrypt + KeyInit + BlockSizeUser<BlockSize = cipher::consts::U16>
{
}

/// Deterministic AEAD over a generic 128-bit block cipher `C`.
///
/// The instance is immutable after construction, so `&self` calls are
/// safe from multiple threads. The CMAC subkeys it caches are wiped on
/// drop; enable the block cipher's own zeroize support (the `aes` crate
/// feature is enabled by this crate) to wipe round keys too.
pub struct Siv<C: BlockCipher128> {
    pub(crate) mac: Cmac<C>,
    pub(crate) ctr: C,
}

impl<C: BlockCipher128> Siv<C> {
    /// Creates a cipher from a key of exactly twice the block cipher's
    /// key size: the first half keys S2V, the second half keys CTR.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        if key.len() != 2 * C::key_size() {
            return Err(Error::InvalidKeySize);
        }
        let (mac_key, ctr_key) = key.split_at(key.len() / 2);
        let mac = C::new_from_slice(mac_key).map_err(|_| Error::InvalidKeySize)?;
        let ctr = C::new_from_slice(ctr_key).map_err(|_| Error::InvalidKeySize)?;
        Ok(Self::from_ciphers(mac, ctr))
    }

    /// Creates a cipher from two already-keyed primitives.
    pub fn from_ciphers(mac: C, ctr: C) -> Self {
        Self {
            mac: Cmac::new(mac),
            ctr,
        }
    }

    /// Encrypts `plaintext` bound to the ordered `associated_data` list.
    ///
    /// Returns `SIV (16 bytes) ∥ ciphertext (len(plaintext) bytes)`.
    /// Deterministic: identical inputs produce identical output.
    pub fn encrypt<I: AsRef<[u8]>>(&self, plaintext: &[u8], associated_data: &[I]) -> Vec<u8> {
        let iv = s2v(&self.mac, associated_data, plaintext);
        let mut out = Vec::with_capacity(SIV_SIZE + plaintext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(plaintext);
        ctr::apply_keystream(&self.ctr, &iv, &mut out[SIV_SIZE..]);
        out
    }

    /// Decrypts and authenticates a ciphertext produced by [`encrypt`].
    ///
    /// The associated-data list must match the one given at encryption,
    /// in content and order. On SIV mismatch the plaintext candidate is
    /// zeroized before the error is returned.
    ///
    /// [`encrypt`]: Siv::encrypt
    pub fn decrypt<I: AsRef<[u8]>>(
        &self,
        ciphertext: &[u8],
        associated_data: &[I],
    ) -> Result<Vec<u8>, Error> {
        if ciphertext.len() < SIV_SIZE {
            return Err(Error::InvalidEnvelope);
        }
        let (iv, body) = ciphertext.split_at(SIV_SIZE);
        let iv: [u8; SIV_SIZE] = iv.try_into().unwrap();

        let mut plaintext = body.to_vec();
        ctr::apply_keystream(&self.ctr, &iv, &mut plaintext);

        let expected = s2v(&self.mac, associated_data, &plaintext);
        if ct_eq(&expected, &iv) {
            Ok(plaintext)
        } else {
            plaintext.zeroize();
            Err(Error::Authentication)
        }
    }
}

/// AES-SIV keyed by a 32-, 48- or 64-byte key.
///
/// This is the runtime-dispatched entry point: the key length selects
/// AES-128, AES-192 or AES-256 underneath. Use the [`Siv`] aliases
/// directly when the key size is known at compile time.
pub enum SivCipher {
    Aes128(crate::Aes128Siv),
    Aes192(crate::Aes192Siv),
    Aes256(crate::Aes256Siv),
}

impl SivCipher {
    /// Creates a cipher from a 32-, 48- or 64-byte key. Every other
    /// length, including the empty key, fails construction.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            32 => Ok(SivCipher::Aes128(Siv::new(key)?)),
            48 => Ok(SivCipher::Aes192(Siv::new(key)?)),
            64 => Ok(SivCipher::Aes256(Siv::new(key)?)),
            _ => Err(Error::InvalidKeySize),
        }
    }

    /// See [`Siv::encrypt`].
    pub fn encrypt<I: AsRef<[u8]>>(&self, plaintext: &[u8], associated_data: &[I]) -> Vec<u8> {
        match self {
            SivCipher::Aes128(siv) => siv.encrypt(plaintext, associated_data),
            SivCipher::Aes192(siv) => siv.encrypt(plaintext, associated_data),
            SivCipher::Aes256(siv) => siv.encrypt(plaintext, associated_data),
        }
    }

    /// See [`Siv::decrypt`].
    pub fn decrypt<I: AsRef<[u8]>>(
        &self,
        ciphertext: &[u8],
        associated_data: &[I],
    ) -> Result<Vec<u8>, Error> {
        match self {
            SivCipher::Aes128(siv) => siv.decrypt(ciphertext, associated_data),
            SivCipher::Aes192(siv) => siv.decrypt(ciphertext, associated_data),
            SivCipher::Aes256(siv) => siv.decrypt(ciphertext, associated_data),
        }
    }
}

/// Constant-time equality: XOR-accumulate every byte pair, check once at
/// the end. Never short-circuits on the first mismatch.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
