//======================================================================
// src/aead.rs
// Nonce-based AEAD mode (RFC 5297 §3) exposed through the `aead`
// traits: the nonce rides as the last associated-data component of S2V
// and the synthetic IV becomes the detached tag.
//======================================================================

use ::aead::{
    consts::{U0, U16},
    generic_array::{
        typenum::{Sum, Unsigned},
        ArrayLength,
    },
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use core::ops::Add;
use zeroize::Zeroize;

use crate::consts::SIV_SIZE;
use crate::ctr;
use crate::s2v::s2v;
use crate::siv::{ct_eq, BlockCipher128, Siv};

/// RFC 5297 nonce-based AEAD over a 128-bit block cipher `C`.
///
/// The key is twice the size of `C`'s key; the nonce is 16 bytes and the
/// 16-byte tag is the synthetic IV. Unlike [`Siv`](crate::Siv) this mode
/// carries exactly one associated-data string, as the `aead` traits
/// dictate.
pub struct SivAead<C: BlockCipher128> {
    core: Siv<C>,
}

impl<C> KeySizeUser for SivAead<C>
where
    C: BlockCipher128,
    C::KeySize: Add<C::KeySize>,
    Sum<C::KeySize, C::KeySize>: ArrayLength<u8>,
{
    type KeySize = Sum<C::KeySize, C::KeySize>;
}

impl<C> KeyInit for SivAead<C>
where
    C: BlockCipher128,
    C::KeySize: Add<C::KeySize>,
    Sum<C::KeySize, C::KeySize>: ArrayLength<u8>,
{
    fn new(key: &Key<Self>) -> Self {
        // The type guarantees the length, so the split is infallible.
        let (mac_key, ctr_key) = key.split_at(C::KeySize::to_usize());
        Self {
            core: Siv::from_ciphers(
                C::new(Key::<C>::from_slice(mac_key)),
                C::new(Key::<C>::from_slice(ctr_key)),
            ),
        }
    }
}

impl<C: BlockCipher128> AeadCore for SivAead<C> {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl<C: BlockCipher128> AeadInPlace for SivAead<C> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> ::aead::Result<Tag<Self>> {
        let iv = s2v(&self.core.mac, &[associated_data, nonce.as_slice()], buffer);
        ctr::apply_keystream(&self.core.ctr, &iv, buffer);
        Ok(Tag::<Self>::clone_from_slice(&iv))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> ::aead::Result<()> {
        let mut iv = [0u8; SIV_SIZE];
        iv.copy_from_slice(tag.as_slice());
        ctr::apply_keystream(&self.core.ctr, &iv, buffer);

        let expected = s2v(&self.core.mac, &[associated_data, nonce.as_slice()], buffer);
        if ct_eq(&expected, &iv) {
            Ok(())
        } else {
            // The unauthenticated plaintext must never leave this call.
            buffer.zeroize();
            Err(::aead::Error)
        }
    }
}
