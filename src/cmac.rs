//======================================================================
// src/cmac.rs
// AES-CMAC (RFC 4493) over a generic 128-bit block cipher. S2V is a
// thin chaining layer over this MAC, so correctness here carries the
// whole construction.
//======================================================================

use cipher::{Block, BlockEncrypt, BlockSizeUser};
use zeroize::Zeroize;

use crate::consts::{BLOCK_SIZE, PAD_MARKER, ZERO_BLOCK};
use crate::dbl::{dbl, xor_in};

/// A keyed CMAC instance.
///
/// The subkeys K1/K2 are derived once from the keyed cipher and cached
/// for the lifetime of the instance; they are wiped on drop. Caching is
/// per instance only, so two instances keyed differently never share
/// state.
pub(crate) struct Cmac<C> {
    cipher: C,
    k1: [u8; BLOCK_SIZE],
    k2: [u8; BLOCK_SIZE],
}

impl<C> Cmac<C>
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = cipher::consts::U16>,
{
    /// Wraps an already-keyed cipher and derives the CMAC subkeys:
    /// `K1 = dbl(E_K(0^128))`, `K2 = dbl(K1)`.
    pub(crate) fn new(cipher: C) -> Self {
        let mut l = ZERO_BLOCK;
        cipher.encrypt_block(Block::<C>::from_mut_slice(&mut l));
        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        l.zeroize();
        Self { cipher, k1, k2 }
    }

    /// Computes the CMAC tag of `msg`.
    pub(crate) fn mac(&self, msg: &[u8]) -> [u8; BLOCK_SIZE] {
        // A message that is a nonzero multiple of the block size keeps
        // its last block intact (K1 branch); everything else, including
        // the empty message, is padded with 0x80 then zeros (K2 branch).
        let complete = !msg.is_empty() && msg.len() % BLOCK_SIZE == 0;
        let head_len = if complete {
            msg.len() - BLOCK_SIZE
        } else {
            msg.len() - msg.len() % BLOCK_SIZE
        };
        let (head, tail) = msg.split_at(head_len);

        // CBC chaining from the zero state.
        let mut state = ZERO_BLOCK;
        for block in head.chunks_exact(BLOCK_SIZE) {
            xor_in(&mut state, block);
            self.cipher.encrypt_block(Block::<C>::from_mut_slice(&mut state));
        }

        let mut last = ZERO_BLOCK;
        last[..tail.len()].copy_from_slice(tail);
        if complete {
            xor_in(&mut last, &self.k1);
        } else {
            last[tail.len()] = PAD_MARKER;
            xor_in(&mut last, &self.k2);
        }

        xor_in(&mut state, &last);
        self.cipher.encrypt_block(Block::<C>::from_mut_slice(&mut state));
        state
    }
}

impl<C> Drop for Cmac<C> {
    fn drop(&mut self) {
        self.k1.zeroize();
        self.k2.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::Cmac;
    use aes::Aes128;
    use cipher::KeyInit;

    fn keyed_cmac() -> Cmac<Aes128> {
        // RFC 4493 §4 example key.
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        Cmac::new(Aes128::new_from_slice(&key).unwrap())
    }

    #[test]
    fn rfc4493_empty_message() {
        let tag = keyed_cmac().mac(b"");
        assert_eq!(hex::encode(tag), "bb1d6929e95937287fa37d129b756746");
    }

    #[test]
    fn rfc4493_single_block() {
        let msg = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
        let tag = keyed_cmac().mac(&msg);
        assert_eq!(hex::encode(tag), "070a16b46b4d4144f79bdd9dd04a287c");
    }

    #[test]
    fn rfc4493_partial_final_block() {
        let msg = hex::decode(concat!(
            "6bc1bee22e409f96e93d7e117393172a",
            "ae2d8a571e03ac9c9eb76fac45af8e51",
            "30c81c46a35ce411"
        ))
        .unwrap();
        let tag = keyed_cmac().mac(&msg);
        assert_eq!(hex::encode(tag), "dfa66747de9ae63030ca32611497c827");
    }

    #[test]
    fn rfc4493_four_blocks() {
        let msg = hex::decode(concat!(
            "6bc1bee22e409f96e93d7e117393172a",
            "ae2d8a571e03ac9c9eb76fac45af8e51",
            "30c81c46a35ce411e5fbc1191a0a52ef",
            "f69f2445df4f9b17ad2b417be66c3710"
        ))
        .unwrap();
        let tag = keyed_cmac().mac(&msg);
        assert_eq!(hex::encode(tag), "51f0bebf7e3b9d92fc49741779363cfe");
    }
}
