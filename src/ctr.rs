//======================================================================
// src/ctr.rs
// SIV-CTR encipherment: counter mode seeded by the masked synthetic IV.
// XOR-based, so the same routine is used for both directions.
//======================================================================

use cipher::{Block, BlockEncrypt, BlockSizeUser};

use crate::consts::{BLOCK_SIZE, SIV_SIZE};
use crate::dbl::xor_in;

/// XORs the CTR keystream seeded by `iv` into `buf`, in place.
///
/// Per RFC 5297 §2.5 the seed is the SIV with bit 63 and bit 31 cleared
/// (big-endian bit numbering), and the counter increments modulo 2^32 in
/// its low 32 bits.
pub(crate) fn apply_keystream<C>(cipher: &C, iv: &[u8; SIV_SIZE], buf: &mut [u8])
where
    C: BlockEncrypt + BlockSizeUser<BlockSize = cipher::consts::U16>,
{
    let mut counter = *iv;
    counter[8] &= 0x7f;
    counter[12] &= 0x7f;

    for chunk in buf.chunks_mut(BLOCK_SIZE) {
        let mut keystream = counter;
        cipher.encrypt_block(Block::<C>::from_mut_slice(&mut keystream));
        xor_in(chunk, &keystream[..chunk.len()]);

        let low = u32::from_be_bytes(counter[12..16].try_into().unwrap());
        counter[12..16].copy_from_slice(&low.wrapping_add(1).to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::apply_keystream;
    use aes::Aes128;
    use cipher::KeyInit;

    #[test]
    fn keystream_application_is_self_inverse() {
        let cipher = Aes128::new_from_slice(&[0x42u8; 16]).unwrap();
        let iv = [0xffu8; 16];
        let original = *b"a message spanning more than a single AES block";

        let mut buf = original;
        apply_keystream(&cipher, &iv, &mut buf);
        assert_ne!(buf, original);
        apply_keystream(&cipher, &iv, &mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    fn seed_masking_collapses_reserved_bits() {
        let cipher = Aes128::new_from_slice(&[0x42u8; 16]).unwrap();
        let masked = [0u8; 16];
        let mut unmasked = [0u8; 16];
        unmasked[8] = 0x80;
        unmasked[12] = 0x80;

        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        apply_keystream(&cipher, &masked, &mut a);
        apply_keystream(&cipher, &unmasked, &mut b);
        assert_eq!(a, b);
    }
}
