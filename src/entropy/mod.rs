//! Seed material handling and the seeded generator.
//!
//! The core engine only accepts word-aligned seeds of at most 64 bytes. This module
//! turns caller-friendly seed material into that shape:
//!
//! - [`pad_to_word`] zero-pads raw bytes to the next multiple of 4, for direct
//!   [`SparkleCore::absorb`](crate::core::engine::SparkleCore::absorb) callers.
//! - [`pad_seed_block`] encodes a short block (at most 31 bytes) as
//!   `block || 0x80 || 0x00*` in 32 bytes, so blocks that differ only by trailing
//!   zeros stay distinct. [`esch::EschRng`] absorbs every block this way.

use alloc::vec::Vec;

use crate::core::EngineError;

pub mod esch;
pub mod rng;

/// Largest seed block accepted by [`pad_seed_block`].
pub const SEED_BLOCK_MAX: usize = 31;

/// Size of an encoded seed block.
pub const SEED_BLOCK_BYTES: usize = SEED_BLOCK_MAX + 1;

/// Encode a block of at most 31 bytes into a 32-byte word-aligned message.
pub fn pad_seed_block(block: &[u8]) -> Result<[u8; SEED_BLOCK_BYTES], EngineError> {
    if block.len() > SEED_BLOCK_MAX {
        return Err(EngineError::SeedBlockTooLarge { len: block.len() });
    }
    let mut out = [0u8; SEED_BLOCK_BYTES];
    out[..block.len()].copy_from_slice(block);
    out[block.len()] = 0x80;
    Ok(out)
}

/// Zero-pad `bytes` to the next multiple of 4.
///
/// ```
/// use sparkly_rg::entropy::pad_to_word;
/// use sparkly_rg::SparkleCore;
///
/// let mut core = SparkleCore::new();
/// core.setup(8, 256);
/// core.absorb(&pad_to_word(b"seed!")).unwrap();
/// assert!(core.get_n_bit_unsigned_integer(10).unwrap() < 1024);
/// ```
pub fn pad_to_word(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out.resize((bytes.len() + 3) & !3, 0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_seed_block() {
        let out = pad_seed_block(b"abc").unwrap();
        assert_eq!(&out[..4], b"abc\x80");
        assert!(out[4..].iter().all(|&b| b == 0));

        let full = pad_seed_block(&[0xAA; 31]).unwrap();
        assert_eq!(full[31], 0x80);

        assert_eq!(pad_seed_block(&[]).unwrap()[0], 0x80);
        assert_eq!(pad_seed_block(&[0; 32]), Err(EngineError::SeedBlockTooLarge { len: 32 }));
    }

    #[test]
    fn test_pad_to_word() {
        assert!(pad_to_word(&[]).is_empty());
        assert_eq!(pad_to_word(&[1]), [1, 0, 0, 0]);
        assert_eq!(pad_to_word(&[1, 2, 3, 4]), [1, 2, 3, 4]);
        assert_eq!(pad_to_word(&[1, 2, 3, 4, 5]).len(), 8);
    }
}
