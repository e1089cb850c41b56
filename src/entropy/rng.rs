//! `rand_core` integration.
//!
//! Lets [`EschRng`] drive anything written against `RngCore`. Not `CryptoRng`:
//! the permutation is borrowed for output quality, not certified.

use rand_core::{Error, RngCore, SeedableRng};

use crate::entropy::esch::EschRng;

impl RngCore for EschRng {
    fn next_u32(&mut self) -> u32 {
        self.core_mut().take_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.core_mut().take_bits(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.core_mut().take_bits(8) as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for EschRng {
    type Seed = [u8; 32];

    /// The seed is absorbed as two 16-byte blocks so the `Display` form stays reproducible.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = EschRng::new();
        for half in seed.chunks_exact(16) {
            if let Err(e) = rng.absorb_block(half) {
                log::error!("Seed block rejected: {}", e);
            }
        }
        rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_and_bytes_reference() {
        let mut rng = EschRng::from_seeds(["alpha", "beta"]).unwrap();
        assert_eq!(rng.next_u32(), 3_327_465_297);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        assert_eq!(hex::encode(buf), "59f7d640aa8a");
    }

    #[test]
    fn test_from_seed_reference() {
        let seed: [u8; 32] = core::array::from_fn(|i| i as u8);
        let mut rng = EschRng::from_seed(seed);
        assert_eq!(rng.absorbed().len(), 2);
        assert_eq!(rng.next_u64(), 0xf9a7_b09d_7fe3_a0ae);
    }

    #[test]
    fn test_seed_from_u64_is_deterministic() {
        let mut a = EschRng::seed_from_u64(99);
        let mut b = EschRng::seed_from_u64(99);
        let mut c = EschRng::seed_from_u64(100);
        let x = a.next_u64();
        assert_eq!(x, b.next_u64());
        assert_ne!(x, c.next_u64());
    }

    #[test]
    fn test_try_fill_bytes_matches_fill_bytes() {
        let mut a = EschRng::seed_from_u64(5);
        let mut b = EschRng::seed_from_u64(5);
        let mut x = [0u8; 33];
        let mut y = [0u8; 33];
        a.fill_bytes(&mut x);
        b.try_fill_bytes(&mut y).unwrap();
        assert_eq!(x, y);
    }
}
