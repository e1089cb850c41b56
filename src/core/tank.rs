#![forbid(unsafe_code)]
// Entropy tank: a bit-packed window of whitened output bits with a read cursor.
// - Block k holds the output bits derived from state word k.
// - Tank bit j of block k is the parity of bits j..=31 of that word.
// - Every bit is handed out once; the owner refills after `remaining() == 0`.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::consts::{MAX_TANK_BITS, STATE_WORDS, WORD_BITS};
use crate::core::permutation::State;

/// Suffix parity of a word: bit j of the result is the XOR of bits j..=31 of `w`.
#[inline(always)]
pub(crate) fn whiten(w: u32) -> u32 {
    let mut p = w;
    p ^= p >> 1;
    p ^= p >> 2;
    p ^= p >> 4;
    p ^= p >> 8;
    p ^= p >> 16;
    p
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EntropyTank {
    blocks: [u32; STATE_WORDS],
    capacity: usize,
    cursor: usize,
}

impl EntropyTank {
    /// An unconfigured tank with no capacity.
    pub fn empty() -> Self {
        EntropyTank { blocks: [0; STATE_WORDS], capacity: 0, cursor: 0 }
    }

    /// Number of bits one squeeze produces.
    pub fn capacity(&self) -> usize { self.capacity }

    /// Unconsumed bits left in the current window.
    pub fn remaining(&self) -> usize { self.capacity - self.cursor }

    /// Change the capacity and discard the current window.
    /// The caller is responsible for keeping `capacity <= MAX_TANK_BITS`.
    pub fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity <= MAX_TANK_BITS);
        self.blocks.zeroize();
        self.capacity = capacity.min(MAX_TANK_BITS);
        self.cursor = self.capacity;
    }

    /// Rebuild the window from `state` and rewind the cursor.
    pub fn squeeze(&mut self, state: &State) {
        let used = (self.capacity + WORD_BITS - 1) / WORD_BITS;
        for (block, &word) in self.blocks.iter_mut().zip(state.iter()).take(used) {
            *block = whiten(word);
        }
        self.cursor = 0;
    }

    /// Hand out the next bit. Must only be called while `remaining() > 0`.
    #[inline]
    pub fn take_bit(&mut self) -> bool {
        debug_assert!(self.cursor < self.capacity);
        let k = self.cursor;
        self.cursor += 1;
        (self.blocks[k / WORD_BITS] >> (k % WORD_BITS)) & 1 == 1
    }
}

impl Default for EntropyTank {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity_reference(w: u32, j: usize) -> bool {
        (w >> j).count_ones() & 1 == 1
    }

    #[test]
    fn test_whiten_matches_popcount_parity() {
        for &w in &[0u32, 1, 0x8000_0000, 0xFFFF_FFFF, 0xDEAD_BEEF, 0x1234_5678] {
            let p = whiten(w);
            for j in 0..WORD_BITS {
                assert_eq!((p >> j) & 1 == 1, parity_reference(w, j), "w={:#x} j={}", w, j);
            }
        }
    }

    #[test]
    fn test_squeeze_and_drain() {
        let mut tank = EntropyTank::empty();
        tank.resize(40);
        assert_eq!(tank.remaining(), 0);

        let mut state: State = [0; STATE_WORDS];
        state[0] = 0x0000_0001;
        state[1] = 0x8000_0000;
        tank.squeeze(&state);
        assert_eq!(tank.remaining(), 40);

        // Word 0 = 1: only the lowest suffix contains a set bit.
        assert!(tank.take_bit());
        for _ in 1..32 {
            assert!(!tank.take_bit());
        }
        // Word 1 = 0x80000000: every suffix contains the top bit.
        for _ in 32..40 {
            assert!(tank.take_bit());
        }
        assert_eq!(tank.remaining(), 0);
    }

    #[test]
    fn test_resize_discards_window() {
        let mut tank = EntropyTank::empty();
        tank.resize(64);
        tank.squeeze(&[0xFFFF_FFFF; STATE_WORDS]);
        assert_eq!(tank.remaining(), 64);
        tank.resize(64);
        assert_eq!(tank.remaining(), 0);
    }
}
