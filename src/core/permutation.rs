#![forbid(unsafe_code)]
// SPARKLE-512 style ARX permutation over a 16-word state.
// - All arithmetic wraps modulo 2^32; rotations are to the right.
// - Pure function of (state, steps); `steps == 0` is the identity.
// - No table lookups or data-dependent branches.

use crate::core::consts::{N_BRANCHES, RCON, STATE_WORDS};

/// Permutation state: `2 * N_BRANCHES` little-endian words.
pub type State = [u32; STATE_WORDS];

/// Linear feedback used by the mixing layer.
#[inline(always)]
fn ell(x: u32) -> u32 {
    (x ^ (x << 16)).rotate_right(16)
}

/// Four-pass ARX box (Alzette) applied to one lane pair.
#[inline(always)]
fn arxbox(x: &mut u32, y: &mut u32, rc: u32) {
    *x = x.wrapping_add(y.rotate_right(31));
    *y ^= x.rotate_right(24);
    *x ^= rc;
    *x = x.wrapping_add(y.rotate_right(17));
    *y ^= x.rotate_right(17);
    *x ^= rc;
    *x = x.wrapping_add(*y);
    *y ^= x.rotate_right(31);
    *x ^= rc;
    *x = x.wrapping_add(y.rotate_right(24));
    *y ^= x.rotate_right(16);
    *x ^= rc;
}

/// Feistel-like diffusion across all lanes.
#[inline(always)]
fn linear_layer(state: &mut State) {
    let x0 = state[0];
    let y0 = state[1];
    let mut tmpx = x0;
    let mut tmpy = y0;
    for j in (2..N_BRANCHES).step_by(2) {
        tmpx ^= state[j];
        tmpy ^= state[j + 1];
    }
    let tmpx = ell(tmpx);
    let tmpy = ell(tmpy);

    for j in (2..N_BRANCHES).step_by(2) {
        state[j - 2] = state[j + N_BRANCHES] ^ state[j] ^ tmpy;
        state[j + N_BRANCHES] = state[j];
        state[j - 1] = state[j + N_BRANCHES + 1] ^ state[j + 1] ^ tmpx;
        state[j + N_BRANCHES + 1] = state[j + 1];
    }
    state[N_BRANCHES - 2] = state[N_BRANCHES] ^ x0 ^ tmpy;
    state[N_BRANCHES] = x0;
    state[N_BRANCHES - 1] = state[N_BRANCHES + 1] ^ y0 ^ tmpx;
    state[N_BRANCHES + 1] = y0;
}

/// Apply `steps` rounds of the permutation to `state` in place.
#[inline]
pub fn permute(state: &mut State, steps: u32) {
    for i in 0..steps {
        state[1] ^= RCON[i as usize % N_BRANCHES];
        state[3] ^= i;

        for j in (0..STATE_WORDS).step_by(2) {
            let (left, right) = state.split_at_mut(j + 1);
            arxbox(&mut left[j], &mut right[0], RCON[j >> 1]);
        }

        linear_layer(state);
    }
}
