#![forbid(unsafe_code)]
// Fixed parameters of the SPARKLE-512 style state.
// The round constants are the first eight SPARKLE constants (fractional digits of e).

/// Number of branches (64-bit lanes) in the state.
pub const N_BRANCHES: usize = 8;

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 2 * N_BRANCHES;

/// Width of a state word in bits; also the width of one whitening block of the tank.
pub const WORD_BITS: usize = 32;

/// Largest tank the squeeze can fill: one whitening block per state word.
pub const MAX_TANK_BITS: usize = STATE_WORDS * WORD_BITS;

/// Largest seed accepted by a single absorb call, in bytes.
pub const MAX_SEED_BYTES: usize = STATE_WORDS * 4;

/// Round constants, indexed modulo `N_BRANCHES`.
pub const RCON: [u32; N_BRANCHES] = [
    0xB7E1_5162, 0xBF71_5880, 0x38B4_DA56, 0x324E_7738,
    0xBB11_85EB, 0x4F7C_7B57, 0xCFBF_A1C8, 0xC2B3_293D,
];

/// Domain marker XORed into the last word before absorbing.
pub const DOMAIN_ABSORB: u32 = 1;

/// Domain marker XORed into the last word between absorbing and squeezing.
pub const DOMAIN_SQUEEZE: u32 = 2;

/// Default round count for a configured engine.
pub const DEFAULT_STEPS: u32 = 8;

/// Default tank size in bits.
pub const DEFAULT_TANK_BITS: u32 = 256;
