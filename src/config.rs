//! Engine configuration.
//!
//! Round count and tank size for a [`SparkleCore`](crate::core::engine::SparkleCore).
//! Hosts that persist their seed list can persist this alongside it (enable the
//! `serde` feature).

use crate::core::consts::{DEFAULT_STEPS, DEFAULT_TANK_BITS, MAX_TANK_BITS};

/// Parameters passed to `setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Permutation rounds per call. `0` makes the permutation the identity.
    pub steps: u32,

    /// Output bits per squeeze, `1..=512`.
    pub tank_bits: u32,
}

impl EngineConfig {
    pub fn new(steps: u32, tank_bits: u32) -> Self {
        Self { steps, tank_bits }
    }

    /// Same configuration with `tank_bits` clamped into the range the squeeze supports.
    pub fn normalized(self) -> Self {
        Self {
            steps: self.steps,
            tank_bits: self.tank_bits.clamp(1, MAX_TANK_BITS as u32),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            tank_bits: DEFAULT_TANK_BITS,
        }
    }
}
