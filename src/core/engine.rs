#![forbid(unsafe_code)]
// SparkleCore: the sponge engine.
// - Owns the permutation state and the entropy tank; never aliased.
// - Lifecycle: new() -> setup(steps, tank_size) -> absorb(seed) -> draws.
// - Refill = permute + squeeze; it is total and can repeat forever.
// - Preconditions are checked at the public boundary; internal draws are infallible.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::EngineConfig;
use crate::core::consts::{DOMAIN_ABSORB, DOMAIN_SQUEEZE, MAX_SEED_BYTES, STATE_WORDS};
use crate::core::permutation::{permute, State};
use crate::core::sampler::{self, BitSource};
use crate::core::tank::EntropyTank;
use crate::core::EngineError;

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SparkleCore {
    steps: u32,
    state: State,
    tank: EntropyTank,
    refills: u64,
}

impl SparkleCore {
    /// Zeroed state, zero-length tank. Call [`setup`](Self::setup) before drawing.
    pub fn new() -> Self {
        SparkleCore { steps: 0, state: [0; STATE_WORDS], tank: EntropyTank::empty(), refills: 0 }
    }

    /// A fresh engine already configured from `config`.
    pub fn with_config(config: &EngineConfig) -> Self {
        let mut core = Self::new();
        core.setup(config.steps, config.tank_bits);
        core
    }

    /// Configure the round count and tank size (in bits).
    ///
    /// Never fails: a tank size outside `1..=512` is clamped. The current tank
    /// window is discarded, so the next draw runs a fresh permutation.
    pub fn setup(&mut self, steps: u32, tank_size: u32) {
        let config = EngineConfig::new(steps, tank_size).normalized();
        if config.tank_bits != tank_size {
            log::warn!("Tank size {} clamped to {}", tank_size, config.tank_bits);
        }
        log::debug!("Engine setup: steps={} tank_bits={}", config.steps, config.tank_bits);
        self.steps = config.steps;
        self.tank.resize(config.tank_bits as usize);
    }

    /// Round count per permutation call.
    pub fn steps(&self) -> u32 { self.steps }

    /// Bits produced per squeeze; `0` until configured.
    pub fn tank_bits(&self) -> usize { self.tank.capacity() }

    /// Number of permutation calls made to refill the tank since construction.
    pub fn refills(&self) -> u64 { self.refills }

    /// Inject `seed` into the state with domain separation, then squeeze.
    ///
    /// `seed.len()` must be a multiple of 4 and at most 64; callers zero-pad short
    /// seeds. Absorbing again re-mixes from the current state.
    pub fn absorb(&mut self, seed: &[u8]) -> Result<(), EngineError> {
        if seed.len() % 4 != 0 {
            return Err(EngineError::MisalignedSeed { len: seed.len() });
        }
        if seed.len() > MAX_SEED_BYTES {
            return Err(EngineError::SeedTooLong { len: seed.len() });
        }
        log::debug!("Absorbing {} seed bytes", seed.len());

        self.state[STATE_WORDS - 1] ^= DOMAIN_ABSORB;
        for (word, chunk) in self.state.iter_mut().zip(seed.chunks_exact(4)) {
            *word ^= u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        permute(&mut self.state, self.steps);
        self.state[STATE_WORDS - 1] ^= DOMAIN_SQUEEZE;
        permute(&mut self.state, self.steps);
        self.tank.squeeze(&self.state);
        Ok(())
    }

    /// Permute the state and rebuild the tank from it.
    pub fn refill(&mut self) {
        permute(&mut self.state, self.steps);
        self.tank.squeeze(&self.state);
        self.refills = self.refills.wrapping_add(1);
        log::trace!("Tank refill #{}", self.refills);
    }

    /// Refill unless at least `n` unconsumed bits remain. `n` must not exceed the tank size.
    pub fn ensure_available(&mut self, n: usize) {
        if self.tank.remaining() < n {
            self.refill();
        }
    }

    fn check_configured(&self) -> Result<(), EngineError> {
        if self.tank.capacity() == 0 {
            return Err(EngineError::Unconfigured);
        }
        Ok(())
    }

    #[inline]
    fn take_bit(&mut self) -> bool {
        self.ensure_available(1);
        self.tank.take_bit()
    }

    /// Draw `n` bits without the boundary checks. Only for engines known to be
    /// configured, with `1 <= n <= 64`.
    pub(crate) fn take_bits(&mut self, n: u32) -> u64 {
        debug_assert!(self.tank.capacity() > 0 && (1..=64).contains(&n));
        let mut result = 0u64;
        for i in 0..n.min(64) {
            if self.take_bit() {
                result |= 1u64 << i;
            }
        }
        result
    }

    /// Next bit of output.
    pub fn next_bit(&mut self) -> Result<bool, EngineError> {
        self.check_configured()?;
        Ok(self.take_bit())
    }

    /// Draw `n` bits (`1..=64`), first bit least significant.
    pub fn get_n_bit_unsigned_integer(&mut self, n: u32) -> Result<u64, EngineError> {
        self.draw_bits(n)
    }

    /// Uniform integer in `[lower, upper)`.
    pub fn sample_range(&mut self, lower: u64, upper: u64) -> Result<u64, EngineError> {
        self.check_configured()?;
        sampler::sample_range(self, lower, upper)
    }

    /// Uniform integer in `[lower, upper)`, failing after `max_draws` rejections.
    pub fn sample_range_bounded(
        &mut self,
        lower: u64,
        upper: u64,
        max_draws: u32,
    ) -> Result<u64, EngineError> {
        self.check_configured()?;
        sampler::sample_range_bounded(self, lower, upper, max_draws)
    }
}

impl BitSource for SparkleCore {
    fn draw_bits(&mut self, n: u32) -> Result<u64, EngineError> {
        if n == 0 || n > 64 {
            return Err(EngineError::InvalidBitCount { n });
        }
        self.check_configured()?;
        Ok(self.take_bits(n))
    }
}

impl Default for SparkleCore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SparkleCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparkleCore")
            .field("steps", &self.steps)
            .field("tank_bits", &self.tank.capacity())
            .field("remaining", &self.tank.remaining())
            .finish_non_exhaustive()
    }
}
