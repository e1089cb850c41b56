//! Seeded convenience generator.
//!
//! [`EschRng`] wraps a [`SparkleCore`] configured with the default parameters
//! (8 steps, 256-bit tank) and absorbs seed material one short block at a time.
//! Every absorbed block is logged, and the generator's `Display` form is a string
//! that [`FromStr`] turns back into an identically seeded generator.
//!
//! # Example
//! ```
//! use sparkly_rg::entropy::esch::EschRng;
//!
//! let mut rng = EschRng::from_seeds(["level-3", "player-7"]).unwrap();
//! let roll = rng.gen_range(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! let replay: EschRng = rng.to_string().parse().unwrap();
//! assert_eq!(replay.absorbed(), rng.absorbed());
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::EngineConfig;
use crate::core::engine::SparkleCore;
use crate::core::sampler;
use crate::core::EngineError;
use crate::entropy::pad_seed_block;

const REPR_PREFIX: &str = "EschRng([";
const REPR_SUFFIX: &str = "])";

/// Deterministic generator seeded from an ordered list of short blocks.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EschRng {
    core: SparkleCore,
    absorbed: Vec<Vec<u8>>,
}

impl EschRng {
    /// A configured generator with nothing absorbed yet.
    pub fn new() -> Self {
        Self {
            core: SparkleCore::with_config(&EngineConfig::default()),
            absorbed: Vec::new(),
        }
    }

    /// Absorb every block of `seeds` in order.
    pub fn from_seeds<I, B>(seeds: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut rng = Self::new();
        for seed in seeds {
            rng.absorb_block(seed.as_ref())?;
        }
        Ok(rng)
    }

    /// Derive an independent stream from shared seeds: the tag block goes in first.
    pub fn with_stream_tag<I, B>(tag: u64, seeds: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut rng = Self::new();
        let mut block = Vec::with_capacity(15);
        block.extend_from_slice(b"stream:");
        block.extend_from_slice(&tag.to_le_bytes());
        rng.absorb_block(&block)?;
        for seed in seeds {
            rng.absorb_block(seed.as_ref())?;
        }
        Ok(rng)
    }

    /// Like [`from_seeds`](Self::from_seeds), then also absorb the current UNIX time in
    /// seconds. The result is not reproducible unless its `Display` form is kept.
    #[cfg(feature = "std")]
    pub fn with_time<I, B>(seeds: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut rng = Self::from_seeds(seeds)?;
        rng.absorb_value(epoch_seconds(std::time::SystemTime::now()))?;
        Ok(rng)
    }

    /// Absorb one block of at most 31 bytes.
    pub fn absorb_block(&mut self, block: &[u8]) -> Result<(), EngineError> {
        let padded = pad_seed_block(block)?;
        self.core.absorb(&padded)?;
        self.absorbed.push(block.to_vec());
        Ok(())
    }

    /// Absorb the UTF-8 bytes of `s`.
    pub fn absorb_str(&mut self, s: &str) -> Result<(), EngineError> {
        self.absorb_block(s.as_bytes())
    }

    /// Absorb the UTF-8 bytes of `value.to_string()`.
    pub fn absorb_value<T: fmt::Display>(&mut self, value: T) -> Result<(), EngineError> {
        let text = value.to_string();
        self.absorb_block(text.as_bytes())
    }

    /// Blocks absorbed so far, in order.
    pub fn absorbed(&self) -> &[Vec<u8>] {
        &self.absorbed
    }

    /// The underlying engine, for inspecting its configuration and refill count.
    pub fn core(&self) -> &SparkleCore {
        &self.core
    }

    /// `n` fresh bits, `1..=64`.
    pub fn get_n_bit_unsigned_integer(&mut self, n: u32) -> Result<u64, EngineError> {
        self.core.get_n_bit_unsigned_integer(n)
    }

    /// Uniform integer in `[lower, upper)`.
    pub fn gen_range(&mut self, lower: u64, upper: u64) -> Result<u64, EngineError> {
        self.core.sample_range(lower, upper)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let n = items.len() as u64;
        for i in 0..items.len() {
            if let Ok(j) = sampler::sample_range(&mut self.core, i as u64, n) {
                items.swap(i, j as usize);
            }
        }
    }

    /// A uniformly random ordering of `0..n`.
    pub fn random_permutation(&mut self, n: usize) -> Vec<usize> {
        let mut result: Vec<usize> = (0..n).collect();
        self.shuffle(&mut result);
        result
    }

    pub(crate) fn core_mut(&mut self) -> &mut SparkleCore {
        &mut self.core
    }
}

impl Default for EschRng {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EschRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&repr_of(&self.absorbed))
    }
}

impl fmt::Debug for EschRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EschRng")
            .field("blocks", &self.absorbed.len())
            .field("core", &self.core)
            .finish()
    }
}

impl FromStr for EschRng {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix(REPR_PREFIX)
            .and_then(|rest| rest.strip_suffix(REPR_SUFFIX))
            .ok_or(EngineError::MalformedRepr)?;

        let mut blocks: Vec<Vec<u8>> = Vec::new();
        if !inner.trim().is_empty() {
            for item in inner.split(',') {
                let quoted = item.trim();
                let digits = quoted
                    .strip_prefix('"')
                    .and_then(|rest| rest.strip_suffix('"'))
                    .ok_or(EngineError::MalformedRepr)?;
                blocks.push(hex::decode(digits).map_err(|_| EngineError::MalformedRepr)?);
            }
        }
        Self::from_seeds(blocks.iter())
    }
}

/// Whole seconds since the UNIX epoch; a clock set before the epoch reads as 0.
#[cfg(feature = "std")]
fn epoch_seconds(now: std::time::SystemTime) -> u64 {
    match now.duration_since(std::time::UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(e) => {
            log::warn!("System clock is {:?} before the UNIX epoch; absorbing 0", e.duration());
            0
        }
    }
}

/// Render an absorbed log the way `Display` does, without a generator.
pub fn repr_of<B: AsRef<[u8]>>(blocks: &[B]) -> String {
    let mut out = String::from(REPR_PREFIX);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(&hex::encode(block.as_ref()));
        out.push('"');
    }
    out.push_str(REPR_SUFFIX);
    out
}
