//! Entropy-distillation engine.
//!
//! The permutation, the entropy tank, the absorb/squeeze protocol and the
//! rejection sampler. Everything above this module (configuration, the seeded
//! convenience generator) is plumbing around [`engine::SparkleCore`].

use core::fmt;

pub mod consts;
pub mod engine;
pub mod permutation;
pub mod sampler;
pub mod tank;

/// Precondition failures at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Seed length is not a multiple of 4 bytes.
    MisalignedSeed { len: usize },
    /// Seed has more bytes than the state has room for.
    SeedTooLong { len: usize },
    /// Requested bit count is outside `1..=64`.
    InvalidBitCount { n: u32 },
    /// `upper <= lower` in a range request.
    EmptyRange { lower: u64, upper: u64 },
    /// Extraction attempted before `setup`.
    Unconfigured,
    /// The caller-supplied draw budget ran out before a candidate was accepted.
    SamplingBudgetExceeded { draws: u32 },
    /// A seed block for the seeded generator exceeds 31 bytes.
    SeedBlockTooLarge { len: usize },
    /// A reproducible representation string could not be parsed.
    MalformedRepr,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MisalignedSeed { len } => {
                write!(f, "Seed length {} is not a multiple of 4", len)
            }
            EngineError::SeedTooLong { len } => write!(f, "Seed length {} exceeds state size", len),
            EngineError::InvalidBitCount { n } => write!(f, "Bit count {} outside 1..=64", n),
            EngineError::EmptyRange { lower, upper } => {
                write!(f, "Empty range [{}, {})", lower, upper)
            }
            EngineError::Unconfigured => write!(f, "Engine used before setup"),
            EngineError::SamplingBudgetExceeded { draws } => {
                write!(f, "No candidate accepted within {} draws", draws)
            }
            EngineError::SeedBlockTooLarge { len } => {
                write!(f, "Seed block of {} bytes exceeds 31 bytes", len)
            }
            EngineError::MalformedRepr => write!(f, "Malformed generator representation"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
