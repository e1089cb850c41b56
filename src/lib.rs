#![cfg_attr(not(feature = "std"), no_std)]

//! Deterministic, seed-derived bit generation on a SPARKLE-512 style sponge.
//!
//! Seed material is absorbed into a 512-bit state with domain separation, then an
//! unbounded stream of whitened bits is squeezed out of it. On top of the bit
//! stream sits an unbiased rejection sampler for `[lower, upper)`.
//!
//! Not a hash, MAC or certified RNG; no side-channel resistance is claimed.
//! One engine per thread: instances carry no locking.

extern crate alloc;

pub mod core;
pub mod entropy;
pub mod config;

pub use crate::config::EngineConfig;
pub use crate::core::engine::SparkleCore;
pub use crate::core::EngineError;
pub use crate::entropy::esch::EschRng;
