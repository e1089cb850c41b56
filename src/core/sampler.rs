#![forbid(unsafe_code)]
// Uniform integers in [lower, upper) by rejection sampling over a bit source.
// - Candidates are drawn with the smallest width covering the range; out-of-range
//   candidates are discarded, never reduced, so the result carries no modulo bias.
// - Expected draws per sample are < 2. The loop is unbounded; callers needing a
//   latency bound use `sample_range_bounded`.

use crate::core::EngineError;

/// Anything that can hand out `n` fresh bits, least significant first.
pub trait BitSource {
    /// Draw `n` bits, `1 <= n <= 64`, as the low bits of the result.
    /// Fails if `n` is out of range or the source cannot produce output yet.
    fn draw_bits(&mut self, n: u32) -> Result<u64, EngineError>;
}

/// Smallest `n` with `2^n >= range`, for `range > 1`.
#[inline]
pub fn bit_length(range: u64) -> u32 {
    debug_assert!(range > 1);
    64 - (range - 1).leading_zeros()
}

fn checked_range(lower: u64, upper: u64) -> Result<u64, EngineError> {
    if upper <= lower {
        return Err(EngineError::EmptyRange { lower, upper });
    }
    Ok(upper - lower)
}

/// Draw a uniform integer in `[lower, upper)`.
pub fn sample_range<S: BitSource + ?Sized>(
    source: &mut S,
    lower: u64,
    upper: u64,
) -> Result<u64, EngineError> {
    let range = checked_range(lower, upper)?;
    if range == 1 {
        return Ok(lower);
    }
    let width = bit_length(range);
    loop {
        let candidate = source.draw_bits(width)?;
        if candidate < range {
            return Ok(lower + candidate);
        }
    }
}

/// Like [`sample_range`], but give up after `max_draws` rejected candidates.
pub fn sample_range_bounded<S: BitSource + ?Sized>(
    source: &mut S,
    lower: u64,
    upper: u64,
    max_draws: u32,
) -> Result<u64, EngineError> {
    let range = checked_range(lower, upper)?;
    if range == 1 {
        return Ok(lower);
    }
    let width = bit_length(range);
    for _ in 0..max_draws {
        let candidate = source.draw_bits(width)?;
        if candidate < range {
            return Ok(lower + candidate);
        }
    }
    log::warn!("Range sampling gave up after {} draws (range {})", max_draws, range);
    Err(EngineError::SamplingBudgetExceeded { draws: max_draws })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Replays a fixed list of candidates and records the widths requested.
    struct Scripted {
        values: Vec<u64>,
        pos: usize,
        widths: Vec<u32>,
    }

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Scripted { values: values.to_vec(), pos: 0, widths: Vec::new() }
        }
    }

    impl BitSource for Scripted {
        fn draw_bits(&mut self, n: u32) -> Result<u64, EngineError> {
            self.widths.push(n);
            let v = self.values[self.pos];
            self.pos += 1;
            Ok(v)
        }
    }

    /// A source that is never ready.
    struct Dry;

    impl BitSource for Dry {
        fn draw_bits(&mut self, _n: u32) -> Result<u64, EngineError> {
            Err(EngineError::Unconfigured)
        }
    }

    #[test]
    fn test_source_errors_propagate() {
        assert_eq!(sample_range(&mut Dry, 0, 10), Err(EngineError::Unconfigured));
        assert_eq!(sample_range_bounded(&mut Dry, 0, 10, 5), Err(EngineError::Unconfigured));
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(2), 1);
        assert_eq!(bit_length(7), 3);
        assert_eq!(bit_length(8), 3);
        assert_eq!(bit_length(9), 4);
        assert_eq!(bit_length(1 << 32), 32);
        assert_eq!(bit_length(u64::MAX), 64);
    }

    #[test]
    fn test_rejects_out_of_range_candidates() {
        let mut src = Scripted::new(&[7, 6, 5, 3]);
        assert_eq!(sample_range(&mut src, 100, 105), Ok(103));
        assert_eq!(src.pos, 4);
        assert!(src.widths.iter().all(|&w| w == 3));
    }

    #[test]
    fn test_single_value_range_draws_nothing() {
        let mut src = Scripted::new(&[]);
        assert_eq!(sample_range(&mut src, 42, 43), Ok(42));
        assert_eq!(sample_range(&mut src, u64::MAX - 1, u64::MAX), Ok(u64::MAX - 1));
        assert!(src.widths.is_empty());
    }

    #[test]
    fn test_empty_range_is_error() {
        let mut src = Scripted::new(&[0]);
        assert_eq!(
            sample_range(&mut src, 5, 5),
            Err(EngineError::EmptyRange { lower: 5, upper: 5 })
        );
        assert_eq!(
            sample_range(&mut src, 9, 3),
            Err(EngineError::EmptyRange { lower: 9, upper: 3 })
        );
        assert!(src.widths.is_empty());
    }

    #[test]
    fn test_full_width_range() {
        let mut src = Scripted::new(&[u64::MAX, u64::MAX - 1]);
        assert_eq!(sample_range(&mut src, 0, u64::MAX), Ok(u64::MAX - 1));
        assert_eq!(src.widths, [64, 64]);
    }

    #[test]
    fn test_bounded_budget() {
        let mut src = Scripted::new(&[15, 14, 13, 2]);
        assert_eq!(
            sample_range_bounded(&mut src, 0, 10, 3),
            Err(EngineError::SamplingBudgetExceeded { draws: 3 })
        );
        assert_eq!(sample_range_bounded(&mut src, 0, 10, 3), Ok(2));
    }
}
