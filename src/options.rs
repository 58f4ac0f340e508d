/// Options to tune to improve performance depending on the hardware and input size.
///
/// Constructing a transform without options uses [`Options::default`], which selects the
/// plain in-place bit reversal. Use [`Options::guess_options`] to pick based on length.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub bit_reverse: BitReverseAlgorithm,
}

/// Buffers at least this long do not fit comfortably in cache, so COBRA wins there.
const COBRA_THRESHOLD_LOG_N: u32 = 20;

impl Options {
    /// Picks reasonable options for a transform of `input_size` points.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        if input_size.checked_ilog2().unwrap_or(0) >= COBRA_THRESHOLD_LOG_N {
            options.bit_reverse = BitReverseAlgorithm::Cobra;
        }
        options
    }
}

/// The algorithm to use for bit reversal.
/// Both produce exactly the same permutation; they differ only in memory access pattern.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitReverseAlgorithm {
    #[default]
    /// Single pass with an incrementally updated reversed index. Performs best at smaller sizes.
    Plain,
    /// Cache-Optimal Bit Reversal Algorithm
    ///
    /// This is faster at larger datasets that do not fit into the cache.
    /// Falls back to [`BitReverseAlgorithm::Plain`] for buffers smaller than one block.
    Cobra,
}

/// Order in which butterflies and the bit reversal are applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DivisionKind {
    /// Decimation in time: permute the input, then combine from small blocks to large.
    Dit,
    /// Decimation in frequency: combine from large blocks to small, then permute the output.
    Dif,
}

/// Sign of the exponent in the Fourier kernel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Rotations at angle `-2πk/n`
    Forward,
    /// Rotations at angle `+2πk/n`
    Backward,
}
