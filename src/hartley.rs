//! Real Hartley transform of a fixed power-of-two length.
//!
//! The discrete Hartley transform `H[k] = Σ x[t]·cas(2πkt/n)`, with `cas = cos + sin`, maps real
//! input to real output and is its own inverse up to a factor of `n`. There is therefore no
//! direction to choose: applying the transform twice, normalizing once, returns the input.
use crate::algorithms::apply_bit_reverse;
use crate::error::{check_len, check_size, FntError};
use crate::factors::HartleyFactors;
use crate::kernels::common::scale;
use crate::kernels::hartley::{hartley_dif, hartley_dit};
use crate::options::{DivisionKind, Options};
use crate::scalar::Scalar;

/// Pre-computed state for an in-place FHT of `n` points.
#[derive(Debug, Clone)]
pub struct HartleyTransform<T> {
    n: usize,
    log_n: usize,
    factors: HartleyFactors<T>,
    options: Options,
}

impl<T: Scalar> HartleyTransform<T> {
    /// Create a transform for `n` points with default [`Options`].
    ///
    /// # Errors
    ///
    /// Returns [`FntError::InvalidSize`] if `n < 2` or `n` is not a power of 2.
    pub fn new(n: usize) -> Result<Self, FntError> {
        Self::with_options(n, Options::default())
    }

    /// Create a transform for `n` points.
    ///
    /// # Errors
    ///
    /// Returns [`FntError::InvalidSize`] if `n < 2` or `n` is not a power of 2.
    pub fn with_options(n: usize, options: Options) -> Result<Self, FntError> {
        let log_n = check_size(n)?;
        let factors = HartleyFactors::new(n)?;

        log::debug!(
            "planned hartley transform: n = {n}, {} sin/cos values, {:?}",
            factors.len(),
            options.bit_reverse
        );

        Ok(Self {
            n,
            log_n,
            factors,
            options,
        })
    }

    /// Transforms `buf` in place, dividing the result by `n` if `normalize` is set.
    ///
    /// # Errors
    ///
    /// Returns [`FntError::LengthMismatch`] if `buf.len() != n`. The buffer is not modified
    /// in that case.
    pub fn execute(
        &self,
        buf: &mut [T],
        division: DivisionKind,
        normalize: bool,
    ) -> Result<(), FntError> {
        check_len(self.n, buf.len())?;

        let sincos = self.factors.as_slice();
        match division {
            DivisionKind::Dit => {
                apply_bit_reverse(buf, self.options.bit_reverse);
                hartley_dit(buf, sincos, self.log_n);
            }
            DivisionKind::Dif => {
                hartley_dif(buf, sincos, self.log_n);
                apply_bit_reverse(buf, self.options.bit_reverse);
            }
        }

        if normalize {
            scale(buf, T::one() / T::from_usize(self.n));
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn log_n(&self) -> usize {
        self.log_n
    }

    pub fn factors(&self) -> &HartleyFactors<T> {
        &self.factors
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
