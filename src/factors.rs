//! Precomputed rotation factors.
//!
//! Every angle is computed directly from its index as an exact fraction of π with the
//! half-length `n / 2` as denominator. Nothing is accumulated by repeated rotation, so
//! the last entry of a table is as accurate as the first.
use num_complex::Complex;

use crate::error::{check_size, FntError};
use crate::options::Direction;
use crate::scalar::Scalar;

/// Twiddle factors for a complex transform of `n` points.
///
/// Holds `n / 2` unit rotations per direction: `e^{-2πik/n}` for [`Direction::Forward`] and
/// `e^{+2πik/n}` for [`Direction::Backward`].
#[derive(Debug, Clone)]
pub struct FourierFactors<T> {
    forward: Vec<Complex<T>>,
    backward: Vec<Complex<T>>,
}

impl<T: Scalar> FourierFactors<T> {
    /// # Errors
    ///
    /// Returns [`FntError::InvalidSize`] if `n < 2` or `n` is not a power of 2.
    pub fn new(n: usize) -> Result<Self, FntError> {
        check_size(n)?;

        let half = n >> 1;
        let denominator = T::from_usize(half);

        let (forward, backward) = (0..half)
            .map(|k| {
                let angle = T::PI() * T::from_usize(k) / denominator;
                (
                    Complex::from_polar(T::one(), -angle),
                    Complex::from_polar(T::one(), angle),
                )
            })
            .unzip();

        Ok(Self { forward, backward })
    }

    /// The table used by butterflies running in `direction`.
    #[inline]
    pub fn get(&self, direction: Direction) -> &[Complex<T>] {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Backward => &self.backward,
        }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Rotation factors for a real Hartley transform of `n` points.
///
/// Stores `n` values as interleaved `(sin, cos)` pairs, pair `m - 1` holding the angle
/// `π·m/(n/2)` for `m = 1..=n/2`. The Hartley transform is its own inverse up to scale, so
/// one table serves both directions.
#[derive(Debug, Clone)]
pub struct HartleyFactors<T> {
    sincos: Vec<T>,
}

impl<T: Scalar> HartleyFactors<T> {
    /// # Errors
    ///
    /// Returns [`FntError::InvalidSize`] if `n < 2` or `n` is not a power of 2.
    pub fn new(n: usize) -> Result<Self, FntError> {
        check_size(n)?;

        let half = n >> 1;
        let denominator = T::from_usize(half);

        let mut sincos = vec![T::zero(); n];
        sincos
            .chunks_exact_mut(2)
            .enumerate()
            .for_each(|(idx, pair)| {
                let angle = T::PI() * T::from_usize(idx + 1) / denominator;
                let (s, c) = angle.sin_cos();
                pair[0] = s;
                pair[1] = c;
            });

        Ok(Self { sincos })
    }

    /// `(sin, cos)` of the angle `π·m/(n/2)`.
    ///
    /// `m` must be in `1..=n/2`.
    #[inline]
    pub fn sin_cos(&self, m: usize) -> (T, T) {
        let idx = (m - 1) << 1;
        (self.sincos[idx], self.sincos[idx + 1])
    }

    /// The raw interleaved table.
    pub fn as_slice(&self) -> &[T] {
        &self.sincos
    }

    pub fn len(&self) -> usize {
        self.sincos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sincos.is_empty()
    }
}
