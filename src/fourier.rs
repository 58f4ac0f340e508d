//! Complex Fourier transform of a fixed power-of-two length.
use num_complex::Complex;

use crate::algorithms::apply_bit_reverse;
use crate::error::{check_len, check_size, FntError};
use crate::factors::FourierFactors;
use crate::kernels::common::scale;
use crate::kernels::fourier::{fourier_dif, fourier_dit};
use crate::options::{Direction, DivisionKind, Options};
use crate::scalar::Scalar;

/// Pre-computed state for an in-place FFT of `n` points.
///
/// Construction pays the O(n) cost of the twiddle tables once; [`FourierTransform::execute`]
/// can then be called any number of times, from any number of threads, each with its own
/// buffer of exactly `n` elements.
#[derive(Debug, Clone)]
pub struct FourierTransform<T> {
    n: usize,
    log_n: usize,
    factors: FourierFactors<T>,
    options: Options,
}

impl<T: Scalar> FourierTransform<T> {
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
        let factors = FourierFactors::new(n)?;

        log::debug!(
            "planned fourier transform: n = {n}, {} twiddles per direction, {:?}",
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

    /// Transforms `buf` in place.
    ///
    /// With [`DivisionKind::Dit`] the input is bit-reversed first and the butterflies run from
    /// small blocks to large; with [`DivisionKind::Dif`] they run from large to small and the
    /// output is bit-reversed afterwards. Both produce the spectrum in natural order.
    ///
    /// If `normalize` is set, the result is divided by `n`, so that a forward transform
    /// followed by a normalized backward one returns the input.
    ///
    /// # Errors
    ///
    /// Returns [`FntError::LengthMismatch`] if `buf.len() != n`. The buffer is not modified
    /// in that case.
    pub fn execute(
        &self,
        buf: &mut [Complex<T>],
        division: DivisionKind,
        direction: Direction,
        normalize: bool,
    ) -> Result<(), FntError> {
        check_len(self.n, buf.len())?;

        let twiddles = self.factors.get(direction);
        match division {
            DivisionKind::Dit => {
                apply_bit_reverse(buf, self.options.bit_reverse);
                fourier_dit(buf, twiddles, self.log_n);
            }
            DivisionKind::Dif => {
                fourier_dif(buf, twiddles, self.log_n);
                apply_bit_reverse(buf, self.options.bit_reverse);
            }
        }

        if normalize {
            scale(buf, T::one() / T::from_usize(self.n));
        }

        Ok(())
    }

    /// Transform length.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; a transform has at least 2 points.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn log_n(&self) -> usize {
        self.log_n
    }

    pub fn factors(&self) -> &FourierFactors<T> {
        &self.factors
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::SQRT_2;
    use std::ops::Range;

    use utilities::rustfft::FftPlanner;
    use utilities::{assert_float_closeness, gen_random_signal, naive_dft, seeded_rng};

    use super::*;
    use crate::options::BitReverseAlgorithm;

    const DIVISIONS: [DivisionKind; 2] = [DivisionKind::Dit, DivisionKind::Dif];

    fn random_signal(n: usize, seed: u64) -> Vec<Complex<f64>> {
        let mut signal = vec![Complex::default(); n];
        gen_random_signal(&mut seeded_rng(seed), &mut signal);
        signal
    }

    #[test]
    fn round_trip() {
        let range = Range { start: 4, end: 16 };

        for k in range {
            let n = 1 << k;
            let fft = FourierTransform::<f64>::new(n).unwrap();
            let input = random_signal(n, k as u64);

            for division in DIVISIONS {
                let mut buf = input.clone();
                fft.execute(&mut buf, division, Direction::Forward, false)
                    .unwrap();
                fft.execute(&mut buf, division, Direction::Backward, true)
                    .unwrap();

                for (actual, expected) in buf.iter().zip(input.iter()) {
                    assert_float_closeness(actual.re, expected.re, 1e-12);
                    assert_float_closeness(actual.im, expected.im, 1e-12);
                }
            }
        }
    }

    #[test]
    fn round_trip_f32() {
        for k in 4..12 {
            let n = 1 << k;
            let fft = FourierTransform::<f32>::new(n).unwrap();
            let input: Vec<Complex<f32>> = (0..n)
                .map(|i| Complex::new((i as f32 * 0.1).sin(), (i as f32 * 0.7).cos()))
                .collect();

            for division in DIVISIONS {
                let mut buf = input.clone();
                fft.execute(&mut buf, division, Direction::Forward, false)
                    .unwrap();
                fft.execute(&mut buf, division, Direction::Backward, true)
                    .unwrap();

                for (actual, expected) in buf.iter().zip(input.iter()) {
                    assert_float_closeness(actual.re, expected.re, 1e-4);
                    assert_float_closeness(actual.im, expected.im, 1e-4);
                }
            }
        }
    }

    #[test]
    fn constant_input() {
        let n = 16;
        let fft = FourierTransform::<f64>::new(n).unwrap();

        for division in DIVISIONS {
            let mut buf = vec![Complex::new(1.0, 0.0); n];
            fft.execute(&mut buf, division, Direction::Forward, false)
                .unwrap();

            assert_eq!(buf[0], Complex::new(n as f64, 0.0));
            assert!(buf[1..].iter().all(|z| *z == Complex::new(0.0, 0.0)));
        }
    }

    #[test]
    fn known_spectrum_8() {
        let fft = FourierTransform::<f64>::new(8).unwrap();
        let input: Vec<Complex<f64>> = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]
            .iter()
            .map(|x| Complex::new(*x, 0.0))
            .collect();
        let expected = [
            (4.0, 0.0),
            (1.0, -1.0 - SQRT_2),
            (0.0, 0.0),
            (1.0, 1.0 - SQRT_2),
            (0.0, 0.0),
            (1.0, SQRT_2 - 1.0),
            (0.0, 0.0),
            (1.0, 1.0 + SQRT_2),
        ];

        for division in DIVISIONS {
            let mut buf = input.clone();
            fft.execute(&mut buf, division, Direction::Forward, false)
                .unwrap();
            for (z, (re, im)) in buf.iter().zip(expected) {
                assert_float_closeness(z.re, re, 1e-12);
                assert_float_closeness(z.im, im, 1e-12);
            }

            fft.execute(&mut buf, division, Direction::Backward, true)
                .unwrap();
            for (z, x) in buf.iter().zip(input.iter()) {
                assert_float_closeness(z.re, x.re, 1e-12);
                assert_float_closeness(z.im, 0.0, 1e-12);
            }
        }
    }

    #[test]
    fn length_mismatch() {
        let n = 16;
        let fft = FourierTransform::<f64>::new(n).unwrap();
        let input = random_signal(n, 1);

        for division in DIVISIONS {
            let mut buf = input.clone();
            let err = fft
                .execute(&mut buf[1..], division, Direction::Forward, false)
                .unwrap_err();
            assert_eq!(
                err,
                FntError::LengthMismatch {
                    expected: n,
                    actual: n - 1
                }
            );
            assert_eq!(buf, input);
        }
    }

    #[test]
    fn invalid_size() {
        for n in [0, 1, 3, 12, 100] {
            assert_eq!(
                FourierTransform::<f64>::new(n).unwrap_err(),
                FntError::InvalidSize(n)
            );
        }
    }

    #[test]
    fn direct_transform() {
        let n = 128;
        let fft = FourierTransform::<f64>::new(n).unwrap();
        let input = random_signal(n, 128);

        for (direction, inverse) in [(Direction::Forward, false), (Direction::Backward, true)] {
            let expected = naive_dft(&input, inverse);

            for division in DIVISIONS {
                let mut buf = input.clone();
                fft.execute(&mut buf, division, direction, false).unwrap();

                for (actual, expected) in buf.iter().zip(expected.iter()) {
                    assert_float_closeness(actual.re, expected.re, 1e-12);
                    assert_float_closeness(actual.im, expected.im, 1e-12);
                }
            }
        }
    }

    #[test]
    fn matches_rustfft() {
        for k in 4..17 {
            let n = 1 << k;
            let fft = FourierTransform::<f64>::new(n).unwrap();

            let mut buf: Vec<Complex<f64>> = (1..=n)
                .map(|i| Complex::new(i as f64, i as f64))
                .collect();
            let mut expected = buf.clone();

            let mut planner = FftPlanner::new();
            planner.plan_fft_forward(n).process(&mut expected);

            fft.execute(&mut buf, DivisionKind::Dif, Direction::Forward, false)
                .unwrap();

            buf.iter().zip(expected.iter()).for_each(|(z, e)| {
                assert_float_closeness(z.re, e.re, 0.01);
                assert_float_closeness(z.im, e.im, 0.01);
            });
        }
    }

    #[test]
    fn cobra_matches_plain() {
        let n = 1 << 14;
        let plain = FourierTransform::<f64>::new(n).unwrap();
        let mut options = Options::default();
        options.bit_reverse = BitReverseAlgorithm::Cobra;
        let cobra = FourierTransform::<f64>::with_options(n, options).unwrap();
        assert_eq!(cobra.options().bit_reverse, BitReverseAlgorithm::Cobra);

        let input = random_signal(n, 14);
        for division in DIVISIONS {
            let mut a = input.clone();
            let mut b = input.clone();
            plain.execute(&mut a, division, Direction::Forward, true)
                .unwrap();
            cobra.execute(&mut b, division, Direction::Forward, true)
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn shared_across_threads() {
        let n = 1 << 10;
        let fft = FourierTransform::<f64>::new(n).unwrap();
        let input = random_signal(n, 10);

        let mut expected = input.clone();
        fft.execute(&mut expected, DivisionKind::Dit, Direction::Forward, false)
            .unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let fft = &fft;
                    let mut buf = input.clone();
                    s.spawn(move || {
                        fft.execute(&mut buf, DivisionKind::Dit, Direction::Forward, false)
                            .unwrap();
                        buf
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn accessors() {
        let fft = FourierTransform::<f32>::new(64).unwrap();
        assert_eq!(fft.len(), 64);
        assert_eq!(fft.log_n(), 6);
        assert_eq!(fft.factors().len(), 32);
        assert!(!fft.is_empty());
        assert_eq!(fft.options(), &Options::default());
    }
}
