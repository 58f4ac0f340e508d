pub extern crate rustfft;

// export rustfft to fnt tests
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffer.
///
/// Both components are drawn uniformly from `[-1, 1)`.
pub fn gen_random_signal<T, R>(rng: &mut R, signal: &mut [Complex<T>])
where
    T: Float + rand::distributions::uniform::SampleUniform,
    R: Rng + ?Sized,
{
    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for z in signal.iter_mut() {
        z.re = uniform_dist.sample(rng);
        z.im = uniform_dist.sample(rng);
    }
}

/// Generate a random, real, signal in the provided buffer, uniformly from `[-1, 1)`.
pub fn gen_random_real<T, R>(rng: &mut R, signal: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
    R: Rng + ?Sized,
{
    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for x in signal.iter_mut() {
        *x = uniform_dist.sample(rng);
    }
}

/// Deterministic source for reproducible tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Angle `2π·(k·t mod n)/n`, reduced before the multiplication by π.
fn kernel_angle(k: usize, t: usize, n: usize) -> f64 {
    2.0 * std::f64::consts::PI * ((k * t) % n) as f64 / n as f64
}

/// Direct O(n²) evaluation of `X[k] = Σ x[t]·e^{∓2πikt/n}`.
///
/// Uses the negative exponent unless `inverse` is set. No normalization.
pub fn naive_dft(input: &[Complex<f64>], inverse: bool) -> Vec<Complex<f64>> {
    let n = input.len();
    let sign = if inverse { 1.0 } else { -1.0 };

    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, x)| x * Complex::from_polar(1.0, sign * kernel_angle(k, t, n)))
                .sum()
        })
        .collect()
}

/// Direct O(n²) evaluation of `H[k] = Σ x[t]·cas(2πkt/n)` with `cas = cos + sin`.
pub fn naive_dht(input: &[f64]) -> Vec<f64> {
    let n = input.len();

    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(t, x)| {
                    let (s, c) = kernel_angle(k, t, n).sin_cos();
                    x * (c + s)
                })
                .sum()
        })
        .collect()
}
