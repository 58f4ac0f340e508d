//! Common Kernels
//!
//! Kernels shared by the Fourier and Hartley transforms, in both decimation orders.
//!
use std::ops::{Add, Mul, Sub};

/// Simple butterfly for chunk_size == 2
///
/// The rotation of the smallest block is always 1, so this is a plain sum and difference.
/// Identical for DIT and DIF, and for complex and real elements.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly_2<E: Copy + Add<Output = E> + Sub<Output = E>>(buf: &mut [E]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];

        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// Multiplies every element by `factor`.
#[inline]
pub fn scale<E, T>(buf: &mut [E], factor: T)
where
    E: Copy + Mul<T, Output = E>,
    T: Copy,
{
    for z in buf.iter_mut() {
        *z = *z * factor;
    }
}
