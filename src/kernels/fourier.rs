//! Complex Butterfly Kernels
//!
//! The block size `m` grows from 2 to `n` in DIT and shrinks from `n` to 2 in DIF. A block of size `m` uses every `n / m`-th entry of the `n / 2` twiddles.
use num_complex::Complex;

use crate::kernels::common::butterfly_2;
use crate::scalar::Scalar;

/// DIT butterfly for one block size: `low = a + b·w`, `high = a - b·w`.
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
pub fn fourier_dit_chunk_n<T: Scalar>(
    buf: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    dist: usize,
    stride: usize,
) {
    let chunk_size = dist << 1;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter().step_by(stride))
            .for_each(|((z0, z1), w)| {
                let a = *z0;
                let bw = *z1 * *w;
                *z0 = a + bw;
                *z1 = a - bw;
            });
    });
}

/// DIF butterfly for one block size: `low = a + b`, `high = (a - b)·w`.
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
pub fn fourier_dif_chunk_n<T: Scalar>(
    buf: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    dist: usize,
    stride: usize,
) {
    let chunk_size = dist << 1;

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter().step_by(stride))
            .for_each(|((z0, z1), w)| {
                let a = *z0;
                let b = *z1;
                *z0 = a + b;
                *z1 = (a - b) * *w;
            });
    });
}

/// All DIT stages over bit-reversed input. Output is in natural order.
///
/// `twiddles` holds the `n / 2` rotations of the chosen direction, `log_n` is `log2(buf.len())`.
pub fn fourier_dit<T: Scalar>(buf: &mut [Complex<T>], twiddles: &[Complex<T>], log_n: usize) {
    debug_assert_eq!(buf.len(), 1 << log_n);
    debug_assert_eq!(twiddles.len(), buf.len() >> 1);

    butterfly_2(buf);

    for ldm in 2..=log_n {
        let dist = 1 << (ldm - 1);
        let stride = 1 << (log_n - ldm);
        fourier_dit_chunk_n(buf, twiddles, dist, stride);
    }
}

/// All DIF stages over natural-order input. Output is bit-reversed.
pub fn fourier_dif<T: Scalar>(buf: &mut [Complex<T>], twiddles: &[Complex<T>], log_n: usize) {
    debug_assert_eq!(buf.len(), 1 << log_n);
    debug_assert_eq!(twiddles.len(), buf.len() >> 1);

    for ldm in (2..=log_n).rev() {
        let dist = 1 << (ldm - 1);
        let stride = 1 << (log_n - ldm);
        fourier_dif_chunk_n(buf, twiddles, dist, stride);
    }

    butterfly_2(buf);
}
