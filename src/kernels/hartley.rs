//! Real Butterfly Kernels
//!
//! A Hartley butterfly for a block of size `m` with halves `lo` and `hi` (`dist = m / 2`):
//!
//! - indices `j` and `dist - j` of `hi` are rotated together by the angle `2πj/m`, for every
//!   `1 <= j < dist / 2`
//! - every `lo[i]`, `hi[i]` pair is then replaced by its sum and difference
//!
//! Indices `0` and `dist / 2` pair with themselves at angles `0` and `π/2`, which need no
//! multiplication, so they only take part in the sum/difference sweep.
//!
//! DIT rotates before the sweep and DIF after it. The rotation matrix `[[c, s], [s, -c]]` is
//! symmetric and its own inverse, so the DIF network is exactly the transpose of the DIT one.
use crate::kernels::common::butterfly_2;
use crate::scalar::Scalar;

/// `(a, b) -> (a·c + b·s, a·s - b·c)` on each symmetric pair of the upper half.
#[inline]
fn rotate_pairs<T: Scalar>(hi: &mut [T], sincos: &[T], dist: usize, stride: usize) {
    let quarter = dist >> 1;

    for j in 1..quarter {
        let k = dist - j;
        let idx = (j * stride - 1) << 1;
        let (s, c) = (sincos[idx], sincos[idx + 1]);

        let a = hi[j];
        let b = hi[k];
        hi[j] = a * c + b * s;
        hi[k] = a * s - b * c;
    }
}

#[inline]
fn sum_diff_halves<T: Scalar>(lo: &mut [T], hi: &mut [T]) {
    lo.iter_mut().zip(hi.iter_mut()).for_each(|(x0, x1)| {
        let a = *x0;
        let b = *x1;
        *x0 = a + b;
        *x1 = a - b;
    });
}

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
pub fn hartley_dit_chunk_n<T: Scalar>(buf: &mut [T], sincos: &[T], dist: usize, stride: usize) {
    buf.chunks_exact_mut(dist << 1).for_each(|chunk| {
        let (lo, hi) = chunk.split_at_mut(dist);
        rotate_pairs(hi, sincos, dist, stride);
        sum_diff_halves(lo, hi);
    });
}

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
pub fn hartley_dif_chunk_n<T: Scalar>(buf: &mut [T], sincos: &[T], dist: usize, stride: usize) {
    buf.chunks_exact_mut(dist << 1).for_each(|chunk| {
        let (lo, hi) = chunk.split_at_mut(dist);
        sum_diff_halves(lo, hi);
        rotate_pairs(hi, sincos, dist, stride);
    });
}

/// All DIT stages over bit-reversed input. Output is in natural order.
///
/// `sincos` is the interleaved table of
/// [`HartleyFactors::as_slice`](crate::factors::HartleyFactors::as_slice).
pub fn hartley_dit<T: Scalar>(buf: &mut [T], sincos: &[T], log_n: usize) {
    debug_assert_eq!(buf.len(), 1 << log_n);
    debug_assert_eq!(sincos.len(), buf.len());

    butterfly_2(buf);

    for ldm in 2..=log_n {
        let dist = 1 << (ldm - 1);
        let stride = 1 << (log_n - ldm);
        hartley_dit_chunk_n(buf, sincos, dist, stride);
    }
}

/// All DIF stages over natural-order input. Output is bit-reversed.
pub fn hartley_dif<T: Scalar>(buf: &mut [T], sincos: &[T], log_n: usize) {
    debug_assert_eq!(buf.len(), 1 << log_n);
    debug_assert_eq!(sincos.len(), buf.len());

    for ldm in (2..=log_n).rev() {
        let dist = 1 << (ldm - 1);
        let stride = 1 << (log_n - ldm);
        hartley_dif_chunk_n(buf, sincos, dist, stride);
    }

    butterfly_2(buf);
}
