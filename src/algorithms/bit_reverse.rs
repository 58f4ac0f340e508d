//! In-place bit-reversal permutations.
//!
//! The element at index `i` of a buffer with `2^k` elements moves to the index whose `k`-bit
//! binary representation is `i` reversed. The mapping is its own inverse.
//!
//! # References
//!
//! [1] J. Arndt, "Matters Computational: Ideas, Algorithms, Source Code", Springer, 2011, ch. 2.1.
//! [2] L. Carter and K. S. Gatlin, "Towards an optimal bit-reversal permutation program," Proceedings 39th Annual
//! Symposium on Foundations of Computer Science (Cat. No.98CB36280), Palo Alto, CA, USA, 1998, pp. 544-553, doi:
//! 10.1109/SFCS.1998.743505.

const BLOCK_WIDTH: usize = 64;
const LOG_BLOCK_WIDTH: usize = 6;

/// Bit-reverses `buf` in a single pass.
///
/// The reversed counterpart `r` of the running index `x` is never computed from scratch.
/// Going from an even `x` to `x + 1` only sets the top bit of `r`. Going from an odd `x` to
/// `x + 1` propagates a carry downwards from the top bit, which costs amortized O(1).
///
/// Only indices below `n / 2` are visited. A pair `(x, r)` of two indices in the lower half
/// is swapped together with its mirror `(n-1-x, n-1-r)`, which covers every pair in the
/// upper half as well; an odd `x` in the lower half always pairs with an even index in the
/// upper half.
///
/// # Panics
///
/// Panics if `buf.len()` is not a power of 2 (debug builds only).
pub fn bit_reverse_permute<E>(buf: &mut [E]) {
    let n = buf.len();
    debug_assert!(n <= 1 || n.is_power_of_two());

    let nh = n >> 1;
    let mut r = 0;
    let mut x = 1;

    while x < nh {
        // odd x: one step past an even index
        r += nh;
        buf.swap(x, r);
        x += 1;

        // even x: clear set bits from the top until a cleared one is found, then set it
        let mut bit = n;
        loop {
            bit >>= 1;
            r ^= bit;
            if bit == 0 || r & bit != 0 {
                break;
            }
        }

        if r > x {
            buf.swap(x, r);
            buf.swap(n - 1 - x, n - 1 - r);
        }
        x += 1;
    }
}

#[inline]
fn reverse_low_bits(x: usize, bits: usize) -> usize {
    x.reverse_bits() >> (usize::BITS as usize - bits)
}

/// Pure Rust implementation of Cache Optimal Bit-Reverse Algorithm (COBRA).
///
/// Splits every index into `a | b | c`, where `a` and `c` are [`LOG_BLOCK_WIDTH`] bits wide,
/// and moves one `b` slice at a time through a stack buffer of `BLOCK_WIDTH²` elements.
/// Buffers that are not larger than a single block use [`bit_reverse_permute`] instead.
///
/// # Panics
///
/// Panics if `buf.len()` is not a power of 2 (debug builds only).
pub fn bit_reverse_cobra<E: Copy + Default>(buf: &mut [E]) {
    let n = buf.len();
    debug_assert!(n <= 1 || n.is_power_of_two());

    let log_n = n.checked_ilog2().unwrap_or(0) as usize;
    if log_n <= 2 * LOG_BLOCK_WIDTH {
        bit_reverse_permute(buf);
        return;
    }

    let num_b_bits = log_n - 2 * LOG_BLOCK_WIDTH;
    let b_size: usize = 1 << num_b_bits;

    let mut block = [E::default(); BLOCK_WIDTH * BLOCK_WIDTH];

    for b in 0..b_size {
        let b_rev = reverse_low_bits(b, num_b_bits);

        for a in 0..BLOCK_WIDTH {
            let a_rev = reverse_low_bits(a, LOG_BLOCK_WIDTH);
            let src = (a << num_b_bits << LOG_BLOCK_WIDTH) | (b << LOG_BLOCK_WIDTH);
            let dst = a_rev << LOG_BLOCK_WIDTH;
            block[dst..dst + BLOCK_WIDTH].copy_from_slice(&buf[src..src + BLOCK_WIDTH]);
        }

        // index a b c is below its reverse c' b' a' iff a < c' or (a == c' and b < b')
        for c in 0..BLOCK_WIDTH {
            let c_rev = reverse_low_bits(c, LOG_BLOCK_WIDTH);
            for a_rev in 0..BLOCK_WIDTH {
                let a = reverse_low_bits(a_rev, LOG_BLOCK_WIDTH);
                if a < c_rev || (a == c_rev && b < b_rev) {
                    let v_idx = (c_rev << num_b_bits << LOG_BLOCK_WIDTH)
                        | (b_rev << LOG_BLOCK_WIDTH)
                        | a_rev;
                    let b_idx = (a_rev << LOG_BLOCK_WIDTH) | c;
                    std::mem::swap(&mut buf[v_idx], &mut block[b_idx]);
                }
            }
        }

        for a in 0..BLOCK_WIDTH {
            let a_rev = reverse_low_bits(a, LOG_BLOCK_WIDTH);
            for c in 0..BLOCK_WIDTH {
                let c_rev = reverse_low_bits(c, LOG_BLOCK_WIDTH);
                if a < c_rev || (a == c_rev && b < b_rev) {
                    let v_idx = (a << num_b_bits << LOG_BLOCK_WIDTH) | (b << LOG_BLOCK_WIDTH) | c;
                    let b_idx = (a_rev << LOG_BLOCK_WIDTH) | c;
                    std::mem::swap(&mut buf[v_idx], &mut block[b_idx]);
                }
            }
        }
    }
}
