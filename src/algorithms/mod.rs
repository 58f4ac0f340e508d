//! Permutation algorithms shared by the Fourier and Hartley transforms.
//!
//! Both decimation orders need exactly one bit-reversal per execution: DIT applies it to the
//! input, DIF to the output. The permutation only moves elements, so the same routines serve
//! complex and real buffers.

pub mod bit_reverse;

use crate::options::BitReverseAlgorithm;

/// Bit-reverses `buf` in place with the selected algorithm.
#[inline]
pub(crate) fn apply_bit_reverse<E: Copy + Default>(buf: &mut [E], algorithm: BitReverseAlgorithm) {
    match algorithm {
        BitReverseAlgorithm::Plain => bit_reverse::bit_reverse_permute(buf),
        BitReverseAlgorithm::Cobra => bit_reverse::bit_reverse_cobra(buf),
    }
}
