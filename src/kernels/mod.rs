//! Radix-2 Butterfly Kernels
//!
//! Every kernel works in place on a borrowed buffer and reads its rotations from a
//! precomputed factor table. None of them allocate.
//!
//! ## Organization
//!
//! - `fourier`: complex butterflies, DIT and DIF
//! - `hartley`: real butterflies, DIT and DIF
//! - `common`: the unrotated size-2 pass and normalization, shared by both

pub mod common;
pub mod fourier;
pub mod hartley;
