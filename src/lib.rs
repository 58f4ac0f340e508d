//! In-place radix-2 Fourier and Hartley transforms.
//!
//! Both transforms work on power-of-two lengths and are planned once per length:
//!
//! ```
//! use fnt::{Complex, Direction, DivisionKind, FourierTransform};
//!
//! let fft = FourierTransform::<f64>::new(8)?;
//! let mut signal = vec![Complex::new(1.0, 0.0); 8];
//!
//! fft.execute(&mut signal, DivisionKind::Dit, Direction::Forward, false)?;
//! assert_eq!(signal[0], Complex::new(8.0, 0.0));
//!
//! fft.execute(&mut signal, DivisionKind::Dit, Direction::Backward, true)?;
//! assert_eq!(signal, vec![Complex::new(1.0, 0.0); 8]);
//! # Ok::<(), fnt::FntError>(())
//! ```
//!
//! The Hartley transform maps real input to real output and is its own inverse:
//!
//! ```
//! use fnt::{DivisionKind, HartleyTransform};
//!
//! let fht = HartleyTransform::<f64>::new(4)?;
//! let mut signal = vec![1.0, 2.0, 3.0, 4.0];
//!
//! fht.execute(&mut signal, DivisionKind::Dif, false)?;
//! assert_eq!(signal, vec![10.0, -4.0, -2.0, 0.0]);
//!
//! fht.execute(&mut signal, DivisionKind::Dif, true)?;
//! assert_eq!(signal, vec![1.0, 2.0, 3.0, 4.0]);
//! # Ok::<(), fnt::FntError>(())
//! ```
//!
//! Descriptors are immutable after construction and can be shared between threads, as long as
//! every thread transforms its own buffer. `execute` never allocates.

pub use num_complex::Complex;

pub use crate::algorithms::bit_reverse::{bit_reverse_cobra, bit_reverse_permute};
pub use crate::error::FntError;
pub use crate::factors::{FourierFactors, HartleyFactors};
pub use crate::fourier::FourierTransform;
pub use crate::hartley::HartleyTransform;
pub use crate::options::{BitReverseAlgorithm, Direction, DivisionKind, Options};
pub use crate::scalar::Scalar;

pub mod algorithms;
mod error;
pub mod factors;
mod fourier;
mod hartley;
pub mod kernels;
pub mod options;
mod scalar;
