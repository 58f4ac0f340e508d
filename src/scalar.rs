use std::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Floating point precision the transforms are generic over.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + FloatConst + Default + Debug + Send + Sync + 'static {
    /// Lossless for every index a transform can address.
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_scalar {
    ($($precision:ty),*) => {
        $(
            impl Scalar for $precision {
                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $precision
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);
