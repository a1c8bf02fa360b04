pub mod sort;
pub mod text;

use num::Float;

/// Convert an `f64` into the working float type
/// Lossless for `f64`, rounds for `f32`; unrepresentable values become NaN.
#[inline(always)]
pub fn cast<N: Float>(v: f64) -> N {
    num::cast::<f64, N>(v).unwrap_or_else(N::nan)
}
