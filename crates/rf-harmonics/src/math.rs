//! Factorial helpers for the normalization formulas
//!
//! Everything accumulates in `f64` and is converted into the caller's scalar
//! type once, at the end. `(l + |m|)!` leaves the `f32` range at 35!, long
//! before the ratios the normalizations actually need stop being
//! representable. [`factorial`] is the general primitive;
//! [`factorial_ratio`] is the overflow-safe form the normalizations use.

use num_traits::Float;

/// `n!` in the working precision `T`
///
/// Saturates to `+inf` once the value no longer fits `T`.
pub fn factorial<T: Float>(n: usize) -> T {
    let mut acc = 1.0f64;
    for k in 2..=n {
        acc *= k as f64;
        if acc.is_infinite() {
            break;
        }
    }
    cast(acc)
}

/// `numerator! / denominator!` without forming either factorial
///
/// Telescopes over the non-shared factors, so `factorial_ratio(0, 60)` stays
/// finite even though `60!` is far outside `f32`.
pub fn factorial_ratio(numerator: usize, denominator: usize) -> f64 {
    if numerator >= denominator {
        ((denominator + 1)..=numerator).fold(1.0, |acc, k| acc * k as f64)
    } else {
        ((numerator + 1)..=denominator).fold(1.0, |acc, k| acc / k as f64)
    }
}

/// Convert an `f64` intermediate into `T`
///
/// Float-to-float conversions saturate instead of failing, so the fallback
/// is never taken for `f32` / `f64`.
#[inline]
pub(crate) fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
