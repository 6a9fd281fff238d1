//! Field dimensionality - planar (2D) and spatial (3D) harmonic layouts
//!
//! Both layouts use ACN-style linear indexing. They differ in how many
//! harmonics share a degree: two in the plane (one for degree 0), `2l + 1`
//! on the sphere.

use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::math::{self, factorial_ratio};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Hoa2d {}
    impl Sealed for super::Hoa3d {}
}

/// Harmonic indexing and normalization for one field dimensionality
///
/// `index` is the linear channel number, `degree` is `l` and `order` is the
/// signed `m` with `-l <= m <= l`. Normalizations are only meaningful inside
/// that domain; see [`Dimension::contains`].
pub trait Dimension:
    sealed::Sealed + Copy + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Short label used in logs and errors
    const NAME: &'static str;

    /// Degree `l` of the harmonic at `index`
    fn degree_of(index: usize) -> usize;

    /// Order `m` of the harmonic at `index`
    fn order_of(index: usize) -> i64;

    /// Linear index of the harmonic `(degree, order)`
    fn index_of(degree: usize, order: i64) -> usize;

    /// Number of harmonics for decomposition order `order`
    fn channel_count(order: usize) -> usize;

    /// Number of harmonics sharing `degree`
    fn channels_in_degree(degree: usize) -> usize;

    /// Whether `(degree, order)` names a harmonic of this dimension
    fn contains(degree: usize, order: i64) -> bool;

    /// Semi-normalization (SN3D-style) factor
    fn semi_normalization<T: Float>(degree: usize, order: i64) -> T;

    /// Full normalization (N3D-style) factor
    fn normalization<T: Float>(degree: usize, order: i64) -> T;
}

/// Planar (azimuth only) harmonics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hoa2d;

/// Spherical (azimuth + elevation) harmonics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hoa3d;

impl Dimension for Hoa2d {
    const NAME: &'static str = "2d";

    #[inline]
    fn degree_of(index: usize) -> usize {
        index / 2 + index % 2
    }

    #[inline]
    fn order_of(index: usize) -> i64 {
        // degree of usize::MAX is 2^63, which only fits i64 once negated
        let degree = Self::degree_of(index) as i64;
        // odd indices carry the negative orders
        if index % 2 == 1 { degree.wrapping_neg() } else { degree }
    }

    #[inline]
    fn index_of(_degree: usize, order: i64) -> usize {
        (order.unsigned_abs() as usize)
            .wrapping_mul(2)
            .wrapping_sub(usize::from(order < 0))
    }

    #[inline]
    fn channel_count(order: usize) -> usize {
        order * 2 + 1
    }

    #[inline]
    fn channels_in_degree(degree: usize) -> usize {
        if degree == 0 { 1 } else { 2 }
    }

    #[inline]
    fn contains(degree: usize, order: i64) -> bool {
        order.unsigned_abs() == degree as u64
    }

    #[inline]
    fn semi_normalization<T: Float>(_degree: usize, _order: i64) -> T {
        T::one()
    }

    #[inline]
    fn normalization<T: Float>(_degree: usize, _order: i64) -> T {
        T::one()
    }
}

impl Hoa3d {
    /// `sqrt((2 - δ(m,0)) * (l - |m|)! / (l + |m|)!)`, zero outside `|m| <= l`
    fn semi_normalization_f64(degree: usize, order: i64) -> f64 {
        let m = order.unsigned_abs() as usize;
        if m > degree {
            return 0.0;
        }
        let weight = if m == 0 { 1.0 } else { 2.0 };
        (weight * factorial_ratio(degree - m, degree + m)).sqrt()
    }
}

impl Dimension for Hoa3d {
    const NAME: &'static str = "3d";

    #[inline]
    fn degree_of(index: usize) -> usize {
        index.isqrt()
    }

    #[inline]
    fn order_of(index: usize) -> i64 {
        let degree = Self::degree_of(index);
        // |m| <= l, so the wrapped difference is a small signed value
        index.wrapping_sub(degree * (degree + 1)) as isize as i64
    }

    #[inline]
    fn index_of(degree: usize, order: i64) -> usize {
        degree
            .wrapping_mul(degree.wrapping_add(1))
            .wrapping_add_signed(order as isize)
    }

    #[inline]
    fn channel_count(order: usize) -> usize {
        (order + 1) * (order + 1)
    }

    #[inline]
    fn channels_in_degree(degree: usize) -> usize {
        degree * 2 + 1
    }

    #[inline]
    fn contains(degree: usize, order: i64) -> bool {
        order.unsigned_abs() <= degree as u64
    }

    fn semi_normalization<T: Float>(degree: usize, order: i64) -> T {
        math::cast(Self::semi_normalization_f64(degree, order))
    }

    fn normalization<T: Float>(degree: usize, order: i64) -> T {
        let full = Self::semi_normalization_f64(degree, order) * ((2 * degree + 1) as f64).sqrt();
        math::cast(full)
    }
}
