//! Harmonic value - one Ambisonic channel with its degree and order

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Hoa2d, Hoa3d};
use crate::error::{HarmonicError, HarmonicResult};

/// A single spherical (or circular) harmonic, identified by its ACN index
///
/// `D` selects the field dimensionality ([`Hoa2d`] / [`Hoa3d`]), `T` the
/// scalar type normalization factors are returned in. Degree and order are
/// derived from the index at construction; equality and hashing only look
/// at the index.
#[derive(Serialize, Deserialize)]
#[serde(
    try_from = "HarmonicRecord",
    into = "HarmonicRecord",
    bound = "D: Dimension, T: Float"
)]
pub struct Harmonic<D, T> {
    index: usize,
    degree: usize,
    order: i64,
    marker: PhantomData<fn() -> (D, T)>,
}

/// Planar harmonic
pub type Harmonic2d<T = f64> = Harmonic<Hoa2d, T>;

/// Spherical harmonic
pub type Harmonic3d<T = f64> = Harmonic<Hoa3d, T>;

impl<D: Dimension, T: Float> Harmonic<D, T> {
    /// Create the harmonic at ACN `index`
    #[inline]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            degree: D::degree_of(index),
            order: D::order_of(index),
            marker: PhantomData,
        }
    }

    /// Create the harmonic `(degree, order)`
    ///
    /// Fails if the pair does not exist in `D` (e.g. order 0 above degree 0
    /// in 2D, or `|order| > degree` in 3D).
    pub fn from_degree_order(degree: usize, order: i64) -> HarmonicResult<Self> {
        if !D::contains(degree, order) {
            log::trace!("rejected {} harmonic ({degree}, {order})", D::NAME);
            return Err(HarmonicError::OrderOutOfRange {
                dimension: D::NAME,
                degree,
                order,
            });
        }
        Ok(Self::new(D::index_of(degree, order)))
    }

    /// All harmonics of a decomposition order, in index order
    pub fn all(decomposition_order: usize) -> impl Iterator<Item = Self> {
        (0..D::channel_count(decomposition_order)).map(Self::new)
    }

    /// ACN index
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Degree `l`
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Order `m`
    #[inline]
    pub fn order(&self) -> i64 {
        self.order
    }

    /// Display name, e.g. `"Harmonic 3 -2"`
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Full normalization factor of this harmonic
    #[inline]
    pub fn normalization(&self) -> T {
        D::normalization(self.degree, self.order)
    }

    /// Semi-normalization factor of this harmonic
    #[inline]
    pub fn semi_normalization(&self) -> T {
        D::semi_normalization(self.degree, self.order)
    }
}

impl<D, T> Clone for Harmonic<D, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T> Copy for Harmonic<D, T> {}

impl<D, T> PartialEq for Harmonic<D, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<D, T> Eq for Harmonic<D, T> {}

impl<D, T> Hash for Harmonic<D, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<D: Dimension, T> fmt::Debug for Harmonic<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harmonic")
            .field("dimension", &D::NAME)
            .field("index", &self.index)
            .field("degree", &self.degree)
            .field("order", &self.order)
            .finish()
    }
}

impl<D, T> fmt::Display for Harmonic<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Harmonic {} {}", self.degree, self.order)
    }
}

/// Serialized form of a [`Harmonic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonicRecord {
    pub index: usize,
    pub degree: usize,
    pub order: i64,
}

impl<D, T> From<Harmonic<D, T>> for HarmonicRecord {
    fn from(harmonic: Harmonic<D, T>) -> Self {
        Self {
            index: harmonic.index,
            degree: harmonic.degree,
            order: harmonic.order,
        }
    }
}

impl<D: Dimension, T: Float> TryFrom<HarmonicRecord> for Harmonic<D, T> {
    type Error = HarmonicError;

    fn try_from(record: HarmonicRecord) -> HarmonicResult<Self> {
        let harmonic = Self::new(record.index);
        if harmonic.degree != record.degree || harmonic.order != record.order {
            return Err(HarmonicError::InconsistentRecord {
                index: record.index,
                degree: record.degree,
                order: record.order,
            });
        }
        Ok(harmonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_derives_degree_and_order() {
        let h = Harmonic3d::<f32>::new(10);
        assert_eq!(h.index(), 10);
        assert_eq!(h.degree(), 3);
        assert_eq!(h.order(), -2);

        let h = Harmonic2d::<f32>::new(13);
        assert_eq!(h.degree(), 7);
        assert_eq!(h.order(), -7);
    }

    #[test]
    fn test_name() {
        assert_eq!(Harmonic3d::<f64>::new(0).name(), "Harmonic 0 0");
        assert_eq!(Harmonic3d::<f64>::new(10).name(), "Harmonic 3 -2");
        assert_eq!(Harmonic2d::<f64>::new(6).name(), "Harmonic 3 3");
    }

    #[test]
    fn test_from_degree_order() {
        let h = Harmonic3d::<f64>::from_degree_order(3, 0).unwrap();
        assert_eq!(h.index(), 12);

        let h = Harmonic2d::<f64>::from_degree_order(2, -2).unwrap();
        assert_eq!(h.index(), 3);

        let err = Harmonic2d::<f64>::from_degree_order(1, 0).unwrap_err();
        assert_eq!(
            err,
            HarmonicError::OrderOutOfRange {
                dimension: "2d",
                degree: 1,
                order: 0,
            }
        );
        assert!(Harmonic3d::<f64>::from_degree_order(2, 3).is_err());
    }

    #[test]
    fn test_all() {
        let harmonics: Vec<_> = Harmonic3d::<f32>::all(2).collect();
        assert_eq!(harmonics.len(), 9);
        assert!(harmonics.iter().enumerate().all(|(i, h)| h.index() == i));

        assert_eq!(Harmonic2d::<f32>::all(3).count(), 7);
    }

    #[test]
    fn test_equality_by_index() {
        let set: HashSet<Harmonic3d<f64>> = [1, 2, 2, 3].into_iter().map(Harmonic::new).collect();
        assert_eq!(set.len(), 3);
        assert_eq!(Harmonic3d::<f64>::new(5), Harmonic3d::<f64>::new(5));
    }

    #[test]
    fn test_debug_names_dimension() {
        let debug = format!("{:?}", Harmonic2d::<f64>::new(1));
        assert!(debug.contains("\"2d\""));
        assert!(debug.contains("order: -1"));
    }
}
