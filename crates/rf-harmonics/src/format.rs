//! Normalization conventions and conversion between them

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Normalization scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Normalization {
    /// SN3D (Schmidt semi-normalized) - AmbiX standard
    #[default]
    SN3D,
    /// N3D (fully normalized)
    N3D,
}

impl Normalization {
    /// Normalization factor of harmonic `(degree, order)` in this scheme
    #[inline]
    pub fn factor<D: Dimension, T: Float>(self, degree: usize, order: i64) -> T {
        match self {
            Normalization::SN3D => D::semi_normalization(degree, order),
            Normalization::N3D => D::normalization(degree, order),
        }
    }

    /// Gain turning a `from`-normalized channel into a `to`-normalized one
    pub fn conversion_gain<D: Dimension, T: Float>(
        from: Normalization,
        to: Normalization,
        degree: usize,
        order: i64,
    ) -> T {
        if from == to {
            return T::one();
        }
        let source = from.factor::<D, T>(degree, order);
        if source == T::zero() {
            return T::one();
        }
        to.factor::<D, T>(degree, order) / source
    }
}

/// Per-channel conversion gains for a whole decomposition order
pub fn conversion_gains<D: Dimension, T: Float>(
    from: Normalization,
    to: Normalization,
    decomposition_order: usize,
) -> Vec<T> {
    let num_channels = D::channel_count(decomposition_order);
    log::debug!(
        "building {:?} -> {:?} gains for {} order {} ({} channels)",
        from,
        to,
        D::NAME,
        decomposition_order,
        num_channels
    );

    (0..num_channels)
        .map(|index| {
            Normalization::conversion_gain::<D, T>(
                from,
                to,
                D::degree_of(index),
                D::order_of(index),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Hoa2d, Hoa3d};
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_conversion() {
        let gains = conversion_gains::<Hoa3d, f32>(Normalization::N3D, Normalization::N3D, 3);
        assert_eq!(gains.len(), 16);
        assert!(gains.iter().all(|&g| g == 1.0));
    }

    #[test]
    fn test_sn3d_to_n3d() {
        let gains = conversion_gains::<Hoa3d, f64>(Normalization::SN3D, Normalization::N3D, 2);
        for (index, gain) in gains.iter().enumerate() {
            let degree = Hoa3d::degree_of(index);
            assert_relative_eq!(*gain, ((2 * degree + 1) as f64).sqrt(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_gain() {
        for degree in 0..8 {
            for order in -(degree as i64)..=(degree as i64) {
                let forward = Normalization::conversion_gain::<Hoa3d, f64>(
                    Normalization::SN3D,
                    Normalization::N3D,
                    degree,
                    order,
                );
                let back = Normalization::conversion_gain::<Hoa3d, f64>(
                    Normalization::N3D,
                    Normalization::SN3D,
                    degree,
                    order,
                );
                assert_relative_eq!(forward * back, 1.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_planar_conversion_is_unity() {
        let gains = conversion_gains::<Hoa2d, f32>(Normalization::SN3D, Normalization::N3D, 5);
        assert_eq!(gains.len(), 11);
        assert!(gains.iter().all(|&g| g == 1.0));
    }

    #[test]
    fn test_default_and_serde() {
        assert_eq!(Normalization::default(), Normalization::SN3D);

        let json = serde_json::to_string(&Normalization::N3D).unwrap();
        assert_eq!(json, "\"N3D\"");
        let back: Normalization = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Normalization::N3D);
    }
}
