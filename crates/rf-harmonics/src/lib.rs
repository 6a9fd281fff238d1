//! ReelForge Ambisonic Harmonics
//!
//! Channel bookkeeping shared by every HOA stage (encoders, decoders,
//! rotation, width):
//!
//! ## Indexing
//! - ACN channel index <-> (degree, order)
//! - Channel counts per decomposition order and per degree
//! - Planar (2D) and spherical (3D) layouts, selected at compile time
//!
//! ## Normalization
//! - SN3D (Schmidt semi-normalized) and N3D (fully normalized) factors
//! - Conversion gains between the two
//! - Generic over the scalar type (`f32` / `f64`)
//!
//! ## Usage
//!
//! ```rust
//! use rf_harmonics::{Dimension, Harmonic3d, Hoa3d};
//!
//! // Third order: 16 channels
//! assert_eq!(Hoa3d::channel_count(3), 16);
//!
//! let h = Harmonic3d::<f32>::new(12);
//! assert_eq!((h.degree(), h.order()), (3, 0));
//! assert!((h.normalization() - 7.0f32.sqrt()).abs() < 1e-6);
//! ```

mod dimension;
mod error;
mod harmonic;

pub mod format;
pub mod math;

pub use dimension::{Dimension, Hoa2d, Hoa3d};
pub use error::{HarmonicError, HarmonicResult};
pub use format::{Normalization, conversion_gains};
pub use harmonic::{Harmonic, Harmonic2d, Harmonic3d, HarmonicRecord};
