//! Discrete functions on multidimensional tensor-product grids.
//!
//! A grid is spanned by one [`CoordinateAxis`] per dimension. Each axis maps
//! axis points `0..point_number` monotonically onto coordinates in its limits,
//! with one of four spacing laws:
//!
//! - **Linear**: equidistant coordinates
//! - **Logarithmic**: coordinates equidistant in `log10`
//! - **Linear-logarithmic**: linear up to a threshold, logarithmic above it
//! - **Single point**: one fixed coordinate
//!
//! A [`GridFunction`] stores one value per grid point in row-major order and
//! offers checked and unchecked access by grid point or flattened index,
//! trapezoidal integration weights, and multilinear interpolation that is
//! linear in each axis's own spacing.
//!
//! # Quick Start
//!
//! ```
//! use multidimgrid::{CoordinateAxis, GridFunction};
//!
//! let x = CoordinateAxis::linear(1.0, 1000.0, 10).unwrap();
//! let y = CoordinateAxis::logarithmic(1.0, 1000.0, 10).unwrap();
//!
//! let f = GridFunction::from_fn([&x, &y], |c| c[0] * c[1].ln()).unwrap();
//! assert_eq!(f.point_number(), 121);
//!
//! // Grid point (2, 7) sits at x = 200.8, y = 10^2.1
//! let coords = f.coordinates(&[2, 7]).unwrap();
//! assert!((coords[0] - 200.8).abs() < 1e-10);
//! assert_eq!(f[[2, 7]], coords[0] * coords[1].ln());
//!
//! // Interpolation reproduces grid values exactly
//! assert_eq!(f.interpolate(&coords).unwrap(), f[[2, 7]]);
//! ```
//!
//! # Integration
//!
//! The product of the per-axis weights is the weight of a tensor-product
//! trapezoidal rule:
//!
//! ```
//! use multidimgrid::{CoordinateAxis, GridFunction};
//!
//! let x = CoordinateAxis::linear(0.0, 2.0, 20).unwrap();
//! let f = GridFunction::from_fn([&x, &x], |c| c[0] + c[1]).unwrap();
//!
//! let integral: f64 = (0..f.point_number())
//!     .map(|index| {
//!         let weights = f.integration_weights_at_index(index).unwrap();
//!         weights.iter().product::<f64>() * f.value_at_index(index).unwrap()
//!     })
//!     .sum();
//! assert!((integral - 8.0).abs() < 1e-10);
//! ```
//!
//! # Error Handling
//!
//! Construction and every checked accessor return [`Result`] with
//! [`MultiDimGridError`]:
//!
//! ```
//! use multidimgrid::{CoordinateAxis, GridFunction, MultiDimGridError};
//!
//! let result = CoordinateAxis::logarithmic(0.0, 1000.0, 10);
//! assert!(matches!(result, Err(MultiDimGridError::NonPositiveLogarithmicLimit { .. })));
//!
//! let x = CoordinateAxis::linear(1.0, 1000.0, 10).unwrap();
//! let f = GridFunction::constant([&x], 0.0).unwrap();
//! assert!(matches!(
//!     f.interpolate(&[1500.0]),
//!     Err(MultiDimGridError::CoordinatesOutOfRange { dim: 0, .. })
//! ));
//! ```
//!
//! # Logging
//!
//! Construction of axes and grid functions emits `tracing` events at `debug`
//! level. The crate never installs a subscriber.

mod error;
pub mod axis;
mod grid_function;

pub use axis::{
    AxisKind, AxisSpacing, AxisSpec, CoordinateAxis, LinearCoordinateAxis,
    LinearLogarithmicCoordinateAxis, LogarithmicCoordinateAxis, SinglePointCoordinateAxis,
};
pub use error::{MultiDimGridError, Result};
pub use grid_function::{Coordinates, GridFunction, GridPoint};
