//! Linearly spaced coordinate axis

use std::fmt;
use std::ops::Index;

use tracing::debug;

use super::{snap_higher, snap_lower, trapezoidal_weights, AxisLimits, AxisSpacing};
use crate::error::{MultiDimGridError, Result};

/// A coordinate axis with equidistant axis points.
///
/// Axis point `i` sits at `lower + i * (upper - lower) / interval_number`; the
/// first and last points are exactly `lower` and `upper`. Integration weights
/// follow the trapezoidal rule.
///
/// # Example
/// ```
/// use multidimgrid::{AxisSpacing, LinearCoordinateAxis};
///
/// let axis = LinearCoordinateAxis::new(1.0, 1000.0, 10).unwrap();
/// assert!((axis.coordinate(5).unwrap() - 500.5).abs() < 1e-10);
/// assert!((axis.integration_weight(0).unwrap() - 49.95).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCoordinateAxis {
    limits: AxisLimits,
    /// Coordinate of every axis point
    coordinates: Vec<f64>,
    /// Trapezoidal weight of every axis point
    integration_weights: Vec<f64>,
}

impl LinearCoordinateAxis {
    /// Create an axis over `[lower, upper]` with `interval_number` equal intervals.
    ///
    /// At least one interval is required; use
    /// [`SinglePointCoordinateAxis`](crate::SinglePointCoordinateAxis) for a single point.
    pub fn new(lower: f64, upper: f64, interval_number: usize) -> Result<Self> {
        let limits = AxisLimits::new(lower, upper, interval_number)?;
        if interval_number == 0 {
            return Err(MultiDimGridError::ZeroIntervals { kind: "linear" });
        }

        let step = (upper - lower) / interval_number as f64;
        let coordinates = (0..=interval_number)
            .map(|axis_point| {
                if axis_point == 0 {
                    lower
                } else if axis_point == interval_number {
                    upper
                } else {
                    lower + axis_point as f64 * step
                }
            })
            .collect();
        let integration_weights = trapezoidal_weights(interval_number + 1, step, |_| 1.0);

        debug!(lower, upper, interval_number, "constructed linear coordinate axis");

        Ok(Self {
            limits,
            coordinates,
            integration_weights,
        })
    }

    /// Distance between neighbouring axis points
    pub fn step(&self) -> f64 {
        (self.limits.upper - self.limits.lower) / self.limits.interval_number as f64
    }

    /// Coordinates of all axis points
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Integration weights of all axis points
    pub fn integration_weights(&self) -> &[f64] {
        &self.integration_weights
    }

    /// Continuous axis position of `coord` under the inverse spacing map.
    fn continuous_axis_point(&self, coord: f64) -> f64 {
        (coord - self.limits.lower) / (self.limits.upper - self.limits.lower)
            * self.limits.interval_number as f64
    }
}

impl AxisSpacing for LinearCoordinateAxis {
    fn lower_coordinate_limit(&self) -> f64 {
        self.limits.lower
    }

    fn upper_coordinate_limit(&self) -> f64 {
        self.limits.upper
    }

    fn interval_number(&self) -> usize {
        self.limits.interval_number
    }

    fn coordinate_unchecked(&self, axis_point: usize) -> f64 {
        self.coordinates[axis_point]
    }

    fn integration_weight_unchecked(&self, axis_point: usize) -> f64 {
        self.integration_weights[axis_point]
    }

    fn interpolation_weight_unchecked(&self, coord: f64) -> f64 {
        let lower = self.coordinates[self.nearest_lower_axis_point_unchecked(coord)];
        let higher = self.coordinates[self.nearest_higher_axis_point_unchecked(coord)];

        if lower < higher {
            (coord - lower) / (higher - lower)
        } else {
            0.0
        }
    }

    fn nearest_lower_axis_point_unchecked(&self, coord: f64) -> usize {
        snap_lower(&self.coordinates, self.continuous_axis_point(coord), coord)
    }

    fn nearest_higher_axis_point_unchecked(&self, coord: f64) -> usize {
        snap_higher(&self.coordinates, self.continuous_axis_point(coord), coord)
    }
}

impl Index<usize> for LinearCoordinateAxis {
    type Output = f64;

    fn index(&self, axis_point: usize) -> &f64 {
        &self.coordinates[axis_point]
    }
}

impl fmt::Display for LinearCoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LinearCoordinateAxis over [{}, {}] with {} intervals",
            self.limits.lower, self.limits.upper, self.limits.interval_number
        )
    }
}
