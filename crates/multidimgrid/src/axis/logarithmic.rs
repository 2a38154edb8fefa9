//! Logarithmically spaced coordinate axis

use std::f64::consts::LN_10;
use std::fmt;
use std::ops::Index;

use tracing::debug;

use super::{snap_higher, snap_lower, trapezoidal_weights, AxisLimits, AxisSpacing};
use crate::error::{MultiDimGridError, Result};

/// A coordinate axis with axis points equidistant in `log10`.
///
/// Integration weights are the trapezoidal weights in log-space multiplied by
/// the Jacobian `coordinate * ln(10)` of `x = 10^u`. Interpolation is linear
/// in `log10(x)`.
///
/// # Example
/// ```
/// use multidimgrid::{AxisSpacing, LogarithmicCoordinateAxis};
///
/// let axis = LogarithmicCoordinateAxis::new(1.0, 1000.0, 10).unwrap();
/// assert!((axis.coordinate(5).unwrap() - 10f64.powf(1.5)).abs() < 1e-10);
/// assert!(LogarithmicCoordinateAxis::new(0.0, 1000.0, 10).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LogarithmicCoordinateAxis {
    limits: AxisLimits,
    /// `log10` of the lower limit
    lower_log: f64,
    /// `log10` of the upper limit
    upper_log: f64,
    /// Coordinate of every axis point
    coordinates: Vec<f64>,
    /// Jacobian-scaled trapezoidal weight of every axis point
    integration_weights: Vec<f64>,
}

impl LogarithmicCoordinateAxis {
    /// Create an axis over `[lower, upper]` with `interval_number` intervals of
    /// equal width in `log10`. `lower` must be positive.
    pub fn new(lower: f64, upper: f64, interval_number: usize) -> Result<Self> {
        let limits = AxisLimits::new(lower, upper, interval_number)?;
        if lower <= 0.0 {
            return Err(MultiDimGridError::NonPositiveLogarithmicLimit { lower });
        }
        if interval_number == 0 {
            return Err(MultiDimGridError::ZeroIntervals {
                kind: "logarithmic",
            });
        }

        let lower_log = lower.log10();
        let upper_log = upper.log10();
        let log_step = (upper_log - lower_log) / interval_number as f64;

        let coordinates: Vec<f64> = (0..=interval_number)
            .map(|axis_point| {
                if axis_point == 0 {
                    lower
                } else if axis_point == interval_number {
                    upper
                } else {
                    10f64.powf(lower_log + axis_point as f64 * log_step)
                }
            })
            .collect();
        let integration_weights = trapezoidal_weights(interval_number + 1, log_step, |axis_point| {
            coordinates[axis_point] * LN_10
        });

        debug!(lower, upper, interval_number, "constructed logarithmic coordinate axis");

        Ok(Self {
            limits,
            lower_log,
            upper_log,
            coordinates,
            integration_weights,
        })
    }

    /// Distance between neighbouring axis points in `log10`
    pub fn log_step(&self) -> f64 {
        (self.upper_log - self.lower_log) / self.limits.interval_number as f64
    }

    /// Coordinates of all axis points
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Integration weights of all axis points
    pub fn integration_weights(&self) -> &[f64] {
        &self.integration_weights
    }

    fn continuous_axis_point(&self, coord: f64) -> f64 {
        (coord.log10() - self.lower_log) / (self.upper_log - self.lower_log)
            * self.limits.interval_number as f64
    }
}

impl AxisSpacing for LogarithmicCoordinateAxis {
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
        let lower_log = self.coordinates[self.nearest_lower_axis_point_unchecked(coord)].log10();
        let higher_log = self.coordinates[self.nearest_higher_axis_point_unchecked(coord)].log10();

        if lower_log < higher_log {
            (coord.log10() - lower_log) / (higher_log - lower_log)
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

impl Index<usize> for LogarithmicCoordinateAxis {
    type Output = f64;

    fn index(&self, axis_point: usize) -> &f64 {
        &self.coordinates[axis_point]
    }
}

impl fmt::Display for LogarithmicCoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LogarithmicCoordinateAxis over [{}, {}] with {} intervals",
            self.limits.lower, self.limits.upper, self.limits.interval_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_logarithmic_coordinates() {
        let axis = LogarithmicCoordinateAxis::new(1.0, 1000.0, 10).unwrap();
        assert_eq!(axis.coordinate(0).unwrap(), 1.0);
        assert_eq!(axis.coordinate(10).unwrap(), 1000.0);
        assert_relative_eq!(axis.coordinate(5).unwrap(), 31.6227766017, max_relative = 1e-10);
        assert_relative_eq!(axis.log_step(), 0.3, max_relative = 1e-14);
    }

    #[test]
    fn test_logarithmic_integration_weights() {
        let axis = LogarithmicCoordinateAxis::new(1.0, 1000.0, 10).unwrap();
        assert_relative_eq!(
            axis.integration_weight(0).unwrap(),
            0.3 * LN_10 / 2.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            axis.integration_weight(5).unwrap(),
            0.3 * LN_10 * 10f64.powf(1.5),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            axis.integration_weight(10).unwrap(),
            0.3 * LN_10 * 1000.0 / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_logarithmic_weights_converge_to_length() {
        let axis = LogarithmicCoordinateAxis::new(1.0, 1000.0, 3000).unwrap();
        let sum: f64 = axis.integration_weights().iter().sum();
        assert_relative_eq!(sum, 999.0, max_relative = 1e-5);
    }

    #[test]
    fn test_logarithmic_interpolation_weight_in_log_space() {
        let axis = LogarithmicCoordinateAxis::new(1.0, 1000.0, 3).unwrap();
        // halfway between 10 and 100 in log10
        let coord = 10f64.powf(1.5);
        assert_eq!(axis.nearest_lower_axis_point(coord).unwrap(), 1);
        assert_eq!(axis.nearest_higher_axis_point(coord).unwrap(), 2);
        assert_relative_eq!(axis.interpolation_weight(coord).unwrap(), 0.5, max_relative = 1e-12);
        assert_eq!(axis.interpolation_weight(axis[2]).unwrap(), 0.0);
    }

    #[test]
    fn test_logarithmic_construction_errors() {
        assert_eq!(
            LogarithmicCoordinateAxis::new(0.0, 1000.0, 10),
            Err(MultiDimGridError::NonPositiveLogarithmicLimit { lower: 0.0 })
        );
        assert!(matches!(
            LogarithmicCoordinateAxis::new(-1.0, 1000.0, 10),
            Err(MultiDimGridError::NonPositiveLogarithmicLimit { .. })
        ));
        assert_eq!(
            LogarithmicCoordinateAxis::new(10.0, 10.0, 0),
            Err(MultiDimGridError::ZeroIntervals {
                kind: "logarithmic"
            })
        );
    }
}
