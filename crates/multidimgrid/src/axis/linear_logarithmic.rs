//! Coordinate axis spaced linearly below a threshold and logarithmically above it

use std::fmt;
use std::ops::Index;

use tracing::debug;

use super::{AxisLimits, AxisSpacing, LinearCoordinateAxis, LogarithmicCoordinateAxis};
use crate::error::{MultiDimGridError, Result};

/// A coordinate axis made of a linear axis on `[lower, threshold]` followed by
/// a logarithmic axis on `[threshold, upper]`.
///
/// The two sub-axes share the threshold as one axis point, at index
/// `linear_interval_number`. Its integration weight is the sum of the two
/// adjoining boundary half-weights.
///
/// # Example
/// ```
/// use multidimgrid::{AxisSpacing, LinearLogarithmicCoordinateAxis};
///
/// let axis = LinearLogarithmicCoordinateAxis::new(0.0, 1.0, 1000.0, 4, 3).unwrap();
/// assert_eq!(axis.interval_number(), 7);
/// assert_eq!(axis.coordinate(4).unwrap(), 1.0);
/// assert!((axis.coordinate(5).unwrap() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLogarithmicCoordinateAxis {
    limits: AxisLimits,
    /// Coordinate where the spacing switches from linear to logarithmic
    threshold: f64,
    linear: LinearCoordinateAxis,
    logarithmic: LogarithmicCoordinateAxis,
}

impl LinearLogarithmicCoordinateAxis {
    /// Create an axis with `linear_interval_number` equal intervals on
    /// `[lower, threshold]` and `logarithmic_interval_number` log-equal intervals
    /// on `[threshold, upper]`.
    ///
    /// Requires `lower < threshold < upper`, `threshold > 0` and at least one
    /// interval on each side.
    pub fn new(
        lower: f64,
        threshold: f64,
        upper: f64,
        linear_interval_number: usize,
        logarithmic_interval_number: usize,
    ) -> Result<Self> {
        let limits = AxisLimits::new(
            lower,
            upper,
            linear_interval_number + logarithmic_interval_number,
        )?;
        if !(lower < threshold && threshold < upper) {
            return Err(MultiDimGridError::ThresholdOutOfRange {
                threshold,
                lower,
                upper,
            });
        }
        if linear_interval_number == 0 {
            return Err(MultiDimGridError::ZeroIntervals { kind: "linear" });
        }
        if logarithmic_interval_number == 0 {
            return Err(MultiDimGridError::ZeroIntervals {
                kind: "logarithmic",
            });
        }

        let linear = LinearCoordinateAxis::new(lower, threshold, linear_interval_number)?;
        let logarithmic =
            LogarithmicCoordinateAxis::new(threshold, upper, logarithmic_interval_number)?;

        debug!(
            lower,
            threshold,
            upper,
            linear_interval_number,
            logarithmic_interval_number,
            "constructed linear-logarithmic coordinate axis"
        );

        Ok(Self {
            limits,
            threshold,
            linear,
            logarithmic,
        })
    }

    /// Coordinate where the spacing switches from linear to logarithmic
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of linearly spaced intervals, also the axis point of the threshold
    pub fn linear_interval_number(&self) -> usize {
        self.linear.interval_number()
    }

    /// Number of logarithmically spaced intervals
    pub fn logarithmic_interval_number(&self) -> usize {
        self.logarithmic.interval_number()
    }

    /// The linear sub-axis on `[lower, threshold]`
    pub fn linear_axis(&self) -> &LinearCoordinateAxis {
        &self.linear
    }

    /// The logarithmic sub-axis on `[threshold, upper]`
    pub fn logarithmic_axis(&self) -> &LogarithmicCoordinateAxis {
        &self.logarithmic
    }
}

impl AxisSpacing for LinearLogarithmicCoordinateAxis {
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
        let seam = self.linear_interval_number();
        if axis_point > seam {
            self.logarithmic.coordinate_unchecked(axis_point - seam)
        } else {
            self.linear.coordinate_unchecked(axis_point)
        }
    }

    fn integration_weight_unchecked(&self, axis_point: usize) -> f64 {
        let seam = self.linear_interval_number();
        if axis_point > seam {
            self.logarithmic.integration_weight_unchecked(axis_point - seam)
        } else if axis_point < seam {
            self.linear.integration_weight_unchecked(axis_point)
        } else {
            self.linear.integration_weight_unchecked(seam)
                + self.logarithmic.integration_weight_unchecked(0)
        }
    }

    fn interpolation_weight_unchecked(&self, coord: f64) -> f64 {
        if coord > self.threshold {
            self.logarithmic.interpolation_weight_unchecked(coord)
        } else {
            self.linear.interpolation_weight_unchecked(coord)
        }
    }

    fn nearest_lower_axis_point_unchecked(&self, coord: f64) -> usize {
        if coord > self.threshold {
            self.logarithmic.nearest_lower_axis_point_unchecked(coord)
                + self.linear_interval_number()
        } else {
            self.linear.nearest_lower_axis_point_unchecked(coord)
        }
    }

    fn nearest_higher_axis_point_unchecked(&self, coord: f64) -> usize {
        if coord > self.threshold {
            self.logarithmic.nearest_higher_axis_point_unchecked(coord)
                + self.linear_interval_number()
        } else {
            self.linear.nearest_higher_axis_point_unchecked(coord)
        }
    }
}

impl Index<usize> for LinearLogarithmicCoordinateAxis {
    type Output = f64;

    fn index(&self, axis_point: usize) -> &f64 {
        let seam = self.linear_interval_number();
        if axis_point > seam {
            &self.logarithmic[axis_point - seam]
        } else {
            &self.linear[axis_point]
        }
    }
}

impl fmt::Display for LinearLogarithmicCoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LinearLogarithmicCoordinateAxis over [{}, {}] with {} linear intervals up to {} and {} logarithmic intervals",
            self.limits.lower,
            self.limits.upper,
            self.linear_interval_number(),
            self.threshold,
            self.logarithmic_interval_number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis() -> LinearLogarithmicCoordinateAxis {
        LinearLogarithmicCoordinateAxis::new(0.0, 1.0, 1000.0, 4, 3).unwrap()
    }

    #[test]
    fn test_linear_logarithmic_coordinates() {
        let axis = axis();
        assert_eq!(axis.point_number(), 8);
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0, 10.0, 100.0, 1000.0];
        for (point, &coord) in expected.iter().enumerate() {
            assert_relative_eq!(axis.coordinate(point).unwrap(), coord, max_relative = 1e-12);
        }
        assert_eq!(axis.coordinate(4).unwrap(), axis.threshold());
    }

    #[test]
    fn test_linear_logarithmic_seam_weight() {
        let axis = axis();
        let linear_half = axis.linear_axis().integration_weight(4).unwrap();
        let log_half = axis.logarithmic_axis().integration_weight(0).unwrap();
        assert_relative_eq!(linear_half, 0.125);
        assert_relative_eq!(
            axis.integration_weight(4).unwrap(),
            linear_half + log_half,
            max_relative = 1e-15
        );
        assert_relative_eq!(axis.integration_weight(3).unwrap(), 0.25);
        assert_relative_eq!(
            axis.integration_weight(6).unwrap(),
            axis.logarithmic_axis().integration_weight(2).unwrap()
        );
    }

    #[test]
    fn test_linear_logarithmic_nearest_points() {
        let axis = axis();
        assert_eq!(axis.nearest_lower_axis_point(0.6).unwrap(), 2);
        assert_eq!(axis.nearest_higher_axis_point(0.6).unwrap(), 3);
        assert_eq!(axis.nearest_lower_axis_point(1.0).unwrap(), 4);
        assert_eq!(axis.nearest_higher_axis_point(1.0).unwrap(), 4);
        assert_eq!(axis.nearest_lower_axis_point(50.0).unwrap(), 5);
        assert_eq!(axis.nearest_higher_axis_point(50.0).unwrap(), 6);
        assert_eq!(axis.nearest_lower_axis_point(1.5).unwrap(), 4);
        assert_eq!(axis.nearest_higher_axis_point(1.5).unwrap(), 5);
    }

    #[test]
    fn test_linear_logarithmic_interpolation_weight() {
        let axis = axis();
        assert_relative_eq!(axis.interpolation_weight(0.625).unwrap(), 0.5, max_relative = 1e-12);
        let log_mid = 10f64.powf(1.5);
        assert_relative_eq!(axis.interpolation_weight(log_mid).unwrap(), 0.5, max_relative = 1e-12);
        assert_eq!(axis.interpolation_weight(1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_linear_logarithmic_construction_errors() {
        assert!(matches!(
            LinearLogarithmicCoordinateAxis::new(0.0, 2000.0, 1000.0, 4, 3),
            Err(MultiDimGridError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            LinearLogarithmicCoordinateAxis::new(0.0, 0.0, 1000.0, 4, 3),
            Err(MultiDimGridError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            LinearLogarithmicCoordinateAxis::new(-2.0, -1.0, 1000.0, 4, 3),
            Err(MultiDimGridError::NonPositiveLogarithmicLimit { .. })
        ));
        assert_eq!(
            LinearLogarithmicCoordinateAxis::new(0.0, 1.0, 1000.0, 0, 3),
            Err(MultiDimGridError::ZeroIntervals { kind: "linear" })
        );
        assert_eq!(
            LinearLogarithmicCoordinateAxis::new(0.0, 1.0, 1000.0, 4, 0),
            Err(MultiDimGridError::ZeroIntervals {
                kind: "logarithmic"
            })
        );
    }

    #[test]
    fn test_linear_logarithmic_index_matches_coordinate() {
        let axis = axis();
        for point in 0..axis.point_number() {
            assert_eq!(axis[point], axis.coordinate(point).unwrap());
        }
    }
}
