//! Degenerate coordinate axis with a single point

use std::fmt;
use std::ops::Index;

use tracing::debug;

use super::{AxisLimits, AxisSpacing};
use crate::error::Result;

/// A coordinate axis consisting of exactly one axis point.
///
/// Both limits equal the stored coordinate. A single point has no measure, so
/// its integration weight is zero, and there is nothing to blend, so its
/// interpolation weight is zero as well.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePointCoordinateAxis {
    limits: AxisLimits,
}

impl SinglePointCoordinateAxis {
    /// Create an axis whose only coordinate is `value`.
    pub fn new(value: f64) -> Result<Self> {
        let limits = AxisLimits::new(value, value, 0)?;
        debug!(value, "constructed single-point coordinate axis");
        Ok(Self { limits })
    }

    /// The single coordinate
    pub fn value(&self) -> f64 {
        self.limits.lower
    }
}

impl AxisSpacing for SinglePointCoordinateAxis {
    fn lower_coordinate_limit(&self) -> f64 {
        self.limits.lower
    }

    fn upper_coordinate_limit(&self) -> f64 {
        self.limits.upper
    }

    fn interval_number(&self) -> usize {
        0
    }

    fn coordinate_unchecked(&self, _axis_point: usize) -> f64 {
        self.limits.lower
    }

    fn integration_weight_unchecked(&self, _axis_point: usize) -> f64 {
        0.0
    }

    fn interpolation_weight_unchecked(&self, _coord: f64) -> f64 {
        0.0
    }

    fn nearest_lower_axis_point_unchecked(&self, _coord: f64) -> usize {
        0
    }

    fn nearest_higher_axis_point_unchecked(&self, _coord: f64) -> usize {
        0
    }
}

impl Index<usize> for SinglePointCoordinateAxis {
    type Output = f64;

    fn index(&self, axis_point: usize) -> &f64 {
        assert!(
            axis_point == 0,
            "axis point {axis_point} out of range for single-point axis"
        );
        &self.limits.lower
    }
}

impl fmt::Display for SinglePointCoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SinglePointCoordinateAxis at {}", self.limits.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MultiDimGridError;

    #[test]
    fn test_single_point_queries() {
        let axis = SinglePointCoordinateAxis::new(2.5).unwrap();
        assert_eq!(axis.interval_number(), 0);
        assert_eq!(axis.point_number(), 1);
        assert_eq!(axis.value(), 2.5);
        assert_eq!(axis.coordinate(0).unwrap(), 2.5);
        assert_eq!(axis.integration_weight(0).unwrap(), 0.0);
        assert_eq!(axis.interpolation_weight(2.5).unwrap(), 0.0);
        assert_eq!(axis.nearest_lower_axis_point(2.5).unwrap(), 0);
        assert_eq!(axis.nearest_higher_axis_point(2.5).unwrap(), 0);
    }

    #[test]
    fn test_single_point_range_checks() {
        let axis = SinglePointCoordinateAxis::new(2.5).unwrap();
        assert!(matches!(
            axis.coordinate(1),
            Err(MultiDimGridError::AxisPointOutOfRange { .. })
        ));
        assert!(matches!(
            axis.interpolation_weight(2.6),
            Err(MultiDimGridError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_single_point_rejects_non_finite() {
        assert!(matches!(
            SinglePointCoordinateAxis::new(f64::NAN),
            Err(MultiDimGridError::NonFiniteLimit { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn test_single_point_index_out_of_range() {
        let axis = SinglePointCoordinateAxis::new(2.5).unwrap();
        let _ = axis[1];
    }
}
