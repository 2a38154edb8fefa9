//! Coordinate axes with different spacing laws
//!
//! A coordinate axis is a fixed, ordered set of axis points `0..point_number`
//! mapped monotonically onto coordinates in `[lower, upper]`. Every spacing law
//! implements [`AxisSpacing`]; [`CoordinateAxis`] is the closed set of spacing
//! laws a [`GridFunction`](crate::GridFunction) can be spanned by.

mod linear;
mod linear_logarithmic;
mod logarithmic;
mod single_point;
mod spec;

pub use linear::LinearCoordinateAxis;
pub use linear_logarithmic::LinearLogarithmicCoordinateAxis;
pub use logarithmic::LogarithmicCoordinateAxis;
pub use single_point::SinglePointCoordinateAxis;
pub use spec::AxisSpec;

use std::fmt;
use std::ops::Index;

use crate::error::{MultiDimGridError, Result};

/// Operations every coordinate spacing law supports.
///
/// The `*_unchecked` methods are the required ones. They assume a valid
/// axis point (`< point_number()`) or a coordinate within the axis limits;
/// violating that may panic or produce meaningless values. The checked
/// methods validate their argument first and then delegate.
pub trait AxisSpacing {
    /// Lower coordinate limit
    fn lower_coordinate_limit(&self) -> f64;

    /// Upper coordinate limit
    fn upper_coordinate_limit(&self) -> f64;

    /// Number of axis intervals
    fn interval_number(&self) -> usize;

    /// Number of axis points
    fn point_number(&self) -> usize {
        self.interval_number() + 1
    }

    /// Coordinate of `axis_point` without range check.
    fn coordinate_unchecked(&self, axis_point: usize) -> f64;

    /// Integration weight of `axis_point` without range check.
    fn integration_weight_unchecked(&self, axis_point: usize) -> f64;

    /// Interpolation weight of `coord` without range check.
    fn interpolation_weight_unchecked(&self, coord: f64) -> f64;

    /// Nearest axis point with a coordinate `<= coord`, without range check.
    fn nearest_lower_axis_point_unchecked(&self, coord: f64) -> usize;

    /// Nearest axis point with a coordinate `>= coord`, without range check.
    fn nearest_higher_axis_point_unchecked(&self, coord: f64) -> usize;

    /// Coordinate of `axis_point`.
    fn coordinate(&self, axis_point: usize) -> Result<f64> {
        self.check_axis_point(axis_point)?;
        Ok(self.coordinate_unchecked(axis_point))
    }

    /// Quadrature weight of `axis_point` for the (possibly Jacobian-scaled)
    /// trapezoidal rule.
    fn integration_weight(&self, axis_point: usize) -> Result<f64> {
        self.check_axis_point(axis_point)?;
        Ok(self.integration_weight_unchecked(axis_point))
    }

    /// Weight in `[0, 1]` for blending the values at the nearest lower and
    /// nearest higher axis points of `coord`, linear in the axis spacing.
    ///
    /// Zero when both neighbors coincide.
    fn interpolation_weight(&self, coord: f64) -> Result<f64> {
        self.check_coordinate(coord)?;
        Ok(self.interpolation_weight_unchecked(coord))
    }

    /// Nearest axis point with a coordinate smaller than or equal to `coord`.
    fn nearest_lower_axis_point(&self, coord: f64) -> Result<usize> {
        self.check_coordinate(coord)?;
        Ok(self.nearest_lower_axis_point_unchecked(coord))
    }

    /// Nearest axis point with a coordinate larger than or equal to `coord`.
    fn nearest_higher_axis_point(&self, coord: f64) -> Result<usize> {
        self.check_coordinate(coord)?;
        Ok(self.nearest_higher_axis_point_unchecked(coord))
    }

    /// Returns true if `coord` lies within the axis limits. NaN never does.
    fn contains(&self, coord: f64) -> bool {
        coord >= self.lower_coordinate_limit() && coord <= self.upper_coordinate_limit()
    }

    /// Fails with [`MultiDimGridError::AxisPointOutOfRange`] if `axis_point` is not on the axis.
    fn check_axis_point(&self, axis_point: usize) -> Result<()> {
        let point_number = self.point_number();
        if axis_point >= point_number {
            return Err(MultiDimGridError::AxisPointOutOfRange {
                axis_point,
                point_number,
            });
        }
        Ok(())
    }

    /// Fails with [`MultiDimGridError::CoordinateOutOfRange`] if `coord` is outside the axis limits.
    fn check_coordinate(&self, coord: f64) -> Result<()> {
        if !self.contains(coord) {
            return Err(MultiDimGridError::CoordinateOutOfRange {
                value: coord,
                lower: self.lower_coordinate_limit(),
                upper: self.upper_coordinate_limit(),
            });
        }
        Ok(())
    }
}

/// Limits and interval number shared by every spacing law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisLimits {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) interval_number: usize,
}

impl AxisLimits {
    pub(crate) fn new(lower: f64, upper: f64, interval_number: usize) -> Result<Self> {
        for value in [lower, upper] {
            if !value.is_finite() {
                return Err(MultiDimGridError::NonFiniteLimit { value });
            }
        }
        if upper < lower {
            return Err(MultiDimGridError::InvalidLimits { lower, upper });
        }
        if !(upper - lower).is_finite() {
            return Err(MultiDimGridError::NonFiniteSpan { lower, upper });
        }

        let point_number = interval_number + 1;
        if point_number == 1 && lower != upper {
            return Err(MultiDimGridError::SinglePointLimitMismatch { lower, upper });
        }
        if point_number != 1 && lower == upper {
            return Err(MultiDimGridError::EqualLimits {
                value: lower,
                point_number,
            });
        }

        Ok(Self {
            lower,
            upper,
            interval_number,
        })
    }
}

/// Clamps a floored/ceiled continuous axis position onto `[0, last]`.
fn clamp_estimate(estimate: f64, last: usize) -> usize {
    if estimate.is_nan() || estimate <= 0.0 {
        0
    } else if estimate >= last as f64 {
        last
    } else {
        estimate as usize
    }
}

/// Largest axis point of the ascending `coordinates` whose coordinate is
/// `<= coord`, starting the search at the continuous position `estimate`.
///
/// The inverse spacing map is only accurate up to rounding, so the estimate is
/// corrected against the stored coordinates. An exact hit returns the hit.
pub(crate) fn snap_lower(coordinates: &[f64], estimate: f64, coord: f64) -> usize {
    let last = coordinates.len() - 1;
    let mut point = clamp_estimate(estimate.floor(), last);
    while point > 0 && coordinates[point] > coord {
        point -= 1;
    }
    while point < last && coordinates[point + 1] <= coord {
        point += 1;
    }
    point
}

/// Smallest axis point of the ascending `coordinates` whose coordinate is
/// `>= coord`, starting the search at the continuous position `estimate`.
pub(crate) fn snap_higher(coordinates: &[f64], estimate: f64, coord: f64) -> usize {
    let last = coordinates.len() - 1;
    let mut point = clamp_estimate(estimate.ceil(), last);
    while point < last && coordinates[point] < coord {
        point += 1;
    }
    while point > 0 && coordinates[point - 1] >= coord {
        point -= 1;
    }
    point
}

/// Trapezoidal weights for `point_number` points: `step` inside, `step / 2` at
/// both ends, each scaled by `jacobian(axis_point)`.
pub(crate) fn trapezoidal_weights(
    point_number: usize,
    step: f64,
    jacobian: impl Fn(usize) -> f64,
) -> Vec<f64> {
    let last = point_number - 1;
    (0..point_number)
        .map(|axis_point| {
            let weight = jacobian(axis_point) * step;
            if axis_point == 0 || axis_point == last {
                weight / 2.0
            } else {
                weight
            }
        })
        .collect()
}

/// Spacing law of a [`CoordinateAxis`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Equidistant coordinates
    Linear,
    /// Coordinates equidistant in `log10`
    Logarithmic,
    /// Linear up to a threshold, logarithmic above it
    LinearLogarithmic,
    /// One fixed coordinate
    SinglePoint,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AxisKind::Linear => "linear",
            AxisKind::Logarithmic => "logarithmic",
            AxisKind::LinearLogarithmic => "linear-logarithmic",
            AxisKind::SinglePoint => "single-point",
        };
        f.write_str(name)
    }
}

/// A coordinate axis with one of the supported spacing laws.
///
/// Cloning deep-copies the materialized coordinates and weights, so a clone
/// never aliases the original.
///
/// # Example
/// ```
/// use multidimgrid::{AxisSpacing, CoordinateAxis};
///
/// let axis = CoordinateAxis::linear(1.0, 1000.0, 10).unwrap();
/// assert_eq!(axis.point_number(), 11);
/// assert_eq!(axis.coordinate(10).unwrap(), 1000.0);
/// assert!(axis.coordinate(11).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateAxis {
    /// Equidistant coordinates
    Linear(LinearCoordinateAxis),
    /// Coordinates equidistant in `log10`
    Logarithmic(LogarithmicCoordinateAxis),
    /// Linear up to a threshold, logarithmic above it
    LinearLogarithmic(LinearLogarithmicCoordinateAxis),
    /// One fixed coordinate
    SinglePoint(SinglePointCoordinateAxis),
}

macro_rules! delegate {
    ($self:ident, $axis:ident => $body:expr) => {
        match $self {
            CoordinateAxis::Linear($axis) => $body,
            CoordinateAxis::Logarithmic($axis) => $body,
            CoordinateAxis::LinearLogarithmic($axis) => $body,
            CoordinateAxis::SinglePoint($axis) => $body,
        }
    };
}

impl CoordinateAxis {
    /// Linearly spaced axis over `[lower, upper]` with `interval_number` intervals.
    pub fn linear(lower: f64, upper: f64, interval_number: usize) -> Result<Self> {
        LinearCoordinateAxis::new(lower, upper, interval_number).map(Self::Linear)
    }

    /// Logarithmically spaced axis over `[lower, upper]` with `interval_number` intervals.
    pub fn logarithmic(lower: f64, upper: f64, interval_number: usize) -> Result<Self> {
        LogarithmicCoordinateAxis::new(lower, upper, interval_number).map(Self::Logarithmic)
    }

    /// Axis spaced linearly on `[lower, threshold]` and logarithmically on `[threshold, upper]`.
    pub fn linear_logarithmic(
        lower: f64,
        threshold: f64,
        upper: f64,
        linear_interval_number: usize,
        logarithmic_interval_number: usize,
    ) -> Result<Self> {
        LinearLogarithmicCoordinateAxis::new(
            lower,
            threshold,
            upper,
            linear_interval_number,
            logarithmic_interval_number,
        )
        .map(Self::LinearLogarithmic)
    }

    /// Degenerate axis consisting of the single coordinate `value`.
    pub fn single_point(value: f64) -> Result<Self> {
        SinglePointCoordinateAxis::new(value).map(Self::SinglePoint)
    }

    /// Spacing law of this axis
    pub fn kind(&self) -> AxisKind {
        match self {
            CoordinateAxis::Linear(_) => AxisKind::Linear,
            CoordinateAxis::Logarithmic(_) => AxisKind::Logarithmic,
            CoordinateAxis::LinearLogarithmic(_) => AxisKind::LinearLogarithmic,
            CoordinateAxis::SinglePoint(_) => AxisKind::SinglePoint,
        }
    }

    /// Construction parameters that rebuild this axis.
    pub fn spec(&self) -> AxisSpec {
        match self {
            CoordinateAxis::Linear(axis) => AxisSpec::Linear {
                lower: axis.lower_coordinate_limit(),
                upper: axis.upper_coordinate_limit(),
                intervals: axis.interval_number(),
            },
            CoordinateAxis::Logarithmic(axis) => AxisSpec::Logarithmic {
                lower: axis.lower_coordinate_limit(),
                upper: axis.upper_coordinate_limit(),
                intervals: axis.interval_number(),
            },
            CoordinateAxis::LinearLogarithmic(axis) => AxisSpec::LinearLogarithmic {
                lower: axis.lower_coordinate_limit(),
                threshold: axis.threshold(),
                upper: axis.upper_coordinate_limit(),
                linear_intervals: axis.linear_interval_number(),
                logarithmic_intervals: axis.logarithmic_interval_number(),
            },
            CoordinateAxis::SinglePoint(axis) => AxisSpec::SinglePoint {
                value: axis.lower_coordinate_limit(),
            },
        }
    }
}

impl AxisSpacing for CoordinateAxis {
    fn lower_coordinate_limit(&self) -> f64 {
        delegate!(self, axis => axis.lower_coordinate_limit())
    }

    fn upper_coordinate_limit(&self) -> f64 {
        delegate!(self, axis => axis.upper_coordinate_limit())
    }

    fn interval_number(&self) -> usize {
        delegate!(self, axis => axis.interval_number())
    }

    fn coordinate_unchecked(&self, axis_point: usize) -> f64 {
        delegate!(self, axis => axis.coordinate_unchecked(axis_point))
    }

    fn integration_weight_unchecked(&self, axis_point: usize) -> f64 {
        delegate!(self, axis => axis.integration_weight_unchecked(axis_point))
    }

    fn interpolation_weight_unchecked(&self, coord: f64) -> f64 {
        delegate!(self, axis => axis.interpolation_weight_unchecked(coord))
    }

    fn nearest_lower_axis_point_unchecked(&self, coord: f64) -> usize {
        delegate!(self, axis => axis.nearest_lower_axis_point_unchecked(coord))
    }

    fn nearest_higher_axis_point_unchecked(&self, coord: f64) -> usize {
        delegate!(self, axis => axis.nearest_higher_axis_point_unchecked(coord))
    }
}

impl Index<usize> for CoordinateAxis {
    type Output = f64;

    fn index(&self, axis_point: usize) -> &f64 {
        delegate!(self, axis => &axis[axis_point])
    }
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        delegate!(self, axis => fmt::Display::fmt(axis, f))
    }
}

impl From<LinearCoordinateAxis> for CoordinateAxis {
    fn from(axis: LinearCoordinateAxis) -> Self {
        CoordinateAxis::Linear(axis)
    }
}

impl From<LogarithmicCoordinateAxis> for CoordinateAxis {
    fn from(axis: LogarithmicCoordinateAxis) -> Self {
        CoordinateAxis::Logarithmic(axis)
    }
}

impl From<LinearLogarithmicCoordinateAxis> for CoordinateAxis {
    fn from(axis: LinearLogarithmicCoordinateAxis) -> Self {
        CoordinateAxis::LinearLogarithmic(axis)
    }
}

impl From<SinglePointCoordinateAxis> for CoordinateAxis {
    fn from(axis: SinglePointCoordinateAxis) -> Self {
        CoordinateAxis::SinglePoint(axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_axes() -> Vec<CoordinateAxis> {
        vec![
            CoordinateAxis::linear(1.0, 1000.0, 10).unwrap(),
            CoordinateAxis::logarithmic(1.0, 1000.0, 10).unwrap(),
            CoordinateAxis::linear_logarithmic(0.0, 1.0, 1000.0, 4, 9).unwrap(),
            CoordinateAxis::single_point(42.0).unwrap(),
        ]
    }

    #[test]
    fn test_axis_limits_validation() {
        assert!(AxisLimits::new(0.0, 1.0, 3).is_ok());
        assert!(AxisLimits::new(2.0, 2.0, 0).is_ok());

        assert_eq!(
            AxisLimits::new(1.0, 0.0, 3),
            Err(MultiDimGridError::InvalidLimits {
                lower: 1.0,
                upper: 0.0
            })
        );
        assert_eq!(
            AxisLimits::new(0.0, 1.0, 0),
            Err(MultiDimGridError::SinglePointLimitMismatch {
                lower: 0.0,
                upper: 1.0
            })
        );
        assert_eq!(
            AxisLimits::new(1.0, 1.0, 2),
            Err(MultiDimGridError::EqualLimits {
                value: 1.0,
                point_number: 3
            })
        );
        assert!(matches!(
            AxisLimits::new(f64::NAN, 1.0, 2),
            Err(MultiDimGridError::NonFiniteLimit { .. })
        ));
        assert!(matches!(
            AxisLimits::new(0.0, f64::INFINITY, 2),
            Err(MultiDimGridError::NonFiniteLimit { .. })
        ));
        assert_eq!(
            AxisLimits::new(-f64::MAX, f64::MAX, 2),
            Err(MultiDimGridError::NonFiniteSpan {
                lower: -f64::MAX,
                upper: f64::MAX
            })
        );
        assert!(AxisLimits::new(-1e307, 1e307, 2).is_ok());
    }

    #[test]
    fn test_snap_exact_hits() {
        let coordinates = [0.0, 0.1, 0.2, 0.30000000000000004, 0.4];
        for (point, &coord) in coordinates.iter().enumerate() {
            // Deliberately bad estimates on both sides
            for estimate in [point as f64 - 0.999, point as f64 + 0.999] {
                assert_eq!(snap_lower(&coordinates, estimate, coord), point);
                assert_eq!(snap_higher(&coordinates, estimate, coord), point);
            }
        }
    }

    #[test]
    fn test_snap_between_points() {
        let coordinates = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(snap_lower(&coordinates, 0.0, 1.5), 1);
        assert_eq!(snap_higher(&coordinates, 3.0, 1.5), 2);
        assert_eq!(snap_lower(&coordinates, f64::NAN, 2.5), 2);
        assert_eq!(snap_higher(&coordinates, f64::NEG_INFINITY, 2.5), 3);
    }

    #[test]
    fn test_trapezoidal_weights() {
        let weights = trapezoidal_weights(4, 2.0, |_| 1.0);
        assert_eq!(weights, vec![1.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn test_endpoints_pinned() {
        for axis in all_axes() {
            let last = axis.point_number() - 1;
            assert_eq!(axis.coordinate(0).unwrap(), axis.lower_coordinate_limit());
            assert_eq!(axis.coordinate(last).unwrap(), axis.upper_coordinate_limit());
        }
    }

    #[test]
    fn test_coordinates_monotonic() {
        for axis in all_axes() {
            for point in 1..axis.point_number() {
                assert!(axis[point - 1] <= axis[point], "{axis}");
            }
        }
    }

    #[test]
    fn test_nearest_points_at_axis_points() {
        for axis in all_axes() {
            for point in 0..axis.point_number() {
                let coord = axis[point];
                assert_eq!(axis.nearest_lower_axis_point(coord).unwrap(), point);
                assert_eq!(axis.nearest_higher_axis_point(coord).unwrap(), point);
                assert_eq!(axis.interpolation_weight(coord).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_interpolation_weight_in_unit_interval() {
        for axis in all_axes() {
            let lower = axis.lower_coordinate_limit();
            let upper = axis.upper_coordinate_limit();
            for step in 0..=97 {
                let coord = lower + (upper - lower) * step as f64 / 97.0;
                let coord = coord.min(upper);
                let weight = axis.interpolation_weight(coord).unwrap();
                assert!((0.0..=1.0).contains(&weight), "{axis}: {weight}");

                let low = axis.nearest_lower_axis_point(coord).unwrap();
                let high = axis.nearest_higher_axis_point(coord).unwrap();
                assert!(low <= high && high <= low + 1);
                assert!(axis[low] <= coord && coord <= axis[high]);
            }
        }
    }

    #[test]
    fn test_checked_operations_reject_out_of_range() {
        for axis in all_axes() {
            let point_number = axis.point_number();
            assert_eq!(
                axis.coordinate(point_number),
                Err(MultiDimGridError::AxisPointOutOfRange {
                    axis_point: point_number,
                    point_number
                })
            );
            assert!(axis.integration_weight(point_number).unwrap_err().is_range_error());

            let above = axis.upper_coordinate_limit() + 1.0;
            assert!(axis.interpolation_weight(above).unwrap_err().is_range_error());
            assert!(axis.nearest_lower_axis_point(above).is_err());
            assert!(axis.nearest_higher_axis_point(f64::NAN).is_err());
        }
    }

    #[test]
    fn test_integration_weights_sum_to_length() {
        let axes = [
            CoordinateAxis::linear(1.0, 1000.0, 10).unwrap(),
            CoordinateAxis::logarithmic(1.0, 1000.0, 2000).unwrap(),
            CoordinateAxis::linear_logarithmic(0.0, 1.0, 1000.0, 10, 2000).unwrap(),
            CoordinateAxis::single_point(3.0).unwrap(),
        ];
        for axis in axes {
            let sum: f64 = (0..axis.point_number())
                .map(|point| axis.integration_weight(point).unwrap())
                .sum();
            let length = axis.upper_coordinate_limit() - axis.lower_coordinate_limit();
            assert_relative_eq!(sum, length, max_relative = 1e-5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_spec_round_trip_rebuilds_equal_axis() {
        for axis in all_axes() {
            let rebuilt = axis.spec().build().unwrap();
            assert_eq!(rebuilt, axis);
            assert_eq!(rebuilt.kind(), axis.kind());
        }
    }

    #[test]
    fn test_display_names_kind() {
        let axis = CoordinateAxis::logarithmic(1.0, 1000.0, 10).unwrap();
        let display = axis.to_string();
        assert!(display.contains("LogarithmicCoordinateAxis"));
        assert!(display.contains("10 intervals"));
        assert_eq!(AxisKind::LinearLogarithmic.to_string(), "linear-logarithmic");
    }
}
