//! Plain-data construction parameters for coordinate axes

use super::CoordinateAxis;
use crate::error::{MultiDimGridError, Result};

/// Construction parameters of a [`CoordinateAxis`].
///
/// A spec is not validated until [`AxisSpec::build`] turns it into an axis.
///
/// # Example
/// ```
/// use multidimgrid::{AxisSpacing, AxisSpec};
///
/// let axis = AxisSpec::Logarithmic { lower: 1.0, upper: 1000.0, intervals: 10 }
///     .build()
///     .unwrap();
/// assert_eq!(axis.point_number(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSpec {
    /// Equidistant coordinates on `[lower, upper]`
    Linear {
        lower: f64,
        upper: f64,
        intervals: usize,
    },
    /// Coordinates equidistant in `log10` on `[lower, upper]`
    Logarithmic {
        lower: f64,
        upper: f64,
        intervals: usize,
    },
    /// Linear on `[lower, threshold]`, logarithmic on `[threshold, upper]`
    LinearLogarithmic {
        lower: f64,
        threshold: f64,
        upper: f64,
        linear_intervals: usize,
        logarithmic_intervals: usize,
    },
    /// The single coordinate `value`
    SinglePoint { value: f64 },
}

impl AxisSpec {
    /// Validate the parameters and construct the axis.
    pub fn build(&self) -> Result<CoordinateAxis> {
        match *self {
            AxisSpec::Linear {
                lower,
                upper,
                intervals,
            } => CoordinateAxis::linear(lower, upper, intervals),
            AxisSpec::Logarithmic {
                lower,
                upper,
                intervals,
            } => CoordinateAxis::logarithmic(lower, upper, intervals),
            AxisSpec::LinearLogarithmic {
                lower,
                threshold,
                upper,
                linear_intervals,
                logarithmic_intervals,
            } => CoordinateAxis::linear_logarithmic(
                lower,
                threshold,
                upper,
                linear_intervals,
                logarithmic_intervals,
            ),
            AxisSpec::SinglePoint { value } => CoordinateAxis::single_point(value),
        }
    }

    /// Total number of axis points the built axis will have
    pub fn point_number(&self) -> usize {
        match *self {
            AxisSpec::Linear { intervals, .. } | AxisSpec::Logarithmic { intervals, .. } => {
                intervals + 1
            }
            AxisSpec::LinearLogarithmic {
                linear_intervals,
                logarithmic_intervals,
                ..
            } => linear_intervals + logarithmic_intervals + 1,
            AxisSpec::SinglePoint { .. } => 1,
        }
    }
}

impl TryFrom<AxisSpec> for CoordinateAxis {
    type Error = MultiDimGridError;

    fn try_from(spec: AxisSpec) -> Result<Self> {
        spec.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{AxisKind, AxisSpacing};

    #[test]
    fn test_build_each_kind() {
        let specs = [
            (
                AxisSpec::Linear {
                    lower: 0.0,
                    upper: 1.0,
                    intervals: 4,
                },
                AxisKind::Linear,
            ),
            (
                AxisSpec::Logarithmic {
                    lower: 1.0,
                    upper: 100.0,
                    intervals: 2,
                },
                AxisKind::Logarithmic,
            ),
            (
                AxisSpec::LinearLogarithmic {
                    lower: 0.0,
                    threshold: 1.0,
                    upper: 100.0,
                    linear_intervals: 2,
                    logarithmic_intervals: 2,
                },
                AxisKind::LinearLogarithmic,
            ),
            (AxisSpec::SinglePoint { value: 3.0 }, AxisKind::SinglePoint),
        ];

        for (spec, kind) in specs {
            let axis = spec.build().unwrap();
            assert_eq!(axis.kind(), kind);
            assert_eq!(axis.point_number(), spec.point_number());
            assert_eq!(axis.spec(), spec);
        }
    }

    #[test]
    fn test_try_from_propagates_errors() {
        let spec = AxisSpec::Logarithmic {
            lower: 0.0,
            upper: 1000.0,
            intervals: 10,
        };
        let result = CoordinateAxis::try_from(spec);
        assert_eq!(
            result,
            Err(MultiDimGridError::NonPositiveLogarithmicLimit { lower: 0.0 })
        );
    }
}
