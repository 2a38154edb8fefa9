//! Error types for multidimgrid

use thiserror::Error;

/// Result type for multidimgrid operations
pub type Result<T> = std::result::Result<T, MultiDimGridError>;

/// Errors that can occur while building or querying coordinate axes and grid functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MultiDimGridError {
    /// A coordinate limit is NaN or infinite
    #[error("Coordinate limit {value} is not finite")]
    NonFiniteLimit { value: f64 },

    /// Both limits are finite but their distance is not
    #[error("Coordinate range [{lower}, {upper}] is too wide to be represented")]
    NonFiniteSpan { lower: f64, upper: f64 },

    /// Upper limit below lower limit
    #[error("Upper coordinate limit {upper} is smaller than lower coordinate limit {lower}")]
    InvalidLimits { lower: f64, upper: f64 },

    /// A single-point axis needs identical limits
    #[error("For a single-point axis the lower and upper coordinate limits have to agree, got [{lower}, {upper}]")]
    SinglePointLimitMismatch { lower: f64, upper: f64 },

    /// An axis with more than one point needs distinct limits
    #[error("For an axis with {point_number} points the upper coordinate limit has to be larger than the lower coordinate limit {value}")]
    EqualLimits { value: f64, point_number: usize },

    /// Logarithmic spacing requires a positive lower limit
    #[error("Lower coordinate limit {lower} of a logarithmic axis is not positive")]
    NonPositiveLogarithmicLimit { lower: f64 },

    /// Linear and logarithmic axes need at least one interval
    #[error("Number of axis intervals of a {kind} axis is zero")]
    ZeroIntervals { kind: &'static str },

    /// Hybrid threshold not strictly inside the axis limits
    #[error("Spacing threshold {threshold} is not strictly inside the coordinate limits [{lower}, {upper}]")]
    ThresholdOutOfRange {
        threshold: f64,
        lower: f64,
        upper: f64,
    },

    /// Axis point out of range of a single axis
    #[error("Axis point {axis_point} out of range [0, {point_number})")]
    AxisPointOutOfRange {
        axis_point: usize,
        point_number: usize,
    },

    /// Coordinate out of range of a single axis
    #[error("Coordinate {value} out of range [{lower}, {upper}]")]
    CoordinateOutOfRange { value: f64, lower: f64, upper: f64 },

    /// Grid point component out of range of its axis
    #[error("Axis point {axis_point} for dimension {dim} out of range [0, {point_number})")]
    GridPointOutOfRange {
        dim: usize,
        axis_point: usize,
        point_number: usize,
    },

    /// Coordinate component out of range of its axis
    #[error("Coordinate {value} for dimension {dim} out of range [{lower}, {upper}]")]
    CoordinatesOutOfRange {
        dim: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Flattened index out of range of the grid
    #[error("Index {index} out of range [0, {point_number})")]
    IndexOutOfRange { index: usize, point_number: usize },

    /// Total number of grid points does not fit into usize
    #[error("Total number of grid points overflows at dimension {dim}")]
    GridPointNumberOverflow { dim: usize },

    /// Dimension not present in the grid
    #[error("Dimension {dim} out of range [0, {ndims})")]
    DimensionOutOfRange { dim: usize, ndims: usize },

    /// Replacement axis has a different number of points
    #[error("Replacement axis for dimension {dim} must have {expected} points, got {actual}")]
    PointNumberMismatch {
        dim: usize,
        expected: usize,
        actual: usize,
    },
}

impl MultiDimGridError {
    /// Returns true for errors raised while constructing an axis.
    pub fn is_axis_construction_error(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteLimit { .. }
                | Self::NonFiniteSpan { .. }
                | Self::InvalidLimits { .. }
                | Self::SinglePointLimitMismatch { .. }
                | Self::EqualLimits { .. }
                | Self::NonPositiveLogarithmicLimit { .. }
                | Self::ZeroIntervals { .. }
                | Self::ThresholdOutOfRange { .. }
        )
    }

    /// Returns true for axis points or coordinates outside an axis's domain.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::AxisPointOutOfRange { .. }
                | Self::CoordinateOutOfRange { .. }
                | Self::GridPointOutOfRange { .. }
                | Self::CoordinatesOutOfRange { .. }
        )
    }

    /// Returns true for flattened indices outside the grid.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
