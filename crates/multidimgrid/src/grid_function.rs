//! Discrete functions on tensor-product grids of coordinate axes

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::axis::{AxisSpacing, CoordinateAxis};
use crate::error::{MultiDimGridError, Result};

/// A grid point: one axis point per dimension.
pub type GridPoint<const D: usize> = [usize; D];

/// Coordinates: one coordinate per dimension.
pub type Coordinates<const D: usize> = [f64; D];

/// A discrete function on the grid spanned by `D` coordinate axes.
///
/// Values are stored in a flat array in row-major order: the grid point
/// `(i_0, ..., i_(D-1))` lives at index `sum_j i_j * index_strides()[j]`, where
/// the stride of axis `j` is the product of the point numbers of the axes
/// after it. The axes are owned copies; a `GridFunction` never shares them
/// with the caller or with its clones.
///
/// # Example
/// ```
/// use multidimgrid::{CoordinateAxis, GridFunction};
///
/// let lin = CoordinateAxis::linear(1.0, 1000.0, 10).unwrap();
/// let log = CoordinateAxis::logarithmic(1.0, 1000.0, 10).unwrap();
///
/// // f(x0, x1) = x0 * ln(x1) is linear in x0 and in log10(x1)
/// let f = GridFunction::from_fn([&lin, &log], |x| x[0] * x[1].ln()).unwrap();
///
/// let exact = 30.0 * 650f64.ln();
/// let interpolated = f.interpolate(&[30.0, 650.0]).unwrap();
/// assert!((interpolated - exact).abs() < 1e-9 * exact);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridFunction<const D: usize> {
    /// Coordinate axes spanning the grid
    axes: [CoordinateAxis; D],
    /// Index distance between neighbouring grid points along each axis
    index_strides: [usize; D],
    /// Total number of grid points
    grid_point_number: usize,
    /// Function values in row-major order
    values: Vec<f64>,
}

impl<const D: usize> GridFunction<D> {
    /// Create a grid function with the same value `value` at every grid point.
    pub fn constant(axes: [&CoordinateAxis; D], value: f64) -> Result<Self> {
        let mut grid = Self::allocate(axes)?;
        grid.values = vec![value; grid.grid_point_number];

        debug!(
            dim = D,
            grid_point_number = grid.grid_point_number,
            index_strides = ?grid.index_strides,
            value,
            "constructed constant grid function"
        );
        Ok(grid)
    }

    /// Create a grid function by evaluating `func` at the coordinates of every
    /// grid point.
    ///
    /// `func` is called exactly once per grid point, in ascending order of the
    /// flattened index. Any closure works, including one borrowing an object
    /// mutably to call one of its methods.
    pub fn from_fn<F>(axes: [&CoordinateAxis; D], mut func: F) -> Result<Self>
    where
        F: FnMut(&Coordinates<D>) -> f64,
    {
        let mut grid = Self::allocate(axes)?;
        let values: Vec<f64> = (0..grid.grid_point_number)
            .map(|index| func(&grid.coordinates_at_index_unchecked(index)))
            .collect();
        grid.values = values;

        debug!(
            dim = D,
            grid_point_number = grid.grid_point_number,
            index_strides = ?grid.index_strides,
            "constructed grid function from evaluator"
        );
        Ok(grid)
    }

    /// Clone the axes and compute the strides; values are left empty.
    fn allocate(axes: [&CoordinateAxis; D]) -> Result<Self> {
        let axes = axes.map(CoordinateAxis::clone);
        let (index_strides, grid_point_number) = compute_index_strides(&axes)?;
        Ok(Self {
            axes,
            index_strides,
            grid_point_number,
            values: Vec::new(),
        })
    }

    /// Number of dimensions
    pub fn dim(&self) -> usize {
        D
    }

    /// The coordinate axes spanning the grid
    pub fn axes(&self) -> &[CoordinateAxis; D] {
        &self.axes
    }

    /// Index differences between neighbouring grid points along each axis
    pub fn index_strides(&self) -> [usize; D] {
        self.index_strides
    }

    /// Total number of grid points
    pub fn point_number(&self) -> usize {
        self.grid_point_number
    }

    /// Function values in flattened index order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable function values in flattened index order
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Replace the axis of dimension `dim` with `axis`, returning the old one.
    ///
    /// The new axis must have the same number of points, so that strides and
    /// stored values keep their meaning.
    pub fn replace_axis(&mut self, dim: usize, axis: CoordinateAxis) -> Result<CoordinateAxis> {
        if dim >= D {
            return Err(MultiDimGridError::DimensionOutOfRange { dim, ndims: D });
        }
        let expected = self.axes[dim].point_number();
        if axis.point_number() != expected {
            return Err(MultiDimGridError::PointNumberMismatch {
                dim,
                expected,
                actual: axis.point_number(),
            });
        }

        trace!(dim, %axis, "replacing grid axis");
        Ok(std::mem::replace(&mut self.axes[dim], axis))
    }

    // ========================================================================
    // Grid points and indices
    // ========================================================================

    /// Flattened index of `grid_point`.
    pub fn index_of(&self, grid_point: &GridPoint<D>) -> Result<usize> {
        self.check_grid_point(grid_point)?;
        Ok(self.index_of_unchecked(grid_point))
    }

    /// Flattened index of `grid_point` without range check.
    pub fn index_of_unchecked(&self, grid_point: &GridPoint<D>) -> usize {
        grid_point
            .iter()
            .zip(self.index_strides.iter())
            .map(|(&axis_point, &stride)| axis_point * stride)
            .sum()
    }

    /// Grid point stored at flattened `index`.
    pub fn grid_point_at_index(&self, index: usize) -> Result<GridPoint<D>> {
        self.check_index(index)?;
        Ok(self.grid_point_at_index_unchecked(index))
    }

    /// Grid point stored at flattened `index` without range check.
    pub fn grid_point_at_index_unchecked(&self, index: usize) -> GridPoint<D> {
        let mut remaining = index;
        std::array::from_fn(|dim| {
            let stride = self.index_strides[dim];
            let axis_point = remaining / stride;
            remaining -= axis_point * stride;
            axis_point
        })
    }

    // ========================================================================
    // Coordinates and integration weights
    // ========================================================================

    /// Coordinates of `grid_point`.
    pub fn coordinates(&self, grid_point: &GridPoint<D>) -> Result<Coordinates<D>> {
        self.check_grid_point(grid_point)?;
        Ok(self.coordinates_unchecked(grid_point))
    }

    /// Coordinates of `grid_point` without range check.
    pub fn coordinates_unchecked(&self, grid_point: &GridPoint<D>) -> Coordinates<D> {
        std::array::from_fn(|dim| self.axes[dim].coordinate_unchecked(grid_point[dim]))
    }

    /// Coordinates of the grid point at flattened `index`.
    pub fn coordinates_at_index(&self, index: usize) -> Result<Coordinates<D>> {
        self.check_index(index)?;
        Ok(self.coordinates_at_index_unchecked(index))
    }

    /// Coordinates of the grid point at flattened `index` without range check.
    pub fn coordinates_at_index_unchecked(&self, index: usize) -> Coordinates<D> {
        self.coordinates_unchecked(&self.grid_point_at_index_unchecked(index))
    }

    /// Per-axis integration weights at `grid_point`.
    ///
    /// Their product is the quadrature weight of the grid point for a
    /// tensor-product trapezoidal rule.
    pub fn integration_weights(&self, grid_point: &GridPoint<D>) -> Result<[f64; D]> {
        self.check_grid_point(grid_point)?;
        Ok(self.integration_weights_unchecked(grid_point))
    }

    /// Per-axis integration weights at `grid_point` without range check.
    pub fn integration_weights_unchecked(&self, grid_point: &GridPoint<D>) -> [f64; D] {
        std::array::from_fn(|dim| self.axes[dim].integration_weight_unchecked(grid_point[dim]))
    }

    /// Per-axis integration weights at the grid point at flattened `index`.
    pub fn integration_weights_at_index(&self, index: usize) -> Result<[f64; D]> {
        self.check_index(index)?;
        Ok(self.integration_weights_at_index_unchecked(index))
    }

    /// Per-axis integration weights at flattened `index` without range check.
    pub fn integration_weights_at_index_unchecked(&self, index: usize) -> [f64; D] {
        self.integration_weights_unchecked(&self.grid_point_at_index_unchecked(index))
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Function value at `grid_point`.
    pub fn value(&self, grid_point: &GridPoint<D>) -> Result<&f64> {
        self.check_grid_point(grid_point)?;
        Ok(self.value_unchecked(grid_point))
    }

    /// Mutable function value at `grid_point`.
    pub fn value_mut(&mut self, grid_point: &GridPoint<D>) -> Result<&mut f64> {
        self.check_grid_point(grid_point)?;
        Ok(self.value_unchecked_mut(grid_point))
    }

    /// Function value at `grid_point` without range check.
    pub fn value_unchecked(&self, grid_point: &GridPoint<D>) -> &f64 {
        &self.values[self.index_of_unchecked(grid_point)]
    }

    /// Mutable function value at `grid_point` without range check.
    pub fn value_unchecked_mut(&mut self, grid_point: &GridPoint<D>) -> &mut f64 {
        let index = self.index_of_unchecked(grid_point);
        &mut self.values[index]
    }

    /// Function value at flattened `index`.
    pub fn value_at_index(&self, index: usize) -> Result<&f64> {
        self.check_index(index)?;
        Ok(&self.values[index])
    }

    /// Mutable function value at flattened `index`.
    pub fn value_at_index_mut(&mut self, index: usize) -> Result<&mut f64> {
        self.check_index(index)?;
        Ok(&mut self.values[index])
    }

    /// Function value at flattened `index` without range check.
    pub fn value_at_index_unchecked(&self, index: usize) -> &f64 {
        &self.values[index]
    }

    /// Mutable function value at flattened `index` without range check.
    pub fn value_at_index_unchecked_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.values[index]
    }

    // ========================================================================
    // Interpolation
    // ========================================================================

    /// Multilinear interpolation of the stored values at `coords`.
    ///
    /// Along each axis the interpolation is linear in that axis's spacing
    /// (linear in `log10` on logarithmic axes). At the coordinates of a grid
    /// point the stored value is returned exactly.
    pub fn interpolate(&self, coords: &Coordinates<D>) -> Result<f64> {
        self.check_coordinates(coords)?;
        Ok(self.interpolate_unchecked(coords))
    }

    /// Multilinear interpolation at `coords` without range check.
    pub fn interpolate_unchecked(&self, coords: &Coordinates<D>) -> f64 {
        self.interpolate_recursive(coords, 0, 0)
    }

    /// Interpolates along axis `dim` and recurses into the remaining axes.
    ///
    /// `offset` is the flattened index contributed by the axis points already
    /// fixed on axes `0..dim`. The recursion is a binary tree of depth `D`
    /// whose leaves are the corners of the enclosing hyper-rectangle.
    fn interpolate_recursive(&self, coords: &Coordinates<D>, offset: usize, dim: usize) -> f64 {
        if dim == D {
            return self.values[offset];
        }

        let axis = &self.axes[dim];
        let coord = coords[dim];
        let stride = self.index_strides[dim];

        let lower_point = axis.nearest_lower_axis_point_unchecked(coord);
        let higher_point = axis.nearest_higher_axis_point_unchecked(coord);

        let lower_value = self.interpolate_recursive(coords, offset + lower_point * stride, dim + 1);
        if higher_point == lower_point {
            return lower_value;
        }
        let higher_value =
            self.interpolate_recursive(coords, offset + higher_point * stride, dim + 1);

        let weight = axis.interpolation_weight_unchecked(coord);
        lower_value * (1.0 - weight) + higher_value * weight
    }

    // ========================================================================
    // Private helper methods
    // ========================================================================

    fn check_grid_point(&self, grid_point: &GridPoint<D>) -> Result<()> {
        for (dim, (&axis_point, axis)) in grid_point.iter().zip(self.axes.iter()).enumerate() {
            let point_number = axis.point_number();
            if axis_point >= point_number {
                return Err(MultiDimGridError::GridPointOutOfRange {
                    dim,
                    axis_point,
                    point_number,
                });
            }
        }
        Ok(())
    }

    fn check_coordinates(&self, coords: &Coordinates<D>) -> Result<()> {
        for (dim, (&value, axis)) in coords.iter().zip(self.axes.iter()).enumerate() {
            if !axis.contains(value) {
                return Err(MultiDimGridError::CoordinatesOutOfRange {
                    dim,
                    value,
                    lower: axis.lower_coordinate_limit(),
                    upper: axis.upper_coordinate_limit(),
                });
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.grid_point_number {
            return Err(MultiDimGridError::IndexOutOfRange {
                index,
                point_number: self.grid_point_number,
            });
        }
        Ok(())
    }
}

/// Row-major strides of `axes` and the total number of grid points.
fn compute_index_strides<const D: usize>(
    axes: &[CoordinateAxis; D],
) -> Result<([usize; D], usize)> {
    let mut index_strides = [0usize; D];
    let mut stride = 1usize;
    for dim in (0..D).rev() {
        index_strides[dim] = stride;
        stride = stride
            .checked_mul(axes[dim].point_number())
            .ok_or(MultiDimGridError::GridPointNumberOverflow { dim })?;
    }
    Ok((index_strides, stride))
}

impl<const D: usize> Index<GridPoint<D>> for GridFunction<D> {
    type Output = f64;

    fn index(&self, grid_point: GridPoint<D>) -> &f64 {
        match self.value(&grid_point) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const D: usize> IndexMut<GridPoint<D>> for GridFunction<D> {
    fn index_mut(&mut self, grid_point: GridPoint<D>) -> &mut f64 {
        if let Err(err) = self.check_grid_point(&grid_point) {
            panic!("{err}");
        }
        self.value_unchecked_mut(&grid_point)
    }
}

impl<const D: usize> fmt::Display for GridFunction<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if D <= 1 {
            write!(
                f,
                "GridFunction{{{}}} with {} grid points",
                D, self.grid_point_number
            )?;
        } else {
            let sizes: Vec<String> = self
                .axes
                .iter()
                .map(|axis| axis.point_number().to_string())
                .collect();
            write!(
                f,
                "GridFunction{{{}}} with {} = {} grid points",
                D,
                sizes.join(" x "),
                self.grid_point_number
            )?;
        }

        for (dim, axis) in self.axes.iter().enumerate() {
            write!(f, "\n  Axis {}: {}", dim, axis)?;
        }
        Ok(())
    }
}
