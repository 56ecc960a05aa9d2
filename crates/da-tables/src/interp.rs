//! Rectilinear grid interpolation.
//!
//! Both interpolators work over strictly increasing, non-uniformly spaced
//! axes. Queries outside the grid never fail: the boundary value is held
//! constant beyond the edge (extrapolation disabled). Models declare
//! validity domains at least as wide as their grids, so a legitimate query
//! only leaves the grid by numerical hair-widths at the edges; clamping
//! resolves those without error.

use da_core::is_strictly_increasing;

use crate::error::{TableError, TableResult};

/// Locate the bracketing interval for `q` on a strictly increasing axis.
///
/// Returns the lower node index `i` and the blend weight `w` in `[0, 1]`
/// such that the interpolated value is `(1 - w) * v[i] + w * v[i + 1]`.
/// Out-of-axis queries clamp to the nearest edge (`w` saturates at 0 or 1).
fn bracket(axis: &[f64], q: f64) -> (usize, f64) {
    let n = axis.len();
    // NaN never brackets an interval; clamp it to the first node like any
    // other off-grid query rather than underflow the index arithmetic.
    if q.is_nan() || q <= axis[0] {
        return (0, 0.0);
    }
    if q >= axis[n - 1] {
        return (n - 2, 1.0);
    }
    // partition_point: first index whose node lies strictly above q.
    // q is interior here, so 1 <= idx <= n - 1.
    let idx = axis.partition_point(|&a| a <= q);
    let i = idx - 1;
    let w = (q - axis[i]) / (axis[i + 1] - axis[i]);
    (i, w)
}

fn check_axis(axis: &[f64], what: &'static str) -> TableResult<()> {
    if axis.len() < 2 {
        return Err(TableError::ShapeMismatch {
            what,
            expected: 2,
            actual: axis.len(),
        });
    }
    if !is_strictly_increasing(axis) {
        return Err(TableError::AxisNotIncreasing { what });
    }
    Ok(())
}

/// Bilinear interpolator over a 2-D rectilinear grid.
///
/// Values are stored `[x][y]`; for the radiative-transfer grids that is
/// `[wavelength][tau_V]`.
#[derive(Debug, Clone)]
pub struct BilinearGrid {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl BilinearGrid {
    /// Build an interpolator, validating axis monotonicity and value shape.
    pub fn new(x_axis: Vec<f64>, y_axis: Vec<f64>, values: Vec<Vec<f64>>) -> TableResult<Self> {
        check_axis(&x_axis, "interpolation x axis")?;
        check_axis(&y_axis, "interpolation y axis")?;
        if values.len() != x_axis.len() {
            return Err(TableError::ShapeMismatch {
                what: "grid rows",
                expected: x_axis.len(),
                actual: values.len(),
            });
        }
        for row in &values {
            if row.len() != y_axis.len() {
                return Err(TableError::ShapeMismatch {
                    what: "grid columns",
                    expected: y_axis.len(),
                    actual: row.len(),
                });
            }
        }
        Ok(Self {
            x_axis,
            y_axis,
            values,
        })
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// Interpolate at `(x, y)`, clamping to the boundary outside the grid.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let (i, wx) = bracket(&self.x_axis, x);
        let (j, wy) = bracket(&self.y_axis, y);
        let v00 = self.values[i][j];
        let v10 = self.values[i + 1][j];
        let v01 = self.values[i][j + 1];
        let v11 = self.values[i + 1][j + 1];
        v00 * (1.0 - wx) * (1.0 - wy)
            + v10 * wx * (1.0 - wy)
            + v01 * (1.0 - wx) * wy
            + v11 * wx * wy
    }
}

/// Linear interpolator over a single strictly increasing axis, with the same
/// boundary-clamping policy as [`BilinearGrid`]. Serves the albedo and
/// phase-function tables.
#[derive(Debug, Clone)]
pub struct LinearTable {
    x_axis: Vec<f64>,
    values: Vec<f64>,
}

impl LinearTable {
    pub fn new(x_axis: Vec<f64>, values: Vec<f64>) -> TableResult<Self> {
        check_axis(&x_axis, "interpolation axis")?;
        if values.len() != x_axis.len() {
            return Err(TableError::ShapeMismatch {
                what: "table values",
                expected: x_axis.len(),
                actual: values.len(),
            });
        }
        Ok(Self { x_axis, values })
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    /// Interpolate at `x`, clamping to the boundary outside the axis.
    pub fn sample(&self, x: f64) -> f64 {
        let (i, w) = bracket(&self.x_axis, x);
        self.values[i] * (1.0 - w) + self.values[i + 1] * w
    }
}
