//! Reconstruction of 2-D radiative-transfer grids from the flat row layout.
//!
//! The raw tables store one row per (wavelength, optical depth, dust type)
//! sample: for each of the T = 26 optical-depth values there is a block of
//! W = 25 wavelength rows for Milky Way dust immediately followed by a block
//! of W rows for SMC dust. Reconstructing a `[W][T]` grid for one dust type
//! therefore walks the rows with a stride of 2·W, taking one W-row run per
//! optical-depth value.
//!
//! The stride arithmetic is the most bug-prone part of this layout, so it is
//! kept here as a pure `rows -> grid` function with hard shape checks: the
//! row count must equal 2·W·T exactly, and the wavelength slice of every
//! block must match the first block's. A table whose layout convention has
//! drifted fails loudly instead of producing a silently transposed grid.

use da_core::is_strictly_increasing;

use crate::constants::{TAU_V_GRID, WAVELENGTH_SAMPLES};
use crate::error::{TableError, TableResult};
use crate::interp::BilinearGrid;
use crate::selection::{DustType, Geometry};
use crate::source::ColumnTable;

/// Angstrom per micron; the raw `lambda` column is in Angstrom.
const ANGSTROM_PER_UM: f64 = 1.0e4;

/// One reconstructed quantity grid: values indexed `[wavelength][tau_V]`,
/// axes in micron and V-band optical depth. Immutable once built; a changed
/// selection rebuilds from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct RtGrid {
    pub wavelengths_um: Vec<f64>,
    pub tau_v: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

impl RtGrid {
    /// Wrap this grid in a bilinear interpolator.
    pub fn into_interpolator(self) -> TableResult<BilinearGrid> {
        BilinearGrid::new(self.wavelengths_um, self.tau_v, self.values)
    }
}

/// Look up a required column, naming the geometry table on a miss so the
/// error points at the file that lacks the data.
fn require_column<'t>(
    table: &'t ColumnTable,
    geometry: Geometry,
    name: &str,
) -> TableResult<&'t [f64]> {
    table.column(name).ok_or_else(|| TableError::MissingColumn {
        column: name.to_string(),
        geometry,
    })
}

/// Reshape one quantity column of a raw geometry table into a `[W][T]` grid
/// for the given dust type. `geometry` identifies the table in errors.
pub fn build_grid(
    table: &ColumnTable,
    geometry: Geometry,
    dust_type: DustType,
    column: &str,
) -> TableResult<RtGrid> {
    let lambda = require_column(table, geometry, "lambda")?;
    let values = require_column(table, geometry, column)?;

    let w = WAVELENGTH_SAMPLES;
    let t = TAU_V_GRID.len();

    // Two dust-type blocks of W rows per optical-depth value. Derived from
    // the actual row count rather than assumed, so a layout change in the
    // data source is caught here.
    let expected_rows = 2 * w * t;
    if lambda.len() != expected_rows {
        return Err(TableError::ShapeMismatch {
            what: "table rows (2 * W * T layout)",
            expected: expected_rows,
            actual: lambda.len(),
        });
    }

    let start = dust_type.block_offset();
    let reference_block = &lambda[start..start + w];

    // One W-row run per optical-depth value, skipping the interleaved block
    // of the other dust type each step.
    let mut depth_slices: Vec<&[f64]> = Vec::with_capacity(t);
    let mut cursor = start;
    while cursor < values.len() {
        if lambda[cursor..cursor + w] != *reference_block {
            return Err(TableError::AxisMismatch {
                what: "wavelength axis differs between optical-depth blocks",
            });
        }
        depth_slices.push(&values[cursor..cursor + w]);
        cursor += 2 * w;
    }
    if depth_slices.len() != t {
        return Err(TableError::ShapeMismatch {
            what: "optical-depth slices",
            expected: t,
            actual: depth_slices.len(),
        });
    }

    // Transpose the list of per-depth columns into [wavelength][tau_V].
    let mut grid = vec![vec![0.0_f64; t]; w];
    for (ti, slice) in depth_slices.iter().enumerate() {
        for (wi, &v) in slice.iter().enumerate() {
            grid[wi][ti] = v;
        }
    }

    let wavelengths_um: Vec<f64> = reference_block.iter().map(|a| a / ANGSTROM_PER_UM).collect();
    if !is_strictly_increasing(&wavelengths_um) {
        return Err(TableError::AxisNotIncreasing {
            what: "wavelength axis",
        });
    }

    Ok(RtGrid {
        wavelengths_um,
        tau_v: TAU_V_GRID.to_vec(),
        values: grid,
    })
}
