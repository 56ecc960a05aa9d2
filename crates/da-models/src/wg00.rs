//! Tabulated radiative-transfer attenuation model (Witt & Gordon 2000).
//!
//! Unlike the closed-form curves, this model carries no formula: it is backed
//! by precomputed radiative-transfer simulation grids over (wavelength,
//! V-band optical depth), one set per (dust type, geometry, clump
//! distribution) selection. Construction loads the geometry's raw table
//! through the [`TableSource`] collaborator, reshapes the relevant columns
//! into five quantity grids, and wraps each in a bilinear interpolator.
//! After that, every query is pure in-memory interpolation.
//!
//! The grids are owned exclusively by the model and immutable once built.
//! There is deliberately no way to switch dust type, geometry, or
//! distribution on an existing instance: a different selection is a
//! different model, constructed fresh, so a half-updated grid set can never
//! be observed.

use da_core::ValidityDomain;
use tracing::debug;

use da_tables::{
    albedo_table, asymmetry_table, build_grid, BilinearGrid, Distribution, LinearTable, Selection,
    TableSource,
};

use crate::error::ModelResult;
use crate::model::{clip_negative, CurveModel, MAG_PER_TAU};
use crate::params::OpticalDepth;

/// Valid wavelength range, micron. Slightly wider than the native grid end
/// so queries at the nominal 3.0 micron edge resolve without error.
const X_RANGE: (f64, f64) = (0.1, 3.0001);

const LABEL: &str = "WG00";

/// Quantity column stems in the raw geometry tables. The extinction column
/// carries no distribution suffix: it is the dust column's input optical
/// depth, independent of clumping along scattered paths.
const COL_ATTENUATION: &str = "tau_att";
const COL_EXTINCTION: &str = "tau";
const COL_SCATTERED: &str = "f(sca)";
const COL_DIRECT: &str = "f(dir)";
const COL_ESCAPING: &str = "f(esc)";

fn suffixed(stem: &str, distribution: Distribution) -> String {
    format!("{stem}{}", distribution.column_suffix())
}

/// The tabulated Witt & Gordon (2000) attenuation model.
#[derive(Debug)]
pub struct Wg00Model {
    tau_v: OpticalDepth,
    selection: Selection,
    attenuation: BilinearGrid,
    extinction: BilinearGrid,
    scattered: BilinearGrid,
    direct: BilinearGrid,
    escaping: BilinearGrid,
    albedo: LinearTable,
    asymmetry: LinearTable,
}

impl Wg00Model {
    /// Build a model for one (tau_V, selection) pair.
    ///
    /// `tau_V` is validated before the data source is touched, so an invalid
    /// optical depth never triggers a table load. A selection with no
    /// backing data (missing file or column) is a fatal configuration error.
    pub fn new(
        tau_v: f64,
        selection: Selection,
        source: &dyn TableSource,
    ) -> ModelResult<Self> {
        let tau_v = OpticalDepth::new(tau_v)?;

        let table = source.load(selection.geometry)?;
        debug!(
            selection = %selection,
            rows = table.n_rows(),
            "loaded radiative-transfer table"
        );

        let geom = selection.geometry;
        let dust = selection.dust_type;
        let dist = selection.distribution;
        let attenuation = build_grid(&table, geom, dust, &suffixed(COL_ATTENUATION, dist))?
            .into_interpolator()?;
        let extinction = build_grid(&table, geom, dust, COL_EXTINCTION)?.into_interpolator()?;
        let scattered =
            build_grid(&table, geom, dust, &suffixed(COL_SCATTERED, dist))?.into_interpolator()?;
        let direct =
            build_grid(&table, geom, dust, &suffixed(COL_DIRECT, dist))?.into_interpolator()?;
        let escaping =
            build_grid(&table, geom, dust, &suffixed(COL_ESCAPING, dist))?.into_interpolator()?;

        Ok(Self {
            tau_v,
            selection,
            attenuation,
            extinction,
            scattered,
            direct,
            escaping,
            albedo: albedo_table(dust),
            asymmetry: asymmetry_table(dust),
        })
    }

    pub fn tau_v(&self) -> f64 {
        self.tau_v.value()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn validated(&self, x_um: &[f64]) -> ModelResult<()> {
        self.domain().validate(x_um, LABEL)?;
        Ok(())
    }

    fn query_grid(&self, grid: &BilinearGrid, x_um: &[f64]) -> Vec<f64> {
        let tau_v = self.tau_v.value();
        x_um.iter().map(|&x| grid.sample(x, tau_v)).collect()
    }

    /// Extinction A(x) in magnitudes: the dimming along the direct line of
    /// sight, with no geometry or scattered-light correction.
    pub fn extinction(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        let mut ax: Vec<f64> = self
            .query_grid(&self.extinction, x_um)
            .iter()
            .map(|t| MAG_PER_TAU * t)
            .collect();
        clip_negative(&mut ax, LABEL);
        Ok(ax)
    }

    /// Fraction of the escaping flux that was scattered into the line of
    /// sight, in [0, 1].
    pub fn scattered_fraction(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        Ok(self.query_grid(&self.scattered, x_um))
    }

    /// Fraction of the escaping flux that traveled directly, in [0, 1].
    pub fn direct_fraction(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        Ok(self.query_grid(&self.direct, x_um))
    }

    /// Total fraction of the source flux that escapes the dust structure,
    /// in [0, 1].
    pub fn escaping_fraction(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        Ok(self.query_grid(&self.escaping, x_um))
    }

    /// Single-scattering albedo of the selected dust type. An intrinsic
    /// grain property: geometry and distribution play no part.
    pub fn albedo(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        Ok(x_um.iter().map(|&x| self.albedo.sample(x)).collect())
    }

    /// Scattering phase-function asymmetry g of the selected dust type.
    pub fn scattering_asymmetry(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        Ok(x_um.iter().map(|&x| self.asymmetry.sample(x)).collect())
    }
}

impl CurveModel for Wg00Model {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn domain(&self) -> ValidityDomain {
        ValidityDomain {
            low: X_RANGE.0,
            high: X_RANGE.1,
        }
    }

    /// Attenuation in magnitudes: interpolate the attenuation optical depth
    /// at (x, tau_V) and convert through the fixed 1.0857 mag/tau relation.
    fn evaluate(&self, x_um: &[f64]) -> ModelResult<Vec<f64>> {
        self.validated(x_um)?;
        let mut ax: Vec<f64> = self
            .query_grid(&self.attenuation, x_um)
            .iter()
            .map(|t| MAG_PER_TAU * t)
            .collect();
        clip_negative(&mut ax, LABEL);
        Ok(ax)
    }
}
