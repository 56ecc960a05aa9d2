//! Fixed grids and embedded dust-grain constants.
//!
//! The radiative-transfer runs were computed on a fixed 26-point optical
//! depth grid and a fixed 25-point wavelength grid. Albedo and scattering
//! phase-function asymmetry are intrinsic grain properties: they depend on
//! the dust type only, not on geometry or clump distribution, so they are
//! embedded here as constants rather than loaded from the table source.

use crate::interp::LinearTable;
use crate::selection::DustType;

/// Number of wavelength samples per table block (W).
pub const WAVELENGTH_SAMPLES: usize = 25;

/// The fixed V-band optical depth grid of the simulation runs (T = 26).
pub const TAU_V_GRID: [f64; 26] = [
    0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 7.0, 8.0, 9.0, 10.0,
    15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0,
];

/// The native wavelength grid in micron, shared by the grain-property tables.
pub const WAVELENGTHS_UM: [f64; 25] = [
    0.1, 0.115, 0.125, 0.135, 0.15, 0.175, 0.2, 0.25, 0.3, 0.35, 0.4, 0.45, 0.5, 0.55, 0.6, 0.65,
    0.7, 0.8, 0.9, 1.0, 1.2, 1.5, 2.0, 2.5, 3.0,
];

/// Single-scattering albedo for Milky Way grains on [`WAVELENGTHS_UM`].
pub const ALBEDO_MW: [f64; 25] = [
    0.420, 0.450, 0.466, 0.480, 0.502, 0.528, 0.552, 0.604, 0.611, 0.594, 0.580, 0.571, 0.563,
    0.556, 0.550, 0.543, 0.535, 0.520, 0.502, 0.483, 0.442, 0.389, 0.319, 0.270, 0.237,
];

/// Single-scattering albedo for SMC grains on [`WAVELENGTHS_UM`].
pub const ALBEDO_SMC: [f64; 25] = [
    0.400, 0.423, 0.434, 0.445, 0.463, 0.486, 0.507, 0.546, 0.552, 0.536, 0.522, 0.512, 0.505,
    0.498, 0.491, 0.484, 0.476, 0.460, 0.441, 0.421, 0.380, 0.328, 0.262, 0.217, 0.188,
];

/// Scattering phase-function asymmetry g for Milky Way grains.
pub const ASYMMETRY_MW: [f64; 25] = [
    0.800, 0.783, 0.767, 0.756, 0.745, 0.727, 0.702, 0.656, 0.624, 0.597, 0.563, 0.545, 0.533,
    0.511, 0.480, 0.445, 0.420, 0.350, 0.290, 0.250, 0.180, 0.130, 0.070, 0.040, 0.020,
];

/// Scattering phase-function asymmetry g for SMC grains.
pub const ASYMMETRY_SMC: [f64; 25] = [
    0.760, 0.748, 0.734, 0.720, 0.708, 0.689, 0.665, 0.617, 0.585, 0.558, 0.527, 0.508, 0.493,
    0.474, 0.444, 0.412, 0.388, 0.323, 0.267, 0.229, 0.165, 0.119, 0.064, 0.037, 0.018,
];

/// Build the 1-D albedo lookup table for a dust type.
pub fn albedo_table(dust_type: DustType) -> LinearTable {
    let values = match dust_type {
        DustType::Mw => &ALBEDO_MW,
        DustType::Smc => &ALBEDO_SMC,
    };
    // The embedded axes are compile-time constants with known-good shape;
    // construction cannot fail.
    LinearTable::new(WAVELENGTHS_UM.to_vec(), values.to_vec())
        .unwrap_or_else(|_| unreachable!("embedded albedo table is well-formed"))
}

/// Build the 1-D scattering-asymmetry lookup table for a dust type.
pub fn asymmetry_table(dust_type: DustType) -> LinearTable {
    let values = match dust_type {
        DustType::Mw => &ASYMMETRY_MW,
        DustType::Smc => &ASYMMETRY_SMC,
    };
    LinearTable::new(WAVELENGTHS_UM.to_vec(), values.to_vec())
        .unwrap_or_else(|_| unreachable!("embedded asymmetry table is well-formed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use da_core::is_strictly_increasing;

    #[test]
    fn tau_v_grid_is_strictly_increasing() {
        assert!(is_strictly_increasing(&TAU_V_GRID));
        assert_eq!(TAU_V_GRID.len(), 26);
        assert_eq!(TAU_V_GRID[0], 0.25);
        assert_eq!(TAU_V_GRID[25], 50.0);
    }

    #[test]
    fn wavelength_grid_spans_domain_and_hits_v_band() {
        assert!(is_strictly_increasing(&WAVELENGTHS_UM));
        assert_eq!(WAVELENGTHS_UM.len(), WAVELENGTH_SAMPLES);
        assert!(WAVELENGTHS_UM.contains(&0.55));
    }

    #[test]
    fn albedo_is_a_probability() {
        for table in [&ALBEDO_MW, &ALBEDO_SMC] {
            assert_eq!(table.len(), WAVELENGTH_SAMPLES);
            assert!(table.iter().all(|&a| (0.0..=1.0).contains(&a)));
        }
    }

    #[test]
    fn asymmetry_is_bounded() {
        for table in [&ASYMMETRY_MW, &ASYMMETRY_SMC] {
            assert_eq!(table.len(), WAVELENGTH_SAMPLES);
            assert!(table.iter().all(|&g| (-1.0..=1.0).contains(&g)));
        }
    }

    #[test]
    fn grain_tables_interpolate_exactly_at_nodes() {
        let alb = albedo_table(DustType::Mw);
        for (i, &w) in WAVELENGTHS_UM.iter().enumerate() {
            assert_eq!(alb.sample(w), ALBEDO_MW[i]);
        }
    }
}
