//! Model selection: dust composition, star/dust geometry, clump distribution.
//!
//! A `Selection` fixes which slice of the raw tables and which column name
//! feed grid construction. It is chosen at model-construction time; changing
//! any field means building a new model with fresh grids (no partial update,
//! no stale-grid states).

use std::fmt;

use crate::constants::WAVELENGTH_SAMPLES;

/// Dust grain composition. The raw tables interleave one block per dust type
/// at every optical-depth value, Milky Way first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DustType {
    /// Milky Way grains
    Mw,
    /// Small Magellanic Cloud grains
    Smc,
}

impl DustType {
    /// Row offset of this dust type's first block within the raw table.
    pub fn block_offset(self) -> usize {
        match self {
            DustType::Mw => 0,
            DustType::Smc => WAVELENGTH_SAMPLES,
        }
    }
}

impl fmt::Display for DustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DustType::Mw => write!(f, "mw"),
            DustType::Smc => write!(f, "smc"),
        }
    }
}

/// Star/dust geometry of the radiative-transfer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// Stars enclosed by a dust shell
    Shell,
    /// Stars embedded in a larger dust cloud
    Cloudy,
    /// Stars and dust uniformly mixed
    Dusty,
}

impl Geometry {
    /// Stem of the table file carrying this geometry's runs.
    pub fn file_stem(self) -> &'static str {
        match self {
            Geometry::Shell => "shell",
            Geometry::Cloudy => "cloudy",
            Geometry::Dusty => "dusty",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Local dust clumping distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    Homogeneous,
    Clumpy,
}

impl Distribution {
    /// Column-name suffix selecting this distribution's quantities.
    pub fn column_suffix(self) -> &'static str {
        match self {
            Distribution::Homogeneous => "_h",
            Distribution::Clumpy => "_c",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Homogeneous => write!(f, "homogeneous"),
            Distribution::Clumpy => write!(f, "clumpy"),
        }
    }
}

/// A full model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub dust_type: DustType,
    pub geometry: Geometry,
    pub distribution: Distribution,
}

impl Selection {
    pub fn new(dust_type: DustType, geometry: Geometry, distribution: Distribution) -> Self {
        Self {
            dust_type,
            geometry,
            distribution,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.geometry, self.dust_type, self.distribution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_offsets() {
        assert_eq!(DustType::Mw.block_offset(), 0);
        assert_eq!(DustType::Smc.block_offset(), WAVELENGTH_SAMPLES);
    }

    #[test]
    fn column_suffixes() {
        assert_eq!(Distribution::Clumpy.column_suffix(), "_c");
        assert_eq!(Distribution::Homogeneous.column_suffix(), "_h");
    }

    #[test]
    fn selection_display() {
        let sel = Selection::new(DustType::Mw, Geometry::Shell, Distribution::Homogeneous);
        assert_eq!(sel.to_string(), "shell/mw/homogeneous");
    }
}
