//! Names of the data-file and input-script fragments a template pipeline writes.
//!
//! Each fragment is written to a file named after the section it belongs to:
//! `Data Atoms` holds lines of the `Atoms` section of a LAMMPS data file, whose
//! column order is given by the atom style, while `In Settings` holds commands
//! for the input script. This module gives those names a typed form.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DATA_PREFIX: &str = "Data ";
pub const IN_PREFIX: &str = "In ";

/// Older pipelines wrote the periodic boundary fragment under this name.
pub const LEGACY_BOUNDARY_NAME: &str = "Data PBC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Atoms,
    Masses,
    Velocities,
    Bonds,
    BondList,
    Angles,
    Dihedrals,
    Impropers,
    BondCoeffs,
    AngleCoeffs,
    DihedralCoeffs,
    ImproperCoeffs,
    PairCoeffs,
    // Interactions listed by type rather than by ID (not part of LAMMPS).
    BondsByType,
    AnglesByType,
    DihedralsByType,
    ImpropersByType,
    // class2 cross terms
    BondBondCoeffs,
    BondAngleCoeffs,
    MiddleBondTorsionCoeffs,
    EndBondTorsionCoeffs,
    AngleTorsionCoeffs,
    AngleAngleTorsionCoeffs,
    BondBond13Coeffs,
    AngleAngleCoeffs,
    // non-point particles
    Ellipsoids,
    Lines,
    Triangles,
    Boundary,
    InInit,
    InSettings,
    InCoords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Data,
    Input,
}

impl Section {
    pub const ALL: [Section; 32] = [
        Self::Atoms,
        Self::Masses,
        Self::Velocities,
        Self::Bonds,
        Self::BondList,
        Self::Angles,
        Self::Dihedrals,
        Self::Impropers,
        Self::BondCoeffs,
        Self::AngleCoeffs,
        Self::DihedralCoeffs,
        Self::ImproperCoeffs,
        Self::PairCoeffs,
        Self::BondsByType,
        Self::AnglesByType,
        Self::DihedralsByType,
        Self::ImpropersByType,
        Self::BondBondCoeffs,
        Self::BondAngleCoeffs,
        Self::MiddleBondTorsionCoeffs,
        Self::EndBondTorsionCoeffs,
        Self::AngleTorsionCoeffs,
        Self::AngleAngleTorsionCoeffs,
        Self::BondBond13Coeffs,
        Self::AngleAngleCoeffs,
        Self::Ellipsoids,
        Self::Lines,
        Self::Triangles,
        Self::Boundary,
        Self::InInit,
        Self::InSettings,
        Self::InCoords,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Atoms => "Data Atoms",
            Self::Masses => "Data Masses",
            Self::Velocities => "Data Velocities",
            Self::Bonds => "Data Bonds",
            Self::BondList => "Data Bond List",
            Self::Angles => "Data Angles",
            Self::Dihedrals => "Data Dihedrals",
            Self::Impropers => "Data Impropers",
            Self::BondCoeffs => "Data Bond Coeffs",
            Self::AngleCoeffs => "Data Angle Coeffs",
            Self::DihedralCoeffs => "Data Dihedral Coeffs",
            Self::ImproperCoeffs => "Data Improper Coeffs",
            Self::PairCoeffs => "Data Pair Coeffs",
            Self::BondsByType => "Data Bonds By Type",
            Self::AnglesByType => "Data Angles By Type",
            Self::DihedralsByType => "Data Dihedrals By Type",
            Self::ImpropersByType => "Data Impropers By Type",
            Self::BondBondCoeffs => "Data BondBond Coeffs",
            Self::BondAngleCoeffs => "Data BondAngle Coeffs",
            Self::MiddleBondTorsionCoeffs => "Data MiddleBondTorsion Coeffs",
            Self::EndBondTorsionCoeffs => "Data EndBondTorsion Coeffs",
            Self::AngleTorsionCoeffs => "Data AngleTorsion Coeffs",
            Self::AngleAngleTorsionCoeffs => "Data AngleAngleTorsion Coeffs",
            Self::BondBond13Coeffs => "Data BondBond13 Coeffs",
            Self::AngleAngleCoeffs => "Data AngleAngle Coeffs",
            Self::Ellipsoids => "Data Ellipsoids",
            Self::Lines => "Data Lines",
            Self::Triangles => "Data Triangles",
            Self::Boundary => "Data Boundary",
            Self::InInit => "In Init",
            Self::InSettings => "In Settings",
            Self::InCoords => "In Coords",
        }
    }

    pub fn kind(self) -> SectionKind {
        match self {
            Self::InInit | Self::InSettings | Self::InCoords => SectionKind::Input,
            _ => SectionKind::Data,
        }
    }

    /// Looks up a section by its exact file name, accepting the legacy
    /// boundary name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == LEGACY_BOUNDARY_NAME {
            return Some(Self::Boundary);
        }
        Self::ALL.into_iter().find(|section| section.name() == name)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown section name: '{0}'")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// True for any `Data ...` fragment name, including ones this module does not enumerate.
pub fn is_data_section(name: &str) -> bool {
    name.starts_with(DATA_PREFIX)
}

pub fn is_input_section(name: &str) -> bool {
    name.starts_with(IN_PREFIX)
}
