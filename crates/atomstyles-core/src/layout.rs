use crate::styles::{
    RoleIndices, StyleError, Triplet, column_roles, coordinate_groups, style_to_columns,
    vector_groups,
};
use serde::Serialize;

/// A resolved column list together with every index a data-file writer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    columns: Vec<String>,
    coordinates: Vec<Triplet>,
    vectors: Vec<Triplet>,
    roles: RoleIndices,
}

impl ColumnLayout {
    /// Resolves an `atom_style` declaration and analyzes the resulting columns.
    ///
    /// # Errors
    ///
    /// Returns the first [`StyleError`] raised by style resolution, role lookup,
    /// or the coordinate and vector checks, in that order.
    pub fn from_style(atom_style: &str) -> Result<Self, StyleError> {
        Self::from_columns(style_to_columns(atom_style)?)
    }

    pub fn from_columns(columns: Vec<String>) -> Result<Self, StyleError> {
        let roles = column_roles(&columns)?;
        let coordinates = coordinate_groups(&columns)?;
        let vectors = vector_groups(&columns)?;
        Ok(Self {
            columns,
            coordinates,
            vectors,
            roles,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn roles(&self) -> RoleIndices {
        self.roles
    }

    pub fn coordinates(&self) -> &[Triplet] {
        &self.coordinates
    }

    pub fn vectors(&self) -> &[Triplet] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn into_columns(self) -> Vec<String> {
        self.columns
    }
}
