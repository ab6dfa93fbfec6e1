//! The atom-style column resolver.
//!
//! A LAMMPS `atom_style` fixes which per-atom quantities appear on each line of
//! the `Atoms` section of a data file, and in which order. This module owns the
//! built-in style table and the pure functions that turn a style declaration
//! into column names, and column names into the positions a data-file writer
//! needs: the atom-ID, atom-type, and molecule-ID columns, the position triplet
//! that is translated and rotated, and orientation triplets that are only rotated.

pub mod error;
pub mod groups;
pub mod resolver;
pub mod roles;
pub mod table;

pub use error::StyleError;
pub use groups::{Triplet, coordinate_groups, vector_groups};
pub use resolver::style_to_columns;
pub use roles::{ColumnRole, RoleIndices, column_roles};
pub use table::{
    HYBRID_STYLE, is_deprecated_style, is_known_style, style_columns, style_names,
};
