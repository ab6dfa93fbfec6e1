use super::roles::ColumnRole;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Invalid atom_style: the atom_style command was followed by an empty string")]
    InvalidInput,

    #[error("Unrecognized atom_style: \"{style}\"")]
    UnrecognizedStyle { style: String },

    #[error("atom_style hybrid must be followed by at least one sub-style")]
    MissingSubstyle,

    #[error("List of column names lacks an \"{role}\" column")]
    MissingRequiredColumn { role: ColumnRole },

    #[error(
        "Custom atom_style list must define x, y, and z (missing: {})",
        .missing.join(", ")
    )]
    InconsistentCoordinateColumns { missing: Vec<&'static str> },

    #[error(
        "Custom atom_style list must define mux, muy, and muz or none of them (missing: {})",
        .missing.join(", ")
    )]
    InconsistentVectorColumns { missing: Vec<&'static str> },
}
