use super::error::StyleError;
use serde::Serialize;
use std::fmt;

// LAMMPS documentation spells these columns several ways; "−" (U+2212) is the
// glyph used in the manual itself. Earlier entries take priority.
const ATOM_ID_ALIASES: &[&str] = &["atom-ID", "atom−ID", "atomID", "atomid", "id", "atom", "$atom"];
const ATOM_TYPE_ALIASES: &[&str] = &["atom-type", "atom−type", "atomtype", "type", "@atom"];
#[rustfmt::skip]
const MOLECULE_ID_ALIASES: &[&str] = &[
    "molecule-ID", "molecule−ID", "moleculeID", "moleculeid",
    "molecule", "molID", "molid", "mol", "$mol",
];

/// The semantic purpose of a column, independent of where it sits in a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnRole {
    AtomId,
    AtomType,
    MoleculeId,
}

impl ColumnRole {
    /// Accepted column names for this role, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::AtomId => ATOM_ID_ALIASES,
            Self::AtomType => ATOM_TYPE_ALIASES,
            Self::MoleculeId => MOLECULE_ID_ALIASES,
        }
    }

    /// Returns the position of the highest-priority alias present in `columns`.
    ///
    /// Alias priority decides, not column order: in `["id", "atom-ID"]` the
    /// atom-ID role resolves to position 1.
    pub fn locate<S: AsRef<str>>(self, columns: &[S]) -> Option<usize> {
        self.aliases()
            .iter()
            .find_map(|alias| columns.iter().position(|c| c.as_ref() == *alias))
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::AtomId => "atom-ID",
                Self::AtomType => "atom-type",
                Self::MoleculeId => "molecule-ID",
            }
        )
    }
}

/// Zero-based positions of the role columns within a column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoleIndices {
    pub atom_id: usize,
    pub atom_type: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub molecule_id: Option<usize>, // absent for styles without molecules
}

pub fn column_roles<S: AsRef<str>>(columns: &[S]) -> Result<RoleIndices, StyleError> {
    let required = |role: ColumnRole| {
        role.locate(columns)
            .ok_or(StyleError::MissingRequiredColumn { role })
    };

    Ok(RoleIndices {
        atom_id: required(ColumnRole::AtomId)?,
        atom_type: required(ColumnRole::AtomType)?,
        molecule_id: ColumnRole::MoleculeId.locate(columns),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_roles_resolves_short_aliases() {
        let roles = column_roles(&["id", "type", "x", "y", "z"]).unwrap();
        assert_eq!(
            roles,
            RoleIndices {
                atom_id: 0,
                atom_type: 1,
                molecule_id: None
            }
        );
    }

    #[test]
    fn column_roles_resolves_full_style() {
        let roles = column_roles(&["atom-ID", "molecule-ID", "atom-type", "q", "x", "y", "z"]).unwrap();
        assert_eq!(roles.atom_id, 0);
        assert_eq!(roles.atom_type, 2);
        assert_eq!(roles.molecule_id, Some(1));
    }

    #[test]
    fn column_roles_fails_without_atom_id() {
        let result = column_roles(&["atom-type", "x", "y", "z"]);
        assert_eq!(
            result,
            Err(StyleError::MissingRequiredColumn {
                role: ColumnRole::AtomId
            })
        );
    }

    #[test]
    fn column_roles_fails_without_atom_type() {
        let result = column_roles(&["atom-ID", "molecule-ID", "x", "y", "z"]);
        assert_eq!(
            result,
            Err(StyleError::MissingRequiredColumn {
                role: ColumnRole::AtomType
            })
        );
    }

    #[test]
    fn alias_priority_wins_over_column_position() {
        let roles = column_roles(&["id", "type", "atom-ID", "atomtype", "mol", "molecule"]).unwrap();
        assert_eq!(roles.atom_id, 2);
        assert_eq!(roles.atom_type, 3);
        assert_eq!(roles.molecule_id, Some(5));
    }

    #[test]
    fn manual_minus_glyph_aliases_are_accepted() {
        let roles = column_roles(&["atom−ID", "molecule−ID", "atom−type", "x", "y", "z"]).unwrap();
        assert_eq!(roles.atom_id, 0);
        assert_eq!(roles.atom_type, 2);
        assert_eq!(roles.molecule_id, Some(1));
    }

    #[test]
    fn template_variable_aliases_are_accepted() {
        let roles = column_roles(&["$atom", "$mol", "@atom", "x", "y", "z"]).unwrap();
        assert_eq!(roles.atom_id, 0);
        assert_eq!(roles.atom_type, 2);
        assert_eq!(roles.molecule_id, Some(1));
    }

    #[test]
    fn aliases_are_case_sensitive() {
        assert!(column_roles(&["ID", "TYPE"]).is_err());
        assert_eq!(ColumnRole::AtomId.locate(&["AtomID", "atomID"]), Some(1));
    }

    #[test]
    fn column_role_displays_canonical_name() {
        assert_eq!(ColumnRole::AtomId.to_string(), "atom-ID");
        assert_eq!(ColumnRole::AtomType.to_string(), "atom-type");
        assert_eq!(ColumnRole::MoleculeId.to_string(), "molecule-ID");
    }

    #[test]
    fn missing_column_message_names_the_role() {
        let err = column_roles(&["x", "y", "z"]).unwrap_err();
        assert_eq!(err.to_string(), "List of column names lacks an \"atom-ID\" column");
    }
}
