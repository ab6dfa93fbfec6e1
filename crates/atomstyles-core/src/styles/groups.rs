use super::error::StyleError;

/// Positions of an `(x, y, z)`-like triplet of columns.
pub type Triplet = [usize; 3];

pub const COORDINATE_COLUMNS: [&str; 3] = ["x", "y", "z"];
pub const DIPOLE_COLUMNS: [&str; 3] = ["mux", "muy", "muz"];

/// Columns that must be translated and rotated together (atom positions).
pub fn coordinate_groups<S: AsRef<str>>(columns: &[S]) -> Result<Vec<Triplet>, StyleError> {
    locate_triplet(columns, COORDINATE_COLUMNS)
        .map(|found| found.into_iter().collect())
        .map_err(|missing| StyleError::InconsistentCoordinateColumns { missing })
}

/// Columns holding orientations (dipole moments) that are rotated but never translated.
pub fn vector_groups<S: AsRef<str>>(columns: &[S]) -> Result<Vec<Triplet>, StyleError> {
    locate_triplet(columns, DIPOLE_COLUMNS)
        .map(|found| found.into_iter().collect())
        .map_err(|missing| StyleError::InconsistentVectorColumns { missing })
}

/// Finds all three names or none of them; a partial match yields the missing names.
fn locate_triplet<S: AsRef<str>>(
    columns: &[S],
    names: [&'static str; 3],
) -> Result<Option<Triplet>, Vec<&'static str>> {
    let positions = names.map(|name| columns.iter().position(|c| c.as_ref() == name));

    match positions {
        [Some(a), Some(b), Some(c)] => Ok(Some([a, b, c])),
        [None, None, None] => Ok(None),
        _ => Err(names
            .iter()
            .zip(positions)
            .filter(|(_, pos)| pos.is_none())
            .map(|(name, _)| *name)
            .collect()),
    }
}
