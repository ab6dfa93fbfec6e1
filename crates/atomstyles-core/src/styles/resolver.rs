use super::error::StyleError;
use super::table::{HYBRID_BASE_COLUMNS, HYBRID_STYLE, style_columns};
use tracing::{debug, trace};

/// Resolves an `atom_style` declaration into its ordered column names.
///
/// The first whitespace-separated token names the style. For `hybrid`, the
/// remaining tokens name sub-styles whose columns are merged into the base
/// `atom-ID atom-type x y z` set, keeping first-seen order and dropping
/// repeats. An unrecognized first token followed by more tokens is taken as
/// an explicit list of column names.
///
/// # Errors
///
/// - [`StyleError::InvalidInput`] if the declaration is blank.
/// - [`StyleError::UnrecognizedStyle`] for a lone unknown style or an unknown sub-style.
/// - [`StyleError::MissingSubstyle`] for `hybrid` without sub-styles.
pub fn style_to_columns(atom_style: &str) -> Result<Vec<String>, StyleError> {
    resolve_style(atom_style, |name| style_columns(name).map(|c| c.to_vec()))
}

/// Shared resolution logic, parameterized over the style lookup so that
/// registries with additional named styles follow the same rules.
pub(crate) fn resolve_style<'t, F>(atom_style: &str, lookup: F) -> Result<Vec<String>, StyleError>
where
    F: Fn(&str) -> Option<Vec<&'t str>>,
{
    let tokens: Vec<&str> = atom_style.split_whitespace().collect();
    let Some((&style, sub_styles)) = tokens.split_first() else {
        return Err(StyleError::InvalidInput);
    };

    let Some(columns) = lookup(style) else {
        if tokens.len() >= 2 {
            debug!(
                "'{}' is not a known atom_style; treating {} tokens as column names.",
                style,
                tokens.len()
            );
            return Ok(tokens.iter().map(|t| t.to_string()).collect());
        }
        return Err(StyleError::UnrecognizedStyle {
            style: style.to_string(),
        });
    };

    if style != HYBRID_STYLE {
        trace!("Resolved atom_style '{}' to {} columns.", style, columns.len());
        return Ok(owned_columns(&columns));
    }

    if sub_styles.is_empty() {
        return Err(StyleError::MissingSubstyle);
    }

    let mut merged: Vec<String> = owned_columns(HYBRID_BASE_COLUMNS);
    for &sub_style in sub_styles {
        let sub_columns = lookup(sub_style).ok_or_else(|| StyleError::UnrecognizedStyle {
            style: sub_style.to_string(),
        })?;
        for column in sub_columns {
            if merged.iter().any(|c| c == column) {
                trace!("Sub-style '{}' column '{}' already present.", sub_style, column);
            } else {
                merged.push(column.to_string());
            }
        }
    }

    debug!(
        "Resolved hybrid atom_style with sub-styles [{}] to {} columns.",
        sub_styles.join(", "),
        merged.len()
    );
    Ok(merged)
}

fn owned_columns(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}
