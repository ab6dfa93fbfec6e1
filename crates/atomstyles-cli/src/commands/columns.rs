use crate::cli::ColumnsArgs;
use crate::error::Result;
use crate::render;
use atomstyles::{ColumnLayout, StyleRegistry};
use atomstyles::styles::{HYBRID_STYLE, is_deprecated_style};
use tracing::{info, warn};

pub fn run(args: ColumnsArgs, registry: &StyleRegistry) -> Result<()> {
    let output = resolve(&args, registry)?;
    print!("{}", output);
    Ok(())
}

fn resolve(args: &ColumnsArgs, registry: &StyleRegistry) -> Result<String> {
    let declaration = args.style.join(" ");
    info!("Resolving atom_style '{}'.", declaration.trim());

    let mut words = declaration.split_whitespace();
    let style = words.next();
    let sub_styles = words.filter(|_| style == Some(HYBRID_STYLE));
    for word in style.into_iter().chain(sub_styles) {
        if is_deprecated_style(word) {
            warn!("atom_style '{}' was removed from LAMMPS in 2012.", word);
        }
    }

    let columns = registry.resolve(&declaration)?;
    match ColumnLayout::from_columns(columns.clone()) {
        Ok(layout) => render::layout(&layout, args.format),
        Err(e) => {
            warn!("Resolved columns do not form a complete layout: {}", e);
            render::unanalyzed_columns(&columns, &e, args.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::error::CliError;
    use atomstyles::StyleError;

    fn args(words: &[&str]) -> ColumnsArgs {
        ColumnsArgs {
            style: words.iter().map(|w| w.to_string()).collect(),
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn resolves_hybrid_declaration_split_across_arguments() {
        let output = resolve(&args(&["hybrid", "full", "charge"]), &StyleRegistry::builtin()).unwrap();
        assert!(output.contains("  5  molecule-ID  molecule-ID"));
        assert!(output.contains("  6  q"));
    }

    #[test]
    fn accepts_declaration_in_a_single_argument() {
        let split = resolve(&args(&["hybrid", "sphere", "dipole"]), &StyleRegistry::builtin()).unwrap();
        let joined = resolve(&args(&["hybrid sphere dipole"]), &StyleRegistry::builtin()).unwrap();
        assert_eq!(split, joined);
    }

    #[test]
    fn propagates_style_errors() {
        let result = resolve(&args(&["hybrid"]), &StyleRegistry::builtin());
        assert!(matches!(result, Err(CliError::Style(StyleError::MissingSubstyle))));
    }

    #[test]
    fn literal_lists_without_roles_still_show_columns() {
        let output = resolve(&args(&["foobar", "a", "b", "c"]), &StyleRegistry::builtin()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "  #  column");
        assert_eq!(lines[1], "  0  foobar");
        assert_eq!(lines[4], "  3  c");
        assert_eq!(
            lines[5],
            "layout: List of column names lacks an \"atom-ID\" column"
        );
    }

    #[test]
    fn literal_lists_without_roles_render_as_toml() {
        let mut columns_args = args(&["foobar", "a", "b", "c"]);
        columns_args.format = OutputFormat::Toml;
        let output = resolve(&columns_args, &StyleRegistry::builtin()).unwrap();
        assert!(output.contains("columns = [\"foobar\", \"a\", \"b\", \"c\"]"));
        assert!(output.contains("layout_error = "));
    }
}
