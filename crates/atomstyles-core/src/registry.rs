use crate::layout::ColumnLayout;
use crate::styles::resolver::resolve_style;
use crate::styles::table::STYLE_NAMES;
use crate::styles::{StyleError, is_known_style, style_columns};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    styles: BTreeMap<String, Vec<String>>,
}

/// The built-in style table extended with user-defined named styles.
///
/// Custom styles behave exactly like built-in ones: they resolve on their
/// own and may be listed as sub-styles of `hybrid`. Built-in names cannot be
/// redefined. A registry is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    custom: BTreeMap<String, Vec<String>>,
}

impl StyleRegistry {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads custom styles from a TOML file with a `[styles]` table mapping
    /// each style name to its column list.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry = Self::parse(&content, &path.to_string_lossy())?;
        info!(
            "Loaded {} custom atom style(s) from '{}'.",
            registry.custom.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, RegistryError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content).map_err(|e| RegistryError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        file.styles
            .into_iter()
            .try_fold(Self::builtin(), |registry, (name, columns)| {
                registry.with_style(name, columns)
            })
    }

    /// Adds a custom style after checking that its columns form a usable layout.
    pub fn with_style(
        mut self,
        name: impl Into<String>,
        columns: Vec<String>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.is_empty() || name.split_whitespace().count() != 1 || name.trim() != name {
            return Err(RegistryError::InvalidName(name));
        }
        if self.contains(&name) {
            return Err(RegistryError::DuplicateStyle(name));
        }
        if columns.is_empty() {
            return Err(RegistryError::EmptyStyle(name));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.is_empty() || column.split_whitespace().count() != 1 || column.trim() != column {
                return Err(RegistryError::InvalidColumn {
                    style: name,
                    column: column.clone(),
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(RegistryError::DuplicateColumn {
                    style: name,
                    column: column.clone(),
                });
            }
        }

        if let Err(source) = ColumnLayout::from_columns(columns.clone()) {
            return Err(RegistryError::InvalidLayout { style: name, source });
        }

        debug!("Registered custom atom style '{}' with {} columns.", name, columns.len());
        self.custom.insert(name, columns);
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        is_known_style(name) || self.custom.contains_key(name)
    }

    pub fn is_custom(&self, name: &str) -> bool {
        self.custom.contains_key(name)
    }

    pub fn columns(&self, name: &str) -> Option<Vec<&str>> {
        match style_columns(name) {
            Some(columns) => Some(columns.to_vec()),
            None => self
                .custom
                .get(name)
                .map(|columns| columns.iter().map(String::as_str).collect()),
        }
    }

    /// Built-in style names in table order, followed by custom names in
    /// lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        STYLE_NAMES
            .iter()
            .copied()
            .chain(self.custom.keys().map(String::as_str))
    }

    /// Resolves an `atom_style` declaration the way [`crate::styles::style_to_columns`]
    /// does, with custom names also treated as known styles.
    pub fn resolve(&self, atom_style: &str) -> Result<Vec<String>, StyleError> {
        resolve_style(atom_style, |name| self.columns(name))
    }

    pub fn layout(&self, atom_style: &str) -> Result<ColumnLayout, StyleError> {
        ColumnLayout::from_columns(self.resolve(atom_style)?)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Atom style name '{0}' must be a single non-empty token")]
    InvalidName(String),
    #[error("Atom style '{0}' is already defined")]
    DuplicateStyle(String),
    #[error("Atom style '{0}' declares no columns")]
    EmptyStyle(String),
    #[error("Atom style '{style}' has an invalid column name '{column}'")]
    InvalidColumn { style: String, column: String },
    #[error("Atom style '{style}' declares column '{column}' more than once")]
    DuplicateColumn { style: String, column: String },
    #[error("Atom style '{style}' has an unusable column layout: {source}")]
    InvalidLayout {
        style: String,
        #[source]
        source: StyleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::style_names;
    use std::io::Write;

    fn owned(columns: &[&str]) -> Vec<String> {
        columns.iter().map(|c| c.to_string()).collect()
    }

    const CUSTOM_STYLES: &str = r#"
[styles]
coarse = ["atom-ID", "molecule-ID", "atom-type", "q", "x", "y", "z", "bead-radius"]
spinning = ["id", "type", "x", "y", "z", "mux", "muy", "muz", "omega"]
"#;

    #[test]
    fn builtin_registry_matches_free_functions() {
        let registry = StyleRegistry::builtin();
        for input in ["full", "hybrid full charge", "foobar a b c"] {
            assert_eq!(
                registry.resolve(input),
                crate::styles::style_to_columns(input),
                "input '{}'",
                input
            );
        }
        assert_eq!(registry.names().count(), style_names().count());
    }

    #[test]
    fn from_toml_str_registers_custom_styles() {
        let registry = StyleRegistry::from_toml_str(CUSTOM_STYLES).unwrap();
        assert!(registry.is_custom("coarse"));
        assert!(registry.contains("spinning"));
        assert!(registry.contains("full"));
        assert!(!registry.is_custom("full"));
        assert_eq!(
            registry.resolve("coarse").unwrap(),
            owned(&["atom-ID", "molecule-ID", "atom-type", "q", "x", "y", "z", "bead-radius"])
        );
    }

    #[test]
    fn custom_styles_participate_in_hybrid_unions() {
        let registry = StyleRegistry::from_toml_str(CUSTOM_STYLES).unwrap();
        let columns = registry.resolve("hybrid charge coarse").unwrap();
        assert_eq!(
            columns,
            owned(&["atom-ID", "atom-type", "x", "y", "z", "q", "molecule-ID", "bead-radius"])
        );
    }

    #[test]
    fn custom_style_names_list_after_builtins() {
        let registry = StyleRegistry::from_toml_str(CUSTOM_STYLES).unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names.first(), Some(&"angle"));
        assert_eq!(&names[names.len() - 2..], &["coarse", "spinning"]);
    }

    #[test]
    fn layout_resolves_custom_vectors() {
        let registry = StyleRegistry::from_toml_str(CUSTOM_STYLES).unwrap();
        let layout = registry.layout("spinning").unwrap();
        assert_eq!(layout.vectors(), &[[5, 6, 7]]);
        assert_eq!(layout.roles().molecule_id, None);
    }

    #[test]
    fn unknown_style_is_still_unrecognized() {
        let registry = StyleRegistry::from_toml_str(CUSTOM_STYLES).unwrap();
        assert_eq!(
            registry.resolve("hybrid coarse nope"),
            Err(StyleError::UnrecognizedStyle {
                style: "nope".to_string()
            })
        );
    }

    #[test]
    fn with_style_rejects_builtin_names() {
        let result = StyleRegistry::builtin().with_style("full", owned(&["id", "type", "x", "y", "z"]));
        assert!(matches!(result, Err(RegistryError::DuplicateStyle(name)) if name == "full"));

        let result = StyleRegistry::builtin().with_style("hybrid", owned(&["id", "type", "x", "y", "z"]));
        assert!(matches!(result, Err(RegistryError::DuplicateStyle(_))));
    }

    #[test]
    fn with_style_rejects_redefinition() {
        let result = StyleRegistry::builtin()
            .with_style("mine", owned(&["id", "type", "x", "y", "z"]))
            .and_then(|r| r.with_style("mine", owned(&["id", "type", "q", "x", "y", "z"])));
        assert!(matches!(result, Err(RegistryError::DuplicateStyle(name)) if name == "mine"));
    }

    #[test]
    fn with_style_rejects_malformed_names_and_columns() {
        let columns = owned(&["id", "type", "x", "y", "z"]);
        assert!(matches!(
            StyleRegistry::builtin().with_style("two words", columns.clone()),
            Err(RegistryError::InvalidName(_))
        ));
        assert!(matches!(
            StyleRegistry::builtin().with_style("", columns),
            Err(RegistryError::InvalidName(_))
        ));
        assert!(matches!(
            StyleRegistry::builtin().with_style("empty", Vec::new()),
            Err(RegistryError::EmptyStyle(_))
        ));
        assert!(matches!(
            StyleRegistry::builtin().with_style("gap", owned(&["id", "type", "x y", "z"])),
            Err(RegistryError::InvalidColumn { column, .. }) if column == "x y"
        ));
    }

    #[test]
    fn with_style_rejects_duplicate_columns() {
        let result = StyleRegistry::builtin().with_style("dup", owned(&["id", "type", "q", "x", "y", "z", "q"]));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateColumn { style, column }) if style == "dup" && column == "q"
        ));
    }

    #[test]
    fn with_style_rejects_unusable_layouts() {
        let result = StyleRegistry::builtin().with_style("flat", owned(&["id", "type", "x", "y"]));
        match result {
            Err(RegistryError::InvalidLayout { style, source }) => {
                assert_eq!(style, "flat");
                assert_eq!(
                    source,
                    StyleError::InconsistentCoordinateColumns { missing: vec!["z"] }
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn from_toml_str_rejects_unknown_keys() {
        let result = StyleRegistry::from_toml_str("[aliases]\nfoo = \"bar\"\n");
        assert!(matches!(result, Err(RegistryError::Toml { path, .. }) if path == "<inline>"));
    }

    #[test]
    fn empty_document_yields_builtin_registry() {
        let registry = StyleRegistry::from_toml_str("").unwrap();
        assert_eq!(registry.names().count(), style_names().count());
    }

    #[test]
    fn load_reads_styles_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOM_STYLES.as_bytes()).unwrap();

        let registry = StyleRegistry::load(file.path()).unwrap();
        assert!(registry.is_custom("coarse"));
        assert!(registry.is_custom("spinning"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = StyleRegistry::load(&path);
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }
}
