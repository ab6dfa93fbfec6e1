use crate::cli::OutputFormat;
use crate::error::Result;
use atomstyles::sections::{self, Section, SectionKind};
use atomstyles::styles::{self, ColumnRole, Triplet};
use atomstyles::{ColumnLayout, StyleError, StyleRegistry};
use std::fmt::Write;

pub fn layout(layout: &ColumnLayout, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(layout_text(layout)),
        OutputFormat::Toml => Ok(toml::to_string(layout)?),
    }
}

/// Renders a column list whose roles or triplets could not be resolved.
pub fn unanalyzed_columns(columns: &[String], error: &StyleError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "{:>3}  column", "#");
            for (index, column) in columns.iter().enumerate() {
                let _ = writeln!(out, "{:>3}  {}", index, column);
            }
            let _ = writeln!(out, "layout: {}", error);
            Ok(out)
        }
        OutputFormat::Toml => {
            let mut table = toml::Table::new();
            table.insert(
                "columns".to_string(),
                toml::Value::Array(columns.iter().cloned().map(toml::Value::String).collect()),
            );
            table.insert("layout_error".to_string(), toml::Value::String(error.to_string()));
            Ok(toml::to_string(&table)?)
        }
    }
}

fn layout_text(layout: &ColumnLayout) -> String {
    let roles = layout.roles();
    let width = layout
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max("column".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<width$}  role", "#", "column");
    for (index, column) in layout.columns().iter().enumerate() {
        let role = if index == roles.atom_id {
            Some(ColumnRole::AtomId)
        } else if index == roles.atom_type {
            Some(ColumnRole::AtomType)
        } else if Some(index) == roles.molecule_id {
            Some(ColumnRole::MoleculeId)
        } else {
            None
        };
        let role = role.map(|r| r.to_string()).unwrap_or_default();
        let line = format!("{:>3}  {:<width$}  {}", index, column, role);
        let _ = writeln!(out, "{}", line.trim_end());
    }
    let _ = writeln!(out, "coordinates: {}", triplets(layout.coordinates()));
    let _ = writeln!(out, "vectors: {}", triplets(layout.vectors()));
    out
}

fn triplets(groups: &[Triplet]) -> String {
    if groups.is_empty() {
        return "none".to_string();
    }
    groups
        .iter()
        .map(|[a, b, c]| format!("({}, {}, {})", a, b, c))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn style_list(registry: &StyleRegistry, include_deprecated: bool) -> String {
    let names: Vec<&str> = registry
        .names()
        .filter(|name| include_deprecated || !styles::is_deprecated_style(name))
        .collect();
    let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for name in names {
        let columns = registry.columns(name).unwrap_or_default().join(" ");
        let note = if styles::is_deprecated_style(name) {
            "  (deprecated)"
        } else if registry.is_custom(name) {
            "  (custom)"
        } else {
            ""
        };
        let _ = writeln!(out, "{:<width$}  {}{}", name, columns, note);
    }
    out
}

fn kind_label(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Data => "data",
        SectionKind::Input => "input",
    }
}

pub fn section_list() -> String {
    let mut out = String::new();
    for section in Section::ALL {
        let _ = writeln!(out, "{:<5}  {}", kind_label(section.kind()), section);
    }
    out
}

pub fn section_report(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        let description = match name.parse::<Section>() {
            Ok(section) if section.name() == name => kind_label(section.kind()).to_string(),
            Ok(section) => format!("{} (legacy name of '{}')", kind_label(section.kind()), section),
            Err(_) if sections::is_data_section(name) => "data (unlisted)".to_string(),
            Err(_) if sections::is_input_section(name) => "input (unlisted)".to_string(),
            Err(_) => "unknown".to_string(),
        };
        let _ = writeln!(out, "{}: {}", name, description);
    }
    out
}
