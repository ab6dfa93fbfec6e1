use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "atomstyles - Resolve LAMMPS atom styles into data-file column layouts.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// TOML file defining additional named atom styles under a [styles] table
    #[arg(long, global = true, value_name = "PATH")]
    pub styles: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the known atom styles and their columns.
    List(ListArgs),
    /// Resolve an atom_style declaration (e.g. `hybrid full dipole`) into its column layout.
    Columns(ColumnsArgs),
    /// Locate the role, coordinate, and vector columns in an explicit column list.
    Inspect(InspectArgs),
    /// List the data-file and input-script fragment names, or classify the given ones.
    Sections(SectionsArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Also list styles that were removed from LAMMPS.
    #[arg(long)]
    pub deprecated: bool,
}

/// Arguments for the `columns` subcommand.
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// The atom_style declaration; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., value_name = "STYLE")]
    pub style: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Column names in on-disk order; arguments containing spaces are split.
    #[arg(required = true, num_args = 1.., value_name = "COLUMN")]
    pub columns: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `sections` subcommand.
#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Fragment names to classify (e.g. "Data Atoms"); lists every known name when omitted.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Toml,
}
