//! # atomstyles
//!
//! Column-name resolution for LAMMPS data files. A LAMMPS `atom_style` decides
//! which per-atom quantities appear on each line of the `Atoms` section and in
//! which order; this library turns a style declaration into that column list and
//! locates the columns a data-file writer has to treat specially.
//!
//! ## Layout
//!
//! - **[`styles`]: The Resolver.** The built-in style table and the pure functions
//!   over it: style declaration to columns ([`styles::style_to_columns`]), and
//!   columns to role indices ([`styles::column_roles`]), position triplets
//!   ([`styles::coordinate_groups`]) and orientation triplets
//!   ([`styles::vector_groups`]).
//!
//! - **[`layout`]: The Bundle.** [`ColumnLayout`] runs all of the above once and
//!   keeps the results together.
//!
//! - **[`registry`]: User Styles.** [`StyleRegistry`] layers named styles loaded
//!   from TOML on top of the built-in table.
//!
//! - **[`sections`]: Fragment Names.** The fixed names of the data-file and
//!   input-script fragments (`Data Atoms`, `In Settings`, ...).
//!
//! Nothing here reads or writes data files or moves atoms; callers use the
//! indices to drive their own writers and transforms.
//!
//! ```
//! use atomstyles::styles::style_to_columns;
//!
//! let columns = style_to_columns("hybrid full charge").unwrap();
//! assert_eq!(columns, ["atom-ID", "atom-type", "x", "y", "z", "molecule-ID", "q"]);
//! ```

pub mod layout;
pub mod registry;
pub mod sections;
pub mod styles;

pub use layout::ColumnLayout;
pub use registry::{RegistryError, StyleRegistry};
pub use styles::{ColumnRole, RoleIndices, StyleError, Triplet};
