use phf::{Map, Set, phf_map, phf_set};

pub const HYBRID_STYLE: &str = "hybrid";

/// Columns every hybrid style starts from before sub-style columns are merged in.
pub const HYBRID_BASE_COLUMNS: &[&str] = &["atom-ID", "atom-type", "x", "y", "z"];

/// Built-in style names in table order.
#[rustfmt::skip]
pub static STYLE_NAMES: &[&str] = &[
    "angle", "atomic", "body", "bond", "charge", "dipole", "dpd", "electron",
    "ellipsoid", "full", "line", "meso", "molecular", "peri", "smd", "sphere",
    "template", "tri", "wavepacket", "hybrid",
    "colloid", "granular",
];

#[rustfmt::skip]
pub static STYLE_COLUMNS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "angle"      => &["atom-ID", "molecule-ID", "atom-type", "x", "y", "z"],
    "atomic"     => &["atom-ID", "atom-type", "x", "y", "z"],
    "body"       => &["atom-ID", "atom-type", "bodyflag", "mass", "x", "y", "z"],
    "bond"       => &["atom-ID", "molecule-ID", "atom-type", "x", "y", "z"],
    "charge"     => &["atom-ID", "atom-type", "q", "x", "y", "z"],
    "dipole"     => &["atom-ID", "atom-type", "q", "x", "y", "z", "mux", "muy", "muz"],
    "dpd"        => &["atom-ID", "atom-type", "theta", "x", "y", "z"],
    "electron"   => &["atom-ID", "atom-type", "q", "spin", "eradius", "x", "y", "z"],
    "ellipsoid"  => &["atom-ID", "atom-type", "x", "y", "z", "quatw", "quati", "quatj", "quatk"],
    "full"       => &["atom-ID", "molecule-ID", "atom-type", "q", "x", "y", "z"],
    "line"       => &["atom-ID", "molecule-ID", "atom-type", "lineflag", "density", "x", "y", "z"],
    "meso"       => &["atom-ID", "atom-type", "rho", "e", "cv", "x", "y", "z"],
    "molecular"  => &["atom-ID", "molecule-ID", "atom-type", "x", "y", "z"],
    "peri"       => &["atom-ID", "atom-type", "volume", "density", "x", "y", "z"],
    // "molecule-IDvolume" is one column in the historical table and is kept as such.
    "smd"        => &["atom-ID", "atom-type", "molecule-IDvolume", "mass", "kernel-radius", "contact-radius", "x", "y", "z"],
    "sphere"     => &["atom-ID", "atom-type", "diameter", "density", "x", "y", "z"],
    "template"   => &["atom-ID", "molecule-ID", "template-index", "template-atom", "atom-type", "x", "y", "z"],
    "tri"        => &["atom-ID", "molecule-ID", "atom-type", "triangleflag", "density", "x", "y", "z"],
    "wavepacket" => &["atom-ID", "atom-type", "charge", "spin", "eradius", "etag", "cs_re", "cs_im", "x", "y", "z"],
    "hybrid"     => HYBRID_BASE_COLUMNS,

    // Removed from LAMMPS in 2012-03, still accepted in older input scripts.
    "colloid"    => &["atom-ID", "atom-type", "x", "y", "z"],
    "granular"   => &["atom-ID", "atom-type", "diameter", "density", "x", "y", "z"],
};

static DEPRECATED_STYLES: Set<&'static str> = phf_set! { "colloid", "granular" };

pub fn style_columns(style: &str) -> Option<&'static [&'static str]> {
    STYLE_COLUMNS.get(style).copied()
}

pub fn is_known_style(style: &str) -> bool {
    STYLE_COLUMNS.contains_key(style)
}

pub fn is_deprecated_style(style: &str) -> bool {
    DEPRECATED_STYLES.contains(style)
}

pub fn style_names() -> impl Iterator<Item = &'static str> {
    STYLE_NAMES.iter().copied()
}
