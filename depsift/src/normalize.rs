//! Normalization used to line up manifest package names with the
//! identifiers import statements use.

/// Package names may carry dashes in Cargo.toml but are always referenced
/// with underscores in source paths, so `-` becomes `_` before comparing.
pub fn normalize_crate_name(name: &str) -> String {
    name.replace('-', "_")
}
