use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

const EXCLUDED_DIRS: [&str; 2] = ["target", ".git"];

static USE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+(?:::)?([A-Za-z_][A-Za-z0-9_]*)")
        .expect("use statement regex")
});
static EXTERN_CRATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"extern\s+crate\s+([A-Za-z_][A-Za-z0-9_]*)").expect("extern crate regex"));

/// Recursively walks the path provided, reads every .rs file and returns
/// the set of crate roots referenced by import statements.
pub fn get_imports_from_src(project_path: &Path) -> Result<HashSet<String>> {
    let mut imports = HashSet::new();

    let walker = WalkDir::new(project_path)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry));
    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            collect_imports(&source, &mut imports);
            debug!("scanned {}", path.display());
        }
    }

    Ok(imports)
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    EXCLUDED_DIRS.contains(&name.as_ref()) || name.starts_with('.')
}

/// Collects the path roots of `use` and `extern crate` statements in a
/// single source file, dropping roots that point into the crate itself or
/// into the standard distribution. Roots naming local modules are kept;
/// they never match a manifest entry.
fn collect_imports(source: &str, imports: &mut HashSet<String>) {
    let roots = USE_RE
        .captures_iter(source)
        .chain(EXTERN_CRATE_RE.captures_iter(source))
        .filter_map(|captures| captures.get(1));
    for root in roots {
        let root = root.as_str();
        if !is_language_root(root) {
            imports.insert(root.to_string());
        }
    }
}

const LANGUAGE_ROOTS: [&str; 8] = [
    "std",
    "core",
    "alloc",
    "crate",
    "self",
    "super",
    "proc_macro",
    "test",
];

/// Checks if a path root refers to the language distribution rather than a
/// dependency.
fn is_language_root(root: &str) -> bool {
    LANGUAGE_ROOTS.contains(&root)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::{collect_imports, is_language_root};

    fn imports_of(source: &str) -> HashSet<String> {
        let mut imports = HashSet::new();
        collect_imports(source, &mut imports);
        imports
    }

    #[test]
    fn collects_use_statement_roots() {
        let source = r#"
use axum::{Json, Router};
pub use tower_http::trace::TraceLayer;
pub(crate) use serde::Serialize;

fn handler() {
    use serde_json::json;
    let _ = json!({});
}
"#;
        let imports = imports_of(source);
        for expected in ["axum", "tower_http", "serde", "serde_json"] {
            assert!(imports.contains(expected), "missing {expected}");
        }
        assert_eq!(imports.len(), 4);
    }

    #[test]
    fn collects_extern_crate_roots() {
        let imports = imports_of("#[macro_use]\nextern crate tracing;\nextern crate toml;\n");
        assert!(imports.contains("tracing"));
        assert!(imports.contains("toml"));
    }

    #[test]
    fn drops_language_roots() {
        let source = "use std::collections::HashMap;\nuse crate::config::Config;\nuse super::*;\n";
        assert!(imports_of(source).is_empty());
    }

    #[test]
    fn resolves_leading_double_colon_paths() {
        let imports = imports_of("use ::anyhow::Result;\n");
        assert!(imports.contains("anyhow"));
    }

    #[test]
    fn ignores_commented_out_imports() {
        let imports = imports_of("// use chrono::Utc;\n");
        assert!(imports.is_empty());
    }

    #[test]
    fn knows_the_language_roots() {
        assert!(is_language_root("std"));
        assert!(is_language_root("core"));
        assert!(is_language_root("crate"));
        assert!(!is_language_root("serde"));
    }
}
