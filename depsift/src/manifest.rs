//! Parses Cargo manifests and lock files to get the declared package
//! dependencies of a project.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use toml::Value;
use tracing::{debug, warn};

use crate::normalize::normalize_crate_name;

#[derive(Deserialize, Debug)]
struct CargoManifest {
    #[serde(default)]
    dependencies: HashMap<String, Value>,
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: HashMap<String, Value>,
    #[serde(default, rename = "build-dependencies")]
    build_dependencies: HashMap<String, Value>,
}

#[derive(Deserialize, Debug)]
struct CargoLock {
    #[serde(default)]
    package: Vec<LockPackage>,
}

#[derive(Deserialize, Debug)]
struct LockPackage {
    name: String,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// Reads a Cargo.toml file and returns the declared dependency names.
///
/// The name a dependency is declared under is the identifier source code
/// imports it by, so the table keys are what matters here. That holds for
/// every entry shape: bare version strings, tables with features,
/// `workspace = true` entries and `package = "..."` renames.
pub fn get_dependencies_from_manifest(
    manifest_path: &Path,
    with_dev_deps: bool,
) -> Result<HashSet<String>> {
    let content = fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let manifest: CargoManifest = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    let mut dependencies: HashSet<String> = manifest.dependencies.keys().cloned().collect();
    if with_dev_deps {
        dependencies.extend(manifest.dev_dependencies.keys().cloned());
        dependencies.extend(manifest.build_dependencies.keys().cloned());
    }

    Ok(dependencies)
}

/// Checks the lock file for declared dependencies that other declared
/// dependencies pull in on their own. Returns a map keyed by the pulling
/// package, for example:
/// ```ignore
/// {
///     "axum": ["serde", "serde_json"],
/// }
/// ```
/// The lock file is searched from the project directory upwards, so a
/// workspace member resolves to the lock file at the workspace root.
pub fn check_lock_for_shared_deps(
    project_path: &Path,
    manifest_crates: &HashSet<String>,
) -> Result<HashMap<String, Vec<String>>> {
    let Some(lock_path) = find_lock_file(project_path) else {
        warn!("project has no Cargo.lock file, skipping the shared dependency check");
        return Ok(HashMap::new());
    };

    let content = fs::read_to_string(&lock_path)
        .with_context(|| format!("failed to read {}", lock_path.display()))?;
    let lock: CargoLock = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", lock_path.display()))?;

    let declared: HashSet<String> = manifest_crates
        .iter()
        .map(|name| normalize_crate_name(name))
        .collect();

    let mut shared: HashMap<String, Vec<String>> = HashMap::new();
    for package in &lock.package {
        let parent = normalize_crate_name(&package.name);
        if !declared.contains(&parent) {
            continue;
        }
        for dependency in &package.dependencies {
            // A lock entry reads "name", or "name x.y.z" when several
            // versions of the package coexist.
            let Some(name) = dependency.split_whitespace().next() else {
                continue;
            };
            let child = normalize_crate_name(name);
            if declared.contains(&child) {
                debug!("found {child} - it is pulled in by {parent}");
                shared.entry(parent.clone()).or_default().push(child);
            }
        }
    }

    Ok(shared)
}

fn find_lock_file(project_path: &Path) -> Option<PathBuf> {
    let start = project_path
        .canonicalize()
        .unwrap_or_else(|_| project_path.to_path_buf());
    for dir in start.ancestors() {
        let candidate = dir.join("Cargo.lock");
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}
