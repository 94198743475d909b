use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::Result;

use crate::config::Config;
use crate::imports::get_imports_from_src;
use crate::manifest::{check_lock_for_shared_deps, get_dependencies_from_manifest};
use crate::normalize::normalize_crate_name;

/// A scanned Cargo project: what the manifest declares, what the lock file
/// shares between declared packages and what the sources import.
pub struct CargoProject {
    manifest_crates: HashSet<String>,
    shared_deps: HashMap<String, Vec<String>>,
    source_imports: HashSet<String>,
}

impl CargoProject {
    pub fn new(config: &Config) -> Result<Self> {
        let manifest_crates = get_dependencies_from_manifest(&config.manifest_path, config.dev)?;
        let shared_deps = check_lock_for_shared_deps(&config.project_path, &manifest_crates)?;
        let source_imports = get_imports_from_src(&config.project_path)?;

        Ok(Self {
            manifest_crates,
            shared_deps,
            source_imports,
        })
    }

    /// Returns the declared dependencies the source tree never imports,
    /// sorted for stable reporting.
    pub fn unused_crates(&self) -> BTreeSet<String> {
        let unused = self.find_unused_manifest_crates();
        self.filter_shared_deps(unused).into_iter().collect()
    }

    fn find_unused_manifest_crates(&self) -> HashSet<String> {
        let declared: HashSet<String> = self
            .manifest_crates
            .iter()
            .map(|name| normalize_crate_name(name))
            .collect();

        declared
            .difference(&self.source_imports)
            .cloned()
            .collect()
    }

    fn filter_shared_deps(&self, unused: HashSet<String>) -> HashSet<String> {
        let mut result = unused.clone();

        // A candidate that a used dependency pulls in anyway stays in the
        // build whatever the manifest says, so it is not worth reporting.
        for (parent, children) in self.shared_deps.iter() {
            for child in children.iter() {
                if !unused.contains(parent) && unused.contains(child) {
                    result.remove(child);
                }
            }
        }

        // When the pulling package is itself unused, the candidate is
        // reported annotated with what else would have to go.
        for (parent, children) in self.shared_deps.iter() {
            for child in children.iter() {
                if unused.contains(parent) && unused.contains(child) {
                    result.remove(child);
                    let annotated = format!("{child} - also a dependency of {parent}");
                    result.insert(annotated);
                }
            }
        }

        result
    }
}
