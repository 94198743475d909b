//! Scans a Cargo project for dependencies declared in its manifest that no
//! source file ever imports.

pub mod config;
pub mod imports;
pub mod manifest;
pub mod normalize;
pub mod project;
pub mod validate;

use std::time::Instant;

use anyhow::Result;

use crate::config::Config;
use crate::project::CargoProject;

/// Scans the project described by `config` and prints the report to stdout.
pub fn run(config: Config) -> Result<()> {
    let started = Instant::now();

    let project = CargoProject::new(&config)?;
    let unused = project.unused_crates();

    let shown = config.project_path.display();
    if unused.is_empty() {
        println!("No unused dependencies found in {shown}");
    } else {
        println!("Unused dependencies in {shown}:");
        for name in &unused {
            println!("  {name}");
        }
    }

    if config.timer {
        println!("Finished in {:.2?}", started.elapsed());
    }

    Ok(())
}
