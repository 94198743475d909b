use std::path::PathBuf;

/// Settings for a single scan, resolved from the command line.
#[derive(Debug)]
pub struct Config {
    pub project_path: PathBuf,
    pub manifest_path: PathBuf,
    pub dev: bool,
    pub timer: bool,
}

impl Config {
    pub fn new(project_path: PathBuf, dev: bool, timer: bool) -> Self {
        let manifest_path = project_path.join("Cargo.toml");
        Self {
            project_path,
            manifest_path,
            dev,
            timer,
        }
    }
}
