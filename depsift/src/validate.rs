use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Invalid path provided")]
    InvalidPath,
    #[error("Unable to find a Cargo.toml file")]
    MissingManifest,
}

/// Validates the path provided by the user:
/// - the path exists
/// - the path contains a Cargo.toml file
pub fn valid_project_path(path: &Path) -> Result<PathBuf, PathError> {
    if fs::metadata(path).is_err() {
        return Err(PathError::InvalidPath);
    }
    if fs::metadata(path.join("Cargo.toml")).is_err() {
        return Err(PathError::MissingManifest);
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod test {
    use super::{PathError, valid_project_path};

    #[test]
    fn rejects_a_path_that_does_not_exist() {
        let result = valid_project_path("no/such/path".as_ref());
        assert!(matches!(result, Err(PathError::InvalidPath)));
    }

    #[test]
    fn rejects_a_directory_without_a_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let result = valid_project_path(dir.path());
        assert!(matches!(result, Err(PathError::MissingManifest)));
    }

    #[test]
    fn accepts_a_cargo_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();
        let result = valid_project_path(dir.path());
        assert_eq!(result.unwrap(), dir.path());
    }
}
