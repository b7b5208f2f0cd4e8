use std::{
    env::var_os,
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

/// The directory of the data assets below the workspace directory.
const DATA_DIR: &str = "data";

/// Gets the workspace directory, which is the parent of the calling crate's manifest directory.
fn workspace_dir() -> Result<PathBuf> {
    let manifest = var_os("CARGO_MANIFEST_DIR")
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing CARGO_MANIFEST_DIR"))?;
    Path::new(&manifest)
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing cargo workspace dir"))
}

/// Resolves the path to a file of a versioned data asset.
///
/// Fails if the file doesn't exist.
pub fn resolve_asset_file(asset: &str, file: &str) -> Result<PathBuf> {
    workspace_dir()?
        .join(DATA_DIR)
        .join(asset)
        .join(file)
        .canonicalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_file() {
        assert_eq!(
            resolve_asset_file("taxi_v0000", "missing.txt")
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound,
        );
    }
}
