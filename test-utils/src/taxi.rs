use std::{io::Result, path::PathBuf};

use crate::asset::resolve_asset_file;

const ASSET: &str = "taxi_v0000";

/// Resolves the path to the taxi bot vocabulary.
pub fn vocab() -> Result<PathBuf> {
    resolve_asset_file(ASSET, "vocab.txt")
}

/// Resolves the path to the taxi bot labels.
pub fn labels() -> Result<PathBuf> {
    resolve_asset_file(ASSET, "labels.txt")
}
