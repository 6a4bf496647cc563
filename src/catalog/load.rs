use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

use super::model::{Catalog, SoundRecord};

/// On-disk catalog layout.
///
/// ```toml
/// [[sounds]]
/// id = "1"
/// filename = "bell.mp3"
/// title = "Bell"
/// category = "UI"
/// description = "..."
/// duration = "0:02"
///
/// [urls]
/// "bell.mp3" = "https://cdn.example.com/bell.mp3"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sounds: Vec<SoundRecord>,
    #[serde(default)]
    urls: HashMap<String, String>,
}

/// Load and validate a TOML catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file: CatalogFile = toml::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Catalog::new(file.sounds, file.urls)
}
