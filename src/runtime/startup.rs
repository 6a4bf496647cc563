use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{Catalog, builtin_catalog, load_catalog_file};
use crate::config::CatalogSettings;

/// Load the catalog at `path`, or the built-in one when there is no path or
/// the file cannot be used.
pub fn load_catalog(path: Option<&Path>, settings: &CatalogSettings) -> Catalog {
    let Some(path) = path else {
        info!(demo_urls = settings.use_demo_urls, "using built-in catalog");
        return builtin_catalog(settings.use_demo_urls);
    };

    match load_catalog_file(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                warn!(path = %path.display(), "catalog file lists no sounds");
            } else {
                info!(path = %path.display(), sounds = catalog.len(), "catalog loaded");
            }
            catalog
        }
        Err(e) => {
            warn!(error = %e, "falling back to built-in catalog");
            builtin_catalog(settings.use_demo_urls)
        }
    }
}
