use super::model::{Catalog, SoundRecord};

/// Turns a record's file name into a playable/copyable URL.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_path: String,
}

impl AssetResolver {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve `record` to its URL. A catalog override for the file name
    /// wins over `base_path + filename`.
    pub fn url_for(&self, catalog: &Catalog, record: &SoundRecord) -> String {
        if let Some(url) = catalog.url_override(&record.filename) {
            return url.to_string();
        }
        join_base(&self.base_path, &record.filename)
    }
}

fn join_base(base: &str, filename: &str) -> String {
    if base.is_empty() {
        filename.to_string()
    } else if base.ends_with('/') {
        format!("{base}{filename}")
    } else {
        format!("{base}/{filename}")
    }
}
