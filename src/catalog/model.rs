//! Catalog model types: `Category`, `SoundRecord` and `Catalog`.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Deserialize;

use crate::error::CatalogError;

/// The closed set of sound categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[serde(rename = "UI", alias = "ui", alias = "Ui")]
    Ui,
    #[serde(alias = "ambience")]
    Ambience,
    #[serde(alias = "game")]
    Game,
    #[serde(alias = "notification")]
    Notification,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Ui,
        Category::Ambience,
        Category::Game,
        Category::Notification,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Ui => "UI",
            Category::Ambience => "Ambience",
            Category::Game => "Game",
            Category::Notification => "Notification",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SoundRecord {
    /// Unique, stable identifier.
    pub id: String,
    /// Asset file name; joined with the base path to build the URL.
    pub filename: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    /// Display-only duration, e.g. `0:02`.
    #[serde(default)]
    pub duration: String,
}

/// The immutable list of sounds plus any per-file URL overrides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sounds: Vec<SoundRecord>,
    url_overrides: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate ids.
    pub fn new(
        sounds: Vec<SoundRecord>,
        url_overrides: HashMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(sounds.len());
        for (pos, sound) in sounds.iter().enumerate() {
            if sound.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(pos));
            }
            if !seen.insert(sound.id.as_str()) {
                return Err(CatalogError::DuplicateId(sound.id.clone()));
            }
        }

        Ok(Self {
            sounds,
            url_overrides,
        })
    }

    pub fn sounds(&self) -> &[SoundRecord] {
        &self.sounds
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&SoundRecord> {
        self.sounds.iter().find(|s| s.id == id)
    }

    /// Absolute URL registered for `filename`, if any.
    pub fn url_override(&self, filename: &str) -> Option<&str> {
        self.url_overrides.get(filename).map(String::as_str)
    }

    /// Drop every URL override, leaving plain base-path resolution.
    pub fn without_overrides(mut self) -> Self {
        self.url_overrides.clear();
        self
    }
}
