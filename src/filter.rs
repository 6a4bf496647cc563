//! Search and category filtering over the catalog.
//!
//! Filtering is a pure function of `(sounds, query, category)`; callers
//! recompute it whenever either input changes.

use crate::catalog::{Category, SoundRecord};

/// Category selector: everything, or a single category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// All selectable options in bar order: `All` followed by each category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    /// The option after `self`, wrapping around.
    pub fn next(self) -> Self {
        let opts: Vec<CategoryFilter> = Self::options().collect();
        let pos = opts.iter().position(|&o| o == self).unwrap_or(0);
        opts[(pos + 1) % opts.len()]
    }

    /// The option before `self`, wrapping around.
    pub fn prev(self) -> Self {
        let opts: Vec<CategoryFilter> = Self::options().collect();
        let pos = opts.iter().position(|&o| o == self).unwrap_or(0);
        opts[(pos + opts.len() - 1) % opts.len()]
    }
}

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: CategoryFilter,
}

impl FilterState {
    /// Restore `query = ""` and `category = All`.
    pub fn reset(&mut self) {
        self.search_query.clear();
        self.selected_category = CategoryFilter::All;
    }

    pub fn is_default(&self) -> bool {
        self.search_query.is_empty() && self.selected_category == CategoryFilter::All
    }
}

/// Case-insensitive substring match on title, description or filename.
/// `query_lower` must already be lowercase.
fn matches_query(sound: &SoundRecord, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    sound.title.to_lowercase().contains(query_lower)
        || sound.description.to_lowercase().contains(query_lower)
        || sound.filename.to_lowercase().contains(query_lower)
}

/// Records matching both `query` and `category`, paired with their
/// position in `sounds`, in catalog order.
pub fn filter<'a>(
    sounds: &'a [SoundRecord],
    query: &str,
    category: CategoryFilter,
) -> impl Iterator<Item = (usize, &'a SoundRecord)> {
    let query_lower = query.to_lowercase();
    sounds
        .iter()
        .enumerate()
        .filter(move |(_, s)| category.matches(s.category) && matches_query(s, &query_lower))
}
