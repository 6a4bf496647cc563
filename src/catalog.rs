//! Sound catalog: record types, the built-in library, catalog files and
//! asset URL resolution.
//!
//! The catalog is loaded once at startup and never mutated afterwards.

mod builtin;
mod load;
mod model;
mod resolve;

pub use builtin::builtin_catalog;
pub use load::load_catalog_file;
pub use model::*;
pub use resolve::AssetResolver;

#[cfg(test)]
mod tests;
