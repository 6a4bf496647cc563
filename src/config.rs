//! Configuration loader and schema types.
//!
//! This module exposes the settings schema (catalog location, notification
//! timing, audio, UI and logging) and helpers to load it from disk and the
//! environment.

mod load;
mod schema;

pub use schema::*;
