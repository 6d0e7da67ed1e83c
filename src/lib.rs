//! Feelio — local-first journal storage and query engine.
//!
//! Entries are plain dated records with optional mood, an immutable weather
//! snapshot captured at write time, attached images and tags derived from the
//! content. Everything lives in a single SQLite database; analytics and export
//! are pure consumers of the store's query results.

pub mod analytics;
pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod reminder;
pub mod tags;
