//! Domain models for the Feelio journal.
//!
//! # Core Concepts
//!
//! - [`DiaryEntry`]: the sole persisted entity — one dated journal record.
//! - [`CreatedAt`]: the capture instant, decomposed once at creation and
//!   never recomputed afterwards.
//! - [`Mood`]: a fixed five-marker scale the user can attach to an entry.
//! - [`WeatherSnapshot`]: ambient conditions captured at write time;
//!   set once, never edited.
//!
//! Tags are not a model of their own: they are derived from the content on
//! every write (see [`crate::tags`]) and stored alongside the entry.

mod entry;
mod mood;
mod weather;

pub use entry::*;
pub use mood::*;
pub use weather::*;
