//! # Item Sources
//!
//! Collections reach the engine through the [`ItemSource`] trait, so the
//! command layer never cares where the JSON came from.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads `projects.json` and `timeline.json` from disk.
//!   Paths default to the data directory and can be overridden per kind.
//! - [`memory::InMemorySource`]: raw JSON documents held in memory, for tests.
//!
//! A source only fetches and parses. Turning a failed load into an empty
//! collection is the caller's job (see `commands::helpers::load_collection`).

use crate::error::Result;
use crate::model::{CollectionKind, Item};

pub mod fs;
pub mod memory;

pub trait ItemSource {
    /// Load and parse the collection of the given kind.
    fn load(&self, kind: CollectionKind) -> Result<Vec<Item>>;

    /// Human-readable location of the collection, for messages.
    fn describe(&self, kind: CollectionKind) -> String;
}
