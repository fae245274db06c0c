//! Named roll presets for the dice pool engine.
//!
//! Presets pair a display name with a [`RollConfiguration`](dp_engine::RollConfiguration).
//! A [`PresetLibrary`] keeps them in order and persists them as one JSON
//! array in a [`KeyValueStore`]; [`ActivePreset`] tracks which preset the
//! current settings were loaded from.

pub mod active;
pub mod error;
pub mod library;
pub mod preset;
pub mod store;

pub use active::ActivePreset;
pub use error::{PresetError, PresetResult};
pub use library::{PRESETS_KEY, PresetLibrary};
pub use preset::{Preset, PresetDraft, PresetUpdate};
pub use store::{FileStore, KeyValueStore, MemoryStore};
