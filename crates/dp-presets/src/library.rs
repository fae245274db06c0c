//! The ordered preset list and its persistence.

use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::error::{PresetError, PresetResult};
use crate::preset::{Preset, PresetDraft, PresetUpdate, escape_name};
use crate::store::KeyValueStore;

/// Store key holding the JSON array of presets.
pub const PRESETS_KEY: &str = "diceRollerPresets";

/// An ordered list of presets backed by a key/value store.
///
/// Every mutation rewrites the whole list under [`PRESETS_KEY`]. If the write
/// fails the in-memory list keeps the change and the error is returned.
#[derive(Debug)]
pub struct PresetLibrary<S: KeyValueStore> {
    store: S,
    presets: Vec<Preset>,
}

impl<S: KeyValueStore> PresetLibrary<S> {
    /// Load presets from `store`.
    ///
    /// Unreadable, malformed or invalid data is dropped from the store and the
    /// library starts empty.
    pub fn load(mut store: S) -> Self {
        let presets = match store.get(PRESETS_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match parse(&raw) {
                Ok(presets) => presets,
                Err(e) => {
                    warn!(error = %e, "ignoring invalid preset data");
                    discard(&mut store);
                    Vec::new()
                }
            },
            Err(e) => {
                error!(error = %e, "failed to read presets");
                discard(&mut store);
                Vec::new()
            }
        };
        debug!(count = presets.len(), "loaded presets");
        Self { store, presets }
    }

    /// All presets in display order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Find a preset by id.
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether there are no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a new preset at the end of the list and return it.
    pub fn add(&mut self, draft: PresetDraft) -> PresetResult<Preset> {
        let preset = Preset {
            id: Uuid::new_v4().to_string(),
            name: escape_name(&draft.name),
            settings: draft.settings.clamped(),
        };
        debug!(id = %preset.id, name = %preset.name, "adding preset");
        self.presets.push(preset.clone());
        self.save()?;
        Ok(preset)
    }

    /// Apply a partial update to the preset with `id`.
    pub fn update(&mut self, id: &str, update: PresetUpdate) -> PresetResult<()> {
        let preset = self
            .presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PresetError::NotFound(id.to_string()))?;
        if let Some(name) = update.name {
            preset.name = escape_name(&name);
        }
        if let Some(settings) = update.settings {
            preset.settings = settings.clamped();
        }
        debug!(id, "updated preset");
        self.save()
    }

    /// Remove the preset with `id` and return it.
    pub fn delete(&mut self, id: &str) -> PresetResult<Preset> {
        let index = self
            .presets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PresetError::NotFound(id.to_string()))?;
        let removed = self.presets.remove(index);
        debug!(id, "deleted preset");
        self.save()?;
        Ok(removed)
    }

    /// Move the preset at `from` so it ends up at position `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> PresetResult<()> {
        let len = self.presets.len();
        for index in [from, to] {
            if index >= len {
                return Err(PresetError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let preset = self.presets.remove(from);
        self.presets.insert(to, preset);
        debug!(from, to, "reordered presets");
        self.save()
    }

    fn save(&mut self) -> PresetResult<()> {
        let json = serde_json::to_string(&self.presets)?;
        self.store.set(PRESETS_KEY, &json).inspect_err(|e| {
            error!(error = %e, "failed to save presets");
        })
    }
}

fn parse(raw: &str) -> PresetResult<Vec<Preset>> {
    let presets: Vec<Preset> = serde_json::from_str(raw)?;
    for preset in &presets {
        preset.validate()?;
    }
    Ok(presets)
}

fn discard(store: &mut impl KeyValueStore) {
    if let Err(e) = store.remove(PRESETS_KEY) {
        error!(error = %e, "failed to clear preset data");
    }
}
