//! Tracking which preset the current settings came from.

use dp_engine::RollConfiguration;

use crate::preset::Preset;

/// The preset most recently loaded, until the settings drift away from it.
#[derive(Debug, Clone, Default)]
pub struct ActivePreset {
    id: Option<String>,
    loaded: Option<RollConfiguration>,
}

impl ActivePreset {
    /// Create a tracker with nothing active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id of the active preset, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Mark `preset` as active and return its settings for the roller to apply.
    ///
    /// A chance-die preset is remembered with exploding off, since that is
    /// what the roller holds once it has applied it.
    pub fn load(&mut self, preset: &Preset) -> RollConfiguration {
        let mut loaded = preset.settings;
        if loaded.is_chance_die() {
            loaded.exploding_enabled = false;
        }
        self.id = Some(preset.id.clone());
        self.loaded = Some(loaded);
        preset.settings
    }

    /// Compare the live settings against the loaded preset.
    ///
    /// Any difference deactivates the preset. Returns whether a preset is
    /// still active.
    pub fn observe(&mut self, current: &RollConfiguration) -> bool {
        if self.loaded.is_some_and(|loaded| loaded != *current) {
            self.id = None;
        }
        self.id.is_some()
    }

    /// Deactivate without loading anything.
    pub fn clear(&mut self) {
        self.id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_engine::{DiceRoller, RollerConfig};

    fn preset() -> Preset {
        Preset {
            id: "p1".to_string(),
            name: "Brawl".to_string(),
            settings: RollConfiguration {
                pool_size: 6,
                again_threshold: 9,
                exploding_enabled: true,
                rote: false,
            },
        }
    }

    #[test]
    fn nothing_active_by_default() {
        let mut active = ActivePreset::new();
        assert_eq!(active.id(), None);
        assert!(!active.observe(&RollConfiguration::default()));
    }

    #[test]
    fn load_then_matching_settings_stay_active() {
        let mut active = ActivePreset::new();
        let settings = active.load(&preset());
        assert_eq!(active.id(), Some("p1"));
        assert!(active.observe(&settings));
    }

    #[test]
    fn drifting_settings_deactivate() {
        let mut active = ActivePreset::new();
        let mut settings = active.load(&preset());
        settings.rote = true;
        assert!(!active.observe(&settings));
        assert_eq!(active.id(), None);

        // Going back does not reactivate.
        settings.rote = false;
        assert!(!active.observe(&settings));
    }

    #[test]
    fn clear_deactivates() {
        let mut active = ActivePreset::new();
        active.load(&preset());
        active.clear();
        assert_eq!(active.id(), None);
    }

    #[test]
    fn loaded_into_roller() {
        let mut roller = DiceRoller::new(RollerConfig::default().with_seed(5));
        let mut active = ActivePreset::new();
        roller.apply(active.load(&preset()));
        assert!(active.observe(roller.configuration()));

        roller.set_pool_size(7);
        assert!(!active.observe(roller.configuration()));
    }

    #[test]
    fn chance_die_preset_stays_active_in_roller() {
        let chance = Preset {
            id: "p2".to_string(),
            name: "Desperate".to_string(),
            settings: RollConfiguration {
                pool_size: 0,
                again_threshold: 10,
                exploding_enabled: true,
                rote: false,
            },
        };
        let mut roller = DiceRoller::new(RollerConfig::default().with_seed(5));
        let mut active = ActivePreset::new();
        roller.apply(active.load(&chance));
        assert!(!roller.configuration().exploding_enabled);
        assert!(active.observe(roller.configuration()));
        assert_eq!(active.id(), Some("p2"));

        // Leaving the chance die restores exploding, which no longer matches.
        roller.set_pool_size(3);
        assert!(roller.configuration().exploding_enabled);
        assert!(!active.observe(roller.configuration()));
    }
}
