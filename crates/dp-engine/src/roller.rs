//! Interactive dice roller state.
//!
//! `DiceRoller` holds the live configuration a user edits, the last outcome,
//! and the odds for the current configuration. The odds are refreshed on
//! every change so they always describe what the next roll will use.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::analysis::{AnalyticSummary, analyze};
use crate::config::RollerConfig;
use crate::dice::{
    RollConfiguration, RollOutcome, clamp_again, clamp_pool_size, simulate_pool,
    simulate_willpower,
};
use crate::error::EngineResult;

/// A dice roller session.
pub struct DiceRoller {
    config: RollConfiguration,
    exploding_preference: bool,
    outcome: RollOutcome,
    summary: AnalyticSummary,
    rng: StdRng,
}

impl DiceRoller {
    /// Create a roller from a configuration.
    pub fn new(config: RollerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let initial = config.initial.clamped();
        let mut roller = Self {
            config: initial,
            exploding_preference: initial.exploding_enabled,
            outcome: RollOutcome::default(),
            summary: analyze(initial.pool_size, &initial),
            rng,
        };
        if initial.is_chance_die() {
            roller.config.exploding_enabled = false;
            roller.refresh();
        }
        roller
    }

    /// Get the current configuration.
    pub fn configuration(&self) -> &RollConfiguration {
        &self.config
    }

    /// Get the last outcome.
    pub fn outcome(&self) -> &RollOutcome {
        &self.outcome
    }

    /// Get the odds for the current configuration.
    pub fn summary(&self) -> &AnalyticSummary {
        &self.summary
    }

    /// Returns true if the next roll is a chance die.
    pub fn is_chance_die(&self) -> bool {
        self.config.is_chance_die()
    }

    /// Set the pool size from raw input (clamped to zero or more).
    ///
    /// Dropping to zero turns exploding off; leaving zero puts back whatever
    /// the user had chosen before.
    pub fn set_pool_size(&mut self, value: i64) {
        let pool_size = clamp_pool_size(value);
        let was_chance = self.config.is_chance_die();
        self.config.pool_size = pool_size;

        if pool_size == 0 {
            if !was_chance {
                self.exploding_preference = self.config.exploding_enabled;
            }
            self.config.exploding_enabled = false;
        } else if was_chance {
            self.config.exploding_enabled = self.exploding_preference;
        }
        self.refresh();
    }

    /// Set the again threshold from raw input (clamped to 5-10).
    pub fn set_again_threshold(&mut self, value: i64) {
        self.config.again_threshold = clamp_again(value);
        self.refresh();
    }

    /// Enable or disable rote.
    pub fn set_rote(&mut self, rote: bool) {
        self.config.rote = rote;
        self.refresh();
    }

    /// Enable or disable the again rule.
    ///
    /// While a chance die is active this only changes the preference that is
    /// restored when the pool grows again.
    pub fn set_exploding(&mut self, enabled: bool) {
        self.exploding_preference = enabled;
        if !self.config.is_chance_die() {
            self.config.exploding_enabled = enabled;
        }
        self.refresh();
    }

    /// Replace every setting at once, e.g. when loading a preset.
    pub fn apply(&mut self, config: RollConfiguration) {
        self.config.again_threshold = clamp_again(i64::from(config.again_threshold));
        self.config.rote = config.rote;
        self.set_exploding(config.exploding_enabled);
        self.set_pool_size(i64::from(config.pool_size));
    }

    /// Roll the pool, replacing the previous outcome.
    pub fn roll(&mut self) -> EngineResult<&RollOutcome> {
        let successes = simulate_pool(self.config.pool_size, &self.config, &mut self.rng)?;
        self.outcome = RollOutcome::primary(successes);
        debug!(outcome = %self.outcome, "roll");
        Ok(&self.outcome)
    }

    /// Roll the willpower bonus and add it to the current outcome.
    pub fn willpower(&mut self) -> EngineResult<&RollOutcome> {
        let bonus = simulate_willpower(&self.config, &mut self.rng)?;
        self.outcome.add_willpower(bonus);
        debug!(bonus, outcome = %self.outcome, "willpower");
        Ok(&self.outcome)
    }

    /// Clear the current outcome.
    pub fn clear(&mut self) {
        self.outcome.clear();
    }

    fn refresh(&mut self) {
        self.summary = analyze(self.config.pool_size, &self.config);
        debug!(config = %self.config, summary = %self.summary, "configuration changed");
    }
}
