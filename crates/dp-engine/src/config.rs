//! Configuration for an interactive dice roller.

use serde::{Deserialize, Serialize};

use crate::dice::{RollConfiguration, clamp_again};
use crate::error::{EngineError, EngineResult};

/// Configuration for a [`DiceRoller`](crate::roller::DiceRoller).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// The rules the roller starts with.
    pub initial: RollConfiguration,
}

impl RollerConfig {
    /// Parse a roller configuration from JSON.
    ///
    /// Missing fields take their defaults. An again threshold outside 5-10 is
    /// rejected rather than clamped, since it came from a file, not a control.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        let again = config.initial.again_threshold;
        if config.initial.clamped().again_threshold != again {
            return Err(EngineError::InvalidConfig(format!(
                "again threshold {again} is outside 5-10"
            )));
        }
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting pool size.
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.initial.pool_size = pool_size;
        self
    }

    /// Set the starting again threshold (clamped to 5-10).
    pub fn with_again_threshold(mut self, again: u32) -> Self {
        self.initial.again_threshold = clamp_again(i64::from(again));
        self
    }

    /// Enable or disable the again rule.
    pub fn with_exploding(mut self, enabled: bool) -> Self {
        self.initial.exploding_enabled = enabled;
        self
    }

    /// Enable or disable rote.
    pub fn with_rote(mut self, rote: bool) -> Self {
        self.initial.rote = rote;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RollerConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.initial, RollConfiguration::default());
    }

    #[test]
    fn builder_methods() {
        let cfg = RollerConfig::default()
            .with_seed(123)
            .with_pool_size(5)
            .with_again_threshold(9)
            .with_exploding(false)
            .with_rote(true);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.initial.pool_size, 5);
        assert_eq!(cfg.initial.again_threshold, 9);
        assert!(!cfg.initial.exploding_enabled);
        assert!(cfg.initial.rote);
    }

    #[test]
    fn again_clamped() {
        let cfg = RollerConfig::default().with_again_threshold(0);
        assert_eq!(cfg.initial.again_threshold, 5);
        let cfg = RollerConfig::default().with_again_threshold(99);
        assert_eq!(cfg.initial.again_threshold, 10);
    }

    #[test]
    fn from_json_partial() {
        let cfg = RollerConfig::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.initial, RollConfiguration::default());

        let cfg = RollerConfig::from_json(
            r#"{"initial": {"pool_size": 4, "again_threshold": 8, "exploding_enabled": true, "rote": true}}"#,
        )
        .unwrap();
        assert_eq!(cfg.initial.pool_size, 4);
        assert_eq!(cfg.initial.again_threshold, 8);
        assert!(cfg.initial.rote);
    }

    #[test]
    fn from_json_rejects_bad_again() {
        let err = RollerConfig::from_json(
            r#"{"initial": {"pool_size": 4, "again_threshold": 2, "exploding_enabled": true, "rote": false}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn from_json_malformed() {
        let err = RollerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
