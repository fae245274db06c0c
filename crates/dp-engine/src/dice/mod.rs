//! d10 success-counting dice: rule configuration, pool simulation, outcomes.
//!
//! Every die is a d10. A face of 8 or more is a success. Optional rules:
//! - **Again** (exploding): a success at or above the again threshold grants
//!   a bonus die, which can itself explode.
//! - **Rote**: a die whose first draw fails is rerolled once.
//! - **Chance die**: a pool of zero rolls a single die where only a 10 counts.

pub mod pool;
pub mod roll;

pub use pool::{simulate_pool, simulate_willpower};
pub use roll::RollOutcome;

use serde::{Deserialize, Serialize};

/// Number of faces on every die in the pool.
pub const DICE_SIDES: u32 = 10;

/// Lowest face that counts as a success in normal mode.
pub const SUCCESS_THRESHOLD: u32 = 8;

/// The only face that counts as a success on a chance die.
pub const CHANCE_SUCCESS: u32 = 10;

/// Number of dice in a willpower bonus roll.
pub const WILLPOWER_DICE: u32 = 3;

/// Lowest again threshold a caller may configure.
pub const MIN_AGAIN: u32 = 5;

/// Highest again threshold a caller may configure.
pub const MAX_AGAIN: u32 = 10;

/// Upper bound on draws for a single die before the chain is treated as runaway.
pub const MAX_CHAIN: u32 = 10_000;

/// The rules for one roll of a dice pool.
///
/// The again threshold is expected to lie in `MIN_AGAIN..=MAX_AGAIN`;
/// [`RollConfiguration::clamped`] enforces that for callers taking raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollConfiguration {
    /// Number of dice rolled. Zero means a chance die.
    pub pool_size: u32,
    /// A success at or above this face explodes.
    pub again_threshold: u32,
    /// Whether the again rule is in effect.
    pub exploding_enabled: bool,
    /// Whether a failed die gets one reroll.
    pub rote: bool,
}

impl Default for RollConfiguration {
    fn default() -> Self {
        Self {
            pool_size: 8,
            again_threshold: 10,
            exploding_enabled: true,
            rote: false,
        }
    }
}

impl RollConfiguration {
    /// Returns true if this configuration rolls a chance die.
    pub fn is_chance_die(&self) -> bool {
        self.pool_size == 0
    }

    /// Returns true if successes can explode under this configuration.
    pub fn explodes(&self) -> bool {
        self.exploding_enabled && !self.is_chance_die()
    }

    /// Copy of this configuration with the again threshold clamped to 5-10.
    pub fn clamped(self) -> Self {
        Self {
            again_threshold: clamp_again(i64::from(self.again_threshold)),
            ..self
        }
    }
}

/// Clamp raw user input for a pool size to zero or more.
pub fn clamp_pool_size(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Clamp raw user input for an again threshold to 5-10.
pub fn clamp_again(value: i64) -> u32 {
    // The clamp keeps the value inside u32 range.
    value.clamp(i64::from(MIN_AGAIN), i64::from(MAX_AGAIN)) as u32
}

impl std::fmt::Display for RollConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_chance_die() {
            return write!(f, "chance die");
        }
        write!(f, "{}d10", self.pool_size)?;
        if self.exploding_enabled {
            write!(f, ", {}-again", self.again_threshold)?;
        }
        if self.rote {
            write!(f, ", rote")?;
        }
        Ok(())
    }
}
