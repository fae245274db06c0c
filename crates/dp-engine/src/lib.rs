//! Dice pool engine for success-counting d10 pools.
//!
//! Provides a simulator that rolls a pool under the again, rote and
//! chance-die rules, a closed-form analyzer for the odds of the same pool,
//! and a roller session that ties both to live user input.
//!
//! [`simulate_pool`] and [`analyze`] take the pool size as a separate argument
//! and ignore `config.pool_size`, except that a zero `config.pool_size` still
//! switches to chance dice. That is how the willpower roll rolls three chance
//! dice under a chance-die configuration.

pub mod analysis;
pub mod config;
pub mod dice;
pub mod error;
pub mod roller;

pub use analysis::{AnalyticSummary, analyze, expected_single};
pub use config::RollerConfig;
pub use dice::{RollConfiguration, RollOutcome, simulate_pool, simulate_willpower};
pub use error::{EngineError, EngineResult};
pub use roller::DiceRoller;
