//! Closed-form odds for a dice pool.
//!
//! Two separate models are used and kept deliberately distinct:
//! - the expected success count follows a per-die recurrence that accounts
//!   for explosions and the rote reroll band;
//! - the chance of at least one success treats every die as a flat 30% trial,
//!   with rote counted as a second trial per die.

use serde::{Deserialize, Serialize};

use crate::dice::{DICE_SIDES, RollConfiguration, SUCCESS_THRESHOLD};

/// Chance of a single plain die succeeding.
const BASE_SUCCESS: f64 = 0.3;

/// Faces a rote reroll applies to.
const REROLL_FACES: f64 = (SUCCESS_THRESHOLD - 1) as f64;

/// Summary odds for a pool, recomputed whenever the configuration changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticSummary {
    /// Rounded percent chance of at least one success (0-100).
    pub chance_percent: u32,
    /// Expected number of successes, rounded to one decimal.
    pub expected_successes: f64,
}

impl AnalyticSummary {
    /// The fixed odds of a chance die.
    pub const CHANCE_DIE: Self = Self {
        chance_percent: 10,
        expected_successes: 0.1,
    };
}

impl std::fmt::Display for AnalyticSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% chance, {:.1} expected",
            self.chance_percent, self.expected_successes
        )
    }
}

/// Expected successes from one die under `config`, before any rounding.
pub fn expected_single(config: &RollConfiguration) -> f64 {
    if config.is_chance_die() {
        return 1.0 / f64::from(DICE_SIDES);
    }
    if !config.rote {
        return expected_without_rote(config);
    }

    let again_faces = f64::from(DICE_SIDES + 1) - f64::from(config.again_threshold);
    let only_faces = f64::from(DICE_SIDES) - REROLL_FACES - again_faces;
    let reroll = expected_without_rote(config);

    (reroll * REROLL_FACES + (1.0 + reroll) * again_faces + only_faces) / f64::from(DICE_SIDES)
}

fn expected_without_rote(config: &RollConfiguration) -> f64 {
    if !config.explodes() || config.again_threshold > DICE_SIDES {
        return BASE_SUCCESS;
    }
    3.0 / (f64::from(config.again_threshold) - 1.0)
}

/// Compute the odds of rolling `pool_size` dice under `config`.
///
/// A pool of zero is a chance die and yields fixed odds. Non-finite values
/// from an unclamped again threshold are floored to zero.
pub fn analyze(pool_size: u32, config: &RollConfiguration) -> AnalyticSummary {
    if pool_size == 0 || config.is_chance_die() {
        return AnalyticSummary::CHANCE_DIE;
    }

    let expected = expected_single(config) * f64::from(pool_size);
    let expected_successes = finite_or_zero((expected * 10.0).round() / 10.0);

    let trials = if config.rote {
        2.0 * f64::from(pool_size)
    } else {
        f64::from(pool_size)
    };
    let chance = 1.0 - (1.0 - BASE_SUCCESS).powf(trials);
    let chance_percent = finite_or_zero((chance * 100.0).round()) as u32;

    AnalyticSummary {
        chance_percent,
        expected_successes,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
