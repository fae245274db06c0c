//! Dice pool simulation.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use super::{
    CHANCE_SUCCESS, DICE_SIDES, MAX_CHAIN, RollConfiguration, SUCCESS_THRESHOLD, WILLPOWER_DICE,
};
use crate::error::{EngineError, EngineResult};

/// Roll `pool_size` dice under `config` and count the successes.
///
/// A pool of zero, or a configuration that is itself a chance die, switches
/// to chance-die mode: `max(pool_size, 1)` dice where only a 10 succeeds,
/// with no again or rote.
pub fn simulate_pool(
    pool_size: u32,
    config: &RollConfiguration,
    rng: &mut StdRng,
) -> EngineResult<u32> {
    let chance = pool_size == 0 || config.is_chance_die();
    let dice = pool_size.max(1);

    let mut successes = 0;
    for _ in 0..dice {
        let mut draw = || rng.random_range(1..=DICE_SIDES);
        successes += if chance {
            resolve_chance_die(draw())
        } else {
            resolve_die(config, &mut draw)?
        };
    }

    debug!(dice, chance, successes, %config, "rolled pool");
    Ok(successes)
}

/// Roll the three-die willpower bonus under `config`.
///
/// The bonus pool is independent of `config.pool_size`, but a chance-die
/// configuration still rolls chance dice.
pub fn simulate_willpower(config: &RollConfiguration, rng: &mut StdRng) -> EngineResult<u32> {
    simulate_pool(WILLPOWER_DICE, config, rng)
}

fn resolve_chance_die(face: u32) -> u32 {
    u32::from(face == CHANCE_SUCCESS)
}

/// Resolve one normal-mode die, pulling faces from `draw`.
///
/// Only the first draw may be rerolled by rote. Each success at or above the
/// again threshold pulls a bonus draw; bonus draws and the rote reroll can
/// explode but are never rerolled.
fn resolve_die(config: &RollConfiguration, draw: &mut impl FnMut() -> u32) -> EngineResult<u32> {
    let explodes = config.explodes();
    let mut reroll_available = config.rote;
    let mut successes = 0;
    let mut draws = 0;

    loop {
        if draws >= MAX_CHAIN {
            return Err(EngineError::RunawayChain { draws });
        }
        draws += 1;

        let face = draw();
        if face < SUCCESS_THRESHOLD {
            if std::mem::take(&mut reroll_available) {
                continue;
            }
            return Ok(successes);
        }

        reroll_available = false;
        successes += 1;
        if !(explodes && face >= config.again_threshold) {
            return Ok(successes);
        }
    }
}
