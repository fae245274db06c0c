//! Roll outcomes.

use serde::{Deserialize, Serialize};

/// The result shown after a roll, possibly topped up by a willpower roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Total successes, willpower bonus included.
    pub successes: u32,
    /// Successes from the last willpower roll, if one was made since the
    /// last roll or clear.
    pub willpower_successes: Option<u32>,
}

impl RollOutcome {
    /// A fresh outcome from a primary roll.
    pub fn primary(successes: u32) -> Self {
        Self {
            successes,
            willpower_successes: None,
        }
    }

    /// Add a willpower bonus into the total and record it.
    ///
    /// A second bonus adds again and replaces the recorded bonus.
    pub fn add_willpower(&mut self, bonus: u32) {
        self.successes = self.successes.saturating_add(bonus);
        self.willpower_successes = Some(bonus);
    }

    /// Reset to zero successes with no willpower bonus.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.successes == 1 {
            "success"
        } else {
            "successes"
        };
        write!(f, "{} {noun}", self.successes)?;
        if let Some(bonus) = self.willpower_successes {
            write!(f, " ({bonus} from willpower)")?;
        }
        Ok(())
    }
}
