//! Battle scoring and the delta-to-probability mapping.

use serde::{Deserialize, Serialize};

use crate::meal::Meal;

/// Compute a meal's battle score.
///
/// `price x cuisine character count - difficulty penalty`. Pure function,
/// no side effects.
pub fn battle_score(meal: &Meal) -> f64 {
    meal.price * meal.cuisine.chars().count() as f64 - meal.difficulty.penalty()
}

/// Monotonic mapping from a normalized score delta in `[0, 1]` to the
/// first combatant's win probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProbabilityCurve {
    /// Identity: the clamped delta is the probability.
    Linear,
    /// Logistic curve centered at delta 0.5 with steepness `k`.
    Sigmoid { k: f64 },
}

impl ProbabilityCurve {
    /// Win probability of the first combatant for a given delta.
    pub fn probability(&self, delta: f64) -> f64 {
        let d = delta.clamp(0.0, 1.0);
        match self {
            ProbabilityCurve::Linear => d,
            ProbabilityCurve::Sigmoid { k } => 1.0 / (1.0 + (-k * (d - 0.5)).exp()),
        }
    }
}

/// Tunable parameters for the battle algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleTunables {
    /// Divisor normalizing the raw score delta before clamping.
    #[serde(default = "default_score_spread")]
    pub score_spread: f64,
    /// Delta-to-probability mapping for the first combatant.
    #[serde(default = "default_curve")]
    pub curve: ProbabilityCurve,
}

fn default_score_spread() -> f64 {
    100.0
}

fn default_curve() -> ProbabilityCurve {
    ProbabilityCurve::Linear
}

impl Default for BattleTunables {
    fn default() -> Self {
        Self {
            score_spread: default_score_spread(),
            curve: default_curve(),
        }
    }
}

impl BattleTunables {
    /// Normalized, clamped advantage of the first combatant.
    ///
    /// Not absolute-valued: a first combatant that scores lower clamps to
    /// zero advantage.
    pub fn normalized_delta(&self, score_first: f64, score_second: f64) -> f64 {
        ((score_first - score_second) / self.score_spread).clamp(0.0, 1.0)
    }
}
