//! The ephemeral battle session.
//!
//! A session holds up to two combatants, scores them, consumes one roll
//! from the injected random source to pick a winner, and reports both
//! outcomes back to the record store.

use tracing::{debug, info};

use crate::error::BattleError;
use crate::meal::{BattleOutcome, Meal};
use crate::score::{battle_score, BattleTunables};
use crate::traits::{MealStore, RandomSource};

/// Maximum combatants in one session.
const MAX_COMBATANTS: usize = 2;

/// Holds up to two combatants and runs battles between them.
///
/// Sessions are short-lived: build one, prep two meals, battle, discard.
/// The roster survives a battle, so calling [`BattleSession::battle`]
/// again re-rolls with the same pair.
#[derive(Debug, Default)]
pub struct BattleSession {
    combatants: Vec<Meal>,
    tunables: BattleTunables,
}

impl BattleSession {
    /// Session with default tunables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with explicit tunables.
    pub fn with_tunables(tunables: BattleTunables) -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
            tunables,
        }
    }

    /// Enter a meal into the roster.
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<(), BattleError> {
        if self.combatants.len() >= MAX_COMBATANTS {
            return Err(BattleError::RosterFull);
        }
        debug!(id = meal.id, name = %meal.name, "prepping combatant");
        self.combatants.push(meal);
        Ok(())
    }

    /// Current combatants in insertion order.
    pub fn combatants(&self) -> &[Meal] {
        &self.combatants
    }

    /// Empty the roster.
    pub fn clear_combatants(&mut self) {
        self.combatants.clear();
    }

    /// Run one battle between the two prepped combatants.
    ///
    /// Consumes exactly one roll from `random`, records a win and a loss
    /// against `store`, and returns the winner's name. The roster is left
    /// intact.
    pub fn battle(
        &self,
        store: &mut dyn MealStore,
        random: &dyn RandomSource,
    ) -> Result<String, BattleError> {
        if self.combatants.len() < MAX_COMBATANTS {
            return Err(BattleError::InsufficientCombatants);
        }

        let first = &self.combatants[0];
        let second = &self.combatants[1];
        let score_first = battle_score(first);
        let score_second = battle_score(second);
        let delta = self.tunables.normalized_delta(score_first, score_second);
        let roll = random.roll()?;

        let first_wins = roll < self.tunables.curve.probability(delta);
        let (winner, loser) = if first_wins {
            (first, second)
        } else {
            (second, first)
        };

        info!(
            winner = %winner.name,
            loser = %loser.name,
            score_first,
            score_second,
            roll,
            "battle decided"
        );

        store.update_stats(winner.id, BattleOutcome::Win)?;
        store.update_stats(loser.id, BattleOutcome::Loss)?;

        Ok(winner.name.clone())
    }
}
