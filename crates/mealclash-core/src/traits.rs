//! Trait seams for the store and random-source collaborators.
//!
//! These traits are implemented by the `mealclash-store` and
//! `mealclash-providers` crates respectively. Everything is synchronous:
//! each operation completes within the calling execution context, and the
//! backing resources it holds are released on every exit path.

use serde::{Deserialize, Serialize};

use crate::error::{RandomError, StoreError};
use crate::meal::{BattleOutcome, LeaderboardEntry, LeaderboardSort, Meal, NewMeal};

// ---------------------------------------------------------------------------
// Record store
// ---------------------------------------------------------------------------

/// Persistent store of meal records.
pub trait MealStore {
    /// Insert a new meal with zeroed stats. Returns the assigned id.
    fn create(&mut self, meal: &NewMeal) -> Result<i64, StoreError>;

    /// Soft-delete a meal.
    fn delete(&mut self, id: i64) -> Result<(), StoreError>;

    /// Fetch a meal by id.
    ///
    /// Visibility of soft-deleted rows is governed by [`DeletedVisibility`].
    fn meal_by_id(&self, id: i64) -> Result<Meal, StoreError>;

    /// Fetch a non-deleted meal by name.
    fn meal_by_name(&self, name: &str) -> Result<Meal, StoreError>;

    /// Record a battle outcome against a meal's counters.
    ///
    /// Existence and deleted checks run before any mutation.
    fn update_stats(&mut self, id: i64, outcome: BattleOutcome) -> Result<(), StoreError>;

    /// Non-deleted meals with at least one battle, best first.
    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Remove every meal and reset id assignment.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// Whether id lookups return soft-deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletedVisibility {
    /// `meal_by_id` returns soft-deleted rows (historical behavior).
    #[default]
    Fetchable,
    /// Soft-deleted rows are reported as not found.
    Hidden,
}

// ---------------------------------------------------------------------------
// Random source
// ---------------------------------------------------------------------------

/// Source of one random value in `[0, 1)` per battle.
///
/// Substitutable so battles can be made deterministic in tests.
pub trait RandomSource {
    /// Produce the next value.
    fn roll(&self) -> Result<f64, RandomError>;
}
