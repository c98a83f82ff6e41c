//! Core data model types for mealclash.
//!
//! These are the fundamental types that the whole workspace uses to
//! represent meals, battle outcomes, and leaderboard rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// A persisted meal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name, unique among non-deleted meals.
    pub name: String,
    /// Free-text cuisine label; its character count feeds the battle score.
    pub cuisine: String,
    /// Price. Strictly positive.
    pub price: f64,
    /// Preparation difficulty.
    pub difficulty: Difficulty,
    /// Number of battles fought.
    pub battles: u32,
    /// Number of battles won. Never exceeds `battles`.
    pub wins: u32,
    /// Soft-delete flag.
    pub deleted: bool,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

impl NewMeal {
    /// Check the create constraints: non-empty name, positive price.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::InvalidName);
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(StoreError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

/// Meal preparation difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    High,
    Med,
    Low,
}

impl Difficulty {
    /// Score penalty applied for this difficulty.
    pub fn penalty(self) -> f64 {
        match self {
            Difficulty::High => 1.0,
            Difficulty::Med => 2.0,
            Difficulty::Low => 3.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::High => write!(f, "HIGH"),
            Difficulty::Med => write!(f, "MED"),
            Difficulty::Low => write!(f, "LOW"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "HIGH" => Ok(Difficulty::High),
            "MED" => Ok(Difficulty::Med),
            "LOW" => Ok(Difficulty::Low),
            _ => Err(StoreError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// A battle result from one combatant's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleOutcome {
    Win,
    Loss,
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::Win => write!(f, "win"),
            BattleOutcome::Loss => write!(f, "loss"),
        }
    }
}

impl FromStr for BattleOutcome {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(BattleOutcome::Win),
            "loss" => Ok(BattleOutcome::Loss),
            _ => Err(StoreError::InvalidOperation(s.to_string())),
        }
    }
}

/// Sort key for the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardSort {
    /// Total wins, descending.
    Wins,
    /// Win percentage, descending.
    WinPct,
}

/// One leaderboard row: a meal plus its computed win percentage.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    /// `wins / battles`; only meals with at least one battle are ranked.
    pub win_pct: f64,
}
