//! CLI subcommand implementations.

pub mod add;
pub mod battle;
pub mod clear;
pub mod delete;
pub mod init;
pub mod leaderboard;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use mealclash_providers::config::{load_config_from, MealClashConfig};
use mealclash_store::SqliteKitchen;

/// Load config and open the kitchen it points at.
pub(crate) fn open_kitchen(config_path: Option<&Path>) -> Result<(MealClashConfig, SqliteKitchen)> {
    let config = load_config_from(config_path)?;
    tracing::debug!(db = %config.db_path.display(), "opening kitchen");
    let mut kitchen = SqliteKitchen::open(&config.db_path)
        .with_context(|| format!("failed to open database: {}", config.db_path.display()))?;
    kitchen.set_visibility(config.deleted_visibility);
    Ok((config, kitchen))
}
