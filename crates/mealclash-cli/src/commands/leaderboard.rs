//! The `mealclash leaderboard` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use mealclash_core::meal::LeaderboardSort;
use mealclash_core::traits::MealStore;

use super::open_kitchen;

pub fn execute(config: Option<&Path>, sort: LeaderboardSort) -> Result<()> {
    let (_, kitchen) = open_kitchen(config)?;
    let entries = kitchen.leaderboard(sort)?;

    if entries.is_empty() {
        println!("No battles fought yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Meal", "Cuisine", "Battles", "Wins", "Win %"]);
    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.name.clone(),
            entry.cuisine.clone(),
            entry.battles.to_string(),
            entry.wins.to_string(),
            format!("{:.1}%", entry.win_pct * 100.0),
        ]);
    }
    println!("{table}");

    Ok(())
}
