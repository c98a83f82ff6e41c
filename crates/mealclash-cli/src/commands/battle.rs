//! The `mealclash battle` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use mealclash_core::session::BattleSession;
use mealclash_core::traits::MealStore;
use mealclash_providers::create_random_source;

use super::open_kitchen;

pub fn execute(config_path: Option<&Path>, a: i64, b: i64) -> Result<()> {
    let (config, mut kitchen) = open_kitchen(config_path)?;
    let random = create_random_source(&config.random)?;

    let mut session = BattleSession::with_tunables(config.battle);
    session.prep_combatant(kitchen.meal_by_id(a)?)?;
    session.prep_combatant(kitchen.meal_by_id(b)?)?;

    let winner = session.battle(&mut kitchen, random.as_ref())?;
    println!("Winner: {winner}");

    let mut table = Table::new();
    table.set_header(vec!["ID", "Meal", "Battles", "Wins"]);
    for &id in &[a, b] {
        let meal = kitchen.meal_by_id(id)?;
        table.add_row(vec![
            meal.id.to_string(),
            meal.name,
            meal.battles.to_string(),
            meal.wins.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
