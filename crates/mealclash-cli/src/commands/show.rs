//! The `mealclash show` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::Table;

use mealclash_core::meal::Meal;
use mealclash_core::traits::MealStore;

use super::open_kitchen;

pub fn execute(config: Option<&Path>, id: Option<i64>, name: Option<String>) -> Result<()> {
    let (_, kitchen) = open_kitchen(config)?;

    let meal = match (id, name) {
        (Some(id), _) => kitchen.meal_by_id(id)?,
        (None, Some(name)) => kitchen.meal_by_name(&name)?,
        (None, None) => anyhow::bail!("provide --id or --name"),
    };

    print_meal(&meal);
    Ok(())
}

fn print_meal(meal: &Meal) {
    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Meal",
        "Cuisine",
        "Price",
        "Difficulty",
        "Battles",
        "Wins",
        "Deleted",
    ]);
    table.add_row(vec![
        meal.id.to_string(),
        meal.name.clone(),
        meal.cuisine.clone(),
        format!("{:.2}", meal.price),
        meal.difficulty.to_string(),
        meal.battles.to_string(),
        meal.wins.to_string(),
        if meal.deleted { "yes".into() } else { "no".into() },
    ]);
    println!("{table}");
}
