//! The `mealclash add` command.

use std::path::Path;

use anyhow::Result;

use mealclash_core::meal::{Difficulty, NewMeal};
use mealclash_core::traits::MealStore;

use super::open_kitchen;

pub fn execute(
    config: Option<&Path>,
    name: String,
    cuisine: String,
    price: f64,
    difficulty: Difficulty,
) -> Result<()> {
    let (_, mut kitchen) = open_kitchen(config)?;
    let id = kitchen.create(&NewMeal {
        name,
        cuisine,
        price,
        difficulty,
    })?;
    println!("Created meal {id}");
    Ok(())
}
