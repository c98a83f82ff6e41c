//! The `mealclash delete` command.

use std::path::Path;

use anyhow::Result;

use mealclash_core::traits::MealStore;

use super::open_kitchen;

pub fn execute(config: Option<&Path>, id: i64) -> Result<()> {
    let (_, mut kitchen) = open_kitchen(config)?;
    kitchen.delete(id)?;
    println!("Deleted meal {id}");
    Ok(())
}
