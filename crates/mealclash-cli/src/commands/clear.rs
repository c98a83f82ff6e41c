//! The `mealclash clear` command.

use std::path::Path;

use anyhow::Result;

use mealclash_core::traits::MealStore;

use super::open_kitchen;

pub fn execute(config: Option<&Path>, yes: bool) -> Result<()> {
    anyhow::ensure!(yes, "refusing to clear the kitchen without --yes");

    let (_, mut kitchen) = open_kitchen(config)?;
    kitchen.clear()?;
    println!("Cleared all meals");
    Ok(())
}
