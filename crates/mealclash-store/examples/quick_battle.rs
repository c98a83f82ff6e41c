//! Quick battle example — minimal programmatic usage of mealclash.
//!
//! ```bash
//! cargo run --example quick_battle
//! ```

use mealclash_core::meal::{Difficulty, LeaderboardSort, NewMeal};
use mealclash_core::session::BattleSession;
use mealclash_core::traits::MealStore;
use mealclash_providers::FixedRandom;
use mealclash_store::SqliteKitchen;

fn main() -> anyhow::Result<()> {
    let mut kitchen = SqliteKitchen::open_in_memory()?;

    let tikka = kitchen.create(&NewMeal {
        name: "Tikka Masala".into(),
        cuisine: "Indian".into(),
        price: 25.0,
        difficulty: Difficulty::Med,
    })?;
    let pasta = kitchen.create(&NewMeal {
        name: "Pasta".into(),
        cuisine: "Italian".into(),
        price: 20.0,
        difficulty: Difficulty::Low,
    })?;

    // A roll below the normalized score delta favors the higher scorer.
    let random = FixedRandom::new(0.02);

    let mut session = BattleSession::new();
    session.prep_combatant(kitchen.meal_by_id(tikka)?)?;
    session.prep_combatant(kitchen.meal_by_id(pasta)?)?;

    let winner = session.battle(&mut kitchen, &random)?;
    println!("Winner: {winner}");

    for entry in kitchen.leaderboard(LeaderboardSort::Wins)? {
        println!(
            "{} ({}): {} battles, {} wins",
            entry.name, entry.cuisine, entry.battles, entry.wins
        );
    }

    Ok(())
}
