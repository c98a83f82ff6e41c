//! The `mealclash init` command.

use anyhow::Result;

use mealclash_store::SqliteKitchen;

pub fn execute() -> Result<()> {
    // Create mealclash.toml
    if std::path::Path::new("mealclash.toml").exists() {
        println!("mealclash.toml already exists, skipping.");
    } else {
        std::fs::write("mealclash.toml", SAMPLE_CONFIG)?;
        println!("Created mealclash.toml");
    }

    // Touch the database so the schema exists before the first command.
    SqliteKitchen::open(std::path::Path::new("./mealclash.db"))?;
    println!("Initialized mealclash.db");

    println!("\nNext steps:");
    println!("  1. mealclash add --name 'Tikka Masala' --cuisine Indian --price 25.0 --difficulty MED");
    println!("  2. mealclash add --name Pasta --cuisine Italian --price 20.0 --difficulty LOW");
    println!("  3. mealclash battle --a 1 --b 2");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mealclash configuration

db_path = "./mealclash.db"

# Whether `show --id` returns soft-deleted meals: "fetchable" or "hidden".
deleted_visibility = "fetchable"

[random]
# "thread" (local PRNG), "random-org" (fetch each roll), or "fixed".
type = "thread"

[battle]
# Divisor normalizing the score delta before it becomes a win probability.
score_spread = 100.0
curve = { type = "linear" }
"#;
