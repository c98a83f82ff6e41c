//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mealclash(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mealclash").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

/// Write a config into the temp dir so commands there pick it up.
fn write_config(dir: &TempDir, random_table: &str) {
    let config = format!(
        "db_path = \"kitchen.db\"\n\n[random]\n{random_table}\n"
    );
    std::fs::write(dir.path().join("mealclash.toml"), config).unwrap();
}

fn add_meal(dir: &TempDir, name: &str, cuisine: &str, price: &str, difficulty: &str) {
    mealclash(dir)
        .args([
            "add",
            "--name",
            name,
            "--cuisine",
            cuisine,
            "--price",
            price,
            "--difficulty",
            difficulty,
        ])
        .assert()
        .success();
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    mealclash(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal battle arena"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    mealclash(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mealclash"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    mealclash(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mealclash.toml"))
        .stdout(predicate::str::contains("Initialized mealclash.db"));

    assert!(dir.path().join("mealclash.toml").exists());
    assert!(dir.path().join("mealclash.db").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    mealclash(&dir).arg("init").assert().success();

    mealclash(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn add_and_show() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    add_meal(&dir, "Tikka Masala", "Indian", "25.0", "MED");

    mealclash(&dir)
        .args(["show", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tikka Masala"))
        .stdout(predicate::str::contains("Indian"))
        .stdout(predicate::str::contains("MED"));

    mealclash(&dir)
        .args(["show", "--name", "Tikka Masala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tikka Masala"));
}

#[test]
fn add_duplicate_name_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    add_meal(&dir, "Pasta", "Italian", "20.0", "LOW");

    mealclash(&dir)
        .args([
            "add",
            "--name",
            "Pasta",
            "--cuisine",
            "Italian",
            "--price",
            "20.0",
            "--difficulty",
            "LOW",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Meal with this name already exists"));
}

#[test]
fn add_rejects_bad_difficulty() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    mealclash(&dir)
        .args([
            "add",
            "--name",
            "Pasta",
            "--cuisine",
            "Italian",
            "--price",
            "20.0",
            "--difficulty",
            "EXTREME",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid difficulty level: EXTREME"));
}

#[test]
fn delete_twice_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    add_meal(&dir, "Pasta", "Italian", "20.0", "LOW");

    mealclash(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted meal 1"));

    mealclash(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Meal with ID 1 is already deleted"));
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    mealclash(&dir)
        .args(["show", "--id", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Meal with ID 99 not found"));
}

#[test]
fn show_requires_id_or_name() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    mealclash(&dir)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provide --id or --name"));
}

#[test]
fn battle_with_one_missing_meal_fails() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"fixed\"\nvalue = 0.5");

    add_meal(&dir, "Pasta", "Italian", "20.0", "LOW");

    mealclash(&dir)
        .args(["battle", "--a", "1", "--b", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Meal with ID 2 not found"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "type = \"thread\"");

    mealclash(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to clear"));

    mealclash(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared all meals"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    mealclash(&dir)
        .args(["--config", "no_such.toml", "show", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
