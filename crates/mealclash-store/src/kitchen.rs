//! rusqlite-backed implementation of the `MealStore` trait.
//!
//! Every statement is parameterized. Each operation's connection use is
//! scoped to its `&self`/`&mut self` borrow and released on every exit
//! path, including failures. No pooling.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use mealclash_core::error::StoreError;
use mealclash_core::meal::{
    BattleOutcome, Difficulty, LeaderboardEntry, LeaderboardSort, Meal, NewMeal,
};
use mealclash_core::traits::{DeletedVisibility, MealStore};

use crate::schema::SCHEMA_MEALS;

const MEAL_COLUMNS: &str = "id, meal, cuisine, price, difficulty, battles, wins, deleted, created_at";

/// SQLite-backed meal store.
pub struct SqliteKitchen {
    conn: Connection,
    visibility: DeletedVisibility,
}

impl SqliteKitchen {
    /// Wrap a connection supplied from outside, applying pragmas and the
    /// idempotent schema.
    pub fn new(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;").map_err(backend)?;
        conn.execute_batch(SCHEMA_MEALS).map_err(backend)?;
        Ok(Self {
            conn,
            visibility: DeletedVisibility::default(),
        })
    }

    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(backend)?;
        Self::new(conn)
    }

    /// In-memory store, used by tests and demos.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::new(conn)
    }

    /// Set whether id lookups return soft-deleted rows.
    pub fn set_visibility(&mut self, visibility: DeletedVisibility) {
        self.visibility = visibility;
    }

    /// Deleted flag of a row, or `NotFound` if the id is absent.
    fn deleted_flag(&self, id: i64) -> Result<bool, StoreError> {
        self.conn
            .query_row(
                "SELECT deleted FROM meals WHERE id = ?1",
                params![id],
                |row| row.get::<_, bool>(0),
            )
            .optional()
            .map_err(backend)?
            .ok_or(StoreError::NotFound(id))
    }
}

impl MealStore for SqliteKitchen {
    fn create(&mut self, meal: &NewMeal) -> Result<i64, StoreError> {
        meal.validate()?;
        let created_at = Utc::now();
        let result = self.conn.execute(
            "INSERT INTO meals (meal, cuisine, price, difficulty, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                meal.name,
                meal.cuisine,
                meal.price,
                meal.difficulty.to_string(),
                created_at
            ],
        );
        match result {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(id, name = %meal.name, "meal created");
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => Err(StoreError::Duplicate),
            Err(err) => Err(backend(err)),
        }
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        if self.deleted_flag(id)? {
            return Err(StoreError::AlreadyDeleted(id));
        }
        self.conn
            .execute("UPDATE meals SET deleted = 1 WHERE id = ?1", params![id])
            .map_err(backend)?;
        info!(id, "meal soft-deleted");
        Ok(())
    }

    fn meal_by_id(&self, id: i64) -> Result<Meal, StoreError> {
        let sql = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE id = ?1");
        let meal = self
            .conn
            .query_row(&sql, params![id], row_to_meal)
            .optional()
            .map_err(backend)?
            .ok_or(StoreError::NotFound(id))?;
        if self.visibility == DeletedVisibility::Hidden && meal.deleted {
            return Err(StoreError::NotFound(id));
        }
        Ok(meal)
    }

    fn meal_by_name(&self, name: &str) -> Result<Meal, StoreError> {
        let sql = format!("SELECT {MEAL_COLUMNS} FROM meals WHERE meal = ?1 AND deleted = 0");
        self.conn
            .query_row(&sql, params![name], row_to_meal)
            .optional()
            .map_err(backend)?
            .ok_or_else(|| StoreError::NotFoundByName(name.to_string()))
    }

    fn update_stats(&mut self, id: i64, outcome: BattleOutcome) -> Result<(), StoreError> {
        if self.deleted_flag(id)? {
            return Err(StoreError::AlreadyDeleted(id));
        }
        let sql = match outcome {
            BattleOutcome::Win => {
                "UPDATE meals SET battles = battles + 1, wins = wins + 1 WHERE id = ?1"
            }
            BattleOutcome::Loss => "UPDATE meals SET battles = battles + 1 WHERE id = ?1",
        };
        self.conn.execute(sql, params![id]).map_err(backend)?;
        Ok(())
    }

    fn leaderboard(&self, sort: LeaderboardSort) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let order = match sort {
            LeaderboardSort::Wins => "wins DESC",
            LeaderboardSort::WinPct => "win_pct DESC",
        };
        let sql = format!(
            "SELECT id, meal, cuisine, price, difficulty, battles, wins,
                    CAST(wins AS REAL) / battles AS win_pct
             FROM meals
             WHERE deleted = 0 AND battles > 0
             ORDER BY {order}"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(backend)?;
        let rows = stmt
            .query_map([], |row| {
                let difficulty: String = row.get(4)?;
                Ok(LeaderboardEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    cuisine: row.get(2)?,
                    price: row.get(3)?,
                    difficulty: parse_difficulty(&difficulty, 4)?,
                    battles: row.get(5)?,
                    wins: row.get(6)?,
                    win_pct: row.get(7)?,
                })
            })
            .map_err(backend)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(backend)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM meals", []).map_err(backend)?;
        // AUTOINCREMENT bookkeeping lives in sqlite_sequence, which only
        // exists after the first insert.
        let has_sequence: bool = self
            .conn
            .query_row(
                "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE name = 'sqlite_sequence')",
                [],
                |row| row.get(0),
            )
            .map_err(backend)?;
        if has_sequence {
            self.conn
                .execute("DELETE FROM sqlite_sequence WHERE name = 'meals'", [])
                .map_err(backend)?;
        }
        info!("meal store cleared");
        Ok(())
    }
}

fn backend(err: rusqlite::Error) -> StoreError {
    StoreError::Backend(Box::new(err))
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn parse_difficulty(text: &str, column: usize) -> rusqlite::Result<Difficulty> {
    text.parse::<Difficulty>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn row_to_meal(row: &rusqlite::Row<'_>) -> rusqlite::Result<Meal> {
    let difficulty: String = row.get(4)?;
    let created_at: DateTime<Utc> = row.get(8)?;
    Ok(Meal {
        id: row.get(0)?,
        name: row.get(1)?,
        cuisine: row.get(2)?,
        price: row.get(3)?,
        difficulty: parse_difficulty(&difficulty, 4)?,
        battles: row.get(5)?,
        wins: row.get(6)?,
        deleted: row.get(7)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitchen() -> SqliteKitchen {
        SqliteKitchen::open_in_memory().unwrap()
    }

    fn steak_frites() -> NewMeal {
        NewMeal {
            name: "Steak Frites".into(),
            cuisine: "French".into(),
            price: 25.50,
            difficulty: Difficulty::High,
        }
    }

    #[test]
    fn create_then_fetch_has_zeroed_stats() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();

        let meal = store.meal_by_id(id).unwrap();
        assert_eq!(meal.name, "Steak Frites");
        assert_eq!(meal.cuisine, "French");
        assert_eq!(meal.price, 25.50);
        assert_eq!(meal.difficulty, Difficulty::High);
        assert_eq!(meal.battles, 0);
        assert_eq!(meal.wins, 0);
        assert!(!meal.deleted);
    }

    #[test]
    fn create_duplicate_name_fails() {
        let mut store = kitchen();
        store.create(&steak_frites()).unwrap();

        let err = store.create(&steak_frites()).unwrap_err();
        assert_eq!(err.to_string(), "Meal with this name already exists");
    }

    #[test]
    fn create_reuses_name_after_delete() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();
        store.delete(id).unwrap();

        let second = store.create(&steak_frites()).unwrap();
        assert_ne!(second, id);
        assert_eq!(store.meal_by_name("Steak Frites").unwrap().id, second);
    }

    #[test]
    fn create_rejects_invalid_payload() {
        let mut store = kitchen();

        let err = store
            .create(&NewMeal {
                price: 0.0,
                ..steak_frites()
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid price: 0. Price must be a positive number."
        );

        let err = store
            .create(&NewMeal {
                name: "".into(),
                ..steak_frites()
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidName));
    }

    #[test]
    fn delete_marks_and_rejects_second_call() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();

        store.delete(id).unwrap();
        assert!(store.meal_by_id(id).unwrap().deleted);

        let err = store.delete(id).unwrap_err();
        assert_eq!(err.to_string(), format!("Meal with ID {id} is already deleted"));
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut store = kitchen();
        let err = store.delete(5).unwrap_err();
        assert_eq!(err.to_string(), "Meal with ID 5 not found");
    }

    #[test]
    fn fetch_unknown_id_fails() {
        let store = kitchen();
        let err = store.meal_by_id(5).unwrap_err();
        assert_eq!(err.to_string(), "Meal with ID 5 not found");
    }

    #[test]
    fn deleted_rows_visibility_is_configurable() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();
        store.delete(id).unwrap();

        // Default: deleted rows remain fetchable by id.
        assert!(store.meal_by_id(id).unwrap().deleted);

        store.set_visibility(DeletedVisibility::Hidden);
        let err = store.meal_by_id(id).unwrap_err();
        assert_eq!(err.to_string(), format!("Meal with ID {id} not found"));
    }

    #[test]
    fn fetch_by_name_skips_deleted() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();
        assert_eq!(store.meal_by_name("Steak Frites").unwrap().id, id);

        store.delete(id).unwrap();
        let err = store.meal_by_name("Steak Frites").unwrap_err();
        assert_eq!(err.to_string(), "Meal with name 'Steak Frites' not found");
    }

    #[test]
    fn update_stats_win_and_loss() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();

        store.update_stats(id, BattleOutcome::Win).unwrap();
        let meal = store.meal_by_id(id).unwrap();
        assert_eq!((meal.battles, meal.wins), (1, 1));

        store.update_stats(id, BattleOutcome::Loss).unwrap();
        let meal = store.meal_by_id(id).unwrap();
        assert_eq!((meal.battles, meal.wins), (2, 1));
    }

    #[test]
    fn update_stats_checks_before_mutating() {
        let mut store = kitchen();
        let err = store.update_stats(5, BattleOutcome::Win).unwrap_err();
        assert_eq!(err.to_string(), "Meal with ID 5 not found");

        let id = store.create(&steak_frites()).unwrap();
        store.delete(id).unwrap();
        let err = store.update_stats(id, BattleOutcome::Win).unwrap_err();
        assert_eq!(err.to_string(), format!("Meal with ID {id} is already deleted"));
        assert_eq!(store.meal_by_id(id).unwrap().battles, 0);
    }

    #[test]
    fn leaderboard_orders_and_filters() {
        let mut store = kitchen();
        let a = store
            .create(&NewMeal {
                name: "A".into(),
                cuisine: "Greek".into(),
                price: 10.0,
                difficulty: Difficulty::Low,
            })
            .unwrap();
        let b = store
            .create(&NewMeal {
                name: "B".into(),
                cuisine: "Thai".into(),
                price: 10.0,
                difficulty: Difficulty::Low,
            })
            .unwrap();
        let c = store
            .create(&NewMeal {
                name: "C".into(),
                cuisine: "Peruvian".into(),
                price: 10.0,
                difficulty: Difficulty::Low,
            })
            .unwrap();

        // A: 2 battles 1 win, B: 1 battle 1 win, C: never fought.
        store.update_stats(a, BattleOutcome::Win).unwrap();
        store.update_stats(a, BattleOutcome::Loss).unwrap();
        store.update_stats(b, BattleOutcome::Win).unwrap();
        let _ = c;

        let by_wins = store.leaderboard(LeaderboardSort::Wins).unwrap();
        assert_eq!(by_wins.len(), 2);
        assert_eq!(by_wins[0].wins, 1);

        let by_pct = store.leaderboard(LeaderboardSort::WinPct).unwrap();
        assert_eq!(by_pct[0].name, "B");
        assert_eq!(by_pct[0].win_pct, 1.0);
        assert_eq!(by_pct[1].name, "A");
        assert_eq!(by_pct[1].win_pct, 0.5);
    }

    #[test]
    fn leaderboard_excludes_deleted() {
        let mut store = kitchen();
        let id = store.create(&steak_frites()).unwrap();
        store.update_stats(id, BattleOutcome::Win).unwrap();
        store.delete(id).unwrap();

        assert!(store.leaderboard(LeaderboardSort::Wins).unwrap().is_empty());
    }

    #[test]
    fn clear_empties_and_resets_ids() {
        let mut store = kitchen();
        store.create(&steak_frites()).unwrap();
        store.clear().unwrap();

        let err = store.meal_by_id(1).unwrap_err();
        assert_eq!(err.to_string(), "Meal with ID 1 not found");

        let id = store.create(&steak_frites()).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn clear_on_fresh_store_is_ok() {
        let mut store = kitchen();
        store.clear().unwrap();
    }

    #[test]
    fn open_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kitchen.db");
        {
            let mut store = SqliteKitchen::open(&path).unwrap();
            store.create(&steak_frites()).unwrap();
        }

        let store = SqliteKitchen::open(&path).unwrap();
        assert_eq!(store.meal_by_name("Steak Frites").unwrap().id, 1);
    }
}
