//! SQLite schema for the meal store.
//!
//! The schema is idempotent: applying it to an already-initialized
//! database is a no-op. Name uniqueness is enforced only among
//! non-deleted rows via a partial unique index, so a name can be reused
//! after its previous owner is soft-deleted.

pub(crate) const SCHEMA_MEALS: &str = r"
CREATE TABLE IF NOT EXISTS meals (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  meal TEXT NOT NULL,
  cuisine TEXT NOT NULL,
  price REAL NOT NULL CHECK (price > 0),
  difficulty TEXT NOT NULL CHECK (difficulty IN ('HIGH', 'MED', 'LOW')),
  battles INTEGER NOT NULL DEFAULT 0 CHECK (battles >= 0),
  wins INTEGER NOT NULL DEFAULT 0 CHECK (wins >= 0 AND wins <= battles),
  deleted INTEGER NOT NULL DEFAULT 0 CHECK (deleted IN (0, 1)),
  created_at TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_meals_active_name
  ON meals(meal) WHERE deleted = 0;
";
