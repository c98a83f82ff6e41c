//! Error taxonomy for the store, session, and random-source layers.
//!
//! Defined in `mealclash-core` so callers can match on failure classes
//! without string matching. The message text is part of the contract:
//! tests assert on it, so it must not drift.

use thiserror::Error;

/// Errors from record-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A non-deleted meal with the same name already exists.
    #[error("Meal with this name already exists")]
    Duplicate,

    /// No meal row with this id.
    #[error("Meal with ID {0} not found")]
    NotFound(i64),

    /// No non-deleted meal with this name.
    #[error("Meal with name '{0}' not found")]
    NotFoundByName(String),

    /// The meal has already been soft-deleted.
    #[error("Meal with ID {0} is already deleted")]
    AlreadyDeleted(i64),

    /// Unrecognized stats operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Empty meal name on create.
    #[error("Invalid meal name: name cannot be empty")]
    InvalidName,

    /// Non-positive price on create.
    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    /// Unrecognized difficulty level.
    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    /// Failure inside the backing store driver.
    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from the battle session.
#[derive(Debug, Error)]
pub enum BattleError {
    /// The two-combatant roster is full.
    #[error("Combatant list is full, cannot add more combatants")]
    RosterFull,

    /// A battle needs exactly two prepped combatants.
    #[error("Two combatants must be prepped for a battle")]
    InsufficientCombatants,

    /// Recording the result against the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The random source failed to produce a roll.
    #[error(transparent)]
    Random(#[from] RandomError),
}

/// Errors from a random source.
#[derive(Debug, Error)]
pub enum RandomError {
    /// Transport failure while fetching randomness.
    #[error("random source network error: {0}")]
    Network(String),

    /// The payload could not be parsed as a decimal fraction.
    #[error("random source returned malformed payload: {0:?}")]
    Malformed(String),

    /// The value fell outside `[0, 1)`.
    #[error("random value {0} outside [0, 1)")]
    OutOfRange(f64),
}
