//! mealclash-providers — Random-source implementations and configuration.
//!
//! Implements the `RandomSource` trait over the thread-local PRNG, the
//! random.org HTTP service, and a fixed value for deterministic runs,
//! and loads the TOML configuration that selects between them.

pub mod config;
pub mod fixed;
pub mod random_org;
pub mod thread;

pub use config::{create_random_source, load_config, load_config_from, MealClashConfig, RandomConfig};
pub use fixed::FixedRandom;
pub use random_org::RandomOrg;
pub use thread::ThreadRandom;
