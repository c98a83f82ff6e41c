//! Configuration loading and the random-source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mealclash_core::score::BattleTunables;
use mealclash_core::traits::{DeletedVisibility, RandomSource};

use crate::fixed::FixedRandom;
use crate::random_org::RandomOrg;
use crate::thread::ThreadRandom;

/// Configuration for a random source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RandomConfig {
    /// Thread-local PRNG.
    Thread,
    /// Fetch each roll from random.org.
    RandomOrg {
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        timeout_secs: Option<u64>,
    },
    /// Always the same value; makes battles deterministic.
    Fixed { value: f64 },
}

impl Default for RandomConfig {
    fn default() -> Self {
        RandomConfig::Thread
    }
}

/// Top-level mealclash configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealClashConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Random source used by battles.
    #[serde(default)]
    pub random: RandomConfig,
    /// Battle tunables: normalization divisor and probability curve.
    #[serde(default)]
    pub battle: BattleTunables,
    /// Whether id lookups return soft-deleted meals.
    #[serde(default)]
    pub deleted_visibility: DeletedVisibility,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./mealclash.db")
}

impl Default for MealClashConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            random: RandomConfig::default(),
            battle: BattleTunables::default(),
            deleted_visibility: DeletedVisibility::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mealclash.toml` in the current directory
/// 2. `~/.config/mealclash/config.toml`
///
/// Environment variable override: `MEALCLASH_DB` replaces `db_path`.
pub fn load_config() -> Result<MealClashConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MealClashConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mealclash.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MealClashConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MealClashConfig::default(),
    };

    // Apply env var override and resolve references in path-like fields.
    if let Ok(db) = std::env::var("MEALCLASH_DB") {
        config.db_path = PathBuf::from(db);
    } else if let Some(s) = config.db_path.to_str() {
        config.db_path = PathBuf::from(resolve_env_vars(s));
    }

    if let RandomConfig::RandomOrg {
        base_url: Some(url),
        ..
    } = &mut config.random
    {
        *url = resolve_env_vars(url);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mealclash"))
}

/// Build a random source from its configuration.
pub fn create_random_source(config: &RandomConfig) -> Result<Box<dyn RandomSource>> {
    match config {
        RandomConfig::Thread => Ok(Box::new(ThreadRandom)),
        RandomConfig::RandomOrg {
            base_url,
            timeout_secs,
        } => {
            let source = RandomOrg::new(base_url.clone(), *timeout_secs)
                .context("failed to build random.org client")?;
            Ok(Box::new(source))
        }
        RandomConfig::Fixed { value } => Ok(Box::new(FixedRandom::new(*value))),
    }
}
