//! Configuration loading.
//!
//! Reads `shrimp_chess.toml` and applies environment variable overrides of the
//! form `SHRIMP_CHESS_<SECTION>_<KEY>`. Missing files fall back to built-in
//! defaults; unreadable or malformed files are errors.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_capture_path::CaptureConfig;
use crate::search::mcts_config::MctsConfig;
use crate::utils::engine_match_harness::MatchConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHRIMP_CHESS_CONFIG";

/// Standard locations to search for the config file.
pub const CONFIG_SEARCH_PATHS: &[&str] = &["shrimp_chess.toml", "../shrimp_chess.toml"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub search: MctsConfig,
    pub capture: CaptureConfig,
    #[serde(rename = "match")]
    pub match_: MatchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            search: MctsConfig::default(),
            capture: CaptureConfig::default(),
            match_: MatchConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ChessErrors> {
        self.search
            .validate()
            .map_err(|e| ChessErrors::InvalidConfig(e.to_string()))?;
        if self.capture.depth == 0 {
            return Err(ChessErrors::InvalidConfig(
                "capture.depth must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Load the configuration.
///
/// Search order:
/// 1. Path in `SHRIMP_CHESS_CONFIG`
/// 2. `shrimp_chess.toml` in the current directory
/// 3. `../shrimp_chess.toml`
///
/// Environment overrides are applied last, then the result is validated.
pub fn load_config() -> Result<AppConfig, ChessErrors> {
    let base = match find_config_file() {
        Some(path) => load_from_path(&path)?,
        None => {
            debug!("No shrimp_chess.toml found, using built-in defaults");
            AppConfig::default()
        }
    };

    let config = apply_env_overrides(base, |key| std::env::var(key).ok())?;
    config.validate()?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_PATH_ENV, path.display());
            return Some(path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_PATH_ENV,
            path.display()
        );
    }

    CONFIG_SEARCH_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
        .inspect(|path| info!("Loading config from {}", path.display()))
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ChessErrors> {
    let content = std::fs::read_to_string(path).map_err(|source| ChessErrors::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content).map_err(|source| ChessErrors::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_from_str(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

macro_rules! env_override {
    // Top-level string field
    ($config:expr, $lookup:expr, $field:ident, $key:expr) => {
        if let Some(v) = $lookup($key) {
            $config.$field = v;
        }
    };
    // Parseable section field
    ($config:expr, $lookup:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Some(v) = $lookup($key) {
            $config.$section.$field = v.parse().map_err(|_| {
                ChessErrors::InvalidConfig(format!("{}={} is not a valid value", $key, v))
            })?;
        }
    };
}

/// Apply `SHRIMP_CHESS_<SECTION>_<KEY>` overrides read through `lookup`.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, ChessErrors>
where
    F: Fn(&str) -> Option<String>,
{
    env_override!(config, lookup, log_level, "SHRIMP_CHESS_LOG_LEVEL");

    env_override!(
        config,
        lookup,
        search.num_simulations,
        "SHRIMP_CHESS_SEARCH_NUM_SIMULATIONS",
        parse
    );
    env_override!(
        config,
        lookup,
        search.exploration_constant,
        "SHRIMP_CHESS_SEARCH_EXPLORATION_CONSTANT",
        parse
    );
    env_override!(
        config,
        lookup,
        capture.depth,
        "SHRIMP_CHESS_CAPTURE_DEPTH",
        parse
    );
    env_override!(
        config,
        lookup,
        match_.max_plies,
        "SHRIMP_CHESS_MATCH_MAX_PLIES",
        parse
    );
    env_override!(config, lookup, match_.seed, "SHRIMP_CHESS_MATCH_SEED", parse);

    Ok(config)
}
