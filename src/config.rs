//! Runtime configuration read from the environment.

use std::env;
use std::path::PathBuf;

use crate::types::{Tool, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board seed. Random unless `MINES_SEED` is set.
    pub seed: u32,
    /// Tool active at start.
    pub tool: Tool,
    pub tick_ms: u64,
    /// Log file; no logging when unset.
    pub log_path: Option<PathBuf>,
    pub log_json: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tool: Tool::Flag,
            tick_ms: TICK_MS as u64,
            log_path: None,
            log_json: false,
        }
    }
}

impl GameConfig {
    /// Create from `MINES_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("MINES_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random::<u32>);

        let tool = var("MINES_TOOL")
            .and_then(|s| Tool::from_str(&s))
            .unwrap_or(Tool::Flag);

        let tick_ms = var("MINES_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(TICK_MS as u64);

        let log_path = var("MINES_LOG_PATH").map(PathBuf::from);

        let log_json = var("MINES_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            seed,
            tool,
            tick_ms,
            log_path,
            log_json,
        }
    }
}
