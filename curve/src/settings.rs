//! Process-level configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the result-cache capacity.
pub const CACHE_CAPACITY_ENV: &str = "LRU_CACHE_MAXSIZE";

/// Capacity used when the environment does not provide one.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Settings read once at process start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum number of memoized results. `0` disables memoization.
    pub cache_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Settings {
    /// Read the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_capacity = match lookup(CACHE_CAPACITY_ENV) {
            None => DEFAULT_CACHE_CAPACITY,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) => capacity,
                Err(err) => {
                    log::warn!(
                        "ignoring {CACHE_CAPACITY_ENV}={raw:?} ({err}), using {DEFAULT_CACHE_CAPACITY}"
                    );
                    DEFAULT_CACHE_CAPACITY
                }
            },
        };

        Settings { cache_capacity }
    }
}
