//! # Configuration
//!
//! Runtime settings read from the environment. Unset or unparseable variables
//! fall back to their defaults.
//!
//! | Variable | Default |
//! |---|---|
//! | `CART_API_URL` | `http://localhost:3333` |
//! | `CART_STORE_DIR` | `.cart-store` |
//! | `CART_STORAGE_KEY` | `@RocketShoes:cart` |
//! | `CART_CHANNEL_CAPACITY` | `32` |
//! | `CART_API_TIMEOUT_MS` | unset (no timeout) |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::storage::DEFAULT_CART_KEY;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORE_DIR: &str = ".cart-store";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Base URL of the catalog API.
    pub api_url: String,
    /// Root directory of the file-backed store.
    pub store_dir: PathBuf,
    /// Key the cart is persisted under.
    pub storage_key: String,
    /// Mailbox capacity of the cart actor.
    pub channel_capacity: usize,
    /// Per-request bound on catalog calls. `None` waits indefinitely.
    pub api_timeout: Option<Duration>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            storage_key: DEFAULT_CART_KEY.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            api_timeout: None,
        }
    }
}

impl CartConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: non_empty(lookup("CART_API_URL")).unwrap_or(defaults.api_url),
            store_dir: non_empty(lookup("CART_STORE_DIR"))
                .map(PathBuf::from)
                .unwrap_or(defaults.store_dir),
            storage_key: non_empty(lookup("CART_STORAGE_KEY")).unwrap_or(defaults.storage_key),
            channel_capacity: lookup("CART_CHANNEL_CAPACITY")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.channel_capacity),
            api_timeout: lookup("CART_API_TIMEOUT_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
