mod basic;
mod cors;

pub use basic::BasicConfig;
pub use cors::CorsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Browser cross-origin policy (see `cors` table in config.toml).
    #[serde(default)]
    pub cors: CorsConfig,
}

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `TICKLIST_BASIC__LISTEN_PORT=9000`.
pub const ENV_PREFIX: &str = "TICKLIST_";

impl Config {
    /// Builds a Figment that merges defaults, an optional TOML file and `TICKLIST_*` env vars.
    pub fn figment_from(path: impl AsRef<Path>) -> Figment {
        let path = path.as_ref();
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if path.is_file() {
            figment.merge(Toml::file(path))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn figment() -> Figment {
        Self::figment_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }
}
