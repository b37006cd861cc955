use railmock_core::{operation::UnknownOperation, FaultSpec, Operation};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    /// Operation name -> artificial latency in milliseconds.
    #[serde(default)]
    pub delays: HashMap<String, u64>,
    #[serde(default)]
    pub fault: FaultSpec,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { cookie_name: default_cookie_name() }
    }
}

fn default_cookie_name() -> String {
    "session_isutrain".to_string()
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. RAILMOCK__DELAYS__LOGIN=250
            .add_source(config::Environment::with_prefix("RAILMOCK").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(raw: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Resolves the `delays` table, rejecting names that are not operations.
    pub fn delay_table(&self) -> Result<BTreeMap<Operation, Duration>, UnknownOperation> {
        self.delays
            .iter()
            .map(|(name, millis)| {
                name.parse::<Operation>()
                    .map(|op| (op, Duration::from_millis(*millis)))
            })
            .collect()
    }
}
