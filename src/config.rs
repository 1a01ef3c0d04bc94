use crate::constants::{
    DEFAULT_ADDR, DEFAULT_CORS_MAX_AGE, DEFAULT_PORT, ENV_ACCOUNT_ID, ENV_ACCOUNT_SECRET,
    ENV_ADDR, ENV_CORS_MAX_AGE, ENV_PORT, ENV_STORE,
};
use crate::helpers::get_env;
use serde::Serialize;

/// Which `QrStore` backs the server.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Datastore,
    Memory,
}

impl StoreKind {
    fn from_str_lossy(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("memory") {
            StoreKind::Memory
        } else if value.is_empty() || value.eq_ignore_ascii_case("datastore") {
            StoreKind::Datastore
        } else {
            log::warn!("Unknown '{ENV_STORE}' value '{value}', using datastore");
            StoreKind::Datastore
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct Config {
    pub addr: String,
    pub port: u16,
    pub store: StoreKind,
    pub cors_max_age: usize,
    /// Service account the remote store logs in with.
    pub account_id: String,
    #[serde(skip_serializing)]
    pub account_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            store: StoreKind::Datastore,
            cors_max_age: DEFAULT_CORS_MAX_AGE,
            account_id: String::new(),
            account_secret: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Config::default();

        let port = get_env(ENV_PORT, "").parse().unwrap_or_else(|_| {
            log::debug!("'{ENV_PORT}' not set or invalid, using {}", default.port);
            default.port
        });

        let cors_max_age = get_env(ENV_CORS_MAX_AGE, "")
            .parse()
            .unwrap_or(default.cors_max_age);

        Self {
            addr: get_env(ENV_ADDR, &default.addr),
            port,
            store: StoreKind::from_str_lossy(&get_env(ENV_STORE, "datastore")),
            cors_max_age,
            account_id: get_env(ENV_ACCOUNT_ID, ""),
            account_secret: get_env(ENV_ACCOUNT_SECRET, ""),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.addr.clone(), self.port)
    }
}
