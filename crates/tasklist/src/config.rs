//! Process configuration.
//!
//! Read once at startup from the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TASKLIST_HOST` | `127.0.0.1` | bind address |
//! | `PORT` | `3000` | bind port |
//! | `TASKLIST_FIRST_ID` | `1` | first item id |
//! | `TASKLIST_DEMO` | `true` | seed the demo items |

use std::net::IpAddr;
use std::str::FromStr;

use tasklist_core::ItemId;
use tasklist_http::ServerConfig;
use tasklist_store::StoreConfig;

use crate::error::{Result, TaskListError};

pub const HOST_VAR: &str = "TASKLIST_HOST";
pub const PORT_VAR: &str = "PORT";
pub const FIRST_ID_VAR: &str = "TASKLIST_FIRST_ID";
pub const DEMO_VAR: &str = "TASKLIST_DEMO";

/// Configuration for one Tasklist process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listening address.
    pub server: ServerConfig,
    /// Id seed and initial items.
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default().with_demo_items(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = parse_var::<IpAddr, _>(&lookup, HOST_VAR)? {
            config.server.host = host;
        }
        if let Some(port) = parse_var::<u16, _>(&lookup, PORT_VAR)? {
            config.server.port = port;
        }
        if let Some(first_id) = parse_var::<ItemId, _>(&lookup, FIRST_ID_VAR)? {
            config.store.first_id = first_id;
        }
        if let Some(value) = lookup(DEMO_VAR) {
            if !parse_flag(DEMO_VAR, &value)? {
                config.store.seed.clear();
            }
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| TaskListError::Config {
            var,
            value,
            reason: e.to_string(),
        })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(TaskListError::Config {
            var,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
