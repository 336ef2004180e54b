//! # Configuration
//!
//! Blogz configuration is managed by [`confique`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Command line flags**: `--data`, `--address`, `--port` (see [`ConfigOverrides`])
//! 2. **Environment variables**: `BLOGZ_DATA_FILE`, `BLOGZ_ADDRESS`, `BLOGZ_PORT`, `BLOGZ_LOG_LEVEL`
//! 3. **Config file**: `blogz.toml` in the working directory, or `--config <path>`.
//!    A missing file is not an error.
//! 4. **Compiled defaults**: via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `data.json` | JSON array holding every post |
//! | `address` | `127.0.0.1` | Interface the server binds to |
//! | `port` | `5000` | Port the server listens on |
//! | `log_level` | `info` | Filter used when `RUST_LOG` is unset |

use crate::error::Result;
use crate::store::fs::DEFAULT_DATA_FILE;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "blogz.toml";

/// Configuration for blogz, stored in `blogz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// Path of the JSON file holding all posts.
    #[config(env = "BLOGZ_DATA_FILE", default = "data.json")]
    pub data_file: PathBuf,

    /// IP address to bind the HTTP server to.
    #[config(env = "BLOGZ_ADDRESS", default = "127.0.0.1")]
    pub address: String,

    /// Port for the HTTP server.
    #[config(env = "BLOGZ_PORT", default = 5000)]
    pub port: u16,

    /// Log filter (tracing `EnvFilter` syntax), used when `RUST_LOG` is unset.
    #[config(env = "BLOGZ_LOG_LEVEL", default = "info")]
    pub log_level: String,
}

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// `#[config(default)]` only takes literals; the test below keeps the two in step.
impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line; `None` keeps whatever the lower layers resolved.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub address: Option<String>,
    pub port: Option<u16>,
}

impl BlogConfig {
    /// Load config from environment and `path`, falling back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::builder().env().file(path.as_ref()).load()?;
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(data_file) = overrides.data_file {
            self.data_file = data_file;
        }
        if let Some(address) = overrides.address {
            self.address = address;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        self
    }
}
