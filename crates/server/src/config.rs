//! Server configuration from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8000` |
//! | `MODEL_PATH` | `data/model.json` |
//! | `DATASET_PATH` | `data/brain.csv` |
//! | `FRONTEND_DIR` | `frontend` |

use crate::error::{Result, ServerError};
use std::env;
use std::path::PathBuf;

/// Where to listen and which files to serve.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub dataset_path: PathBuf,
    pub frontend_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            model_path: PathBuf::from("data/model.json"),
            dataset_path: PathBuf::from("data/brain.csv"),
            frontend_dir: PathBuf::from("frontend"),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("PORT must be a valid number, got {:?}", raw)))?,
            None => defaults.port,
        };

        // Accept bracketed IPv6 ("[::1]") as well as bare ("::1")
        let host = match lookup("HOST") {
            Some(raw) => {
                let trimmed = raw.trim();
                let host = trimmed
                    .strip_prefix('[')
                    .and_then(|h| h.strip_suffix(']'))
                    .unwrap_or(trimmed);
                if host.is_empty() {
                    return Err(ServerError::Config("HOST must not be empty".to_string()));
                }
                host.to_string()
            }
            None => defaults.host,
        };

        Ok(Self {
            host,
            port,
            model_path: lookup("MODEL_PATH").map(PathBuf::from).unwrap_or(defaults.model_path),
            dataset_path: lookup("DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset_path),
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.frontend_dir),
        })
    }

    /// Listen address for `TcpListener::bind`, which resolves host names.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
