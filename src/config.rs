//! Application-level configuration: listening port, document location, CORS origin and
//! frontend directory.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use axum::http::HeaderValue;
use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://anoop968.github.io";
const DEFAULT_FRONTEND_DIR: &str = "frontend";

const PORT_ENV: &str = "PORT";
const DATA_FILE_ENV: &str = "SCOREBOARD_DATA_FILE";
const ALLOWED_ORIGIN_ENV: &str = "SCOREBOARD_ALLOWED_ORIGIN";
const FRONTEND_DIR_ENV: &str = "SCOREBOARD_FRONTEND_DIR";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    port: u16,
    data_file: PathBuf,
    allowed_origin: HeaderValue,
    frontend_dir: PathBuf,
}

impl AppConfig {
    /// Load the configuration file (if any), then apply environment overrides.
    pub fn load() -> Self {
        Self::from_file(&resolve_config_path()).with_overrides(|key| env::var(key).ok())
    }

    /// Read the JSON configuration at `path`, falling back to built-in defaults.
    pub fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    Self::default().merge(raw)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Apply overrides looked up by environment variable name.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup(PORT_ENV).and_then(|value| match value.parse::<u16>() {
            Ok(port) => Some(port),
            Err(err) => {
                warn!(value = %value, error = %err, "ignoring invalid PORT");
                None
            }
        });

        self.merge(RawConfig {
            port,
            data_file: lookup(DATA_FILE_ENV),
            allowed_origin: lookup(ALLOWED_ORIGIN_ENV),
            frontend_dir: lookup(FRONTEND_DIR_ENV),
        })
    }

    /// TCP port the server listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Path of the persisted scoreboard document.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// The single origin allowed to call the API from a browser.
    pub fn allowed_origin(&self) -> &HeaderValue {
        &self.allowed_origin
    }

    /// Directory served as a static frontend when it exists.
    pub fn frontend_dir(&self) -> &Path {
        &self.frontend_dir
    }

    fn merge(mut self, raw: RawConfig) -> Self {
        if let Some(port) = raw.port {
            self.port = port;
        }
        if let Some(data_file) = raw.data_file.filter(|value| !value.is_empty()) {
            self.data_file = PathBuf::from(data_file);
        }
        if let Some(origin) = raw.allowed_origin {
            match HeaderValue::from_str(&origin) {
                Ok(value) => self.allowed_origin = value,
                Err(err) => warn!(origin = %origin, error = %err, "ignoring invalid allowed origin"),
            }
        }
        if let Some(frontend_dir) = raw.frontend_dir.filter(|value| !value.is_empty()) {
            self.frontend_dir = PathBuf::from(frontend_dir);
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            allowed_origin: HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    data_file: Option<String>,
    #[serde(default)]
    allowed_origin: Option<String>,
    #[serde(default)]
    frontend_dir: Option<String>,
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
