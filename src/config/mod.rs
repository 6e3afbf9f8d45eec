// Configuration module entry point
// Loads application configuration and holds the shared runtime state

mod state;
mod types;

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use crate::error::StartupError;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, FixtureConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variables as seen by the config loader
pub type EnvVars = config::Map<String, String>;

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources, lowest priority first: built-in defaults, the config file,
    /// `CSP_FIXTURE_*` variables, then bare `HOST` and `PORT`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        // Variables that are not valid UTF-8 cannot name a setting
        let env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::load_with_env(config_path, env)
    }

    /// Like [`Config::load_from`], reading variables from `env` instead of
    /// the process environment
    pub fn load_with_env(config_path: &str, env: EnvVars) -> Result<Self, config::ConfigError> {
        let host = non_empty_env(&env, "HOST");
        let port = non_empty_env(&env, "PORT");

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("CSP_FIXTURE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(env)),
            )
            .set_default("server.host", "localhost")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.title_case_headers", true)?
            .set_override_option("server.host", host)?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the listen address, preferring IPv4 when the host name maps to several
    pub fn get_socket_addr(&self) -> Result<SocketAddr, StartupError> {
        let target = format!("{}:{}", self.server.host, self.server.port);
        let addrs: Vec<SocketAddr> = (self.server.host.as_str(), self.server.port)
            .to_socket_addrs()
            .map_err(|e| StartupError::Address(format!("{target}: {e}")))?
            .collect();

        addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| StartupError::Address(format!("{target}: no addresses found")))
    }

    /// Directory fixture files are resolved against
    pub fn root_dir(&self) -> Result<PathBuf, StartupError> {
        match &self.fixture.root_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => std::env::current_dir().map_err(StartupError::WorkingDir),
        }
    }
}

/// Environment value, treating an empty variable as unset
fn non_empty_env(env: &EnvVars, key: &str) -> Option<String> {
    env.get(key).filter(|v| !v.is_empty()).cloned()
}
