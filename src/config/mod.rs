// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, FixturesConfig, LoggingConfig, SearchVariant, ServerConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("FIXTURE"))
            .set_default("server.host", "127.0.0.1")?
            // Port 0 lets the OS pick; the chosen port is announced on stdout
            .set_default("server.port", 0)?
            .set_default("fixtures.dir", "fixtures")?
            .set_default("fixtures.search_variant", "simple")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
