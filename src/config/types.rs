// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub fixtures: FixturesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    /// Port to bind; 0 asks the OS for an ephemeral port.
    pub port: u16,
}

/// Fixture store configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FixturesConfig {
    /// Root directory of the static JSON fixture tree
    pub dir: String,
    /// Which of the two search-route implementations to serve
    pub search_variant: SearchVariant,
}

/// The original fake server shipped two implementations of the search
/// route under the same name; both remain selectable here.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchVariant {
    /// Fixed `search.json` payload, only answers `q=banana`
    Simple,
    /// Parameter-driven lookup over `search/q/` and `search/channelId/`
    Extended,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub show_headers: bool,
}
