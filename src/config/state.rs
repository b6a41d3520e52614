// Application state module
// Immutable process-wide state shared by reference with every handler

use super::types::Config;
use crate::handler::fixtures::FixtureStore;

/// Application state
///
/// Built once at startup and never mutated afterwards; request handlers
/// only read from it, so no locking is needed.
pub struct AppState {
    pub config: Config,
    pub store: FixtureStore,
}

impl AppState {
    pub const fn new(config: Config, store: FixtureStore) -> Self {
        Self { config, store }
    }
}
