//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use backend::domain::SeedCounts;
use backend::domain::ports::SeedCommand;

/// Dependencies and settings for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seeder: Arc<dyn SeedCommand>,
    pub(crate) defaults: SeedCounts,
}

impl ServerConfig {
    /// Construct a configuration serving `seeder` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, seeder: Arc<dyn SeedCommand>) -> Self {
        Self {
            bind_addr,
            seeder,
            defaults: SeedCounts::default(),
        }
    }

    /// Counts used when a seed request omits them.
    #[must_use]
    pub fn with_defaults(mut self, defaults: SeedCounts) -> Self {
        self.defaults = defaults;
        self
    }
}
