//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the [`SeedCommand`] port and can be tested with a mock.

use std::sync::Arc;

use crate::domain::SeedCounts;
use crate::domain::ports::SeedCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Seeding use-case.
    pub seeder: Arc<dyn SeedCommand>,
    /// Counts applied when a request omits them.
    pub defaults: SeedCounts,
}

impl HttpState {
    /// Bundle a seeder with its default counts.
    pub fn new(seeder: Arc<dyn SeedCommand>, defaults: SeedCounts) -> Self {
        Self { seeder, defaults }
    }
}
