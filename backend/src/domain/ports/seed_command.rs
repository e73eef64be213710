//! Driving port for triggering a seeding run.
//!
//! Inbound adapters (the HTTP endpoint, startup hook and CLI) depend on this
//! port rather than on the concrete seeder, so handlers can be tested with a
//! mock.

use async_trait::async_trait;

use crate::domain::seeding::{SeedFailure, SeedReport, SeedRequest};

/// Use-case port for wiping and repopulating the feed data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedCommand: Send + Sync {
    /// Wipe existing feed data and insert a fresh randomised set.
    async fn seed_database(&self, request: SeedRequest) -> Result<SeedReport, SeedFailure>;
}
