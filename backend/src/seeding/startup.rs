//! Startup seeding orchestration.

use thiserror::Error;
use tracing::info;

use crate::domain::ports::SeedCommand;
use crate::domain::{SeedFailure, SeedReport};
use crate::seeding::config::SeedSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// The seeding run failed.
    #[error("startup seeding failed: {0}")]
    Seeding(#[from] SeedFailure),
}

/// Seed the database on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use backend::domain::DatabaseSeeder;
/// use backend::outbound::memory::InMemorySeedGateway;
/// use backend::seeding::{SeedSettings, seed_database_on_startup};
/// use mockable::DefaultClock;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SeedSettings {
///     on_startup: false,
///     users: None,
///     restaurants: None,
///     posts: None,
///     rng_seed: None,
/// };
/// let seeder = DatabaseSeeder::new(Arc::new(InMemorySeedGateway::new()), Arc::new(DefaultClock));
/// let report = seed_database_on_startup(&settings, &seeder).await?;
/// assert!(report.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_database_on_startup(
    settings: &SeedSettings,
    seeder: &dyn SeedCommand,
) -> Result<Option<SeedReport>, StartupSeedingError> {
    if !settings.on_startup {
        info!(reason = "disabled", "startup seeding skipped");
        return Ok(None);
    }

    let report = seeder.seed_database(settings.request()).await?;
    info!(
        users = report.counts.users,
        restaurants = report.counts.restaurants,
        posts = report.counts.posts,
        "startup seeding applied"
    );
    Ok(Some(report))
}
