//! Startup wiring for database seeding.

mod config;
mod startup;

pub use config::SeedSettings;
pub use startup::{StartupSeedingError, seed_database_on_startup};
