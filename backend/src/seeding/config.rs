//! Seeding configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{SeedCounts, SeedRequest};

/// Configuration controlling default counts and startup seeding.
///
/// Read from `SEED_*` environment variables, configuration files and
/// command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SEED")]
pub struct SeedSettings {
    /// Seed the database once when the server starts.
    #[ortho_config(default = false)]
    pub on_startup: bool,
    /// Users per run; defaults to 20.
    pub users: Option<u32>,
    /// Restaurants per run; defaults to 50.
    pub restaurants: Option<u32>,
    /// Posts per run; defaults to 300.
    pub posts: Option<u32>,
    /// Fixed random seed for reproducible runs.
    pub rng_seed: Option<u64>,
}

impl SeedSettings {
    /// Configured counts, falling back to the defaults field by field.
    pub fn counts(&self) -> SeedCounts {
        let defaults = SeedCounts::default();
        SeedCounts::new(
            self.users.unwrap_or(defaults.users),
            self.restaurants.unwrap_or(defaults.restaurants),
            self.posts.unwrap_or(defaults.posts),
        )
    }

    /// Request built from the configured counts and seed.
    pub fn request(&self) -> SeedRequest {
        SeedRequest::new(self.counts()).with_rng_seed(self.rng_seed)
    }
}
