//! Inputs and outputs of a seeding run.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default number of users per run.
pub const DEFAULT_USERS: u32 = 20;
/// Default number of restaurants per run.
pub const DEFAULT_RESTAURANTS: u32 = 50;
/// Default number of posts per run.
pub const DEFAULT_POSTS: u32 = 300;

/// Record counts for users, restaurants and posts.
///
/// Used both for the requested counts and for the counts actually created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedCounts {
    /// Number of users.
    #[schema(example = 20)]
    pub users: u32,
    /// Number of restaurants.
    #[schema(example = 50)]
    pub restaurants: u32,
    /// Number of posts.
    #[schema(example = 300)]
    pub posts: u32,
}

impl SeedCounts {
    /// Construct counts explicitly.
    pub const fn new(users: u32, restaurants: u32, posts: u32) -> Self {
        Self {
            users,
            restaurants,
            posts,
        }
    }

    /// Whether posts are requested without anyone to write them or anything
    /// to review.
    pub const fn lacks_post_parents(&self) -> bool {
        self.posts > 0 && (self.users == 0 || self.restaurants == 0)
    }
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self::new(DEFAULT_USERS, DEFAULT_RESTAURANTS, DEFAULT_POSTS)
    }
}

/// Parameters for one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedRequest {
    /// Records to create.
    pub counts: SeedCounts,
    /// Fixes the random stream so the run can be replayed.
    pub rng_seed: Option<u64>,
}

impl SeedRequest {
    /// A request for `counts` drawing fresh randomness.
    pub const fn new(counts: SeedCounts) -> Self {
        Self {
            counts,
            rng_seed: None,
        }
    }

    /// Replay the random stream identified by `seed`.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }
}

/// Outcome of the best-effort engagement phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementSummary {
    /// Likes stored.
    pub likes_created: usize,
    /// Likes the gateway rejected.
    pub likes_failed: usize,
    /// Comments stored.
    pub comments_created: usize,
    /// Comments the gateway rejected.
    pub comments_failed: usize,
}

/// Summary returned by a successful run.
///
/// Only users, restaurants and posts are reported in `counts`; engagement
/// totals are logged and kept on [`SeedReport::engagement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SeedReport {
    /// Always `true` for a returned report.
    pub success: bool,
    /// Human-readable summary.
    #[schema(example = "Database seeded successfully")]
    pub message: String,
    /// Records created in this run.
    pub counts: SeedCounts,
    #[serde(skip)]
    engagement: EngagementSummary,
}

impl SeedReport {
    /// Report for a completed run.
    pub fn completed(counts: SeedCounts, engagement: EngagementSummary) -> Self {
        Self {
            success: true,
            message: "Database seeded successfully".to_owned(),
            counts,
            engagement,
        }
    }

    /// Engagement totals for the run.
    pub const fn engagement(&self) -> EngagementSummary {
        self.engagement
    }
}
