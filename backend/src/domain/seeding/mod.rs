//! Database seeding orchestration.
//!
//! A run wipes every feed table, then creates users, restaurants and posts
//! one at a time, and finally fans out likes and comments concurrently.
//! Structural records abort the run on the first failure; engagement records
//! are best-effort and only counted.

mod batch;
mod failure;
mod request;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mockable::Clock;
use seed_data::{
    FakeDataProvider, FakerProvider, PostSeed, RestaurantSeed, UsedValues, UserSeed,
    generate_comments, generate_post, generate_restaurant, generate_user, sample_likes,
};
use tracing::{debug, error, info, warn};

pub use batch::{BatchOutcome, settle_all};
pub use failure::{SeedFailure, SeedPhase};
pub use request::{
    DEFAULT_POSTS, DEFAULT_RESTAURANTS, DEFAULT_USERS, EngagementSummary, SeedCounts, SeedReport,
    SeedRequest,
};

use crate::domain::ports::{EntityKind, SeedCommand, SeedGateway, SeedGatewayError};

/// Holds the single-run flag until dropped.
struct RunGuard {
    running: Arc<AtomicBool>,
}

impl RunGuard {
    fn acquire(running: &Arc<AtomicBool>) -> Option<Self> {
        running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                running: Arc::clone(running),
            })
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
    }
}

/// Service that wipes and repopulates the feed tables.
///
/// At most one run executes at a time per seeder; a concurrent call fails
/// with [`SeedFailure::AlreadyRunning`].
pub struct DatabaseSeeder<G> {
    gateway: Arc<G>,
    clock: Arc<dyn Clock>,
    running: Arc<AtomicBool>,
}

impl<G> DatabaseSeeder<G> {
    /// Create a seeder writing through `gateway`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use backend::domain::DatabaseSeeder;
    /// # use backend::outbound::memory::InMemorySeedGateway;
    /// # use mockable::DefaultClock;
    /// let seeder = DatabaseSeeder::new(
    ///     Arc::new(InMemorySeedGateway::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert!(!seeder.is_running());
    /// ```
    pub fn new(gateway: Arc<G>, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            clock,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run currently holds the seeder.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl<G> DatabaseSeeder<G>
where
    G: SeedGateway,
{
    /// Run a full seeding pass drawing randomness from `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedFailure`] when another run is active, when posts are
    /// requested without users or restaurants, or when a wipe, user,
    /// restaurant or post write fails. Like and comment failures are logged
    /// and counted instead.
    pub async fn seed_with_provider(
        &self,
        counts: SeedCounts,
        provider: &mut dyn FakeDataProvider,
    ) -> Result<SeedReport, SeedFailure> {
        let _guard = RunGuard::acquire(&self.running).ok_or(SeedFailure::AlreadyRunning)?;

        if counts.lacks_post_parents() {
            return Err(SeedFailure::InsufficientSeedData {
                users: counts.users,
                restaurants: counts.restaurants,
                posts: counts.posts,
            });
        }

        info!(
            users = counts.users,
            restaurants = counts.restaurants,
            posts = counts.posts,
            "database seeding started"
        );

        let mut partial = false;
        self.wipe(&mut partial).await?;
        let users = self.create_users(provider, counts.users, &mut partial).await?;
        let restaurants = self
            .create_restaurants(provider, counts.restaurants, &mut partial)
            .await?;
        let posts = self
            .create_posts(provider, &users, &restaurants, counts.posts, &mut partial)
            .await?;
        let engagement = self.create_engagement(provider, &users, &posts).await;

        info!(
            users = users.len(),
            restaurants = restaurants.len(),
            posts = posts.len(),
            likes = engagement.likes_created,
            likes_failed = engagement.likes_failed,
            comments = engagement.comments_created,
            comments_failed = engagement.comments_failed,
            "database seeding completed"
        );

        Ok(SeedReport::completed(counts, engagement))
    }

    async fn wipe(&self, partial: &mut bool) -> Result<(), SeedFailure> {
        for entity in EntityKind::WIPE_ORDER {
            let deleted = self
                .gateway
                .delete_all(entity)
                .await
                .map_err(|source| SeedFailure::Wipe {
                    entity,
                    partial: *partial,
                    source,
                })?;
            *partial = true;
            debug!(%entity, deleted, "cleared records");
        }
        Ok(())
    }

    async fn create_users(
        &self,
        provider: &mut dyn FakeDataProvider,
        count: u32,
        partial: &mut bool,
    ) -> Result<Vec<UserSeed>, SeedFailure> {
        let mut used = UsedValues::new();
        let mut users = Vec::with_capacity(capacity(count));
        for _ in 0..count {
            let user = generate_user(provider, &mut used).map_err(|source| {
                SeedFailure::Generation {
                    entity: EntityKind::User,
                    partial: *partial,
                    source,
                }
            })?;
            self.gateway
                .create_user(&user)
                .await
                .map_err(|source| creation_failure(EntityKind::User, *partial, source))?;
            *partial = true;
            users.push(user);
        }
        Ok(users)
    }

    async fn create_restaurants(
        &self,
        provider: &mut dyn FakeDataProvider,
        count: u32,
        partial: &mut bool,
    ) -> Result<Vec<RestaurantSeed>, SeedFailure> {
        let mut restaurants = Vec::with_capacity(capacity(count));
        for _ in 0..count {
            let restaurant = generate_restaurant(provider);
            self.gateway
                .create_restaurant(&restaurant)
                .await
                .map_err(|source| creation_failure(EntityKind::Restaurant, *partial, source))?;
            *partial = true;
            restaurants.push(restaurant);
        }
        Ok(restaurants)
    }

    async fn create_posts(
        &self,
        provider: &mut dyn FakeDataProvider,
        users: &[UserSeed],
        restaurants: &[RestaurantSeed],
        count: u32,
        partial: &mut bool,
    ) -> Result<Vec<PostSeed>, SeedFailure> {
        let now = self.clock.utc();
        let mut posts = Vec::with_capacity(capacity(count));
        for _ in 0..count {
            let post = generate_post(provider, users, restaurants, now).map_err(|source| {
                SeedFailure::Generation {
                    entity: EntityKind::Post,
                    partial: *partial,
                    source,
                }
            })?;
            self.gateway
                .create_post(&post)
                .await
                .map_err(|source| creation_failure(EntityKind::Post, *partial, source))?;
            *partial = true;
            posts.push(post);
        }
        Ok(posts)
    }

    async fn create_engagement(
        &self,
        provider: &mut dyn FakeDataProvider,
        users: &[UserSeed],
        posts: &[PostSeed],
    ) -> EngagementSummary {
        let now = self.clock.utc();
        let mut likes = Vec::new();
        let mut comments = Vec::new();
        for post in posts {
            likes.extend(sample_likes(provider, users, post));
            comments.extend(generate_comments(provider, users, post, now));
        }

        let like_outcome =
            settle_all(likes.iter().map(|like| self.gateway.create_like(like))).await;
        log_batch_failures(EntityKind::Like, &like_outcome);
        let comment_outcome =
            settle_all(comments.iter().map(|comment| self.gateway.create_comment(comment))).await;
        log_batch_failures(EntityKind::Comment, &comment_outcome);

        EngagementSummary {
            likes_created: like_outcome.succeeded,
            likes_failed: like_outcome.failed.len(),
            comments_created: comment_outcome.succeeded,
            comments_failed: comment_outcome.failed.len(),
        }
    }
}

#[async_trait]
impl<G> SeedCommand for DatabaseSeeder<G>
where
    G: SeedGateway,
{
    async fn seed_database(&self, request: SeedRequest) -> Result<SeedReport, SeedFailure> {
        let mut provider = FakerProvider::from_optional_seed(request.rng_seed);
        let result = self.seed_with_provider(request.counts, &mut provider).await;
        if let Err(failure) = &result {
            error!(
                phase = failure.phase().as_str(),
                partial = failure.is_partial(),
                error = %failure,
                "database seeding failed"
            );
        }
        result
    }
}

fn creation_failure(entity: EntityKind, partial: bool, source: SeedGatewayError) -> SeedFailure {
    SeedFailure::Creation {
        entity,
        partial,
        source,
    }
}

fn capacity(count: u32) -> usize {
    usize::try_from(count).unwrap_or_default()
}

fn log_batch_failures(entity: EntityKind, outcome: &BatchOutcome<SeedGatewayError>) {
    for failure in &outcome.failed {
        debug!(%entity, error = %failure, "engagement record skipped");
    }
    if !outcome.failed.is_empty() {
        warn!(
            %entity,
            created = outcome.succeeded,
            failed = outcome.failed.len(),
            "engagement records dropped"
        );
    }
}
