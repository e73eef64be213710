//! In-process seed store.
//!
//! Used when no `DATABASE_URL` is configured and by the behaviour tests. It
//! enforces the same uniqueness and referential rules as the PostgreSQL
//! schema so runs behave alike against either adapter.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use seed_data::{CommentSeed, LikeSeed, PostSeed, RestaurantSeed, UserSeed};
use uuid::Uuid;

use crate::domain::ports::{EntityKind, SeedGateway, SeedGatewayError};

/// Records currently held by an [`InMemorySeedGateway`].
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    /// Stored users.
    pub users: Vec<UserSeed>,
    /// Stored restaurants.
    pub restaurants: Vec<RestaurantSeed>,
    /// Stored posts.
    pub posts: Vec<PostSeed>,
    /// Stored likes.
    pub likes: Vec<LikeSeed>,
    /// Stored comments.
    pub comments: Vec<CommentSeed>,
}

impl MemoryTables {
    fn len(&self, entity: EntityKind) -> usize {
        match entity {
            EntityKind::User => self.users.len(),
            EntityKind::Restaurant => self.restaurants.len(),
            EntityKind::Post => self.posts.len(),
            EntityKind::Like => self.likes.len(),
            EntityKind::Comment => self.comments.len(),
        }
    }

    /// Whether rows of another table still point at `entity`.
    fn is_referenced(&self, entity: EntityKind) -> bool {
        match entity {
            EntityKind::User => {
                !self.posts.is_empty() || !self.likes.is_empty() || !self.comments.is_empty()
            }
            EntityKind::Restaurant => !self.posts.is_empty(),
            EntityKind::Post => !self.likes.is_empty() || !self.comments.is_empty(),
            EntityKind::Like | EntityKind::Comment => false,
        }
    }
}

/// Unique keys of the stored rows, mirroring the schema's constraints.
#[derive(Debug, Default)]
struct Keys {
    user_ids: HashSet<Uuid>,
    usernames: HashSet<String>,
    emails: HashSet<String>,
    restaurant_ids: HashSet<Uuid>,
    post_ids: HashSet<Uuid>,
    like_pairs: HashSet<(Uuid, Uuid)>,
}

impl Keys {
    fn clear(&mut self, entity: EntityKind) {
        match entity {
            EntityKind::User => {
                self.user_ids.clear();
                self.usernames.clear();
                self.emails.clear();
            }
            EntityKind::Restaurant => self.restaurant_ids.clear(),
            EntityKind::Post => self.post_ids.clear(),
            EntityKind::Like => self.like_pairs.clear(),
            EntityKind::Comment => {}
        }
    }

    fn duplicate_user_field(&self, user: &UserSeed) -> Option<&'static str> {
        if self.user_ids.contains(&user.id) {
            Some("id")
        } else if self.usernames.contains(&user.username) {
            Some("username")
        } else if self.emails.contains(&user.email) {
            Some("email")
        } else {
            None
        }
    }

    fn require_parents(
        &self,
        entity: EntityKind,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<(), SeedGatewayError> {
        if !self.user_ids.contains(&user_id) {
            return Err(SeedGatewayError::reference_violation(
                entity,
                format!("user {user_id} does not exist"),
            ));
        }
        if !self.post_ids.contains(&post_id) {
            return Err(SeedGatewayError::reference_violation(
                entity,
                format!("post {post_id} does not exist"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Store {
    tables: MemoryTables,
    keys: Keys,
}

impl Store {
    fn clear(&mut self, entity: EntityKind) {
        match entity {
            EntityKind::User => self.tables.users.clear(),
            EntityKind::Restaurant => self.tables.restaurants.clear(),
            EntityKind::Post => self.tables.posts.clear(),
            EntityKind::Like => self.tables.likes.clear(),
            EntityKind::Comment => self.tables.comments.clear(),
        }
        self.keys.clear(entity);
    }
}

/// Mutex-guarded implementation of [`SeedGateway`].
///
/// Uniqueness and parent checks use hashed keys, so each insert costs the
/// same however many rows are stored.
#[derive(Debug, Default)]
pub struct InMemorySeedGateway {
    store: Mutex<Store>,
}

impl InMemorySeedGateway {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`SeedGatewayError::Connection`] when the store lock is
    /// poisoned.
    pub fn snapshot(&self) -> Result<MemoryTables, SeedGatewayError> {
        self.lock().map(|store| store.tables.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, SeedGatewayError> {
        self.store
            .lock()
            .map_err(|_| SeedGatewayError::connection("in-memory seed store lock poisoned"))
    }
}

#[async_trait]
impl SeedGateway for InMemorySeedGateway {
    async fn delete_all(&self, entity: EntityKind) -> Result<u64, SeedGatewayError> {
        let mut store = self.lock()?;
        if store.tables.is_referenced(entity) {
            return Err(SeedGatewayError::reference_violation(
                entity,
                "rows are still referenced by dependent records",
            ));
        }
        let removed = store.tables.len(entity);
        store.clear(entity);
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }

    async fn create_user(&self, user: &UserSeed) -> Result<(), SeedGatewayError> {
        let mut store = self.lock()?;
        if let Some(field) = store.keys.duplicate_user_field(user) {
            return Err(SeedGatewayError::duplicate(
                EntityKind::User,
                format!("{field} already exists"),
            ));
        }
        store.keys.user_ids.insert(user.id);
        store.keys.usernames.insert(user.username.clone());
        store.keys.emails.insert(user.email.clone());
        store.tables.users.push(user.clone());
        Ok(())
    }

    async fn create_restaurant(&self, restaurant: &RestaurantSeed) -> Result<(), SeedGatewayError> {
        let mut store = self.lock()?;
        if !store.keys.restaurant_ids.insert(restaurant.id) {
            return Err(SeedGatewayError::duplicate(
                EntityKind::Restaurant,
                "id already exists",
            ));
        }
        store.tables.restaurants.push(restaurant.clone());
        Ok(())
    }

    async fn create_post(&self, post: &PostSeed) -> Result<(), SeedGatewayError> {
        let mut store = self.lock()?;
        if store.keys.post_ids.contains(&post.id) {
            return Err(SeedGatewayError::duplicate(EntityKind::Post, "id already exists"));
        }
        if !store.keys.user_ids.contains(&post.user_id) {
            return Err(SeedGatewayError::reference_violation(
                EntityKind::Post,
                format!("user {} does not exist", post.user_id),
            ));
        }
        if !store.keys.restaurant_ids.contains(&post.restaurant_id) {
            return Err(SeedGatewayError::reference_violation(
                EntityKind::Post,
                format!("restaurant {} does not exist", post.restaurant_id),
            ));
        }
        store.keys.post_ids.insert(post.id);
        store.tables.posts.push(post.clone());
        Ok(())
    }

    async fn create_like(&self, like: &LikeSeed) -> Result<(), SeedGatewayError> {
        let mut store = self.lock()?;
        store.keys.require_parents(EntityKind::Like, like.user_id, like.post_id)?;
        if !store.keys.like_pairs.insert((like.user_id, like.post_id)) {
            return Err(SeedGatewayError::duplicate(
                EntityKind::Like,
                "user already likes this post",
            ));
        }
        store.tables.likes.push(*like);
        Ok(())
    }

    async fn create_comment(&self, comment: &CommentSeed) -> Result<(), SeedGatewayError> {
        let mut store = self.lock()?;
        store.keys.require_parents(EntityKind::Comment, comment.user_id, comment.post_id)?;
        store.tables.comments.push(comment.clone());
        Ok(())
    }

    async fn count(&self, entity: EntityKind) -> Result<u64, SeedGatewayError> {
        let store = self.lock()?;
        Ok(u64::try_from(store.tables.len(entity)).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use mockable::DefaultClock;
    use rstest::{fixture, rstest};
    use seed_data::{
        FakerProvider, UsedValues, generate_post, generate_restaurant, generate_user,
    };

    use super::*;
    use crate::domain::{DatabaseSeeder, SeedCounts};

    #[fixture]
    fn provider() -> FakerProvider {
        FakerProvider::from_seed(5)
    }

    async fn store_with_post(provider: &mut FakerProvider) -> (InMemorySeedGateway, PostSeed) {
        let gateway = InMemorySeedGateway::new();
        let mut used = UsedValues::new();
        let user = generate_user(provider, &mut used).expect("user");
        let restaurant = generate_restaurant(provider);
        let post = generate_post(
            provider,
            std::slice::from_ref(&user),
            std::slice::from_ref(&restaurant),
            chrono::Utc::now(),
        )
        .expect("post");
        gateway.create_user(&user).await.expect("insert user");
        gateway
            .create_restaurant(&restaurant)
            .await
            .expect("insert restaurant");
        gateway.create_post(&post).await.expect("insert post");
        (gateway, post)
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_duplicate_usernames(mut provider: FakerProvider) {
        let gateway = InMemorySeedGateway::new();
        let user = generate_user(&mut provider, &mut UsedValues::new()).expect("user");
        let mut twin = generate_user(&mut provider, &mut UsedValues::new()).expect("user");
        twin.username.clone_from(&user.username);

        gateway.create_user(&user).await.expect("first insert");
        let err = gateway.create_user(&twin).await.expect_err("duplicate");

        assert_eq!(
            err,
            SeedGatewayError::duplicate(EntityKind::User, "username already exists")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_orphan_posts(mut provider: FakerProvider) {
        let gateway = InMemorySeedGateway::new();
        let user = generate_user(&mut provider, &mut UsedValues::new()).expect("user");
        let restaurant = generate_restaurant(&mut provider);
        let post = generate_post(
            &mut provider,
            std::slice::from_ref(&user),
            std::slice::from_ref(&restaurant),
            chrono::Utc::now(),
        )
        .expect("post");

        let err = gateway.create_post(&post).await.expect_err("no parents");

        assert!(matches!(
            err,
            SeedGatewayError::ReferenceViolation {
                entity: EntityKind::Post,
                ..
            }
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_a_second_like_for_the_same_pair(mut provider: FakerProvider) {
        let (gateway, post) = store_with_post(&mut provider).await;
        let like = LikeSeed {
            id: Uuid::new_v4(),
            user_id: post.user_id,
            post_id: post.id,
        };
        let again = LikeSeed {
            id: Uuid::new_v4(),
            ..like
        };

        gateway.create_like(&like).await.expect("first like");
        let err = gateway.create_like(&again).await.expect_err("duplicate pair");

        assert!(matches!(err, SeedGatewayError::Duplicate { .. }));
        assert_eq!(gateway.count(EntityKind::Like).await.expect("count"), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn refuses_to_orphan_dependants(mut provider: FakerProvider) {
        let (gateway, _post) = store_with_post(&mut provider).await;

        let err = gateway
            .delete_all(EntityKind::User)
            .await
            .expect_err("posts still reference users");

        assert!(matches!(err, SeedGatewayError::ReferenceViolation { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn wipe_order_clears_everything(mut provider: FakerProvider) {
        let (gateway, _post) = store_with_post(&mut provider).await;

        for entity in EntityKind::WIPE_ORDER {
            gateway.delete_all(entity).await.expect("delete");
        }

        for entity in EntityKind::WIPE_ORDER {
            assert_eq!(gateway.count(entity).await.expect("count"), 0);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn wiped_usernames_can_be_reused(mut provider: FakerProvider) {
        let gateway = InMemorySeedGateway::new();
        let user = generate_user(&mut provider, &mut UsedValues::new()).expect("user");
        gateway.create_user(&user).await.expect("first insert");

        gateway.delete_all(EntityKind::User).await.expect("no dependants");
        gateway.create_user(&user).await.expect("keys were cleared");

        assert_eq!(gateway.count(EntityKind::User).await.expect("count"), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_likes_for_wiped_posts(mut provider: FakerProvider) {
        let (gateway, post) = store_with_post(&mut provider).await;
        gateway.delete_all(EntityKind::Post).await.expect("no dependants");

        let err = gateway
            .create_like(&LikeSeed {
                id: Uuid::new_v4(),
                user_id: post.user_id,
                post_id: post.id,
            })
            .await
            .expect_err("post is gone");

        assert!(matches!(err, SeedGatewayError::ReferenceViolation { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn large_run_keeps_every_constraint() {
        let gateway = Arc::new(InMemorySeedGateway::new());
        let seeder = DatabaseSeeder::new(Arc::clone(&gateway), Arc::new(DefaultClock));
        let mut provider = FakerProvider::from_seed(11);

        let report = seeder
            .seed_with_provider(SeedCounts::new(1_000, 50, 5_000), &mut provider)
            .await
            .expect("seeding succeeds");

        let tables = gateway.snapshot().expect("snapshot");
        let engagement = report.engagement();
        assert_eq!(tables.users.len(), 1_000);
        assert_eq!(tables.posts.len(), 5_000);
        assert_eq!(tables.likes.len(), engagement.likes_created);
        assert_eq!(engagement.likes_failed, 0);

        let usernames: HashSet<_> = tables.users.iter().map(|user| &user.username).collect();
        let pairs: HashSet<_> = tables
            .likes
            .iter()
            .map(|like| (like.user_id, like.post_id))
            .collect();
        assert_eq!(usernames.len(), tables.users.len());
        assert_eq!(pairs.len(), tables.likes.len());
    }
}
