//! Driven port for persisting seed records.
//!
//! The gateway offers create, delete-all and count operations keyed by entity
//! type. Calls are independent: there is no transaction spanning them, so a
//! failed run may leave earlier writes in place.

use std::fmt;

use async_trait::async_trait;
use seed_data::{CommentSeed, LikeSeed, PostSeed, RestaurantSeed, UserSeed};

/// The five record types owned by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Registered users.
    User,
    /// Restaurants reviewed by posts.
    Restaurant,
    /// Review posts.
    Post,
    /// Likes of posts by users.
    Like,
    /// Comments on posts.
    Comment,
}

impl EntityKind {
    /// Deletion order that never removes a parent before its dependants.
    pub const WIPE_ORDER: [Self; 5] = [
        Self::Comment,
        Self::Like,
        Self::Post,
        Self::Restaurant,
        Self::User,
    ];

    /// Lowercase singular name used in logs and error payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Restaurant => "restaurant",
            Self::Post => "post",
            Self::Like => "like",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistence errors raised by seed gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedGatewayError {
    /// A uniqueness constraint rejected the record.
    #[error("duplicate {entity}: {message}")]
    Duplicate {
        /// Entity being written.
        entity: EntityKind,
        /// Adapter diagnostic.
        message: String,
    },
    /// A foreign key rejected the write: a referenced parent is missing, or
    /// a deleted row is still referenced.
    #[error("{entity} reference violation: {message}")]
    ReferenceViolation {
        /// Entity being written or deleted.
        entity: EntityKind,
        /// Adapter diagnostic.
        message: String,
    },
    /// The store could not be reached.
    #[error("seed store connection failed: {message}")]
    Connection {
        /// Adapter diagnostic.
        message: String,
    },
    /// Any other query failure.
    #[error("seed store query failed: {message}")]
    Query {
        /// Adapter diagnostic.
        message: String,
    },
}

impl SeedGatewayError {
    /// Construct a [`SeedGatewayError::Duplicate`].
    pub fn duplicate(entity: EntityKind, message: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            message: message.into(),
        }
    }

    /// Construct a [`SeedGatewayError::ReferenceViolation`].
    pub fn reference_violation(entity: EntityKind, message: impl Into<String>) -> Self {
        Self::ReferenceViolation {
            entity,
            message: message.into(),
        }
    }

    /// Construct a [`SeedGatewayError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`SeedGatewayError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing seed records.
///
/// Implementations must:
/// - Reject a user whose username or email is already stored.
/// - Reject a like duplicating an existing (user, post) pair.
/// - Reject records whose parents are absent, and deletions that would
///   orphan dependants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedGateway: Send + Sync {
    /// Delete every record of `entity`, returning how many were removed.
    async fn delete_all(&self, entity: EntityKind) -> Result<u64, SeedGatewayError>;

    /// Insert a user.
    async fn create_user(&self, user: &UserSeed) -> Result<(), SeedGatewayError>;

    /// Insert a restaurant.
    async fn create_restaurant(&self, restaurant: &RestaurantSeed) -> Result<(), SeedGatewayError>;

    /// Insert a post.
    async fn create_post(&self, post: &PostSeed) -> Result<(), SeedGatewayError>;

    /// Insert a like.
    async fn create_like(&self, like: &LikeSeed) -> Result<(), SeedGatewayError>;

    /// Insert a comment.
    async fn create_comment(&self, comment: &CommentSeed) -> Result<(), SeedGatewayError>;

    /// Count the stored records of `entity`.
    async fn count(&self, entity: EntityKind) -> Result<u64, SeedGatewayError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn wipe_order_removes_dependants_first() {
        let position = |kind| {
            EntityKind::WIPE_ORDER
                .iter()
                .position(|k| *k == kind)
                .expect("kind is in wipe order")
        };
        assert!(position(EntityKind::Comment) < position(EntityKind::Post));
        assert!(position(EntityKind::Like) < position(EntityKind::Post));
        assert!(position(EntityKind::Post) < position(EntityKind::Restaurant));
        assert!(position(EntityKind::Post) < position(EntityKind::User));
    }

    #[rstest]
    #[case(
        SeedGatewayError::duplicate(EntityKind::Like, "pair exists"),
        "duplicate like: pair exists"
    )]
    #[case(
        SeedGatewayError::reference_violation(EntityKind::Post, "user missing"),
        "post reference violation: user missing"
    )]
    #[case(SeedGatewayError::connection("refused"), "seed store connection failed: refused")]
    fn errors_render_entity_and_message(#[case] error: SeedGatewayError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
