//! Errors that abort a seeding run.

use seed_data::GenerationError;

use crate::domain::ports::{EntityKind, SeedGatewayError};

/// Phase of a run in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPhase {
    /// Guard checks before anything is written.
    Preflight,
    /// Deleting previous records.
    Wipe,
    /// Creating users.
    Users,
    /// Creating restaurants.
    Restaurants,
    /// Creating posts.
    Posts,
}

impl SeedPhase {
    /// Lowercase label used in logs and error details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preflight => "preflight",
            Self::Wipe => "wipe",
            Self::Users => "users",
            Self::Restaurants => "restaurants",
            Self::Posts => "posts",
        }
    }

    pub(crate) const fn creating(entity: EntityKind) -> Self {
        match entity {
            EntityKind::User => Self::Users,
            EntityKind::Restaurant => Self::Restaurants,
            EntityKind::Post | EntityKind::Like | EntityKind::Comment => Self::Posts,
        }
    }
}

/// Fatal seeding failure.
///
/// `partial` is `true` once any delete or insert of the run succeeded; there
/// is no rollback, so such a run leaves the store in a mixed state.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedFailure {
    /// Another run holds the seeder.
    #[error("a seeding run is already in progress")]
    AlreadyRunning,
    /// Posts were requested without users or restaurants to reference.
    #[error("cannot create {posts} posts from {users} users and {restaurants} restaurants")]
    InsufficientSeedData {
        /// Requested users.
        users: u32,
        /// Requested restaurants.
        restaurants: u32,
        /// Requested posts.
        posts: u32,
    },
    /// Deleting previous records failed.
    #[error("failed to clear {entity} records: {source}")]
    Wipe {
        /// Entity whose deletion failed.
        entity: EntityKind,
        /// Whether earlier writes of the run succeeded.
        partial: bool,
        /// Gateway error.
        source: SeedGatewayError,
    },
    /// Inserting a user, restaurant or post failed.
    #[error("failed to create {entity}: {source}")]
    Creation {
        /// Entity whose insert failed.
        entity: EntityKind,
        /// Whether earlier writes of the run succeeded.
        partial: bool,
        /// Gateway error.
        source: SeedGatewayError,
    },
    /// Generating a record failed before it reached the gateway.
    #[error("failed to generate {entity}: {source}")]
    Generation {
        /// Entity being generated.
        entity: EntityKind,
        /// Whether earlier writes of the run succeeded.
        partial: bool,
        /// Generator error.
        source: GenerationError,
    },
}

impl SeedFailure {
    /// Phase in which the run stopped.
    pub const fn phase(&self) -> SeedPhase {
        match self {
            Self::AlreadyRunning | Self::InsufficientSeedData { .. } => SeedPhase::Preflight,
            Self::Wipe { .. } => SeedPhase::Wipe,
            Self::Creation { entity, .. } | Self::Generation { entity, .. } => {
                SeedPhase::creating(*entity)
            }
        }
    }

    /// Whether the run changed stored data before failing.
    pub const fn is_partial(&self) -> bool {
        match self {
            Self::AlreadyRunning | Self::InsufficientSeedData { .. } => false,
            Self::Wipe { partial, .. }
            | Self::Creation { partial, .. }
            | Self::Generation { partial, .. } => *partial,
        }
    }

    /// Gateway error behind the failure, if any.
    pub const fn gateway_error(&self) -> Option<&SeedGatewayError> {
        match self {
            Self::Wipe { source, .. } | Self::Creation { source, .. } => Some(source),
            Self::AlreadyRunning
            | Self::InsufficientSeedData { .. }
            | Self::Generation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn preflight_failures_are_never_partial() {
        let failure = SeedFailure::InsufficientSeedData {
            users: 0,
            restaurants: 3,
            posts: 5,
        };
        assert!(!failure.is_partial());
        assert_eq!(failure.phase(), SeedPhase::Preflight);
        assert_eq!(
            failure.to_string(),
            "cannot create 5 posts from 0 users and 3 restaurants"
        );
    }

    #[rstest]
    #[case(EntityKind::User, SeedPhase::Users)]
    #[case(EntityKind::Restaurant, SeedPhase::Restaurants)]
    #[case(EntityKind::Post, SeedPhase::Posts)]
    fn creation_failures_report_their_phase(#[case] entity: EntityKind, #[case] phase: SeedPhase) {
        let failure = SeedFailure::Creation {
            entity,
            partial: true,
            source: SeedGatewayError::query("boom"),
        };
        assert_eq!(failure.phase(), phase);
        assert!(failure.is_partial());
        assert!(failure.gateway_error().is_some());
    }

    #[rstest]
    fn wipe_failure_names_the_entity() {
        let failure = SeedFailure::Wipe {
            entity: EntityKind::Like,
            partial: false,
            source: SeedGatewayError::connection("refused"),
        };
        assert_eq!(
            failure.to_string(),
            "failed to clear like records: seed store connection failed: refused"
        );
    }
}
