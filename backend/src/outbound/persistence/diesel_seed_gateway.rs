//! PostgreSQL-backed seed gateway.
//!
//! Each call checks out its own pooled connection and runs a single
//! statement outside any transaction, so concurrent engagement inserts
//! spread across the pool.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use seed_data::{CommentSeed, LikeSeed, PostSeed, RestaurantSeed, UserSeed};
use tracing::debug;

use crate::domain::ports::{EntityKind, SeedGateway, SeedGatewayError};

use super::models::{NewCommentRow, NewLikeRow, NewPostRow, NewRestaurantRow, NewUserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{comments, likes, posts, restaurants, users};

/// Diesel-backed implementation of [`SeedGateway`].
#[derive(Clone)]
pub struct DieselSeedGateway {
    pool: DbPool,
}

impl DieselSeedGateway {
    /// Create a gateway over `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use backend::outbound::persistence::{DbPool, DieselSeedGateway, PoolConfig};
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/feed")).await?;
    /// let gateway = DieselSeedGateway::new(pool);
    /// # let _ = gateway;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> SeedGatewayError {
    SeedGatewayError::connection(error.message())
}

fn map_diesel_error(entity: EntityKind, error: diesel::result::Error) -> SeedGatewayError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let error_message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                %entity,
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            %entity,
            error_type = %std::any::type_name_of_val(&error),
            error = %error_message,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            SeedGatewayError::duplicate(entity, info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            SeedGatewayError::reference_violation(entity, info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            SeedGatewayError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => SeedGatewayError::query(info.message()),
        _ => SeedGatewayError::query(error_message),
    }
}

fn row_count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}

#[async_trait]
impl SeedGateway for DieselSeedGateway {
    async fn delete_all(&self, entity: EntityKind) -> Result<u64, SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = match entity {
            EntityKind::Comment => diesel::delete(comments::table).execute(&mut conn).await,
            EntityKind::Like => diesel::delete(likes::table).execute(&mut conn).await,
            EntityKind::Post => diesel::delete(posts::table).execute(&mut conn).await,
            EntityKind::Restaurant => diesel::delete(restaurants::table).execute(&mut conn).await,
            EntityKind::User => diesel::delete(users::table).execute(&mut conn).await,
        }
        .map_err(|err| map_diesel_error(entity, err))?;
        Ok(row_count(deleted))
    }

    async fn create_user(&self, user: &UserSeed) -> Result<(), SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(EntityKind::User, err))?;
        Ok(())
    }

    async fn create_restaurant(&self, restaurant: &RestaurantSeed) -> Result<(), SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(restaurants::table)
            .values(NewRestaurantRow::from(restaurant))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(EntityKind::Restaurant, err))?;
        Ok(())
    }

    async fn create_post(&self, post: &PostSeed) -> Result<(), SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(posts::table)
            .values(NewPostRow::from(post))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(EntityKind::Post, err))?;
        Ok(())
    }

    async fn create_like(&self, like: &LikeSeed) -> Result<(), SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(likes::table)
            .values(NewLikeRow::from(like))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(EntityKind::Like, err))?;
        Ok(())
    }

    async fn create_comment(&self, comment: &CommentSeed) -> Result<(), SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(comments::table)
            .values(NewCommentRow::from(comment))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(EntityKind::Comment, err))?;
        Ok(())
    }

    async fn count(&self, entity: EntityKind) -> Result<u64, SeedGatewayError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = match entity {
            EntityKind::Comment => comments::table.count().get_result(&mut conn).await,
            EntityKind::Like => likes::table.count().get_result(&mut conn).await,
            EntityKind::Post => posts::table.count().get_result(&mut conn).await,
            EntityKind::Restaurant => restaurants::table.count().get_result(&mut conn).await,
            EntityKind::User => users::table.count().get_result(&mut conn).await,
        }
        .map_err(|err| map_diesel_error(entity, err))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for seed gateway error mapping.
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));

        assert_eq!(err, SeedGatewayError::connection("connection refused"));
    }

    #[rstest]
    #[case(
        DatabaseErrorKind::UniqueViolation,
        SeedGatewayError::duplicate(EntityKind::User, "users_username_key")
    )]
    #[case(
        DatabaseErrorKind::ForeignKeyViolation,
        SeedGatewayError::reference_violation(EntityKind::User, "users_username_key")
    )]
    #[case(
        DatabaseErrorKind::ClosedConnection,
        SeedGatewayError::connection("users_username_key")
    )]
    #[case(
        DatabaseErrorKind::SerializationFailure,
        SeedGatewayError::query("users_username_key")
    )]
    fn database_errors_map_by_kind(
        #[case] kind: DatabaseErrorKind,
        #[case] expected: SeedGatewayError,
    ) {
        let err = map_diesel_error(EntityKind::User, database_error(kind, "users_username_key"));

        assert_eq!(err, expected);
    }

    #[rstest]
    fn other_diesel_errors_map_to_query_error() {
        let err = map_diesel_error(EntityKind::Post, DieselError::NotFound);

        assert!(matches!(err, SeedGatewayError::Query { .. }));
        assert!(err.to_string().contains("not found"));
    }
}
