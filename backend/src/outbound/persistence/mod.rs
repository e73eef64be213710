//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Async access goes through `diesel-async` with `bb8` pooling. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module; adapters translate between them and the seed records.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselSeedGateway, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/feed")).await?;
//! let gateway = DieselSeedGateway::new(pool);
//! ```

mod diesel_seed_gateway;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_seed_gateway::DieselSeedGateway;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
