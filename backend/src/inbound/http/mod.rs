//! HTTP inbound adapter exposing the seeding and health endpoints.

pub mod error;
pub mod health;
pub mod seed;
pub mod state;

pub use error::ApiResult;
