//! Backend library modules.
//!
//! The feed seeder lives in [`domain`]; [`inbound`] and the binaries drive
//! it, and [`outbound`] stores what it generates.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
