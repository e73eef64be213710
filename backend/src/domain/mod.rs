//! Domain primitives, ports and the seeding service.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - DatabaseSeeder: wipes and repopulates the feed tables.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod seeding;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::seeding::{
    DatabaseSeeder, EngagementSummary, SeedCounts, SeedFailure, SeedPhase, SeedReport, SeedRequest,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
