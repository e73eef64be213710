//! Outbound adapters implementing the seed gateway port.
//!
//! - **persistence**: PostgreSQL via Diesel
//! - **memory**: process-local tables for runs without a database
//!
//! Adapters only translate between seed records and storage. They contain no
//! seeding logic.

pub mod memory;
pub mod persistence;
