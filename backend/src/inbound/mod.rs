//! Inbound adapters that translate external requests into domain calls.
//!
//! HTTP handlers live under [`http`]. The one-shot CLI and the startup hook
//! drive the same [`crate::domain::ports::SeedCommand`] port.

pub mod http;
