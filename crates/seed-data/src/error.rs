//! Error types for the seed-data crate.

use thiserror::Error;

/// Errors raised while generating seed records.
///
/// Generation is pure: these errors never describe I/O, only inputs the
/// generators cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A record needs to reference a pool that has no members.
    #[error("cannot draw a {pool} from an empty pool")]
    EmptyPool {
        /// Name of the exhausted pool, e.g. `"user"`.
        pool: &'static str,
    },

    /// A unique field kept colliding with values already issued this run.
    #[error("no unique {field} found after {attempts} attempts")]
    UniqueValueExhausted {
        /// Field that could not be made unique.
        field: &'static str,
        /// Number of draws made before giving up.
        attempts: usize,
    },
}
