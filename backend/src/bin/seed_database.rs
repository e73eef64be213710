//! Wipe and repopulate the feed tables once, then print the run summary.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;

use backend::domain::ports::SeedCommand;
use backend::domain::{DatabaseSeeder, SeedCounts, SeedRequest};
use backend::outbound::persistence::{DbPool, DieselSeedGateway, PoolConfig, run_pending_migrations};
use clap::Parser;
use mockable::DefaultClock;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `seed-database` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seed-database",
    about = "Replace all users, restaurants, posts, likes and comments with fake data",
    version
)]
struct CliArgs {
    /// Users to create.
    #[arg(long, value_name = "count", default_value_t = SeedCounts::default().users)]
    users: u32,
    /// Restaurants to create.
    #[arg(long, value_name = "count", default_value_t = SeedCounts::default().restaurants)]
    restaurants: u32,
    /// Posts to create.
    #[arg(long, value_name = "count", default_value_t = SeedCounts::default().posts)]
    posts: u32,
    /// Fixed random seed for a reproducible run.
    #[arg(long = "rng-seed", value_name = "seed")]
    rng_seed: Option<u64>,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

impl CliArgs {
    fn request(&self) -> SeedRequest {
        SeedRequest::new(SeedCounts::new(self.users, self.restaurants, self.posts))
            .with_rng_seed(self.rng_seed)
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url.clone())?;

    let applied = run_pending_migrations(&database_url)
        .map_err(|error| io::Error::other(format!("apply migrations: {error}")))?;
    info!(applied, "database migrations complete");

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args, database_url))
}

async fn async_main(args: CliArgs, database_url: String) -> io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let seeder = DatabaseSeeder::new(
        Arc::new(DieselSeedGateway::new(pool)),
        Arc::new(DefaultClock),
    );

    let report = seeder
        .seed_database(args.request())
        .await
        .map_err(|error| {
            io::Error::other(format!(
                "seeding failed during {} (partial: {}): {error}",
                error.phase().as_str(),
                error.is_partial()
            ))
        })?;

    let rendered = serde_json::to_string_pretty(&report)
        .map_err(|error| io::Error::other(format!("render report: {error}")))?;
    println!("{rendered}");
    Ok(())
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("DATABASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        ));
    }
    Ok(from_env)
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing helpers.

    use clap::Parser;
    use env_lock::lock_env;
    use rstest::rstest;

    use super::{CliArgs, SeedCounts, resolve_database_url};

    #[rstest]
    fn defaults_match_the_documented_counts() {
        let args = CliArgs::try_parse_from(["seed-database"]).expect("defaults parse");

        assert_eq!(args.request().counts, SeedCounts::new(20, 50, 300));
        assert_eq!(args.request().rng_seed, None);
    }

    #[rstest]
    fn flags_override_counts_and_seed() {
        let args = CliArgs::try_parse_from([
            "seed-database",
            "--users",
            "3",
            "--restaurants",
            "4",
            "--posts",
            "0",
            "--rng-seed",
            "9",
        ])
        .expect("flags parse");

        assert_eq!(args.request().counts, SeedCounts::new(3, 4, 0));
        assert_eq!(args.request().rng_seed, Some(9));
    }

    #[rstest]
    fn negative_counts_are_rejected() {
        assert!(CliArgs::try_parse_from(["seed-database", "--users", "-1"]).is_err());
    }

    #[rstest]
    fn resolve_database_url_rejects_empty_explicit() {
        let error = resolve_database_url(Some("   ".to_owned())).expect_err("empty should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn resolve_database_url_falls_back_to_environment() {
        let _guard = lock_env([("DATABASE_URL", Some("postgres://localhost/feed".to_owned()))]);

        let url = resolve_database_url(None).expect("env fallback");
        assert_eq!(url, "postgres://localhost/feed");
    }

    #[rstest]
    fn resolve_database_url_requires_some_source() {
        let _guard = lock_env([("DATABASE_URL", None::<String>)]);

        let error = resolve_database_url(None).expect_err("missing url");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }
}
