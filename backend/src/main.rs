//! Backend entry-point: wires the seeding endpoint, health probes and OpenAPI docs.

mod server;

use std::env;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::DatabaseSeeder;
use backend::domain::ports::SeedCommand;
use backend::inbound::http::health::HealthState;
use backend::outbound::memory::InMemorySeedGateway;
use backend::outbound::persistence::{DbPool, DieselSeedGateway, PoolConfig, run_pending_migrations};
use backend::seeding::{SeedSettings, seed_database_on_startup};
use server::{ServerConfig, create_server};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned())
        .parse()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid BIND_ADDR: {e}"),
            )
        })?;
    let settings = SeedSettings::load()
        .map_err(|e| io::Error::other(format!("load seed settings: {e}")))?;

    let seeder = build_seeder().await?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, Arc::clone(&seeder)).with_defaults(settings.counts()),
    )?;
    info!(%bind_addr, "server listening");

    actix_web::rt::spawn(async move {
        if let Err(error) = seed_database_on_startup(&settings, seeder.as_ref()).await {
            error!(%error, "startup seeding failed; serving existing data");
        }
        health_state.mark_ready();
    });

    server.await
}

/// Pick the gateway: PostgreSQL when `DATABASE_URL` is set, memory otherwise.
async fn build_seeder() -> io::Result<Arc<dyn SeedCommand>> {
    let database_url = env::var("DATABASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty());
    let Some(database_url) = database_url else {
        warn!("DATABASE_URL is not set; seeding an in-memory store");
        let gateway = Arc::new(InMemorySeedGateway::new());
        return Ok(Arc::new(DatabaseSeeder::new(gateway, Arc::new(DefaultClock))));
    };

    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|e| io::Error::other(format!("migration task failed: {e}")))?
        .map_err(io::Error::other)?;
    info!(applied, "database migrations complete");

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| io::Error::other(format!("create database pool: {e}")))?;
    let gateway = Arc::new(DieselSeedGateway::new(pool));
    Ok(Arc::new(DatabaseSeeder::new(gateway, Arc::new(DefaultClock))))
}
