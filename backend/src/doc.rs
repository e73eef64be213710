//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the seeding endpoint, the health probes and the
//! schemas they return. Swagger UI serves it at `/docs` in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, SeedCounts, SeedReport};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feed seeding API",
        description = "Regenerates fake feed data for development environments."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::seed::seed_database,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(SeedReport, SeedCounts, Error, ErrorCode)),
    tags(
        (name = "seed", description = "Development data generation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
