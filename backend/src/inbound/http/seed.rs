//! Seeding endpoint.
//!
//! `POST /seed/database` wipes and repopulates the feed tables, returning the
//! run summary. Query parameters override the configured counts per call.

use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::ports::SeedGatewayError;
use crate::domain::{Error, SeedCounts, SeedFailure, SeedReport, SeedRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Upper bound on users or restaurants per request.
pub const MAX_PARENT_COUNT: u32 = 10_000;
/// Upper bound on posts per request.
pub const MAX_POST_COUNT: u32 = 100_000;

/// Optional per-request overrides.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct SeedDatabaseQuery {
    /// Users to create, at most 10000.
    pub users: Option<u32>,
    /// Restaurants to create, at most 10000.
    pub restaurants: Option<u32>,
    /// Posts to create, at most 100000.
    pub posts: Option<u32>,
    /// Replays the run identified by this seed.
    pub rng_seed: Option<u64>,
}

fn check_limit(field: &'static str, value: u32, max: u32) -> Result<u32, Error> {
    if value <= max {
        return Ok(value);
    }
    Err(
        Error::invalid_request(format!("{field} must be at most {max}")).with_details(json!({
            "field": field,
            "value": value,
            "code": "count_too_large"
        })),
    )
}

fn resolve_request(query: SeedDatabaseQuery, defaults: SeedCounts) -> Result<SeedRequest, Error> {
    let counts = SeedCounts::new(
        check_limit("users", query.users.unwrap_or(defaults.users), MAX_PARENT_COUNT)?,
        check_limit(
            "restaurants",
            query.restaurants.unwrap_or(defaults.restaurants),
            MAX_PARENT_COUNT,
        )?,
        check_limit("posts", query.posts.unwrap_or(defaults.posts), MAX_POST_COUNT)?,
    );
    Ok(SeedRequest::new(counts).with_rng_seed(query.rng_seed))
}

/// Translate a failed run into an HTTP error.
pub fn map_seed_failure(failure: &SeedFailure) -> Error {
    match failure {
        SeedFailure::AlreadyRunning => Error::conflict(failure.to_string()),
        SeedFailure::InsufficientSeedData {
            users,
            restaurants,
            posts,
        } => Error::invalid_request(failure.to_string()).with_details(json!({
            "users": users,
            "restaurants": restaurants,
            "posts": posts,
            "code": "insufficient_seed_data"
        })),
        SeedFailure::Wipe { .. }
        | SeedFailure::Creation { .. }
        | SeedFailure::Generation { .. } => {
            let details = json!({
                "phase": failure.phase().as_str(),
                "partial": failure.is_partial()
            });
            let error = match failure.gateway_error() {
                Some(SeedGatewayError::Connection { .. }) => {
                    Error::service_unavailable(failure.to_string())
                }
                _ => Error::internal(failure.to_string()),
            };
            error.with_details(details)
        }
    }
}

/// Handler for malformed query strings.
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(format!("invalid seed parameters: {err}"))
        .with_details(json!({"code": "invalid_query"}))
        .into()
}

/// Wipe the feed tables and insert a fresh randomised data set.
#[utoipa::path(
    post,
    path = "/seed/database",
    params(SeedDatabaseQuery),
    responses(
        (status = 200, description = "Database seeded", body = SeedReport),
        (status = 400, description = "Invalid counts", body = Error),
        (status = 409, description = "A seeding run is already in progress", body = Error),
        (status = 503, description = "Database unavailable", body = Error),
        (status = 500, description = "Seeding failed", body = Error)
    ),
    tags = ["seed"],
    operation_id = "seedDatabase"
)]
#[post("/seed/database")]
pub async fn seed_database(
    state: web::Data<HttpState>,
    query: web::Query<SeedDatabaseQuery>,
) -> ApiResult<HttpResponse> {
    let request = resolve_request(query.into_inner(), state.defaults)?;
    let report = state
        .seeder
        .seed_database(request)
        .await
        .map_err(|failure| map_seed_failure(&failure))?;
    Ok(HttpResponse::Ok().json(report))
}
