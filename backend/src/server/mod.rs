//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::seed::{query_error_handler, seed_database};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Trace)
        .service(seed_database)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server.
///
/// Readiness is left untouched; the caller marks the service ready once
/// startup seeding has finished.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        seeder,
        defaults,
    } = config;
    let http_state = web::Data::new(HttpState::new(seeder, defaults));

    let server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::test;
    use backend::domain::DatabaseSeeder;
    use backend::domain::SeedCounts;
    use backend::outbound::memory::InMemorySeedGateway;
    use mockable::DefaultClock;
    use rstest::rstest;

    use super::*;

    fn http_state() -> web::Data<HttpState> {
        let seeder = DatabaseSeeder::new(
            Arc::new(InMemorySeedGateway::new()),
            Arc::new(DefaultClock),
        );
        web::Data::new(HttpState::new(Arc::new(seeder), SeedCounts::new(2, 2, 2)))
    }

    #[rstest]
    #[actix_web::test]
    async fn seed_route_is_mounted_with_trace_header() {
        let app =
            test::init_service(build_app(web::Data::new(HealthState::new()), http_state())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::post().uri("/seed/database").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("trace-id"));
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_starts_unavailable() {
        let app =
            test::init_service(build_app(web::Data::new(HealthState::new()), http_state())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
