//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, server_settings_from_env};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use donor_registry::Trace;
#[cfg(debug_assertions)]
use donor_registry::doc::ApiDoc;
use donor_registry::domain::DonorRegistrationService;
use donor_registry::inbound::http::state::HttpState;
use donor_registry::inbound::http::{configure, cors};
use donor_registry::outbound::persistence::DieselDonorRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(cors::permissive())
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the configured pool.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let repository = Arc::new(DieselDonorRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::new(Arc::new(DonorRegistrationService::new(
        repository,
    ))));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use donor_registry::domain::ports::InMemoryDonorRepository;
    use serde_json::{Value, json};

    fn in_memory_state() -> (Arc<InMemoryDonorRepository>, web::Data<HttpState>) {
        let repository = Arc::new(InMemoryDonorRepository::new());
        let service = DonorRegistrationService::new(repository.clone());
        (repository, web::Data::new(HttpState::new(Arc::new(service))))
    }

    #[actix_web::test]
    async fn app_serves_health_with_trace_and_cors_headers() {
        let (_, state) = in_memory_state();
        let app = test::init_service(build_app(state)).await;
        let req = test::TestRequest::get()
            .uri("/api")
            .insert_header((header::ORIGIN, "https://donate.example.org"))
            .to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("trace-id"));
        assert!(res.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn app_registers_then_rejects_duplicate() {
        let (repository, state) = in_memory_state();
        let app = test::init_service(build_app(state)).await;
        let payload = json!({
            "fullName": "Ana Khan",
            "email": "ana@example.com",
            "phone": "555-0100",
            "city": "Lahore",
            "isBloodDonor": true,
            "bloodGroup": "O+",
            "isOrganDonor": false,
            "organs": []
        });

        let first = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/register")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(first).await;
        assert_eq!(body["donorId"], 1);

        let second = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/register")
                .set_json(&payload)
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(repository.len(), 1);
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn app_serves_openapi_document_in_debug_builds() {
        let (_, state) = in_memory_state();
        let app = test::init_service(build_app(state)).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let doc: Value = test::read_body_json(res).await;
        assert!(doc["paths"]["/api/register"].is_object());
    }
}
