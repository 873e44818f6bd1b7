// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::check_password,
        crate::api::handlers::generator::analyze_password
    ),
    components(
        schemas(
            crate::api::types::GeneratePasswordRequest,
            crate::api::types::GeneratePasswordResponse,
            crate::api::types::CheckPasswordRequest,
            crate::api::types::CheckPasswordResponse,
            crate::api::types::AnalyzePasswordResponse,
            crate::api::types::ErrorResponse,
            crate::models::StrengthReport,
            crate::models::StrengthLevel,
            crate::models::DeepAnalysis
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints")
    ),
    info(
        title = "RustPassGen API",
        version = "0.1.0",
        description = "Random password generator and strength checker",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting RustPassGen API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
