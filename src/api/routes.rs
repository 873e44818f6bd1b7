// src/api/routes.rs
use actix_web::{error, web, HttpResponse};
use super::handlers;
use super::types::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Malformed bodies get the same `{ error }` shape as every other failure
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new(format!("Invalid request body: {}", err)));
        error::InternalError::from_response(err, response).into()
    }));

    // Generator and strength checks
    cfg.service(
        web::scope("/api")
            .route("/generate-password", web::post().to(handlers::generator::generate_password))
            .route("/check-password", web::post().to(handlers::generator::check_password))
            .route("/analyze-password", web::post().to(handlers::generator::analyze_password))
    );
}
