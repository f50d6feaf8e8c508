use actix_web::{web, HttpResponse};

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

/// JSON extractor config that turns malformed bodies into `{"error": ...}` 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        log::warn!("{message}");
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
