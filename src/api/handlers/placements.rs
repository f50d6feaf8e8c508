use actix_web::{http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::state::AppState,
    logic::validator::{accepted_placements, validate},
    models::{
        crop::{CropFootprint, RecommendedCrop},
        request::{link, ApiResponse, ErrorResponse, ValidateRequest, ValidationResponse},
    },
};

/// POST /api/placements/validate
/// Checks a placement batch from the recommendation service against a
/// terrace snapshot. Bad placements are reported, never rejected.
#[utoipa::path(
    post,
    path = "/api/placements/validate",
    tag = "placements",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationResponse),
        (status = 400, description = "Malformed request or terrace layout", body = ErrorResponse),
    )
)]
#[post("/placements/validate")]
pub async fn post_validate(
    state: web::Data<AppState>,
    body: web::Json<ValidateRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let grid = match request.terrace_layout {
        Some(layout) => layout,
        None => state.terrace().grid().clone(),
    };
    let footprints: Vec<CropFootprint> =
        request.crops.iter().map(RecommendedCrop::footprint).collect();

    let violations = validate(&grid, &footprints, &request.placements);
    if !violations.is_empty() {
        log::warn!(
            "placement batch has {} violation(s) across {} placement(s)",
            violations.len(),
            request.placements.len()
        );
    }
    let accepted = accepted_placements(&request.placements, &violations);

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/placements/validate", Method::POST));
    links.insert("terrace".into(), link("/api/terrace", Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(
        ValidationResponse {
            valid: violations.is_empty(),
            violations,
            accepted,
        },
        links,
    ))
}
