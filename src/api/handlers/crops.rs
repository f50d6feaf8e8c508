use actix_web::{delete, get, http::Method, post, web, HttpResponse, Responder};
use chrono::Utc;

use crate::{
    api::state::AppState,
    error::TrackerError,
    models::{
        crop::{RecommendedCrop, TrackedCrop},
        request::{link, ApiResponse, ErrorResponse, Links},
    },
};

fn crop_links(id: &str) -> Links {
    let mut links = std::collections::HashMap::new();
    links.insert("water".into(), link(format!("/api/crops/{id}/water"), Method::POST));
    links.insert("remove".into(), link(format!("/api/crops/{id}"), Method::DELETE));
    links.insert("collection".into(), link("/api/crops", Method::GET));
    links
}

/// GET /api/crops
/// Lists planted crops in planting order.
#[utoipa::path(
    get,
    path = "/api/crops",
    tag = "crops",
    responses(
        (status = 200, description = "Tracked crops", body = [TrackedCrop]),
    )
)]
#[get("/crops")]
pub async fn list_crops(state: web::Data<AppState>) -> impl Responder {
    let crops: Vec<TrackedCrop> = state.tracker().crops().to_vec();
    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/crops", Method::GET));
    links.insert("plant".into(), link("/api/crops", Method::POST));
    HttpResponse::Ok().json(ApiResponse::new(crops, links))
}

/// POST /api/crops
/// Starts tracking a recommended crop.
#[utoipa::path(
    post,
    path = "/api/crops",
    tag = "crops",
    request_body = RecommendedCrop,
    responses(
        (status = 201, description = "Crop planted", body = TrackedCrop),
        (status = 409, description = "Crop already planted", body = ErrorResponse),
    )
)]
#[post("/crops")]
pub async fn plant_crop(
    state: web::Data<AppState>,
    body: web::Json<RecommendedCrop>,
) -> Result<HttpResponse, TrackerError> {
    let planted = state.tracker().plant(body.into_inner(), Utc::now())?.clone();
    let links = crop_links(&planted.id);
    Ok(HttpResponse::Created().json(ApiResponse::new(planted, links)))
}

/// POST /api/crops/{id}/water
/// Logs a watering for a tracked crop.
#[utoipa::path(
    post,
    path = "/api/crops/{id}/water",
    tag = "crops",
    params(("id" = String, Path, description = "Tracked crop id")),
    responses(
        (status = 200, description = "Watering logged", body = TrackedCrop),
        (status = 404, description = "Unknown crop", body = ErrorResponse),
    )
)]
#[post("/crops/{id}/water")]
pub async fn water_crop(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, TrackerError> {
    let id = path.into_inner();
    let watered = state.tracker().water(&id, Utc::now())?.clone();
    Ok(HttpResponse::Ok().json(ApiResponse::new(watered, crop_links(&id))))
}

/// DELETE /api/crops/{id}
/// Stops tracking a crop.
#[utoipa::path(
    delete,
    path = "/api/crops/{id}",
    tag = "crops",
    params(("id" = String, Path, description = "Tracked crop id")),
    responses(
        (status = 200, description = "Crop removed", body = TrackedCrop),
        (status = 404, description = "Unknown crop", body = ErrorResponse),
    )
)]
#[delete("/crops/{id}")]
pub async fn remove_crop(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, TrackerError> {
    let removed = state.tracker().remove(&path.into_inner())?;
    let mut links = std::collections::HashMap::new();
    links.insert("collection".into(), link("/api/crops", Method::GET));
    Ok(HttpResponse::Ok().json(ApiResponse::new(removed, links)))
}
