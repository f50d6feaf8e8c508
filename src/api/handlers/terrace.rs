use actix_web::{get, http::Method, post, put, web, HttpResponse, Responder};

use crate::{
    api::state::AppState,
    error::GridError,
    logic::painting::PointerEvent,
    models::request::{
        link, ApiResponse, ErrorResponse, Links, PaintResponse, ResizeRequest, TerraceResponse,
        ToolRequest,
    },
};

fn terrace_links() -> Links {
    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/terrace", Method::GET));
    links.insert("dimensions".into(), link("/api/terrace/dimensions", Method::PUT));
    links.insert("tool".into(), link("/api/terrace/tool", Method::PUT));
    links.insert("events".into(), link("/api/terrace/events", Method::POST));
    links.insert("clear".into(), link("/api/terrace/clear", Method::POST));
    links.insert("validate".into(), link("/api/placements/validate", Method::POST));
    links
}

/// GET /api/terrace
/// Returns the current grid snapshot and painting state.
#[utoipa::path(
    get,
    path = "/api/terrace",
    tag = "terrace",
    responses(
        (status = 200, description = "Current terrace", body = TerraceResponse),
    )
)]
#[get("/terrace")]
pub async fn get_terrace(state: web::Data<AppState>) -> impl Responder {
    let terrace = TerraceResponse::from_session(&state.terrace());
    HttpResponse::Ok().json(ApiResponse::new(terrace, terrace_links()))
}

/// PUT /api/terrace/dimensions
/// Resizes the terrace, keeping the cells both sizes share.
#[utoipa::path(
    put,
    path = "/api/terrace/dimensions",
    tag = "terrace",
    request_body = ResizeRequest,
    responses(
        (status = 200, description = "Resized terrace", body = TerraceResponse),
        (status = 400, description = "Invalid dimensions", body = ErrorResponse),
    )
)]
#[put("/terrace/dimensions")]
pub async fn put_dimensions(
    state: web::Data<AppState>,
    body: web::Json<ResizeRequest>,
) -> Result<HttpResponse, GridError> {
    let ResizeRequest { rows, cols } = body.into_inner();
    let max = state.config.max_dimension;

    if rows > max || cols > max {
        log::warn!("rejected resize to {rows}x{cols} (max {max})");
        return Err(GridError::DimensionTooLarge { rows, cols, max });
    }

    let mut session = state.terrace();
    session.resize(rows, cols)?;
    let terrace = TerraceResponse::from_session(&session);
    Ok(HttpResponse::Ok().json(ApiResponse::new(terrace, terrace_links())))
}

/// PUT /api/terrace/tool
/// Switches between the draw and erase tools. Refused mid-stroke.
#[utoipa::path(
    put,
    path = "/api/terrace/tool",
    tag = "terrace",
    request_body = ToolRequest,
    responses(
        (status = 200, description = "Tool selected", body = TerraceResponse),
        (status = 409, description = "A stroke is in progress", body = ErrorResponse),
    )
)]
#[put("/terrace/tool")]
pub async fn put_tool(
    state: web::Data<AppState>,
    body: web::Json<ToolRequest>,
) -> Result<HttpResponse, GridError> {
    let mut session = state.terrace();
    session.set_tool(body.tool)?;
    let terrace = TerraceResponse::from_session(&session);
    Ok(HttpResponse::Ok().json(ApiResponse::new(terrace, terrace_links())))
}

/// POST /api/terrace/events
/// Feeds one pointer/touch interaction to the painter.
#[utoipa::path(
    post,
    path = "/api/terrace/events",
    tag = "terrace",
    request_body = PointerEvent,
    responses(
        (status = 200, description = "Event applied", body = PaintResponse),
        (status = 400, description = "Cell outside the terrace", body = ErrorResponse),
    )
)]
#[post("/terrace/events")]
pub async fn post_event(
    state: web::Data<AppState>,
    body: web::Json<PointerEvent>,
) -> Result<HttpResponse, GridError> {
    let mut session = state.terrace();
    let changed = session.handle(body.into_inner()).inspect_err(|e| {
        log::warn!("rejected pointer event: {e}");
    })?;
    let response = PaintResponse {
        changed,
        terrace: TerraceResponse::from_session(&session),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::new(response, terrace_links())))
}

/// POST /api/terrace/clear
/// Marks every cell non-plantable, whatever the painter is doing.
#[utoipa::path(
    post,
    path = "/api/terrace/clear",
    tag = "terrace",
    responses(
        (status = 200, description = "Terrace cleared", body = PaintResponse),
    )
)]
#[post("/terrace/clear")]
pub async fn post_clear(state: web::Data<AppState>) -> impl Responder {
    let mut session = state.terrace();
    let changed = session.clear();
    let response = PaintResponse {
        changed,
        terrace: TerraceResponse::from_session(&session),
    };
    HttpResponse::Ok().json(ApiResponse::new(response, terrace_links()))
}
