use utoipa::OpenApi;

use crate::{
    logic::{
        painting::{PointerEvent, StrokeState, Tool},
        validator::Violation,
    },
    models::{
        crop::{CropPlacement, PlacementPosition, RecommendedCrop, TrackedCrop},
        request::{
            ErrorResponse, PaintResponse, ResizeRequest, TerraceResponse, ToolRequest,
            ValidateRequest, ValidationResponse,
        },
        terrace::TerraceGrid,
        Coordinate,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Terrace Planner API",
        description = "Terrace garden editor: paint the plantable area of a terrace, resize it, \
                       validate crop placements returned by a recommendation service and track \
                       planted crops.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::terrace::get_terrace,
        crate::api::handlers::terrace::put_dimensions,
        crate::api::handlers::terrace::put_tool,
        crate::api::handlers::terrace::post_event,
        crate::api::handlers::terrace::post_clear,
        crate::api::handlers::placements::post_validate,
        crate::api::handlers::crops::list_crops,
        crate::api::handlers::crops::plant_crop,
        crate::api::handlers::crops::water_crop,
        crate::api::handlers::crops::remove_crop,
    ),
    components(
        schemas(
            // Terrace editor
            Coordinate, TerraceGrid, Tool, StrokeState, PointerEvent,
            ResizeRequest, ToolRequest, TerraceResponse, PaintResponse,
            // Placements
            RecommendedCrop, CropPlacement, PlacementPosition, Violation,
            ValidateRequest, ValidationResponse,
            // Tracker
            TrackedCrop,
            // Shared
            ErrorResponse,
        )
    ),
    tags(
        (name = "terrace",    description = "Terrace editor: snapshot, resize, paint, clear"),
        (name = "placements", description = "Validation of recommended crop placements"),
        (name = "crops",      description = "Planted crop tracking and watering log"),
    )
)]
pub struct ApiDoc;
