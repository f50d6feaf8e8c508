use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    logic::{
        painting::{StrokeState, Tool},
        session::TerraceSession,
        validator::Violation,
    },
    models::{
        crop::{CropPlacement, RecommendedCrop},
        terrace::TerraceGrid,
    },
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// The terrace as handed to the recommendation service, plus editor state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerraceResponse {
    #[serde(flatten)]
    pub layout: TerraceGrid,
    pub plantable_tiles: usize,
    pub state: StrokeState,
    /// The selected tool; while painting, the one locked for the stroke.
    pub tool: Tool,
}

impl TerraceResponse {
    pub fn from_session(session: &TerraceSession) -> Self {
        Self {
            layout: session.grid().clone(),
            plantable_tiles: session.grid().plantable_count(),
            state: session.painter().state().into(),
            tool: session.painter().tool(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResizeRequest {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolRequest {
    pub tool: Tool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaintResponse {
    /// False when the event left every cell as it was.
    pub changed: bool,
    #[serde(flatten)]
    pub terrace: TerraceResponse,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub crops: Vec<RecommendedCrop>,
    pub placements: Vec<CropPlacement>,
    /// Grid snapshot the placements were computed for. Defaults to the
    /// current terrace.
    pub terrace_layout: Option<TerraceGrid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub valid: bool,
    pub violations: Vec<Violation>,
    /// Placements safe to render: the batch minus every offending entry.
    pub accepted: Vec<CropPlacement>,
}
