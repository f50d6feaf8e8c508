use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Structural failures of grid operations. Each one aborts only the call
/// that raised it; the grid is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be strictly positive (got {rows}x{cols}).")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid.")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Terrace dimensions must not exceed {max}x{max} ft (got {rows}x{cols}).")]
    DimensionTooLarge { rows: usize, cols: usize, max: usize },

    #[error("The tool cannot be switched while a stroke is in progress.")]
    PaintingInProgress,
}

/// Failures of the planted-crop tracker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("Crop '{0}' is already planted.")]
    AlreadyPlanted(String),

    #[error("Tracked crop '{0}' not found.")]
    NotFound(String),
}

fn error_body(err: &impl std::fmt::Display, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": err.to_string() }))
}

impl ResponseError for GridError {
    fn status_code(&self) -> StatusCode {
        match self {
            GridError::InvalidDimension { .. }
            | GridError::DimensionTooLarge { .. }
            | GridError::OutOfBounds { .. } => StatusCode::BAD_REQUEST,
            GridError::PaintingInProgress => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_body(self, self.status_code())
    }
}

impl ResponseError for TrackerError {
    fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::AlreadyPlanted(_) => StatusCode::CONFLICT,
            TrackerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error_body(self, self.status_code())
    }
}
