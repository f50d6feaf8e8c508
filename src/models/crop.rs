use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::Coordinate;

/// A crop as returned by the recommendation service. Sizes are the mature
/// plant's width and height in feet.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCrop {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub season: Option<String>,
    pub care_tips: Option<String>,
    pub estimated_yield: Option<String>,
}

impl RecommendedCrop {
    pub fn footprint(&self) -> CropFootprint {
        CropFootprint {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

/// The rectangular size of a crop, in the same unit as grid cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CropFootprint {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl CropFootprint {
    /// Occupied cells as `(rows, cols)`, each side rounded up to whole cells.
    /// `None` when either side is not a finite positive number.
    pub fn cell_span(&self) -> Option<(usize, usize)> {
        Some((cells_for(self.height)?, cells_for(self.width)?))
    }
}

fn cells_for(feet: f64) -> Option<usize> {
    if feet.is_finite() && feet > 0.0 {
        Some(feet.ceil() as usize)
    } else {
        None
    }
}

/// A crop positioned on the grid by its top-left occupied cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CropPlacement {
    pub crop_name: String,
    pub position: PlacementPosition,
}

/// Top-left cell as sent by the recommendation service, which types both
/// indices as plain JSON numbers. Kept raw so one bad entry does not fail
/// the whole batch at deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlacementPosition {
    pub row: f64,
    pub col: f64,
}

impl PlacementPosition {
    /// The grid cell, or `None` when either index is negative, fractional,
    /// non-finite or beyond any addressable grid.
    pub fn cell(&self) -> Option<Coordinate> {
        Some(Coordinate::new(cell_index(self.row)?, cell_index(self.col)?))
    }
}

impl From<Coordinate> for PlacementPosition {
    fn from(cell: Coordinate) -> Self {
        Self {
            row: cell.row as f64,
            col: cell.col as f64,
        }
    }
}

fn cell_index(value: f64) -> Option<usize> {
    let addressable = value >= 0.0 && value <= f64::from(u32::MAX);
    if value.is_finite() && addressable && value.fract() == 0.0 {
        Some(value as usize)
    } else {
        None
    }
}

/// A crop the user planted and is now looking after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackedCrop {
    pub id: String,
    #[serde(flatten)]
    pub crop: RecommendedCrop,
    pub planted_date: DateTime<Utc>,
    pub watering_log: Vec<DateTime<Utc>>,
}

impl TrackedCrop {
    /// The last `n` waterings, oldest first.
    pub fn recent_waterings(&self, n: usize) -> &[DateTime<Utc>] {
        let start = self.watering_log.len().saturating_sub(n);
        &self.watering_log[start..]
    }
}
