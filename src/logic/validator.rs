use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    crop::{CropFootprint, CropPlacement},
    terrace::TerraceGrid,
};

/// A problem found in a placement batch. `placement` (or `first`/`second`)
/// is the index of the offending entry in the submitted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Violation {
    UnknownCrop {
        placement: usize,
        #[serde(rename = "cropName")]
        crop_name: String,
    },
    /// The referenced footprint has a zero, negative or non-finite side.
    InvalidFootprint {
        placement: usize,
        #[serde(rename = "cropName")]
        crop_name: String,
    },
    /// The position is negative, fractional or not a finite number.
    InvalidPosition {
        placement: usize,
        #[serde(rename = "cropName")]
        crop_name: String,
    },
    OutOfBounds {
        placement: usize,
        #[serde(rename = "cropName")]
        crop_name: String,
    },
    UnplantableTile {
        placement: usize,
        #[serde(rename = "cropName")]
        crop_name: String,
        row: usize,
        col: usize,
    },
    /// Two placements claim the same cell; reported once per pair at the
    /// first shared cell in row-major order.
    Overlap {
        first: usize,
        second: usize,
        #[serde(rename = "cropA")]
        crop_a: String,
        #[serde(rename = "cropB")]
        crop_b: String,
        row: usize,
        col: usize,
    },
}

impl Violation {
    /// Index of the placement to drop to resolve this violation. For an
    /// overlap the earlier placement wins and the later one is dropped.
    pub fn offending_placement(&self) -> usize {
        match self {
            Violation::UnknownCrop { placement, .. }
            | Violation::InvalidFootprint { placement, .. }
            | Violation::InvalidPosition { placement, .. }
            | Violation::OutOfBounds { placement, .. }
            | Violation::UnplantableTile { placement, .. } => *placement,
            Violation::Overlap { second, .. } => *second,
        }
    }
}

/// Cells covered by a placement, as half-open row and column ranges. Bounds
/// saturate, so a footprint may reach past the grid without wrapping.
#[derive(Debug, Clone, Copy)]
struct Footprint {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Footprint {
    /// First shared cell in row-major order, if the two rectangles meet.
    fn first_shared_cell(&self, other: &Footprint) -> Option<(usize, usize)> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let meets = top < self.bottom.min(other.bottom) && left < self.right.min(other.right);
        meets.then_some((top, left))
    }
}

/// Checks a batch of placements against a grid snapshot.
///
/// Violations come out in placement-list order: for each placement its own
/// findings first, then its overlaps with earlier placements in list order.
/// Overlaps are found on the full footprints, including any part that hangs
/// past the grid. Nothing here fails; every problem is returned as data.
pub fn validate(
    grid: &TerraceGrid,
    footprints: &[CropFootprint],
    placements: &[CropPlacement],
) -> Vec<Violation> {
    let by_name: HashMap<&str, &CropFootprint> =
        footprints.iter().map(|f| (f.name.as_str(), f)).collect();

    // Footprints of the earlier placements that reached the overlap check.
    let mut placed: Vec<(usize, Footprint)> = Vec::new();
    let mut violations = Vec::new();

    for (index, placement) in placements.iter().enumerate() {
        let crop_name = &placement.crop_name;
        let Some(footprint) = by_name.get(crop_name.as_str()) else {
            violations.push(Violation::UnknownCrop {
                placement: index,
                crop_name: crop_name.clone(),
            });
            continue;
        };
        let Some((height, width)) = footprint.cell_span() else {
            violations.push(Violation::InvalidFootprint {
                placement: index,
                crop_name: crop_name.clone(),
            });
            continue;
        };
        let Some(origin) = placement.position.cell() else {
            violations.push(Violation::InvalidPosition {
                placement: index,
                crop_name: crop_name.clone(),
            });
            continue;
        };

        let rect = Footprint {
            top: origin.row,
            left: origin.col,
            bottom: origin.row.saturating_add(height),
            right: origin.col.saturating_add(width),
        };

        if rect.bottom > grid.rows() || rect.right > grid.cols() {
            violations.push(Violation::OutOfBounds {
                placement: index,
                crop_name: crop_name.clone(),
            });
        }

        for r in rect.top..rect.bottom.min(grid.rows()) {
            for c in rect.left..rect.right.min(grid.cols()) {
                if !grid.cells()[r][c] {
                    violations.push(Violation::UnplantableTile {
                        placement: index,
                        crop_name: crop_name.clone(),
                        row: r,
                        col: c,
                    });
                }
            }
        }

        for (earlier, earlier_rect) in &placed {
            if let Some((row, col)) = earlier_rect.first_shared_cell(&rect) {
                violations.push(Violation::Overlap {
                    first: *earlier,
                    second: index,
                    crop_a: placements[*earlier].crop_name.clone(),
                    crop_b: crop_name.clone(),
                    row,
                    col,
                });
            }
        }
        placed.push((index, rect));
    }

    if !violations.is_empty() {
        log::debug!(
            "{} violation(s) in a batch of {} placement(s)",
            violations.len(),
            placements.len()
        );
    }
    violations
}

/// The placements that survive once every offending entry is dropped.
pub fn accepted_placements(
    placements: &[CropPlacement],
    violations: &[Violation],
) -> Vec<CropPlacement> {
    let rejected: HashSet<usize> = violations.iter().map(Violation::offending_placement).collect();
    placements
        .iter()
        .enumerate()
        .filter(|(i, _)| !rejected.contains(i))
        .map(|(_, p)| p.clone())
        .collect()
}
