use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::GridError, models::Matrix};

/// The plantable-area matrix of a terrace. `true` marks a 1x1 ft tile that
/// can host part of a crop footprint.
///
/// Serialises as `{rows, cols, grid}` (row-major). Deserialisation rejects
/// zero dimensions and ragged rows, so a value of this type always satisfies
/// `cells.len() == rows` and `cells[r].len() == cols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawTerrace")]
pub struct TerraceGrid {
    rows: usize,
    cols: usize,
    #[serde(rename = "grid")]
    #[schema(value_type = Vec<Vec<bool>>)]
    cells: Matrix<bool>,
}

#[derive(Deserialize)]
struct RawTerrace {
    rows: usize,
    cols: usize,
    grid: Matrix<bool>,
}

impl TryFrom<RawTerrace> for TerraceGrid {
    type Error = String;

    fn try_from(raw: RawTerrace) -> Result<Self, Self::Error> {
        if raw.rows == 0 || raw.cols == 0 {
            return Err(GridError::InvalidDimension {
                rows: raw.rows,
                cols: raw.cols,
            }
            .to_string());
        }
        if raw.grid.len() != raw.rows {
            return Err(format!(
                "Layout declares {} rows but the grid has {}.",
                raw.rows,
                raw.grid.len()
            ));
        }
        if let Some(r) = raw.grid.iter().position(|row| row.len() != raw.cols) {
            return Err(format!(
                "Layout row {r} has {} cells, expected {}.",
                raw.grid[r].len(),
                raw.cols
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.grid,
        })
    }
}

impl TerraceGrid {
    /// Creates an all-`false` grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![false; cols]; rows],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &Matrix<bool> {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Writes one cell. Returns `Ok(false)` without touching the grid when the
    /// cell already holds `value`, so callers can skip redundant redraws.
    pub fn set_cell(&mut self, row: usize, col: usize, value: bool) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        if *cell == value {
            return Ok(false);
        }
        *cell = value;
        log::debug!("cell ({row}, {col}) set to {value}");
        Ok(true)
    }

    /// Resets every cell to `false`. Returns whether anything changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.plantable_count() > 0;
        for row in &mut self.cells {
            row.fill(false);
        }
        changed
    }

    /// Number of plantable tiles, i.e. the plantable area in square feet.
    pub fn plantable_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|&&plantable| plantable)
            .count()
    }
}
