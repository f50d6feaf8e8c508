use crate::{error::GridError, models::terrace::TerraceGrid};

/// Builds a `rows x cols` grid that keeps every cell of `grid` lying inside
/// both shapes. Cells outside the overlap are `false`: shrinking drops
/// painted tiles for good and growing never adds plantable ones.
pub fn resize(grid: &TerraceGrid, rows: usize, cols: usize) -> Result<TerraceGrid, GridError> {
    let mut resized = TerraceGrid::new(rows, cols)?;
    let keep_rows = rows.min(grid.rows());
    let keep_cols = cols.min(grid.cols());

    for (r, row) in grid.cells().iter().take(keep_rows).enumerate() {
        for (c, &plantable) in row.iter().take(keep_cols).enumerate() {
            if plantable {
                resized.set_cell(r, c, true)?;
            }
        }
    }

    log::debug!(
        "resized terrace {}x{} -> {rows}x{cols} ({} plantable tiles kept)",
        grid.rows(),
        grid.cols(),
        resized.plantable_count()
    );
    Ok(resized)
}
