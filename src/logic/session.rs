use crate::{
    error::GridError,
    logic::{
        painting::{PaintingEngine, PointerEvent, Tool},
        resize::resize,
    },
    models::terrace::TerraceGrid,
};

/// One user's terrace editor: the grid being drawn and the painter driving it.
#[derive(Debug)]
pub struct TerraceSession {
    grid: TerraceGrid,
    painter: PaintingEngine,
}

impl TerraceSession {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: TerraceGrid::new(rows, cols)?,
            painter: PaintingEngine::new(),
        })
    }

    pub fn grid(&self) -> &TerraceGrid {
        &self.grid
    }

    pub fn painter(&self) -> &PaintingEngine {
        &self.painter
    }

    /// Replaces the grid with a resized copy. The current grid is kept when
    /// the new dimensions are invalid.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<&TerraceGrid, GridError> {
        self.grid = resize(&self.grid, rows, cols)?;
        log::info!("terrace resized to {rows}x{cols}");
        Ok(&self.grid)
    }

    pub fn set_tool(&mut self, tool: Tool) -> Result<(), GridError> {
        self.painter.set_tool(tool)
    }

    pub fn handle(&mut self, event: PointerEvent) -> Result<bool, GridError> {
        self.painter.handle(&mut self.grid, event)
    }

    /// Empties the grid whatever the painter is doing.
    pub fn clear(&mut self) -> bool {
        let changed = self.grid.clear();
        log::info!("terrace cleared");
        changed
    }
}
