use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::GridError,
    models::{terrace::TerraceGrid, Coordinate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Tool {
    #[default]
    Draw,
    Erase,
}

impl Tool {
    /// The value this tool writes into a cell.
    pub fn cell_value(self) -> bool {
        matches!(self, Tool::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Painting(Tool),
}

/// Wire view of [`PaintState`]: whether a stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum StrokeState {
    Idle,
    Painting,
}

impl From<PaintState> for StrokeState {
    fn from(state: PaintState) -> Self {
        match state {
            PaintState::Idle => StrokeState::Idle,
            PaintState::Painting(_) => StrokeState::Painting,
        }
    }
}

/// A pointer or touch interaction over the grid surface.
/// `end` covers both releasing the pointer and leaving the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    Start { row: usize, col: usize },
    Move { row: usize, col: usize },
    End,
}

/// Turns interaction events into cell writes.
///
/// Every write goes through [`TerraceGrid::set_cell`], which reports whether
/// the cell actually changed; a burst of move events over the same cell
/// therefore yields a single change.
#[derive(Debug, Default)]
pub struct PaintingEngine {
    state: PaintState,
    tool: Tool,
}

impl PaintingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, PaintState::Painting(_))
    }

    /// Selects the active tool. Only allowed between strokes.
    pub fn set_tool(&mut self, tool: Tool) -> Result<(), GridError> {
        if self.is_painting() {
            return Err(GridError::PaintingInProgress);
        }
        self.tool = tool;
        Ok(())
    }

    /// Begins a stroke and paints the cell under the pointer. On an
    /// out-of-bounds cell the engine stays in its previous state.
    pub fn start(&mut self, grid: &mut TerraceGrid, cell: Coordinate) -> Result<bool, GridError> {
        let changed = grid.set_cell(cell.row, cell.col, self.tool.cell_value())?;
        if !self.is_painting() {
            log::debug!("stroke started with {:?}", self.tool);
        }
        self.state = PaintState::Painting(self.tool);
        Ok(changed)
    }

    /// Paints the cell under the pointer. Ignored while idle.
    pub fn move_to(&mut self, grid: &mut TerraceGrid, cell: Coordinate) -> Result<bool, GridError> {
        match self.state {
            PaintState::Idle => Ok(false),
            PaintState::Painting(tool) => grid.set_cell(cell.row, cell.col, tool.cell_value()),
        }
    }

    pub fn end(&mut self) {
        if self.is_painting() {
            log::debug!("stroke ended");
        }
        self.state = PaintState::Idle;
    }

    /// Dispatches one event. Returns whether the grid changed.
    pub fn handle(
        &mut self,
        grid: &mut TerraceGrid,
        event: PointerEvent,
    ) -> Result<bool, GridError> {
        match event {
            PointerEvent::Start { row, col } => self.start(grid, Coordinate::new(row, col)),
            PointerEvent::Move { row, col } => self.move_to(grid, Coordinate::new(row, col)),
            PointerEvent::End => {
                self.end();
                Ok(false)
            }
        }
    }
}
