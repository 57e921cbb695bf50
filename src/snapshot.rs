use crate::config::GridSize;
use crate::snake::GridVector;

/// Which part of the snake a cell belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SegmentKind {
    Head,
    Body,
}

/// One occupied snake cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SnakeCell {
    pub position: GridVector,
    pub kind: SegmentKind,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RenderSnapshot {
    pub grid: GridSize,
    /// Head first.
    pub snake: Vec<SnakeCell>,
    pub food: GridVector,
    pub score: u32,
    pub speed: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl RenderSnapshot {
    /// Returns the head cell.
    #[must_use]
    pub fn head(&self) -> Option<GridVector> {
        self.snake
            .iter()
            .find(|cell| cell.kind == SegmentKind::Head)
            .map(|cell| cell.position)
    }

    /// Text shown on the HUD line.
    #[must_use]
    pub fn hud_text(&self) -> String {
        format!("Score: {}  Speed: {}", self.score, self.speed)
    }
}
