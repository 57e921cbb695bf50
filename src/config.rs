use ratatui::style::Color;

use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Derives the grid that fits a window of `window` terminal cells when
    /// each grid cell occupies `cell` terminal cells.
    #[must_use]
    pub fn from_window(window: WindowSize, cell: CellSize) -> Self {
        Self {
            width: window.columns / cell.columns.max(1),
            height: window.rows / cell.rows.max(1),
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Play-surface size in terminal columns and rows.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WindowSize {
    pub columns: u16,
    pub rows: u16,
}

/// Terminal cells drawn for one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellSize {
    pub columns: u16,
    pub rows: u16,
}

/// Colour palette applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Fill for empty play-area cells.
    pub background: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub text: Color,
    /// Colour blended over the play area while paused or after game over.
    pub overlay: Color,
    /// Overlay opacity, 0 (transparent) to 255 (opaque).
    pub overlay_alpha: u8,
}

/// Dark background, green snake, red food.
pub const THEME_DEFAULT: Theme = Theme {
    background: Color::Rgb(18, 18, 18),
    snake_head: Color::Rgb(0, 230, 120),
    snake_body: Color::Rgb(0, 200, 90),
    food: Color::Rgb(230, 60, 60),
    text: Color::Rgb(240, 240, 240),
    overlay: Color::Rgb(0, 0, 0),
    overlay_alpha: 140,
};

/// Play surface size; together with [`CELL_SIZE`] this fixes the grid.
pub const WINDOW_SIZE: WindowSize = WindowSize {
    columns: 64,
    rows: 24,
};

/// Two columns per cell keep grid cells roughly square in most fonts.
pub const CELL_SIZE: CellSize = CellSize {
    columns: 2,
    rows: 1,
};

/// Starting tick rate in ticks per second.
pub const INITIAL_SPEED: u32 = 10;

/// Food eaten per one-step speed increase.
pub const SPEED_INCREMENT_FOOD: u32 = 5;

/// Upper bound on the tick rate.
pub const MAX_SPEED: u32 = 18;

/// Rejection-sampling budget for food placement, per grid cell.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 64;

/// Simulation parameters for one game session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_speed: u32,
    pub speed_increment_interval: u32,
    pub max_speed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::from_window(WINDOW_SIZE, CELL_SIZE),
            initial_speed: INITIAL_SPEED,
            speed_increment_interval: SPEED_INCREMENT_FOOD,
            max_speed: MAX_SPEED,
        }
    }
}

impl GameConfig {
    /// Returns the default parameters on a different grid.
    #[must_use]
    pub fn with_grid(grid: GridSize) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Rejects parameter combinations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if self.initial_speed == 0 {
            return Err(GameError::InvalidConfig(
                "initial speed must be positive".to_owned(),
            ));
        }
        if self.max_speed < self.initial_speed {
            return Err(GameError::InvalidConfig(format!(
                "max speed {} is below initial speed {}",
                self.max_speed, self.initial_speed
            )));
        }
        if self.speed_increment_interval == 0 {
            return Err(GameError::InvalidConfig(
                "speed increment interval must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CellSize, GameConfig, GridSize, WindowSize};

    #[test]
    fn default_grid_is_derived_from_window_and_cell_size() {
        let grid = GridSize::from_window(
            WindowSize {
                columns: 64,
                rows: 24,
            },
            CellSize {
                columns: 2,
                rows: 1,
            },
        );

        assert_eq!(
            grid,
            GridSize {
                width: 32,
                height: 24
            }
        );
        assert_eq!(GameConfig::default().grid, grid);
        assert_eq!(grid.total_cells(), 768);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let empty_grid = GameConfig::with_grid(GridSize {
            width: 0,
            height: 5,
        });
        assert!(empty_grid.validate().is_err());

        let inverted_speeds = GameConfig {
            max_speed: 3,
            initial_speed: 4,
            ..GameConfig::default()
        };
        assert!(inverted_speeds.validate().is_err());

        let zero_interval = GameConfig {
            speed_increment_interval: 0,
            ..GameConfig::default()
        };
        assert!(zero_interval.validate().is_err());
    }
}
