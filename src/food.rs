use std::collections::HashSet;

use log::trace;
use rand::Rng;

use crate::config::{GridSize, PLACEMENT_ATTEMPTS_PER_CELL};
use crate::error::GameError;
use crate::snake::GridVector;

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: GridVector,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: GridVector) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell outside `occupied`.
    pub fn respawn<'a, R, I>(rng: &mut R, grid: GridSize, occupied: I) -> Result<Self, GameError>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a GridVector>,
    {
        let occupied: HashSet<GridVector> = occupied.into_iter().copied().collect();
        spawn_position(rng, grid, &occupied).map(Self::at)
    }
}

/// Rejection-samples a free cell, giving up after a bounded number of draws.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridSize,
    occupied: &HashSet<GridVector>,
) -> Result<GridVector, GameError> {
    let board_full = GameError::BoardFull {
        width: grid.width,
        height: grid.height,
    };

    let total_cells = grid.total_cells();
    let occupied_in_grid = occupied.iter().filter(|cell| cell.is_within(grid)).count();
    if occupied_in_grid >= total_cells {
        return Err(board_full);
    }

    let max_attempts = total_cells.saturating_mul(PLACEMENT_ATTEMPTS_PER_CELL);
    for attempt in 1..=max_attempts {
        let candidate = GridVector {
            x: rng.gen_range(0..i32::from(grid.width)),
            y: rng.gen_range(0..i32::from(grid.height)),
        };
        if !occupied.contains(&candidate) {
            trace!("food placed at {candidate:?} after {attempt} draw(s)");
            return Ok(candidate);
        }
    }

    Err(board_full)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    use crate::config::GridSize;
    use crate::error::GameError;
    use crate::input::Direction;
    use crate::snake::{GridVector, Snake};

    use super::{Food, spawn_position};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                GridVector { x: 0, y: 0 },
                GridVector { x: 1, y: 0 },
                GridVector { x: 2, y: 0 },
            ],
            Direction::Right,
        );
        let grid = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = Food::respawn(&mut rng, grid, snake.segments()).expect("board has room");
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within(grid));
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSize {
            width: 3,
            height: 3,
        };
        let free = GridVector { x: 2, y: 1 };
        let occupied: HashSet<GridVector> = (0..3)
            .flat_map(|y| (0..3).map(move |x| GridVector { x, y }))
            .filter(|cell| *cell != free)
            .collect();

        let position = spawn_position(&mut rng, grid, &occupied).expect("one cell is free");

        assert_eq!(position, free);
    }

    #[test]
    fn exhausted_draw_budget_is_reported_on_a_board_with_room() {
        // A constant generator keeps drawing (0,0), the only occupied cell.
        let mut rng = StepRng::new(0, 0);
        let grid = GridSize {
            width: 4,
            height: 4,
        };
        let occupied: HashSet<GridVector> = [GridVector { x: 0, y: 0 }].into_iter().collect();

        let result = spawn_position(&mut rng, grid, &occupied);

        assert!(matches!(
            result,
            Err(GameError::BoardFull {
                width: 4,
                height: 4
            })
        ));
    }

    #[test]
    fn full_board_is_reported_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = GridSize {
            width: 2,
            height: 2,
        };
        let occupied: HashSet<GridVector> = [
            GridVector { x: 0, y: 0 },
            GridVector { x: 1, y: 0 },
            GridVector { x: 0, y: 1 },
            GridVector { x: 1, y: 1 },
        ]
        .into_iter()
        .collect();

        let result = spawn_position(&mut rng, grid, &occupied);

        assert!(matches!(
            result,
            Err(GameError::BoardFull {
                width: 2,
                height: 2
            })
        ));
    }
}
