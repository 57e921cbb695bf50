use std::collections::VecDeque;
use std::ops::Add;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position or offset in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridVector {
    pub x: i32,
    pub y: i32,
}

impl GridVector {
    /// Returns the centre cell of `grid`.
    #[must_use]
    pub fn center_of(grid: GridSize) -> Self {
        Self {
            x: i32::from(grid.width / 2),
            y: i32::from(grid.height / 2),
        }
    }

    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within(self, grid: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.width)
            && self.y < i32::from(grid.height)
    }

    /// Returns this position wrapped into the grid on both axes.
    #[must_use]
    pub fn wrapped(self, grid: GridSize) -> Self {
        debug_assert!(grid.width > 0 && grid.height > 0);

        Self {
            x: self.x.rem_euclid(i32::from(grid.width)),
            y: self.y.rem_euclid(i32::from(grid.height)),
        }
    }
}

impl Add for GridVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Snake body, heading and owed growth.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<GridVector>,
    direction: Direction,
    pending_growth: u32,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: GridVector, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            pending_growth: 0,
        }
    }

    /// Creates a one-cell snake in the centre of `grid` facing a random direction.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        let direction = *Direction::ALL
            .choose(rng)
            .unwrap_or(&Direction::Right);
        Self::new(GridVector::center_of(grid), direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<GridVector>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: 0,
        }
    }

    /// Changes heading unless `direction` would reverse into the neck.
    ///
    /// The last accepted call before the next move wins.
    pub fn turn(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Advances one cell, wrapping around the grid edges.
    pub fn move_forward(&mut self, grid: GridSize) {
        let next_head = (self.head() + self.direction.vector()).wrapped(grid);
        self.body.push_front(next_head);

        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Owes `amount` extra segments, retained one per subsequent move.
    pub fn grow(&mut self, amount: u32) {
        self.pending_growth = self.pending_growth.saturating_add(amount);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> GridVector {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: GridVector) -> bool {
        self.body.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when the body has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &GridVector> {
        self.body.iter()
    }
}
