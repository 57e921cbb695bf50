use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;
use crate::snake::GridVector;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step on the grid; y grows downwards.
    #[must_use]
    pub fn vector(self) -> GridVector {
        match self {
            Self::Up => GridVector { x: 0, y: -1 },
            Self::Down => GridVector { x: 0, y: 1 },
            Self::Left => GridVector { x: -1, y: 0 },
            Self::Right => GridVector { x: 1, y: 0 },
        }
    }
}

/// High-level commands consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

impl Command {
    /// Maps a key press to a command; arrows and WASD steer.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Self::Quit);
        }

        match key.code {
            KeyCode::Esc => Some(Self::Quit),
            KeyCode::Char('p' | 'P') => Some(Self::TogglePause),
            KeyCode::Char(' ') => Some(Self::Restart),
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Self::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Self::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Self::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Self::Turn(Direction::Right)),
            _ => None,
        }
    }
}

/// Source of player commands, drained once per frame.
pub trait InputSource {
    /// Returns every command that arrived since the previous call, oldest first.
    fn drain_commands(&mut self) -> Result<Vec<Command>, GameError>;
}

/// Reads key presses from the crossterm event queue without blocking.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for InputHandler {
    fn drain_commands(&mut self) -> Result<Vec<Command>, GameError> {
        let mut commands = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = Command::from_key_event(key) {
                    commands.push(command);
                }
            }
        }

        Ok(commands)
    }
}
