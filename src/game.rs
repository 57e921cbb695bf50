use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, GridSize};
use crate::error::GameError;
use crate::food::Food;
use crate::input::{Command, Direction};
use crate::snake::Snake;
use crate::snapshot::{RenderSnapshot, SegmentKind, SnakeCell};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Speed for a cumulative score: one step per `speed_increment_interval`
/// food, clamped to the configured range.
#[must_use]
pub fn speed_for_score(score: u32, config: &GameConfig) -> u32 {
    config
        .initial_speed
        .saturating_add(score / config.speed_increment_interval)
        .clamp(config.initial_speed, config.max_speed)
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub speed: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    config: GameConfig,
    rng: R,
}

impl GameState<StdRng> {
    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Starts a fresh session drawing all randomness from `rng`.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let snake = Snake::spawn(&mut rng, config.grid);
        let food = Food::respawn(&mut rng, config.grid, snake.segments())?;
        info!(
            "new game on {}x{} grid, heading {:?}",
            config.grid.width,
            config.grid.height,
            snake.direction()
        );

        Ok(Self {
            snake,
            food,
            score: 0,
            speed: config.initial_speed,
            tick_count: 0,
            status: GameStatus::Running,
            config,
            rng,
        })
    }

    /// Advances simulation by one tick. Does nothing unless running.
    pub fn update(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Running {
            return Ok(());
        }

        self.tick_count += 1;
        self.snake.move_forward(self.config.grid);
        trace!("tick {} head {:?}", self.tick_count, self.snake.head());

        if self.snake.collides_with_self() {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} ticks, score {}, length {}",
                self.tick_count,
                self.score,
                self.snake.len()
            );
            return Ok(());
        }

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow(1);
            self.food = Food::respawn(&mut self.rng, self.config.grid, self.snake.segments())?;
            debug!(
                "food eaten, score {} next food {:?}",
                self.score, self.food.position
            );

            let speed = speed_for_score(self.score, &self.config);
            if speed != self.speed {
                debug!("speed {} -> {speed}", self.speed);
                self.speed = speed;
            }
        }

        Ok(())
    }

    /// Steers the snake. Accepted in every state, so turns made while
    /// paused take effect on the first tick after resuming.
    pub fn turn(&mut self, direction: Direction) {
        self.snake.turn(direction);
    }

    /// Flips between running and paused; ignored once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => return,
        };
        debug!("status now {:?}", self.status);
    }

    /// Replaces snake and food and clears score, speed and flags.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let snake = Snake::spawn(&mut self.rng, self.config.grid);
        let food = Food::respawn(&mut self.rng, self.config.grid, snake.segments())?;

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        info!("game reset, heading {:?}", self.snake.direction());

        Ok(())
    }

    /// Applies one player command. `Restart` only acts after game over;
    /// `Quit` is left to the loop.
    pub fn apply_command(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Turn(direction) => self.turn(direction),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart if self.is_game_over() => self.reset()?,
            Command::Restart | Command::Quit => {}
        }

        Ok(())
    }
}

impl<R> GameState<R> {
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid
    }

    /// Captures the drawable state of this frame.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        let snake = self
            .snake
            .segments()
            .enumerate()
            .map(|(index, position)| SnakeCell {
                position: *position,
                kind: if index == 0 {
                    SegmentKind::Head
                } else {
                    SegmentKind::Body
                },
            })
            .collect();

        RenderSnapshot {
            grid: self.config.grid,
            snake,
            food: self.food.position,
            score: self.score,
            speed: self.speed,
            paused: self.is_paused(),
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GameConfig, GridSize};
    use crate::food::Food;
    use crate::input::{Command, Direction};
    use crate::snake::{GridVector, Snake};
    use crate::snapshot::SegmentKind;

    use super::{GameState, GameStatus, speed_for_score};

    fn small_config() -> GameConfig {
        GameConfig::with_grid(GridSize {
            width: 10,
            height: 10,
        })
    }

    #[test]
    fn snake_grows_on_the_tick_after_eating() {
        let mut state = GameState::new_with_seed(small_config(), 1).expect("valid config");
        state.snake = Snake::new(GridVector { x: 1, y: 1 }, Direction::Right);
        state.food = Food::at(GridVector { x: 2, y: 1 });

        state.update().expect("tick");
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 1);

        state.update().expect("tick");
        assert_eq!(state.snake.len(), 2);
    }

    #[test]
    fn eaten_food_respawns_off_the_snake() {
        let mut state = GameState::new_with_seed(small_config(), 4).expect("valid config");
        state.snake = Snake::new(GridVector { x: 5, y: 5 }, Direction::Right);
        state.food = Food::at(GridVector { x: 6, y: 5 });

        state.update().expect("tick");

        assert_eq!(state.score, 1);
        assert_ne!(state.food.position, GridVector { x: 6, y: 5 });
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn snake_collision_with_self_sets_game_over() {
        let mut state = GameState::new_with_seed(small_config(), 3).expect("valid config");
        state.snake = Snake::from_segments(
            vec![
                GridVector { x: 2, y: 2 },
                GridVector { x: 2, y: 3 },
                GridVector { x: 1, y: 3 },
                GridVector { x: 1, y: 2 },
                GridVector { x: 1, y: 1 },
            ],
            Direction::Left,
        );
        state.food = Food::at(GridVector { x: 8, y: 8 });

        state.update().expect("tick");

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.score, 0);

        let head = state.snake.head();
        state.update().expect("tick");
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn speed_steps_up_every_interval_and_clamps() {
        let config = GameConfig::default();

        assert_eq!(speed_for_score(0, &config), config.initial_speed);
        assert_eq!(speed_for_score(4, &config), config.initial_speed);
        assert_eq!(
            speed_for_score(config.speed_increment_interval, &config),
            config.initial_speed + 1
        );
        assert_eq!(speed_for_score(9, &config), config.initial_speed + 1);
        assert_eq!(speed_for_score(1_000, &config), config.max_speed);
        assert_eq!(speed_for_score(u32::MAX, &config), config.max_speed);
    }

    #[test]
    fn eating_updates_speed_from_score() {
        let mut state = GameState::new_with_seed(small_config(), 8).expect("valid config");
        state.score = 4;
        state.snake = Snake::new(GridVector { x: 3, y: 3 }, Direction::Down);
        state.food = Food::at(GridVector { x: 3, y: 4 });

        state.update().expect("tick");

        assert_eq!(state.score, 5);
        assert_eq!(state.speed, state.config().initial_speed + 1);
    }

    #[test]
    fn paused_update_changes_nothing_but_turns_register() {
        let mut state = GameState::new_with_seed(small_config(), 5).expect("valid config");
        state.snake = Snake::new(GridVector { x: 4, y: 4 }, Direction::Right);
        state.toggle_pause();
        assert!(state.is_paused());

        let food = state.food;
        state.update().expect("tick");
        state.turn(Direction::Up);
        state.update().expect("tick");

        assert_eq!(state.snake.head(), GridVector { x: 4, y: 4 });
        assert_eq!(state.snake.direction(), Direction::Up);
        assert_eq!(state.food, food);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);

        state.toggle_pause();
        state.update().expect("tick");
        assert_eq!(state.snake.head(), GridVector { x: 4, y: 3 });
    }

    #[test]
    fn pause_toggle_is_ignored_after_game_over() {
        let mut state = GameState::new_with_seed(small_config(), 6).expect("valid config");
        state.status = GameStatus::GameOver;

        state.toggle_pause();

        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn restart_only_applies_after_game_over() {
        let mut state = GameState::new_with_seed(small_config(), 7).expect("valid config");
        state.score = 3;

        state.apply_command(Command::Restart).expect("command");
        assert_eq!(state.score, 3);

        state.status = GameStatus::GameOver;
        state.apply_command(Command::Restart).expect("command");
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Running);
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut state = GameState::new_with_seed(small_config(), 2).expect("valid config");
        state.score = 12;
        state.speed = 15;
        state.snake.grow(3);
        state.status = GameStatus::GameOver;

        state.reset().expect("reset");

        assert_eq!(state.score, 0);
        assert_eq!(state.speed, state.config().initial_speed);
        assert!(!state.is_paused());
        assert!(!state.is_game_over());
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.pending_growth(), 0);
        assert_eq!(state.snake.head(), GridVector { x: 5, y: 5 });
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn snapshot_marks_head_then_body() {
        let mut state = GameState::new_with_seed(small_config(), 10).expect("valid config");
        state.snake = Snake::from_segments(
            vec![GridVector { x: 3, y: 3 }, GridVector { x: 2, y: 3 }],
            Direction::Right,
        );
        state.toggle_pause();

        let snapshot = state.snapshot();

        assert_eq!(snapshot.snake.len(), 2);
        assert_eq!(snapshot.snake[0].kind, SegmentKind::Head);
        assert_eq!(snapshot.snake[1].kind, SegmentKind::Body);
        assert_eq!(snapshot.head(), Some(GridVector { x: 3, y: 3 }));
        assert!(snapshot.paused);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.hud_text(), "Score: 0  Speed: 10");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            initial_speed: 0,
            ..small_config()
        };

        assert!(GameState::new_with_seed(config, 1).is_err());
    }
}
