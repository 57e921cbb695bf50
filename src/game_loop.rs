use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::error::GameError;
use crate::game::GameState;
use crate::input::{Command, InputSource};
use crate::snapshot::RenderSnapshot;

/// Draws render snapshots.
pub trait Presenter {
    fn present(&mut self, snapshot: &RenderSnapshot) -> Result<(), GameError>;
}

/// Caps the loop at a tick rate that may change between frames.
pub trait TickPacer {
    /// Blocks until the next frame is due at `ticks_per_second`.
    fn wait_for_tick(&mut self, ticks_per_second: u32);
}

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Returns the frame interval for a tick rate.
#[must_use]
pub fn tick_interval(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}

/// Sleeps away whatever is left of the current frame interval.
#[derive(Debug, Default)]
pub struct FramePacer {
    last_frame: Option<Instant>,
}

impl FramePacer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickPacer for FramePacer {
    fn wait_for_tick(&mut self, ticks_per_second: u32) {
        let interval = tick_interval(ticks_per_second);
        if let Some(last_frame) = self.last_frame {
            let elapsed = last_frame.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }
}

/// Fixed-tick driver: input in, one update, snapshot out.
pub struct GameLoop<I, P, T, R> {
    state: GameState<R>,
    input: I,
    presenter: P,
    pacer: T,
}

impl<I, P, T, R> GameLoop<I, P, T, R>
where
    I: InputSource,
    P: Presenter,
    T: TickPacer,
    R: Rng,
{
    #[must_use]
    pub fn new(state: GameState<R>, input: I, presenter: P, pacer: T) -> Self {
        Self {
            state,
            input,
            presenter,
            pacer,
        }
    }

    /// Runs frames until the player quits or a fault occurs.
    pub fn run(&mut self) -> Result<(), GameError> {
        info!("game loop started at {} ticks/s", self.state.speed);

        let mut frames: u64 = 0;
        while self.step()? == Flow::Continue {
            frames += 1;
        }

        info!(
            "game loop stopped after {frames} frames, final score {}",
            self.state.score
        );
        Ok(())
    }

    /// Runs one frame. A `Quit` command ends the frame before the update.
    pub fn step(&mut self) -> Result<Flow, GameError> {
        self.pacer.wait_for_tick(self.state.speed);

        for command in self.input.drain_commands()? {
            if command == Command::Quit {
                debug!("quit requested");
                return Ok(Flow::Quit);
            }
            self.state.apply_command(command)?;
        }

        self.state.update()?;
        self.presenter.present(&self.state.snapshot())?;

        Ok(Flow::Continue)
    }

    #[must_use]
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<R> {
        &mut self.state
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn pacer(&self) -> &T {
        &self.pacer
    }

    /// Hands back the final state.
    #[must_use]
    pub fn into_state(self) -> GameState<R> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::tick_interval;

    #[test]
    fn tick_interval_follows_speed() {
        assert_eq!(tick_interval(10), Duration::from_millis(100));
        assert_eq!(tick_interval(20), Duration::from_millis(50));
    }

    #[test]
    fn zero_speed_is_treated_as_one_tick_per_second() {
        assert_eq!(tick_interval(0), Duration::from_secs(1));
    }
}
