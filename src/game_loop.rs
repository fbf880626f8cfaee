use std::time::Duration;

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    constants::TICK_DELAY,
    state::{Direction, GameState, Segment},
};

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    GameOver,
}

/// What the driver should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Run the next tick after this delay.
    Continue(Duration),
    /// Terminal; nothing is rescheduled.
    GameOver { score: u32 },
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    pub segments: &'a [Segment],
    pub apple: Segment,
    pub score: u32,
    pub alive: bool,
}

#[derive(Resource, Debug)]
pub struct GameLoop {
    state: GameState,
    phase: Phase,
    rng: StdRng,
}

impl GameLoop {
    /// A fresh game with the apple dropped on a random cell.
    pub fn new() -> Self {
        let mut game = Self::with_rng(StdRng::from_os_rng());
        game.state.relocate_apple(&mut game.rng);
        game
    }

    /// A fresh game that keeps the initial apple position.
    pub fn with_rng(rng: StdRng) -> Self {
        Self::from_state(GameState::new(), rng)
    }

    pub fn from_state(state: GameState, rng: StdRng) -> Self {
        Self {
            state,
            phase: Phase::Running,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            segments: self.state.snake().segments(),
            apple: self.state.apple(),
            score: self.state.score(),
            alive: self.state.alive(),
        }
    }

    /// Last write wins; takes effect on the next advance.
    pub fn on_key(&mut self, dir: Direction) {
        if self.phase == Phase::Running {
            self.state.set_direction(dir);
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.phase == Phase::GameOver {
            return Tick::GameOver {
                score: self.state.score(),
            };
        }

        self.state.check_collisions();

        if self.state.alive() {
            self.state.check_apple_collision(&mut self.rng);
            self.state.advance();
            Tick::Continue(TICK_DELAY)
        } else {
            self.phase = Phase::GameOver;
            info!(
                score = self.state.score(),
                cause = ?self.state.collision(),
                "game over"
            );
            Tick::GameOver {
                score: self.state.score(),
            }
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot timer for the next tick. Only rearmed while the game is running.
#[derive(Resource, Deref, DerefMut)]
pub struct TickTimer(Timer);

impl Default for TickTimer {
    fn default() -> Self {
        Self(Timer::new(TICK_DELAY, TimerMode::Once))
    }
}

pub fn run_tick(
    time: Res<Time>,
    mut timer: ResMut<TickTimer>,
    mut game: ResMut<GameLoop>,
    mut next_phase: ResMut<NextState<Phase>>,
) {
    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    match game.tick() {
        Tick::Continue(delay) => {
            timer.set_duration(delay);
            timer.reset();
        }
        Tick::GameOver { score } => {
            debug!(score, "tick loop stopped");
            next_phase.set(Phase::GameOver);
        }
    }
}
