use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::{GameEngine, TickOutcome};
use crate::game::GameState;
use crate::input::{Direction, GameInput};

/// Fixed-interval repeating timer that can be stopped and re-armed.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Schedules the next tick one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true when a tick is due and re-arms for the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while stopped.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// Drives one engine and its state from a timer and asynchronous input.
///
/// Direction input is queued and applied in arrival order at the start of
/// the next tick, so a move is never observed half-applied.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    engine: GameEngine<R>,
    state: GameState,
    timer: TickTimer,
    pending: VecDeque<Direction>,
}

impl<R: Rng> Session<R> {
    /// Starts a new game and arms the tick timer at `now`.
    pub fn start(mut engine: GameEngine<R>, now: Instant) -> Self {
        let state = engine.new_game();
        let mut timer = TickTimer::new(engine.board().tick_interval());
        timer.arm(now);

        Self {
            engine,
            state,
            timer,
            pending: VecDeque::new(),
        }
    }

    /// Applies one external input event.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match input {
            GameInput::Direction(direction) => {
                if !self.state.is_game_over() {
                    self.pending.push_back(direction);
                }
            }
            GameInput::Restart => self.restart(now),
            GameInput::Quit => {}
        }
    }

    /// Runs a tick when one is due. Returns the outcome of that tick.
    pub fn update(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.poll(now) {
            return None;
        }

        while let Some(direction) = self.pending.pop_front() {
            self.engine.set_direction(&mut self.state, direction);
        }

        let outcome = self.engine.advance(&mut self.state);
        if self.state.is_game_over() {
            self.timer.disarm();
            debug!("tick timer stopped after game over");
        }

        Some(outcome)
    }

    /// Starts a fresh game and re-arms the timer.
    pub fn restart(&mut self, now: Instant) {
        self.engine.restart(&mut self.state);
        self.pending.clear();
        self.timer.arm(now);
        debug!("tick timer re-armed");
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// True while the timer is scheduling ticks.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timer.is_armed()
    }

    /// Time left until the next tick, or `None` once the game is over.
    #[must_use]
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}
