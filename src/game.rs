//! Per-tick driver
//!
//! Owns the single [`RoundState`] and [`InputEdgeTracker`] for the process.
//! Each call to [`Game::update`] samples input, advances the round, and
//! hands back an immutable snapshot for drawing.

use crate::highscores::SessionRecords;
use crate::settings::GameConfig;
use crate::sim::{GameEvent, InputEdgeTracker, KeyId, RoundSnapshot, RoundState, advance};

pub struct Game {
    config: GameConfig,
    state: RoundState,
    tracker: InputEdgeTracker,
    records: SessionRecords,
    /// Events from the most recent tick
    events: Vec<GameEvent>,
    ticks: u64,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let tracker = InputEdgeTracker::new(config.bindings);
        Self {
            config,
            state: RoundState::new(),
            tracker,
            records: SessionRecords::new(),
            events: Vec::new(),
            ticks: 0,
        }
    }

    /// Run one fixed tick with this frame's held keys
    pub fn update<I>(&mut self, held: I) -> RoundSnapshot
    where
        I: IntoIterator<Item = KeyId>,
    {
        self.ticks += 1;
        let edges = self.tracker.sample(held);
        self.events = advance(&mut self.state, &edges, &self.config);

        for event in &self.events {
            match *event {
                GameEvent::RoundStarted => {
                    log::info!("Round started (target {})", self.config.charge_target);
                }
                GameEvent::RoundAbandoned { elapsed_ticks } => {
                    log::info!("Round abandoned after {} ticks", elapsed_ticks);
                }
                GameEvent::RoundFinished { score, new_best } => {
                    let rank = self.records.add_score(score, self.state.angular_velocity);
                    if new_best {
                        log::info!("Round finished in {} ticks - new best!", score);
                    } else {
                        log::info!(
                            "Round finished in {} ticks (best {:?}, rank {:?})",
                            score,
                            self.state.best_score,
                            rank
                        );
                    }
                }
                GameEvent::ReturnedToTitle { score } => {
                    log::info!("Back to title (last round {} ticks)", score);
                }
                GameEvent::VelocityChanged { velocity } => {
                    log::debug!("Velocity {} at tick {}", velocity, self.state.elapsed_ticks);
                }
            }
        }

        self.state.snapshot()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn records(&self) -> &SessionRecords {
        &self.records
    }

    /// Events produced by the last update
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Ticks run since the game was created
    pub fn total_ticks(&self) -> u64 {
        self.ticks
    }
}
