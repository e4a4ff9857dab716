//! Round state and core simulation types
//!
//! Everything the presentation layer needs to draw a frame lives in
//! [`RoundState`] and is published as a [`RoundSnapshot`].

use serde::{Deserialize, Serialize};

use crate::consts::DEGREES_PER_CHARGE;

/// Current screen/mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Title screen, waiting for confirm
    #[default]
    Title,
    /// Cranking
    Playing,
    /// Gauge full, score recorded
    Finished,
}

/// Crank direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    /// Round cancelled before the gauge filled (no score)
    RoundAbandoned { elapsed_ticks: u64 },
    RoundFinished { score: u64, new_best: bool },
    /// Left the finish screen
    ReturnedToTitle { score: u64 },
    VelocityChanged { velocity: i64 },
}

/// Complete round state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub mode: Mode,
    /// Ticks spent in the current round
    pub elapsed_ticks: u64,
    /// Ticks the magnet has been turning (keeps running while Finished)
    pub spin_ticks: u64,
    /// Crank speed (degrees per tick at tick rate 1)
    pub angular_velocity: i64,
    /// Accumulated rotation in degrees; charge is this divided by 360
    pub rotation_degrees: i64,
    /// Ticks taken by the last completed round
    pub score: u64,
    /// Fewest ticks across completed rounds (None until a round completes)
    pub best_score: Option<u64>,
    /// Last accepted crank direction
    pub last_direction: Option<Direction>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    /// Fresh process state: title screen, no best score
    pub fn new() -> Self {
        Self {
            mode: Mode::Title,
            elapsed_ticks: 0,
            spin_ticks: 0,
            angular_velocity: 0,
            rotation_degrees: 0,
            score: 0,
            best_score: None,
            last_direction: None,
        }
    }

    /// Reset the round counters. Best score and mode are left alone.
    pub fn init(&mut self) {
        self.elapsed_ticks = 0;
        self.spin_ticks = 0;
        self.angular_velocity = 0;
        self.rotation_degrees = 0;
        self.score = 0;
        self.last_direction = None;
    }

    /// Accumulated charge (rotation units)
    pub fn charge(&self) -> f64 {
        self.rotation_degrees as f64 / DEGREES_PER_CHARGE as f64
    }

    /// Record a completed round. Returns true if it set a new best.
    pub fn record_score(&mut self, score: u64) -> bool {
        self.score = score;
        match self.best_score {
            Some(best) if best <= score => false,
            _ => {
                self.best_score = Some(score);
                true
            }
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            mode: self.mode,
            elapsed_ticks: self.elapsed_ticks,
            spin_ticks: self.spin_ticks,
            angular_velocity: self.angular_velocity,
            charge: self.charge(),
            score: self.score,
            best_score: self.best_score,
        }
    }
}

/// Read-only view of the round published to presentation after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub mode: Mode,
    pub elapsed_ticks: u64,
    pub spin_ticks: u64,
    pub angular_velocity: i64,
    pub charge: f64,
    pub score: u64,
    pub best_score: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = RoundState::new();
        assert_eq!(state.mode, Mode::Title);
        assert_eq!(state.best_score, None);
        assert_eq!(state.charge(), 0.0);
    }

    #[test]
    fn test_init_keeps_best_score() {
        let mut state = RoundState::new();
        state.elapsed_ticks = 42;
        state.spin_ticks = 50;
        state.angular_velocity = -3;
        state.rotation_degrees = 720;
        state.last_direction = Some(Direction::Right);
        state.record_score(42);

        state.init();
        assert_eq!(state.elapsed_ticks, 0);
        assert_eq!(state.spin_ticks, 0);
        assert_eq!(state.angular_velocity, 0);
        assert_eq!(state.rotation_degrees, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.last_direction, None);
        assert_eq!(state.best_score, Some(42));
    }

    #[test]
    fn test_init_idempotent() {
        let mut once = RoundState::new();
        once.elapsed_ticks = 7;
        once.rotation_degrees = -90;
        once.init();

        let mut twice = once.clone();
        twice.init();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_record_score_keeps_minimum() {
        let mut state = RoundState::new();
        assert!(state.record_score(300));
        assert!(!state.record_score(400));
        assert_eq!(state.best_score, Some(300));
        assert!(state.record_score(250));
        assert_eq!(state.best_score, Some(250));
        // Ties are not a new best
        assert!(!state.record_score(250));
        assert_eq!(state.score, 250);
    }

    #[test]
    fn test_charge_from_degrees() {
        let mut state = RoundState::new();
        state.rotation_degrees = 540;
        assert_eq!(state.charge(), 1.5);
        state.rotation_degrees = -180;
        assert_eq!(state.charge(), -0.5);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = RoundState::new();
        state.mode = Mode::Playing;
        state.angular_velocity = 4;
        let json = serde_json::to_string(&state.snapshot()).expect("serialize");
        assert!(json.contains("\"Playing\""));
        let back: RoundSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state.snapshot());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }
}
