//! Crank Charger - a hand-crank electromagnet arcade game
//!
//! Alternate left and right to spin the magnet up; the spin fills a charge
//! gauge, and the fewer ticks it takes the better.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input edges, round state, tick)
//! - `game`: Per-tick driver tying input, simulation and records together
//! - `hud`: Read-only presentation model (text lines, sprite transform)
//! - `settings`: Data-driven round tuning and variant presets
//! - `highscores`: Session leaderboard

pub mod game;
pub mod highscores;
pub mod hud;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::SessionRecords;
pub use settings::{ConfigError, GameConfig, Variant};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Rotation multiplier applied per tick
    pub const TICK_RATE: i64 = 1;
    /// Degrees of rotation per unit of charge
    pub const DEGREES_PER_CHARGE: i64 = 360;
    /// Charge needed to win a round
    pub const CHARGE_TARGET: i64 = 500;
    /// Largest accepted charge target
    pub const MAX_CHARGE_TARGET: i64 = 1_000_000;
    /// Largest accepted tick rate
    pub const MAX_TICK_RATE: i64 = 1_000;

    /// Screen and sprite dimensions
    pub const SCREEN_WIDTH: u32 = 320;
    pub const SCREEN_HEIGHT: u32 = 320;
    pub const IMAGE_WIDTH: u32 = 224;
    pub const IMAGE_HEIGHT: u32 = 224;
}
