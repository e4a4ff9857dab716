//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Input arrives as a held-key set, never from a backend API
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod input;
pub mod state;
pub mod tick;

pub use autoplay::{Autoplay, Cadence};
pub use input::{InputEdgeTracker, InputEdges, KeyBindings, KeyId};
pub use state::{Direction, GameEvent, Mode, RoundSnapshot, RoundState};
pub use tick::{advance, ticks_to_finish};
