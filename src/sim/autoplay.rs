//! Scripted cranker for demos and tests
//!
//! Produces raw held-key sets the same way a player's keyboard would:
//! a press frame followed by release frames. Sloppy double-taps are rolled
//! from a seeded RNG so runs are reproducible.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::input::{KeyBindings, KeyId};
use super::state::{Direction, Mode};

/// Autoplay timing and sloppiness
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    /// Ticks the key is held for each press
    pub hold_ticks: u32,
    /// Ticks with nothing held between presses
    pub gap_ticks: u32,
    /// Chance that a press repeats the previous side instead of alternating
    pub double_tap_chance: f64,
    /// Alternating presses before the bot stops cranking and lets it spin
    pub max_presses: u32,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            hold_ticks: 2,
            gap_ticks: 2,
            double_tap_chance: 0.1,
            max_presses: 60,
        }
    }
}

/// Seeded bot that plays rounds
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    cadence: Cadence,
    bindings: KeyBindings,
    next_side: Direction,
    presses: u32,
    /// Ticks into the current press/gap cycle
    phase: u32,
    /// Alternates so confirm/cancel get a release frame between presses
    menu_toggle: bool,
}

impl Autoplay {
    pub fn new(seed: u64, cadence: Cadence) -> Self {
        Self::with_bindings(seed, cadence, KeyBindings::default())
    }

    pub fn with_bindings(seed: u64, cadence: Cadence, bindings: KeyBindings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            cadence,
            bindings,
            next_side: Direction::Left,
            presses: 0,
            phase: 0,
            menu_toggle: false,
        }
    }

    /// Keys held this tick for the given mode
    pub fn keys(&mut self, mode: Mode) -> Vec<KeyId> {
        match mode {
            Mode::Title => {
                self.reset_round();
                self.menu_key(self.bindings.confirm)
            }
            Mode::Finished => self.menu_key(self.bindings.cancel),
            Mode::Playing => {
                self.menu_toggle = false;
                self.crank_keys()
            }
        }
    }

    fn reset_round(&mut self) {
        self.next_side = Direction::Left;
        self.presses = 0;
        self.phase = 0;
    }

    fn menu_key(&mut self, key: KeyId) -> Vec<KeyId> {
        self.menu_toggle = !self.menu_toggle;
        if self.menu_toggle { vec![key] } else { Vec::new() }
    }

    fn crank_keys(&mut self) -> Vec<KeyId> {
        if self.presses >= self.cadence.max_presses {
            return Vec::new();
        }

        let cycle = self.cadence.hold_ticks.max(1) + self.cadence.gap_ticks.max(1);
        let held = self.phase < self.cadence.hold_ticks.max(1);
        let side = self.next_side;

        self.phase += 1;
        if self.phase >= cycle {
            self.phase = 0;
            self.presses += 1;
            if !self.rng.random_bool(self.cadence.double_tap_chance.clamp(0.0, 1.0)) {
                self.next_side = side.opposite();
            }
        }

        if !held {
            return Vec::new();
        }
        match side {
            Direction::Left => vec![self.bindings.left],
            Direction::Right => vec![self.bindings.right],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::InputEdgeTracker;

    #[test]
    fn test_title_presses_confirm_with_release() {
        let mut bot = Autoplay::new(1, Cadence::default());
        assert_eq!(bot.keys(Mode::Title), vec![KeyId::Space]);
        assert!(bot.keys(Mode::Title).is_empty());
        assert_eq!(bot.keys(Mode::Title), vec![KeyId::Space]);
    }

    #[test]
    fn test_clean_alternation() {
        let cadence = Cadence {
            hold_ticks: 1,
            gap_ticks: 1,
            double_tap_chance: 0.0,
            max_presses: 4,
        };
        let mut bot = Autoplay::new(7, cadence);
        let mut tracker = InputEdgeTracker::default();
        let mut presses = Vec::new();
        for _ in 0..12 {
            let edges = tracker.sample(bot.keys(Mode::Playing));
            if edges.left_just_pressed {
                presses.push(Direction::Left);
            }
            if edges.right_just_pressed {
                presses.push(Direction::Right);
            }
        }
        assert_eq!(
            presses,
            vec![Direction::Left, Direction::Right, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn test_same_seed_same_keys() {
        let mut a = Autoplay::new(99, Cadence::default());
        let mut b = Autoplay::new(99, Cadence::default());
        for _ in 0..500 {
            assert_eq!(a.keys(Mode::Playing), b.keys(Mode::Playing));
        }
    }
}
