//! Edge-triggered input
//!
//! The host hands us the set of keys held down this frame. The simulation
//! only cares about presses, so we diff against last frame's set and report
//! rising edges.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Physical key identifier as reported by the host input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyId {
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    /// Any other key (backend-specific code)
    Other(u32),
}

/// Which key drives which action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: KeyId,
    pub right: KeyId,
    pub confirm: KeyId,
    pub cancel: KeyId,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyId::ArrowLeft,
            right: KeyId::ArrowRight,
            confirm: KeyId::Space,
            cancel: KeyId::Escape,
        }
    }
}

/// Rising edges for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub left_just_pressed: bool,
    pub right_just_pressed: bool,
    pub confirm_just_pressed: bool,
    pub cancel_just_pressed: bool,
}

impl InputEdges {
    /// True if no tracked key was pressed this tick
    pub fn is_empty(&self) -> bool {
        !(self.left_just_pressed
            || self.right_just_pressed
            || self.confirm_just_pressed
            || self.cancel_just_pressed)
    }
}

/// Converts raw pressed-key samples into [`InputEdges`]
#[derive(Debug, Clone, Default)]
pub struct InputEdgeTracker {
    bindings: KeyBindings,
    previous: HashSet<KeyId>,
}

impl InputEdgeTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            previous: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Sample this tick's held keys and return the keys that went down since
    /// the previous sample.
    pub fn sample<I>(&mut self, raw_pressed: I) -> InputEdges
    where
        I: IntoIterator<Item = KeyId>,
    {
        let current: HashSet<KeyId> = raw_pressed.into_iter().collect();
        let rose = |key: KeyId| current.contains(&key) && !self.previous.contains(&key);

        let edges = InputEdges {
            left_just_pressed: rose(self.bindings.left),
            right_just_pressed: rose(self.bindings.right),
            confirm_just_pressed: rose(self.bindings.confirm),
            cancel_just_pressed: rose(self.bindings.cancel),
        };

        self.previous = current;
        edges
    }

    /// Forget the remembered key set (every held key will fire again)
    pub fn reset(&mut self) {
        self.previous.clear();
    }
}
