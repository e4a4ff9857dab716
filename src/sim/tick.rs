//! Fixed timestep simulation tick
//!
//! Advances the round one step: mode transitions, charge accrual and the
//! alternation rule that turns crank presses into angular velocity.

use super::input::InputEdges;
use super::state::{Direction, GameEvent, Mode, RoundState};
use crate::settings::GameConfig;

/// Advance the round by one fixed timestep
pub fn advance(state: &mut RoundState, input: &InputEdges, config: &GameConfig) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.mode {
        Mode::Title => {
            if input.confirm_just_pressed {
                state.init();
                state.mode = Mode::Playing;
                events.push(GameEvent::RoundStarted);
            }
        }
        Mode::Playing => {
            if input.cancel_just_pressed {
                let elapsed_ticks = state.elapsed_ticks;
                state.init();
                state.mode = Mode::Title;
                events.push(GameEvent::RoundAbandoned { elapsed_ticks });
                return events;
            }

            state.elapsed_ticks += 1;
            state.spin_ticks += 1;
            accrue(state, config);

            if state.rotation_degrees >= config.target_degrees() {
                let score = state.elapsed_ticks;
                let new_best = state.record_score(score);
                state.mode = Mode::Finished;
                events.push(GameEvent::RoundFinished { score, new_best });
                return events;
            }

            // Left is checked first; if both fire, right sees left as last
            if input.left_just_pressed {
                crank(state, Direction::Left, config, &mut events);
            }
            if input.right_just_pressed {
                crank(state, Direction::Right, config, &mut events);
            }
        }
        Mode::Finished => {
            if input.cancel_just_pressed {
                let score = state.score;
                state.init();
                state.mode = Mode::Title;
                events.push(GameEvent::ReturnedToTitle { score });
                return events;
            }

            // The magnet keeps spinning at its final speed; the score clock stays stopped
            state.spin_ticks += 1;
            accrue(state, config);
        }
    }

    events
}

/// Add one tick of rotation to the charge
fn accrue(state: &mut RoundState, config: &GameConfig) {
    let step = config.tick_rate.saturating_mul(state.angular_velocity);
    state.rotation_degrees = state.rotation_degrees.saturating_add(step);
    if let Some(floor) = config.floor_degrees() {
        state.rotation_degrees = state.rotation_degrees.max(floor);
    }
}

/// Apply the alternation rule for a press in `dir`
///
/// Opposite of the last press speeds the crank up, a repeat of the last press
/// slows it down, and the first press of a round only sets the direction.
fn crank(state: &mut RoundState, dir: Direction, config: &GameConfig, events: &mut Vec<GameEvent>) {
    let before = state.angular_velocity;

    match state.last_direction {
        Some(last) if last == dir.opposite() => state.angular_velocity += 1,
        Some(last) if last == dir => {
            state.angular_velocity -= 1;
            if let Some(floor) = config.velocity_floor {
                state.angular_velocity = state.angular_velocity.max(floor);
            }
        }
        _ => {}
    }
    state.last_direction = Some(dir);

    if state.angular_velocity != before {
        events.push(GameEvent::VelocityChanged {
            velocity: state.angular_velocity,
        });
    }
}

/// Number of ticks a round takes at a constant positive velocity
pub fn ticks_to_finish(config: &GameConfig, velocity: i64) -> Option<u64> {
    if velocity <= 0 {
        return None;
    }
    let per_tick = config.tick_rate.checked_mul(velocity)?;
    let target = config.target_degrees();
    let ticks = target / per_tick + i64::from(target % per_tick != 0);
    Some(ticks as u64)
}
