//! HUD and sprite layout
//!
//! Pure functions from a [`RoundSnapshot`] to what a renderer should draw:
//! text lines with their screen positions, the gauge string, and the
//! electromagnet sprite transform. Nothing here mutates game state.

use glam::{Affine2, Vec2};

use crate::settings::GameConfig;
use crate::sim::{Mode, RoundSnapshot};

/// Charge per gauge bar
pub const CHARGE_PER_BAR: i64 = 100;

/// Left margin for status text
const TEXT_X: f32 = 20.0;
/// Line spacing for status text (font size)
const LINE_HEIGHT: f32 = 10.0;

/// A line of text at a screen position (baseline origin)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub pos: Vec2,
}

impl TextLine {
    fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
        }
    }
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudFrame {
    pub lines: Vec<TextLine>,
    /// Sprite transform (None on the title screen)
    pub sprite: Option<Affine2>,
}

/// Gauge text, e.g. `[230/500]||`
pub fn gauge_text(snapshot: &RoundSnapshot, config: &GameConfig) -> String {
    let target = config.charge_target;

    if snapshot.mode == Mode::Finished {
        return full_gauge(target, target / CHARGE_PER_BAR);
    }

    // Truncate toward zero, as the bar count does
    let charge = snapshot.charge.trunc() as i64;
    let bars = charge / CHARGE_PER_BAR;

    if snapshot.charge > target as f64 {
        full_gauge(target, bars)
    } else if snapshot.charge >= 0.0 {
        format!("[{}/{}]{}", charge, target, "|".repeat(bars as usize))
    } else {
        format!("[{}/{}]", charge, target)
    }
}

fn full_gauge(target: i64, bars: i64) -> String {
    format!("[{}/{}]{}", target, target, "|".repeat(bars.max(0) as usize))
}

/// Sprite rotation in whole degrees, in `[0, 360)`
///
/// Uses the spin clock rather than the score clock so the magnet keeps
/// turning on the finish screen.
pub fn rotation_degrees(snapshot: &RoundSnapshot) -> u32 {
    let turned = snapshot.spin_ticks as i128 * snapshot.angular_velocity as i128;
    turned.rem_euclid(360) as u32
}

/// Transform placing the sprite centered on screen, rotated about its center
pub fn sprite_transform(snapshot: &RoundSnapshot, config: &GameConfig) -> Affine2 {
    let angle = (rotation_degrees(snapshot) as f32).to_radians();
    let half_image = Vec2::new(config.image_width as f32, config.image_height as f32) / 2.0;
    let half_screen = Vec2::new(config.screen_width as f32, config.screen_height as f32) / 2.0;

    Affine2::from_translation(half_screen)
        * Affine2::from_scale(Vec2::splat(config.image_scale))
        * Affine2::from_angle(angle)
        * Affine2::from_translation(-half_image)
}

/// Build the full HUD for a snapshot
pub fn layout(snapshot: &RoundSnapshot, config: &GameConfig) -> HudFrame {
    let mid_y = config.screen_height as f32 / 2.0;

    if snapshot.mode == Mode::Title {
        return HudFrame {
            lines: vec![
                TextLine::new("Press Space! Game Start!", TEXT_X, mid_y - 20.0),
                TextLine::new("Press ← & → alternately!", TEXT_X, mid_y),
                TextLine::new("The magnet will start spinning!", 0.0, mid_y + 20.0),
            ],
            sprite: None,
        };
    }

    let mut lines = vec![
        TextLine::new(
            format!("gauge: {}", gauge_text(snapshot, config)),
            TEXT_X,
            LINE_HEIGHT,
        ),
        TextLine::new(
            format!("velocity: {}", snapshot.angular_velocity),
            TEXT_X,
            LINE_HEIGHT * 2.0,
        ),
    ];

    let score = match snapshot.mode {
        Mode::Finished => snapshot.score,
        _ => snapshot.elapsed_ticks,
    };
    lines.push(TextLine::new(format!("score: {}", score), TEXT_X, LINE_HEIGHT * 3.0));

    if config.show_best_score {
        if let Some(best) = snapshot.best_score {
            lines.push(TextLine::new(format!("hiscore: {}", best), TEXT_X, LINE_HEIGHT * 4.0));
        }
    }

    if snapshot.mode == Mode::Finished {
        lines.push(TextLine::new("Finish!!! \\(^o^)/", TEXT_X, LINE_HEIGHT * 5.0));
        lines.push(TextLine::new(
            "Restart game. Esc.",
            TEXT_X,
            config.screen_height as f32 - 20.0,
        ));
    }

    HudFrame {
        lines,
        sprite: Some(sprite_transform(snapshot, config)),
    }
}
