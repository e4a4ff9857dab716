//! Crank Charger entry point
//!
//! Headless native runner: plays rounds with the seeded autoplay cranker and
//! prints the HUD as text. A windowed front end only needs to swap the
//! autoplay for real key state and draw `hud::layout`.
//!
//! Usage: `crank-charger [variant|config.json] [seed] [rounds]`

use std::time::Duration;

use crank_charger::consts::TICKS_PER_SECOND;
use crank_charger::hud;
use crank_charger::sim::{Autoplay, Cadence, GameEvent};
use crank_charger::{Game, GameConfig, Variant};

/// Print the HUD every this many ticks
const HUD_INTERVAL: u64 = 120;
/// Give up on a round after this many ticks
const MAX_TICKS: u64 = 1_000_000;

fn main() {
    env_logger::init();
    log::info!("Crank Charger (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(arg) if arg.ends_with(".json") => GameConfig::load_or_default(&arg),
        Some(arg) => match arg.parse::<Variant>() {
            Ok(variant) => {
                log::info!("Variant: {}", variant.as_str());
                GameConfig::from_variant(variant)
            }
            Err(e) => {
                log::warn!("{}, using Classic", e);
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let rounds = args.next().and_then(|s| s.parse().ok()).unwrap_or(3usize);
    log::info!("Autoplay seed: {}, rounds: {}", seed, rounds);

    let mut game = Game::new(config);
    let mut bot = Autoplay::with_bindings(seed, Cadence::default(), game.config().bindings);
    let mut finished = 0;

    while finished < rounds {
        let mode = game.snapshot().mode;
        let snapshot = game.update(bot.keys(mode));

        if game.total_ticks() % HUD_INTERVAL == 0 {
            print_hud(&game, &snapshot);
        }
        for event in game.events() {
            if let GameEvent::RoundFinished { .. } = event {
                finished += 1;
                print_hud(&game, &snapshot);
            }
        }

        if game.state().elapsed_ticks > MAX_TICKS {
            log::error!("Round did not finish within {} ticks, stopping", MAX_TICKS);
            break;
        }
    }

    let played = Duration::from_secs_f64(game.total_ticks() as f64 / TICKS_PER_SECOND as f64);
    println!("\nSession ({:.1}s of game time):", played.as_secs_f64());
    for (i, record) in game.records().entries.iter().enumerate() {
        println!(
            "  #{} round {}: {} ticks (velocity {})",
            i + 1,
            record.round,
            record.score,
            record.velocity
        );
    }
}

fn print_hud(game: &Game, snapshot: &crank_charger::sim::RoundSnapshot) {
    let frame = hud::layout(snapshot, game.config());
    println!("--- tick {} ({:?}) ---", game.total_ticks(), snapshot.mode);
    for line in &frame.lines {
        println!("{}", line.text);
    }
    if frame.sprite.is_some() {
        println!("magnet: {} deg", hud::rotation_degrees(snapshot));
    }
}
