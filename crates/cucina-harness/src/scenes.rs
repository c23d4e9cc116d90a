use cucina_core::constants::CHUNK_SIZE_PX;
use cucina_sim::{FrameInput, Game};
use glam::Vec2;

/// A scripted headless playthrough: a seed plus a pure function from frame
/// number (and current state) to that frame's input.
pub struct ScenarioConfig {
    pub name: &'static str,
    pub seed: u64,
    pub script: fn(u64, &Game) -> FrameInput,
}

/// The standard scenario suite.
pub fn standard_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: "roamer",
            seed: 1,
            script: roamer,
        },
        ScenarioConfig {
            name: "brawler",
            seed: 2,
            script: brawler,
        },
        ScenarioConfig {
            name: "collector",
            seed: 3,
            script: collector,
        },
    ]
}

/// Walk a square patrol, two seconds per leg, swinging periodically. Exercises
/// streaming across chunk borders in all four directions.
fn roamer(frame: u64, _game: &Game) -> FrameInput {
    let legs = [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, -1.0),
    ];
    FrameInput {
        move_dir: legs[(frame / 125 % 4) as usize],
        attack: frame % 40 == 0,
        ..Default::default()
    }
}

/// Hold position at home and swing every frame; the cooldown does the
/// pacing. Exercises combat against the inbound spawn ring.
fn brawler(frame: u64, game: &Game) -> FrameInput {
    // Face the nearest hostile by stepping toward it for one frame when it
    // is behind us, otherwise stand and swing.
    let toward = game
        .hostiles
        .iter()
        .map(|h| h.pos - game.player.pos)
        .min_by(|a, b| a.length().total_cmp(&b.length()))
        .unwrap_or(Vec2::ZERO);
    FrameInput {
        move_dir: if toward.length() > CHUNK_SIZE_PX {
            toward
        } else {
            Vec2::ZERO
        },
        attack: frame % 2 == 0,
        ..Default::default()
    }
}

/// Sweep the home chunk mashing pickup, then throw whatever was grabbed.
/// Exercises collection, inventory fallback, and the respawn scheduler.
fn collector(frame: u64, _game: &Game) -> FrameInput {
    let sweep = [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, 0.0),
    ];
    FrameInput {
        move_dir: sweep[(frame / 60 % 4) as usize],
        pickup: true,
        throw: frame % 90 == 0,
        ..Default::default()
    }
}
