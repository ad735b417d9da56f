//! Sky Wizard entry point
//!
//! There is no windowed host in this crate; the binary drives the
//! simulation headlessly with a scripted input sequence, which doubles
//! as a smoke check of the full update/draw path.

use std::path::Path;

use sky_wizard::Tuning;
use sky_wizard::render::{Font, RecordingCanvas, Texture};
use sky_wizard::sim::{Assets, FrameInput, GamePhase, GameState, TickResult, tick};

/// Frame delta for the scripted run (60 Hz)
const DT: f32 = 1.0 / 60.0;
/// Length of the scripted run
const DEMO_FRAMES: u32 = 3600;

/// Stand-in handles a windowed host would build from real images
fn demo_assets() -> Assets {
    Assets {
        player: Texture::new(0, 32, 64),
        enemy: Texture::new(1, 32, 64),
        player_projectile: Texture::new(2, 16, 16),
        enemy_projectile: Texture::new(3, 16, 16),
        divider: Texture::new(4, 1, 900),
        cover: Texture::new(5, 1600, 900),
        font: Font(0),
    }
}

/// Scripted input: confirm on the first frame, then hold fire while
/// sweeping up and down
fn demo_input(frame: u32) -> FrameInput {
    FrameInput {
        confirm: frame == 0,
        fire: true,
        up: (frame / 300) % 2 == 0,
        down: (frame / 300) % 2 == 1,
        ..FrameInput::default()
    }
}

fn main() {
    env_logger::init();
    log::info!("sky-wizard (headless) starting");

    let tuning_path = std::env::args().nth(1);
    let tuning = match tuning_path {
        Some(path) => Tuning::load(Path::new(&path)),
        None => Tuning::default(),
    };

    let mut state = GameState::new(demo_assets(), tuning);

    for frame in 0..DEMO_FRAMES {
        let input = demo_input(frame);
        match tick(&mut state, &input, DT) {
            TickResult::Continue => {}
            TickResult::Exit => {
                log::info!("quit requested, exiting");
                return;
            }
        }

        if frame % 600 == 599 {
            log::info!(
                "frame {frame}: score {}, lives {}, {} columns, {} projectiles",
                state.score,
                state.lives,
                state.columns.len(),
                state.projectiles.len(),
            );
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let mut canvas = RecordingCanvas::new();
    state.draw(&mut canvas);
    log::info!(
        "run finished: score {}, lives {}, final frame issued {} draw calls",
        state.score,
        state.lives,
        canvas.commands().len(),
    );
}
