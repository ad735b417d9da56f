//! Per-frame simulation step
//!
//! The orchestrator: one fixed-order pass over input gating, column
//! spawning, entity updates, projectile motion, and collision
//! resolution. All entity lists are walked in reverse index order so
//! removal during the pass stays safe.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::enemy::EnemyColumn;
use super::projectile::{ProjectileSpawn, Side};
use super::state::{GamePhase, GameState};

/// Per-frame snapshot of the keys the simulation reads
///
/// The host polls the real keyboard; the core only ever sees these
/// booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Space: fire a projectile
    pub fire: bool,
    /// Enter: uncover the start screen
    pub confirm: bool,
    /// Escape: terminate the process
    pub quit: bool,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    /// Quit was pressed; terminate with success status
    Exit,
}

/// Advance the game by one frame
///
/// `dt` is the frame delta in seconds. It drives cooldowns and
/// animation timers only; movement integrates in per-frame units.
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f32) -> TickResult {
    if input.quit {
        return TickResult::Exit;
    }

    // Phase gate: the cover pauses everything underneath it
    match state.phase {
        GamePhase::Start => {
            if input.confirm {
                // Uncover and simulate this same frame
                state.phase = GamePhase::Playing;
                log::info!("game started");
            } else {
                return TickResult::Continue;
            }
        }
        GamePhase::GameOver => return TickResult::Continue,
        GamePhase::Playing => {}
    }

    // Periodic column spawn
    if !state.column_timer.active() {
        let column = EnemyColumn::new(&state.tuning, state.assets.enemy, SCREEN_WIDTH);
        log::debug!("spawned enemy column ({} members)", column.len());
        state.columns.push(column);
        state.column_timer.start();
    }
    state.column_timer.advance(dt);

    // Entity updates, collecting projectile spawn requests
    let mut spawns: Vec<ProjectileSpawn> = Vec::new();
    state.player.update(input, dt, &mut spawns);
    for column in &mut state.columns {
        column.update(dt, SCREEN_HEIGHT, &mut spawns);
    }

    // Projectiles fired this frame join the live set before the
    // projectile pass, so they move and collide this same frame
    for spawn in spawns {
        state.fire_projectile(spawn);
    }

    projectile_pass(state);

    TickResult::Continue
}

/// Advance every projectile and resolve collisions, removing expired
/// entities
///
/// Reverse index iteration keeps removal safe. A player projectile
/// is checked against every remaining enemy with no early exit, so one
/// projectile can score several overlapping enemies in a single frame.
fn projectile_pass(state: &mut GameState) {
    let mut i = state.projectiles.len();
    while i > 0 {
        i -= 1;

        state.projectiles[i].update();
        let side = state.projectiles[i].side;
        let mut consumed = false;

        if side != Side::Player && state.projectiles[i].rect().overlaps(&state.player.rect()) {
            state.lose_life();
            state.projectiles.remove(i);
            continue;
        }

        if side == Side::Player {
            let projectile_rect = state.projectiles[i].rect();

            let mut j = state.columns.len();
            while j > 0 {
                j -= 1;

                // Spent columns are dropped here, not in the update pass
                if state.columns[j].is_empty() {
                    state.columns.remove(j);
                    continue;
                }

                let mut k = state.columns[j].len();
                while k > 0 {
                    k -= 1;

                    if state.columns[j].enemy(k).rect().overlaps(&projectile_rect) {
                        state.score += 1;
                        state.columns[j].remove(k);
                        consumed = true;
                    }
                }
            }
        }

        let sprite = &state.projectiles[i].sprite;
        let off_screen =
            sprite.position.x + sprite.width < 0.0 || sprite.position.x > SCREEN_WIDTH;

        if consumed || off_screen {
            state.projectiles.remove(i);
        }
    }
}
