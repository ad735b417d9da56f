//! Game state: phases, assets, entity collections, and the draw pass

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cooldown::CoolDown;
use super::enemy::EnemyColumn;
use super::player::Player;
use super::projectile::{Projectile, ProjectileSpawn, Side};
use crate::consts::{DIVIDER_X, SCREEN_HEIGHT, SCREEN_WIDTH, STARTING_LIVES};
use crate::render::{Canvas, Color, Font, Texture};
use crate::{Rect, Tuning};

/// Current phase of gameplay
///
/// The screen is covered (simulation paused, overlay text shown)
/// whenever the phase is not `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Covered, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Run ended; terminal, only quit is processed
    GameOver,
}

/// Opaque handles the host assigns before gameplay starts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Assets {
    pub player: Texture,
    pub enemy: Texture,
    pub player_projectile: Texture,
    pub enemy_projectile: Texture,
    /// 1px-wide strip drawn at the divider
    pub divider: Texture,
    /// Full-screen cover drawn over paused states
    pub cover: Texture,
    pub font: Font,
}

/// Complete game state, exclusively owned by the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub lives: u32,
    pub score: u32,
    pub phase: GamePhase,
    /// Text shown centered while the screen is covered
    pub overlay_text: String,
    pub player: Player,
    pub columns: Vec<EnemyColumn>,
    pub projectiles: Vec<Projectile>,
    /// Gate between enemy column spawns
    pub column_timer: CoolDown,
    pub assets: Assets,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh game in the Start phase
    pub fn new(assets: Assets, tuning: Tuning) -> Self {
        let player = Player::new(
            Vec2::new(0.0, SCREEN_HEIGHT / 2.0),
            assets.player,
            &tuning,
            DIVIDER_X,
            SCREEN_HEIGHT,
        );
        let column_timer = CoolDown::new(tuning.column_spawn_interval);

        Self {
            lives: STARTING_LIVES,
            score: 0,
            phase: GamePhase::Start,
            overlay_text: "Press Enter to Play".to_owned(),
            player,
            columns: Vec::new(),
            projectiles: Vec::new(),
            column_timer,
            assets,
            tuning,
        }
    }

    /// Whether the full-screen cover is up
    #[inline]
    pub fn covered(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Materialize a spawn request into a live projectile
    pub fn fire_projectile(&mut self, spawn: ProjectileSpawn) {
        let image = match spawn.side {
            Side::Player => self.assets.player_projectile,
            Side::Enemy => self.assets.enemy_projectile,
        };
        self.projectiles
            .push(Projectile::new(spawn.position, spawn.velocity, image, spawn.side));
    }

    /// Take one life; at zero, transition to the terminal GameOver
    /// phase
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 && self.phase == GamePhase::Playing {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.overlay_text = format!("Final Score: {}\nPress Esc to Exit", self.score);
        log::info!("game over, final score {}", self.score);
    }

    /// Render the whole frame bottom-up; read-only pass
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.clear(Color::BLACK);

        self.player.draw(canvas);

        for column in &self.columns {
            column.draw(canvas);
        }

        canvas.draw_textured_rect(
            self.assets.divider,
            Rect::new(DIVIDER_X, 0.0, 1.0, SCREEN_HEIGHT),
            None,
            Color::WHITE,
        );

        for projectile in &self.projectiles {
            projectile.draw(canvas);
        }

        canvas.draw_text(
            self.assets.font,
            &format!("Life: {}\nScore: {}", self.lives, self.score),
            Vec2::ZERO,
            Color::WHITE,
        );

        if self.covered() {
            canvas.draw_textured_rect(
                self.assets.cover,
                Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
                None,
                Color::WHITE,
            );

            let size = canvas.measure_text(self.assets.font, &self.overlay_text);
            let position = Vec2::new(
                SCREEN_WIDTH / 2.0 - size.x / 2.0,
                SCREEN_HEIGHT / 2.0 - size.y / 2.0,
            );
            canvas.draw_text(self.assets.font, &self.overlay_text, position, Color::BLACK);
        }
    }
}

#[cfg(test)]
pub(crate) fn test_assets() -> Assets {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingCanvas};

    fn fresh_state() -> GameState {
        GameState::new(test_assets(), Tuning::default())
    }

    #[test]
    fn test_new_game_starts_covered_with_three_lives() {
        let state = fresh_state();
        assert_eq!(state.phase, GamePhase::Start);
        assert!(state.covered());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.overlay_text, "Press Enter to Play");
        assert!(state.columns.is_empty());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_player_starts_at_left_middle() {
        let state = fresh_state();
        assert_eq!(state.player.sprite.position, Vec2::new(0.0, 450.0));
    }

    #[test]
    fn test_fire_projectile_picks_texture_by_side() {
        let mut state = fresh_state();
        state.fire_projectile(ProjectileSpawn {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(10.0, 0.0),
            side: Side::Player,
        });
        state.fire_projectile(ProjectileSpawn {
            position: Vec2::new(500.0, 10.0),
            velocity: Vec2::new(-10.0, 0.0),
            side: Side::Enemy,
        });

        assert_eq!(state.projectiles[0].sprite.image.id, 2);
        assert_eq!(state.projectiles[1].sprite.image.id, 3);
    }

    #[test]
    fn test_lose_life_transitions_to_game_over_once() {
        let mut state = fresh_state();
        state.phase = GamePhase::Playing;

        state.lose_life();
        state.lose_life();
        assert_eq!(state.lives, 1);
        assert_eq!(state.phase, GamePhase::Playing);

        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.overlay_text.starts_with("Final Score: 0"));

        // A second same-frame hit saturates instead of underflowing
        state.lose_life();
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_draw_order_and_cover() {
        let mut state = fresh_state();
        let mut canvas = RecordingCanvas::new();

        // Covered: clear, player, divider, HUD, cover, overlay text
        state.draw(&mut canvas);
        let commands = canvas.commands();
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        assert!(matches!(
            commands.last().unwrap(),
            DrawCommand::Text { color: Color::BLACK, .. }
        ));
        let covered_len = commands.len();

        // Uncovered: the cover and overlay text disappear
        state.phase = GamePhase::Playing;
        canvas.clear_commands();
        state.draw(&mut canvas);
        assert_eq!(canvas.commands().len(), covered_len - 2);
        assert!(matches!(
            canvas.commands().last().unwrap(),
            DrawCommand::Text { color: Color::WHITE, .. }
        ));
    }

    #[test]
    fn test_hud_shows_life_and_score() {
        let mut state = fresh_state();
        state.phase = GamePhase::Playing;
        state.score = 7;
        state.lives = 2;

        let mut canvas = RecordingCanvas::new();
        state.draw(&mut canvas);

        let hud = canvas.commands().iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(hud.as_deref(), Some("Life: 2\nScore: 7"));
    }
}
