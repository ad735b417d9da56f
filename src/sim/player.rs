//! Player movement, edge bounce, and firing
//!
//! The hairiest logic in the game. Per-axis input handling runs as two
//! independent branch pairs that can overwrite each other's
//! acceleration within one frame, only the Y acceleration is reset at
//! the top of the update, and integration adds position before
//! velocity. All of that is long-standing observed behavior and must
//! not be "cleaned up".

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cooldown::CoolDown;
use super::projectile::{ProjectileSpawn, Side};
use super::sprite::Sprite;
use super::tick::FrameInput;
use crate::Tuning;
use crate::consts::{PLAYER_FRAME_TIME, PLAYER_FRAMES, VELOCITY_DEADZONE};
use crate::render::{Canvas, Texture};

/// The keyboard-controlled player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub sprite: Sprite,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    movement_accel: f32,
    movement_decel: f32,
    max_speed: f32,
    bounce_speed: f32,
    projectile_speed: f32,
    fire_timer: CoolDown,
    /// Right edge of the player's region
    divider_x: f32,
    screen_height: f32,
}

impl Player {
    pub fn new(
        position: Vec2,
        image: Texture,
        tuning: &Tuning,
        divider_x: f32,
        screen_height: f32,
    ) -> Self {
        Self {
            sprite: Sprite::new(
                position,
                image,
                tuning.player_width,
                PLAYER_FRAMES,
                PLAYER_FRAME_TIME,
            ),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            movement_accel: tuning.movement_accel,
            movement_decel: tuning.movement_decel,
            max_speed: tuning.max_speed,
            bounce_speed: tuning.bounce_speed,
            projectile_speed: tuning.player_projectile_speed,
            fire_timer: CoolDown::new(tuning.player_fire_interval),
            divider_x,
            screen_height,
        }
    }

    /// Set acceleration from the held directional keys
    ///
    /// Each axis: holding a key accelerates that way; otherwise, moving
    /// that way with the opposing key up applies friction. The four
    /// branches run unconditionally in this order and may overwrite
    /// each other.
    fn handle_input(&mut self, input: &FrameInput) {
        let moving_up = self.velocity.y < 0.0;
        let moving_down = self.velocity.y > 0.0;
        let moving_left = self.velocity.x < 0.0;
        let moving_right = self.velocity.x > 0.0;

        if input.down {
            self.acceleration.y = self.movement_accel;
        } else if !input.up && moving_down {
            self.acceleration.y = -self.movement_decel;
        }

        if input.up {
            self.acceleration.y = -self.movement_accel;
        } else if !input.down && moving_up {
            self.acceleration.y = self.movement_decel;
        }

        if input.right {
            self.acceleration.x = self.movement_accel;
        } else if !input.left && moving_right {
            self.acceleration.x = -self.movement_decel;
        }

        if input.left {
            self.acceleration.x = -self.movement_accel;
        } else if !input.right && moving_left {
            self.acceleration.x = self.movement_decel;
        }
    }

    /// Snap to the violated bound, bounce the velocity away from it,
    /// and set the axis acceleration against the bounce
    fn handle_bounce(&mut self) {
        let right_bound = self.divider_x - self.sprite.width;
        let bottom_bound = self.screen_height - self.sprite.height();

        if self.sprite.position.x < 0.0 {
            self.sprite.position.x = 0.0;
            self.velocity.x = self.bounce_speed;
            self.acceleration.x = -self.movement_accel;
        } else if self.sprite.position.x > right_bound {
            self.sprite.position.x = right_bound;
            self.velocity.x = -self.bounce_speed;
            self.acceleration.x = self.movement_accel;
        }

        if self.sprite.position.y < 0.0 {
            self.sprite.position.y = 0.0;
            self.velocity.y = self.bounce_speed;
            self.acceleration.y = -self.movement_accel;
        } else if self.sprite.position.y > bottom_bound {
            self.sprite.position.y = bottom_bound;
            self.velocity.y = -self.bounce_speed;
            self.acceleration.y = self.movement_accel;
        }
    }

    /// Per-frame update: animate, read input, fire, integrate, bounce,
    /// clamp
    ///
    /// Only the Y acceleration is reset each frame; X keeps whatever
    /// the previous frame left behind.
    pub fn update(&mut self, input: &FrameInput, dt: f32, spawns: &mut Vec<ProjectileSpawn>) {
        self.sprite.animate(dt);

        self.acceleration.y = 0.0;

        self.handle_input(input);

        if !self.fire_timer.active() && input.fire {
            spawns.push(ProjectileSpawn {
                position: Vec2::new(
                    self.sprite.position.x + self.sprite.width,
                    self.sprite.position.y + self.sprite.height() / 2.0,
                ),
                velocity: Vec2::new(self.projectile_speed, 0.0),
                side: Side::Player,
            });
            self.fire_timer.start();
        }
        self.fire_timer.advance(dt);

        // Position before velocity: not symplectic Euler, but the
        // observed integration order
        self.sprite.position += self.velocity;
        self.velocity += self.acceleration;

        self.handle_bounce();

        self.velocity.y = self.velocity.y.clamp(-self.max_speed, self.max_speed);
        self.velocity.x = self.velocity.x.clamp(-self.max_speed, self.max_speed);

        // Kill micro-drift left over from friction
        if self.velocity.y >= -VELOCITY_DEADZONE && self.velocity.y <= VELOCITY_DEADZONE {
            self.velocity.y = 0.0;
        }
        if self.velocity.x >= -VELOCITY_DEADZONE && self.velocity.x <= VELOCITY_DEADZONE {
            self.velocity.x = 0.0;
        }
    }

    /// Bounding rectangle for collision tests
    #[inline]
    pub fn rect(&self) -> crate::Rect {
        self.sprite.rect()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.sprite.draw(canvas);
    }
}
