//! Enemies and the vertically-bouncing columns that group them
//!
//! A column owns its members and a shared vertical speed. The column's
//! top/bottom extent is advanced every frame and is never re-measured
//! from the surviving members, so a column keeps bouncing on its
//! original projected extent even after enemies are shot out of it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cooldown::CoolDown;
use super::projectile::{ProjectileSpawn, Side};
use super::sprite::{Sprite, scaled_height};
use crate::Tuning;
use crate::consts::{ENEMY_FRAME_TIME, ENEMY_FRAMES};
use crate::render::{Canvas, Texture};

/// A single drifting enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub sprite: Sprite,
    pub velocity: Vec2,
    fire_timer: CoolDown,
    projectile_speed: f32,
}

impl Enemy {
    pub fn new(
        position: Vec2,
        image: Texture,
        width: f32,
        fire_interval: f32,
        projectile_speed: f32,
    ) -> Self {
        Self {
            sprite: Sprite::new(position, image, width, ENEMY_FRAMES, ENEMY_FRAME_TIME),
            velocity: Vec2::ZERO,
            fire_timer: CoolDown::new(fire_interval),
            projectile_speed,
        }
    }

    /// Advance animation, fire when off cooldown, integrate motion
    ///
    /// The fire timer starts out inactive, so a fresh enemy fires on
    /// its very first update.
    pub fn update(&mut self, dt: f32, spawns: &mut Vec<ProjectileSpawn>) {
        self.sprite.animate(dt);

        if !self.fire_timer.active() {
            spawns.push(ProjectileSpawn {
                position: Vec2::new(
                    self.sprite.position.x,
                    self.sprite.position.y + self.sprite.height() / 2.0,
                ),
                velocity: Vec2::new(-self.projectile_speed, 0.0),
                side: Side::Enemy,
            });
            self.fire_timer.start();
        }
        self.fire_timer.advance(dt);

        self.sprite.position += self.velocity;
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

/// A vertically-oscillating group of enemies sharing one y-speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyColumn {
    /// Tracked top of the column extent (not re-measured from members)
    top: f32,
    /// Tracked bottom of the column extent
    bottom: f32,
    x_speed: f32,
    y_speed: f32,
    enemies: Vec<Enemy>,
}

impl EnemyColumn {
    /// Spawn a column of `tuning.column_size` enemies at the right edge
    /// of the screen, evenly spaced from `tuning.column_top` downward
    ///
    /// The configured x-speed is negated: columns always drift left.
    pub fn new(tuning: &Tuning, image: Texture, screen_width: f32) -> Self {
        let enemy_height = scaled_height(image, tuning.enemy_width, ENEMY_FRAMES);
        let pitch = enemy_height + tuning.column_spacing;

        let x_speed = -tuning.column_x_speed;
        let y_speed = tuning.column_y_speed;

        let enemies = (0..tuning.column_size)
            .map(|i| {
                let mut enemy = Enemy::new(
                    Vec2::new(screen_width, tuning.column_top + i as f32 * pitch),
                    image,
                    tuning.enemy_width,
                    tuning.enemy_fire_interval,
                    tuning.enemy_projectile_speed,
                );
                enemy.velocity = Vec2::new(x_speed, y_speed);
                enemy
            })
            .collect();

        Self {
            top: tuning.column_top,
            bottom: tuning.column_top + tuning.column_size as f32 * pitch,
            x_speed,
            y_speed,
            enemies,
        }
    }

    /// Advance the tracked extent, bounce off the vertical screen
    /// bounds, propagate the (possibly flipped) y-speed to every
    /// member, then update the members
    pub fn update(&mut self, dt: f32, screen_height: f32, spawns: &mut Vec<ProjectileSpawn>) {
        self.top += self.y_speed;
        self.bottom += self.y_speed;

        if self.top < 0.0 || self.bottom > screen_height {
            self.y_speed = -self.y_speed;
        }

        for enemy in &mut self.enemies {
            enemy.velocity.y = self.y_speed;
            enemy.update(dt, spawns);
        }
    }

    /// Number of live members
    #[inline]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Member at `index`
    pub fn enemy(&self, index: usize) -> &Enemy {
        &self.enemies[index]
    }

    /// Remove the member at `index`
    pub fn remove(&mut self, index: usize) -> Enemy {
        self.enemies.remove(index)
    }

    /// Current shared vertical speed
    #[inline]
    pub fn y_speed(&self) -> f32 {
        self.y_speed
    }

    /// Constant horizontal speed (negative: leftward)
    #[inline]
    pub fn x_speed(&self) -> f32 {
        self.x_speed
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for enemy in &self.enemies {
            enemy.draw(canvas);
        }
    }
}
