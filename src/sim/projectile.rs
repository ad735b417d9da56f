//! Projectiles and the spawn-request events that create them
//!
//! Entities never push into the orchestrator's projectile list
//! directly; they append [`ProjectileSpawn`] requests to a queue the
//! orchestrator drains after the update pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::Sprite;
use crate::consts::PROJECTILE_WIDTH;
use crate::render::{Canvas, Texture};

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A request to create a projectile, emitted during entity updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub side: Side,
}

/// A fired projectile with constant velocity/acceleration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub sprite: Sprite,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub side: Side,
}

impl Projectile {
    /// Create a projectile at `position` moving with `velocity`
    ///
    /// Projectiles are single-frame sprites and never animate.
    pub fn new(position: Vec2, velocity: Vec2, image: Texture, side: Side) -> Self {
        Self {
            sprite: Sprite::new(position, image, PROJECTILE_WIDTH, 1, 0.25),
            velocity,
            acceleration: Vec2::ZERO,
            side,
        }
    }

    /// Integrate one frame of motion
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
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
