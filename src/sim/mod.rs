//! Per-frame simulation module
//!
//! All gameplay logic lives here. The simulation is single-threaded
//! and frame-driven:
//! - State is exclusively owned by [`GameState`] and mutated only in
//!   [`tick`]
//! - The frame delta is the only external clock input
//! - Rendering is a read-only pass over the same state
//! - No platform or device access; draw calls go through
//!   [`crate::render::Canvas`]

pub mod collision;
pub mod cooldown;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use cooldown::CoolDown;
pub use enemy::{Enemy, EnemyColumn};
pub use player::Player;
pub use projectile::{Projectile, ProjectileSpawn, Side};
pub use sprite::Sprite;
pub use state::{Assets, GamePhase, GameState};
pub use tick::{FrameInput, TickResult, tick};
