//! Sky Wizard - a side-view arcade shooter
//!
//! The player flies in a bounded strip on the left of the screen while
//! columns of enemies drift in from the right, bouncing vertically.
//! Both sides trade projectiles; hits resolve by axis-aligned
//! rectangle overlap.
//!
//! Core modules:
//! - `sim`: the per-frame simulation (entities, collisions, game state)
//! - `render`: the rendering collaborator interface (opaque handles,
//!   draw-call trait) implemented by the host
//! - `tuning`: data-driven game balance
//!
//! The crate owns no window, device, or asset. A host calls
//! [`sim::tick()`] once per frame with an input snapshot and a delta
//! time, then [`sim::GameState::draw`] with a [`render::Canvas`].

pub mod render;
pub mod sim;
pub mod tuning;

pub use sim::collision::Rect;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: f32 = 1600.0;
    /// Screen height in pixels
    pub const SCREEN_HEIGHT: f32 = 900.0;
    /// X-position of the divider the player cannot cross
    pub const DIVIDER_X: f32 = 300.0;

    /// Width of every projectile sprite
    pub const PROJECTILE_WIDTH: f32 = 16.0;

    /// Player animation frame count and period
    pub const PLAYER_FRAMES: u32 = 2;
    pub const PLAYER_FRAME_TIME: f32 = 0.25;

    /// Enemy animation frame count and period
    pub const ENEMY_FRAMES: u32 = 2;
    pub const ENEMY_FRAME_TIME: f32 = 0.5;

    /// Velocity components inside [-DEADZONE, DEADZONE] snap to zero
    pub const VELOCITY_DEADZONE: f32 = 0.1;

    /// Starting life count
    pub const STARTING_LIVES: u32 = 3;
}
