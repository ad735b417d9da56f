//! Animated sprite value shared by every entity
//!
//! A sprite is a positioned, sized, frame-animated image. Entities
//! embed one by composition rather than deriving from it. Animation
//! frames are horizontal strips of the backing texture; the strip
//! height is computed with integer pixel math so frames stay
//! byte-aligned.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::cooldown::CoolDown;
use crate::Rect;
use crate::render::{Canvas, Color, Texture};

/// Frame height in texture pixels for a vertical strip of `frame_count`
/// frames
#[inline]
pub fn frame_height_px(image: Texture, frame_count: u32) -> u32 {
    image.height / frame_count
}

/// On-screen height of a sprite scaled to `width` with `frame_count`
/// stacked frames
#[inline]
pub fn scaled_height(image: Texture, width: f32, frame_count: u32) -> f32 {
    let scale = width / image.width as f32;
    image.height as f32 * scale / frame_count as f32
}

/// A positioned, animated visual entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    /// Top-left position in screen coordinates
    pub position: Vec2,
    /// On-screen width; height is derived from the image aspect
    pub width: f32,
    frame_count: u32,
    current_frame: u32,
    frame_timer: CoolDown,
    /// Sub-region of the image currently drawn (None draws the whole
    /// image)
    pub source: Option<Rect>,
    /// Backing texture handle
    pub image: Texture,
}

impl Sprite {
    /// Build a sprite; `frame_count` must be at least 1
    pub fn new(
        position: Vec2,
        image: Texture,
        width: f32,
        frame_count: u32,
        frame_time: f32,
    ) -> Self {
        debug_assert!(frame_count >= 1);
        Self {
            position,
            width,
            frame_count,
            current_frame: 0,
            frame_timer: CoolDown::new(frame_time),
            source: None,
            image,
        }
    }

    /// On-screen height, derived from the image dimensions
    #[inline]
    pub fn height(&self) -> f32 {
        scaled_height(self.image, self.width, self.frame_count)
    }

    /// Bounding rectangle at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height())
    }

    /// Current animation frame index
    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Advance the animation by `dt` seconds
    ///
    /// When the frame timer has expired, step exactly one frame
    /// (cycling), point the source region at the new strip, and
    /// restart the timer. At most one frame transition happens per
    /// call, however large dt is.
    pub fn animate(&mut self, dt: f32) {
        if !self.frame_timer.active() {
            self.current_frame = (self.current_frame + 1) % self.frame_count;

            let frame_h = frame_height_px(self.image, self.frame_count);
            self.source = Some(Rect::new(
                0.0,
                (self.current_frame * frame_h) as f32,
                self.image.width as f32,
                frame_h as f32,
            ));

            self.frame_timer.start();
        }

        self.frame_timer.advance(dt);
    }

    /// Render the current frame; pure side effect, no state change
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_textured_rect(self.image, self.rect(), self.source, Color::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingCanvas;

    fn two_frame_texture() -> Texture {
        // 32x64 image with two stacked 32x32 frames
        Texture::new(1, 32, 64)
    }

    #[test]
    fn test_height_is_derived_from_image() {
        let sprite = Sprite::new(Vec2::ZERO, two_frame_texture(), 64.0, 2, 0.25);
        // 64 * (64/32) / 2 frames
        assert!((sprite.height() - 64.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_first_animate_steps_one_frame_and_sets_source() {
        let mut sprite = Sprite::new(Vec2::ZERO, two_frame_texture(), 64.0, 2, 0.25);
        assert_eq!(sprite.current_frame(), 0);
        assert!(sprite.source.is_none());

        sprite.animate(0.0);
        assert_eq!(sprite.current_frame(), 1);
        assert_eq!(sprite.source, Some(Rect::new(0.0, 32.0, 32.0, 32.0)));
    }

    #[test]
    fn test_one_frame_step_per_expiry() {
        let mut sprite = Sprite::new(Vec2::ZERO, two_frame_texture(), 64.0, 2, 0.25);

        sprite.animate(0.0);
        assert_eq!(sprite.current_frame(), 1);

        // Timer active - no further step until it expires
        sprite.animate(0.1);
        assert_eq!(sprite.current_frame(), 1);

        sprite.animate(0.2);
        assert_eq!(sprite.current_frame(), 1);

        // Timer expired last call; next call cycles back to frame 0
        sprite.animate(0.0);
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.source, Some(Rect::new(0.0, 0.0, 32.0, 32.0)));
    }

    #[test]
    fn test_large_dt_advances_at_most_one_frame() {
        let mut sprite = Sprite::new(Vec2::ZERO, two_frame_texture(), 64.0, 2, 0.25);

        // dt spans many animation periods, but only one step is taken
        sprite.animate(10.0);
        assert_eq!(sprite.current_frame(), 1);

        sprite.animate(10.0);
        assert_eq!(sprite.current_frame(), 0);
    }

    #[test]
    fn test_single_frame_sprite_stays_on_frame_zero() {
        let mut sprite = Sprite::new(Vec2::ZERO, Texture::new(2, 16, 16), 16.0, 1, 0.25);
        sprite.animate(1.0);
        sprite.animate(1.0);
        assert_eq!(sprite.current_frame(), 0);
        assert_eq!(sprite.source, Some(Rect::new(0.0, 0.0, 16.0, 16.0)));
    }

    #[test]
    fn test_draw_emits_one_textured_rect() {
        let sprite = Sprite::new(Vec2::new(5.0, 7.0), two_frame_texture(), 64.0, 2, 0.25);
        let mut canvas = RecordingCanvas::new();
        sprite.draw(&mut canvas);

        assert_eq!(canvas.commands().len(), 1);
        match &canvas.commands()[0] {
            crate::render::DrawCommand::TexturedRect { dest, .. } => {
                assert_eq!(*dest, Rect::new(5.0, 7.0, 64.0, 64.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
