//! Rendering collaborator interface
//!
//! The simulation never talks to a graphics device. It issues draw
//! calls through the [`Canvas`] trait using opaque handles the host
//! assigned before gameplay started. Texture handles carry their pixel
//! dimensions because sprite heights and animation frame strips are
//! derived from them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;

/// An opaque texture handle plus its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    /// Host-assigned identifier
    pub id: u32,
    /// Width of the backing image in pixels
    pub width: u32,
    /// Height of the backing image in pixels
    pub height: u32,
}

impl Texture {
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

/// An opaque font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font(pub u32);

/// An RGBA tint/text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Draw target the host implements
///
/// All calls are pure side effects; the simulation never reads back
/// anything but text measurements.
pub trait Canvas {
    /// Fill the whole target with one color
    fn clear(&mut self, color: Color);

    /// Draw `texture` (or the `src` sub-region of it) into `dest`
    fn draw_textured_rect(
        &mut self,
        texture: Texture,
        dest: Rect,
        src: Option<Rect>,
        tint: Color,
    );

    /// Draw a text string at `position`
    fn draw_text(&mut self, font: Font, text: &str, position: Vec2, color: Color);

    /// Size the given string would occupy when drawn
    fn measure_text(&self, font: Font, text: &str) -> Vec2;
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    TexturedRect {
        texture: Texture,
        dest: Rect,
        src: Option<Rect>,
        tint: Color,
    },
    Text {
        font: Font,
        text: String,
        position: Vec2,
        color: Color,
    },
}

/// A [`Canvas`] that records draw commands instead of rendering
///
/// Used by the headless binary and by draw-pass tests. Text metrics
/// are a fixed-pitch estimate so centering stays deterministic.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

/// Fixed-pitch glyph advance used by [`RecordingCanvas::measure_text`]
const GLYPH_WIDTH: f32 = 10.0;
/// Line height used by [`RecordingCanvas::measure_text`]
const LINE_HEIGHT: f32 = 20.0;

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in issue order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_textured_rect(
        &mut self,
        texture: Texture,
        dest: Rect,
        src: Option<Rect>,
        tint: Color,
    ) {
        self.commands.push(DrawCommand::TexturedRect {
            texture,
            dest,
            src,
            tint,
        });
    }

    fn draw_text(&mut self, font: Font, text: &str, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            font,
            text: text.to_owned(),
            position,
            color,
        });
    }

    fn measure_text(&self, _font: Font, text: &str) -> Vec2 {
        let widest = text.lines().map(str::len).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Vec2::new(widest as f32 * GLYPH_WIDTH, lines as f32 * LINE_HEIGHT)
    }
}
