//! Drawing-surface contract.
//!
//! The engine never owns a canvas. Hosts implement [`Surface`] over
//! whatever 2D context they have (an HTML canvas, a recorded command list,
//! a software rasterizer) and the frame renderer issues primitive draws.

use glam::Vec2;

/// RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string, as accepted by canvas fill/stroke styles.
    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0),
        )
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

/// Primitive 2D drawing operations the renderer relies on.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a single line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}
