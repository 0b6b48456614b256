//! Frame renderer: turns the particle pools into primitive draw calls.
//!
//! Order is fixed: translucent backdrop, stars, then per comet its trail
//! followed by its wireframe so edges land on top.

use glam::Vec2;

use crate::components::comet::Comet;
use crate::components::shape::ShapeKind;
use crate::components::star::Star;
use crate::core::camera::{Camera, Projection};
use crate::renderer::surface::{Color, Surface};

/// Translucent overlay painted instead of a hard clear; leaves motion blur.
pub const BACKDROP: Color = Color::new(0.0, 0.0, 15.0 / 255.0, 0.3);

/// Depth at which a comet is fully transparent.
pub const COMET_FADE_FAR: f32 = 2200.0;
/// Depth span over which a comet fades in.
pub const COMET_FADE_WINDOW: f32 = 800.0;
/// Stroke width per unit of projection scale for trails and edges.
pub const STROKE_WIDTH: f32 = 0.5;

/// Everything one frame needs to read.
pub struct FrameView<'a> {
    pub camera: &'a Camera,
    pub stars: &'a [Star],
    pub comets: &'a [Comet],
    /// Also stroke each star's one-tick motion streak.
    pub star_streaks: bool,
}

/// Comet opacity for an aggregate camera-space depth.
pub fn comet_fade(depth: f32) -> f32 {
    ((COMET_FADE_FAR - depth) / COMET_FADE_WINDOW).clamp(0.0, 1.0)
}

/// Draw one complete frame.
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, frame: &FrameView) {
    let camera = frame.camera;
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(camera.screen_width, camera.screen_height),
        BACKDROP,
    );

    for star in frame.stars {
        draw_star(surface, camera, star, frame.star_streaks);
    }

    for comet in frame.comets {
        draw_comet(surface, camera, comet);
    }
}

fn draw_star<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, star: &Star, streak: bool) {
    let Some(proj) = camera.project(star.position) else {
        return;
    };
    let alpha = Star::alpha_at(proj.depth);
    if alpha <= 0.0 {
        return;
    }
    let color = star.color.unwrap_or(Color::WHITE).with_alpha(alpha);
    let radius = star.size * proj.scale;

    if streak {
        let mut previous = star.position;
        previous.z += star.speed;
        if let Some(prev) = camera.project(previous) {
            surface.stroke_line(prev.pos, proj.pos, radius, color);
        }
    }
    surface.fill_circle(proj.pos, radius, color);
}

fn draw_comet<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, comet: &Comet) {
    let mut projected = [None::<Projection>; ShapeKind::MAX_VERTICES];
    for (slot, v) in projected.iter_mut().zip(comet.world_vertices()) {
        *slot = camera.project(v);
    }

    let (count, depth_sum, scale_sum) = projected
        .iter()
        .flatten()
        .fold((0usize, 0.0f32, 0.0f32), |(n, d, s), p| (n + 1, d + p.depth, s + p.scale));
    if count == 0 {
        return;
    }
    let fade = comet_fade(depth_sum / count as f32);
    if fade <= 0.0 {
        return;
    }
    let width = STROKE_WIDTH * scale_sum / count as f32;

    // Trail: newer segments brighter.
    let len = comet.trail.len();
    let segments = comet.trail.iter().zip(comet.trail.iter().skip(1));
    for (i, (&from, &to)) in segments.enumerate() {
        let alpha = ((i + 1) as f32 / len as f32) * fade;
        surface.stroke_line(from, to, width, Color::WHITE.with_alpha(alpha));
    }

    let edge_color = Color::WHITE.with_alpha(fade);
    for &(a, b) in comet.kind.edges() {
        if let (Some(Some(pa)), Some(Some(pb))) = (projected.get(a), projected.get(b)) {
            surface.stroke_line(pa.pos, pb.pos, width, edge_color);
        }
    }
}
