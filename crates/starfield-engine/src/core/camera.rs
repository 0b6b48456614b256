//! Perspective camera for the star field.
//!
//! Points live in camera-relative space where +z points away from the
//! viewer. Projection divides by `fov + z`, so the singularity sits at
//! `z = -fov`; anything closer than `-fov + NEAR_MARGIN` is reported as not
//! visible instead of producing runaway screen coordinates.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::core::math::{rotate_x, rotate_y};

/// Projection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// Camera looks straight down +z. Orientation is ignored.
    Fixed,
    /// Camera orientation (pitch, yaw) is applied before projecting.
    Orbit,
}

/// Projection result from 3D to 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// 2D screen position.
    pub pos: Vec2,
    /// Clamped scale factor for sizing drawn primitives.
    pub scale: f32,
    /// Camera-space z (larger = farther away).
    pub depth: f32,
}

/// Project a camera-space point onto a `width` x `height` screen.
///
/// Returns `None` when the point is inside the near cutoff.
pub fn project_point(point: Vec3, fov: f32, width: f32, height: f32) -> Option<Projection> {
    if point.z < -fov + Camera::NEAR_MARGIN {
        return None;
    }
    let raw_scale = fov / (fov + point.z);
    let scale = raw_scale.clamp(Camera::MIN_SCALE, Camera::MAX_SCALE);
    Some(Projection {
        pos: Vec2::new(
            point.x * raw_scale + width / 2.0,
            point.y * raw_scale + height / 2.0,
        ),
        scale,
        depth: point.z,
    })
}

/// Viewer state: field of view, screen size and accumulated orientation.
#[derive(Debug, Clone)]
pub struct Camera {
    pub mode: CameraMode,
    /// Perspective divide constant.
    pub fov: f32,
    /// Rotation around X (radians), clamped to +/- pi/2.
    pub pitch: f32,
    /// Rotation around Y (radians), unbounded.
    pub yaw: f32,
    /// Screen dimensions for projection.
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 600.0;
    pub const ORBIT_SENSITIVITY: f32 = 0.005;
    pub const MAX_PITCH: f32 = FRAC_PI_2;
    pub const NEAR_MARGIN: f32 = 10.0;
    pub const MIN_SCALE: f32 = 0.05;
    pub const MAX_SCALE: f32 = 2.5;

    pub fn new(mode: CameraMode, fov: f32, screen_width: f32, screen_height: f32) -> Self {
        Self {
            mode,
            fov,
            pitch: 0.0,
            yaw: 0.0,
            screen_width,
            screen_height,
        }
    }

    /// Whether drag-to-orbit is meaningful for this camera.
    pub fn supports_orbit(&self) -> bool {
        self.mode == CameraMode::Orbit
    }

    /// Orbit camera by pointer delta.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * Self::ORBIT_SENSITIVITY;
        self.pitch = (self.pitch + dy * Self::ORBIT_SENSITIVITY)
            .clamp(-Self::MAX_PITCH, Self::MAX_PITCH);
    }

    /// Update screen dimensions.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Transform a world position into camera space.
    pub fn world_to_view(&self, pos: Vec3) -> Vec3 {
        match self.mode {
            CameraMode::Fixed => pos,
            CameraMode::Orbit => rotate_y(rotate_x(pos, self.pitch), self.yaw),
        }
    }

    /// Project a world position to screen coordinates.
    pub fn project(&self, pos: Vec3) -> Option<Projection> {
        project_point(
            self.world_to_view(pos),
            self.fov,
            self.screen_width,
            self.screen_height,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraMode::Orbit, Self::DEFAULT_FOV, 800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_screen_center() {
        let camera = Camera::new(CameraMode::Fixed, 600.0, 800.0, 600.0);
        let proj = camera.project(Vec3::ZERO).unwrap();
        assert_eq!(proj.pos, Vec2::new(400.0, 300.0));
        assert_eq!(proj.scale, 1.0);
        assert_eq!(proj.depth, 0.0);
    }

    #[test]
    fn farther_points_shrink() {
        let camera = Camera::new(CameraMode::Fixed, 600.0, 800.0, 600.0);
        let near = camera.project(Vec3::new(100.0, 0.0, 0.0)).unwrap();
        let far = camera.project(Vec3::new(100.0, 0.0, 600.0)).unwrap();
        assert!(near.scale > far.scale);
        assert!((far.pos.x - 450.0).abs() < 1e-3);
    }

    #[test]
    fn scale_is_clamped_but_position_uses_raw_scale() {
        // raw scale = 600 / 20 = 30
        let p = project_point(Vec3::new(1.0, 0.0, -580.0), 600.0, 800.0, 600.0).unwrap();
        assert_eq!(p.scale, Camera::MAX_SCALE);
        assert!((p.pos.x - 430.0).abs() < 1e-3);

        // raw scale = 600 / 60600 < 0.05
        let p = project_point(Vec3::new(0.0, 0.0, 60_000.0), 600.0, 800.0, 600.0).unwrap();
        assert_eq!(p.scale, Camera::MIN_SCALE);
    }

    #[test]
    fn near_cutoff_is_not_visible() {
        assert!(project_point(Vec3::new(0.0, 0.0, -595.0), 600.0, 800.0, 600.0).is_none());
        assert!(project_point(Vec3::new(0.0, 0.0, -600.0), 600.0, 800.0, 600.0).is_none());
        assert!(project_point(Vec3::new(0.0, 0.0, -590.0), 600.0, 800.0, 600.0).is_some());
    }

    #[test]
    fn project_is_deterministic() {
        let mut camera = Camera::default();
        camera.orbit(37.0, -12.0);
        let p = Vec3::new(120.0, -40.0, 900.0);
        assert_eq!(camera.project(p), camera.project(p));
    }

    #[test]
    fn fixed_camera_ignores_orientation() {
        let mut camera = Camera::new(CameraMode::Fixed, 600.0, 800.0, 600.0);
        let p = Vec3::new(50.0, 60.0, 300.0);
        let before = camera.project(p);
        camera.pitch = 0.8;
        camera.yaw = 1.3;
        assert_eq!(before, camera.project(p));
    }

    #[test]
    fn orbit_camera_rotates_before_projecting() {
        let mut camera = Camera::new(CameraMode::Orbit, 600.0, 800.0, 600.0);
        camera.yaw = std::f32::consts::PI;
        // Half a turn around Y puts a far point behind the viewer.
        assert!(camera.project(Vec3::new(0.0, 0.0, 1000.0)).is_none());
        let behind = camera.project(Vec3::new(0.0, 0.0, -1000.0)).unwrap();
        assert!((behind.depth - 1000.0).abs() < 1e-2);
    }

    #[test]
    fn orbit_applies_pitch_before_yaw() {
        let mut camera = Camera::new(CameraMode::Orbit, 600.0, 800.0, 600.0);
        camera.pitch = std::f32::consts::FRAC_PI_2;
        camera.yaw = std::f32::consts::FRAC_PI_2;
        // Pitch carries +Y onto +Z, then yaw carries +Z onto +X.
        // The reverse order would leave it on +Z.
        let view = camera.world_to_view(Vec3::Y);
        assert!((view - Vec3::X).length() < 1e-5, "{:?}", view);
    }

    #[test]
    fn orbit_accumulates_and_clamps_pitch() {
        let mut camera = Camera::default();
        camera.orbit(100.0, 20.0);
        assert!((camera.yaw - 0.5).abs() < 1e-6);
        assert!((camera.pitch - 0.1).abs() < 1e-6);

        camera.orbit(0.0, 100_000.0);
        assert_eq!(camera.pitch, Camera::MAX_PITCH);
        camera.orbit(0.0, -1_000_000.0);
        assert_eq!(camera.pitch, -Camera::MAX_PITCH);
    }

    #[test]
    fn resize_moves_projection_center() {
        let mut camera = Camera::new(CameraMode::Fixed, 600.0, 800.0, 600.0);
        camera.set_screen_size(1920.0, 1080.0);
        let proj = camera.project(Vec3::ZERO).unwrap();
        assert_eq!(proj.pos, Vec2::new(960.0, 540.0));
    }
}
