use glam::Vec3;
use std::f32::consts::TAU;

use super::shape::ShapeKind;
use super::trail::Trail;
use crate::core::rng::RandomSource;

/// A tumbling wireframe polyhedron with a screen-space trail.
#[derive(Debug, Clone)]
pub struct Comet {
    pub kind: ShapeKind,
    pub position: Vec3,
    /// Accumulated Euler angles (radians), unbounded.
    pub rotation: Vec3,
    /// Per-tick angle increments.
    pub rotation_speed: Vec3,
    /// Units of z lost per tick.
    pub speed: f32,
    pub size: f32,
    pub trail: Trail,
}

impl Comet {
    pub const SPAWN_XY: f32 = 1000.0;
    pub const SPAWN_Z: (f32, f32) = (2200.0, 2700.0);
    pub const SPEED: (f32, f32) = (1.0, 2.5);
    pub const SIZE: (f32, f32) = (40.0, 70.0);
    pub const MAX_SPIN: f32 = 0.005;
    /// Distance beyond the projection singularity at which comets recycle.
    pub const RECYCLE_MARGIN: f32 = 500.0;

    /// Random comet with an empty trail. Draws, in order: kind, x, y, z,
    /// speed, size, rotation x/y/z, rotation speed x/y/z.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let kind = ShapeKind::random(rng);
        let x = rng.range(-Self::SPAWN_XY, Self::SPAWN_XY);
        let y = rng.range(-Self::SPAWN_XY, Self::SPAWN_XY);
        let z = rng.range(Self::SPAWN_Z.0, Self::SPAWN_Z.1);
        let speed = rng.range(Self::SPEED.0, Self::SPEED.1);
        let size = rng.range(Self::SIZE.0, Self::SIZE.1);
        let rotation = Vec3::new(rng.range(0.0, TAU), rng.range(0.0, TAU), rng.range(0.0, TAU));
        let rotation_speed = Vec3::new(
            rng.range(-Self::MAX_SPIN, Self::MAX_SPIN),
            rng.range(-Self::MAX_SPIN, Self::MAX_SPIN),
            rng.range(-Self::MAX_SPIN, Self::MAX_SPIN),
        );
        Self {
            kind,
            position: Vec3::new(x, y, z),
            rotation,
            rotation_speed,
            speed,
            size,
            trail: Trail::new(),
        }
    }

    /// Move toward the viewer and spin by one tick.
    pub fn advance(&mut self) {
        self.position.z -= self.speed;
        self.rotation += self.rotation_speed;
    }

    /// Whether the comet has receded past the recycle threshold for `fov`.
    pub fn is_spent(&self, fov: f32) -> bool {
        self.position.z < -(fov + Self::RECYCLE_MARGIN)
    }

    /// Rotated, scaled vertices translated to the comet's position.
    pub fn world_vertices(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.kind
            .vertices(self.size, self.rotation)
            .map(move |v| v + self.position)
    }

    /// Apply a pointer drag: screen delta moves x/y directly and tumbles
    /// the shape (dy around X, dx around Y).
    pub fn drag(&mut self, dx: f32, dy: f32, rotation_scale: f32) {
        self.position.x += dx;
        self.position.y += dy;
        self.rotation.x += dy * rotation_scale;
        self.rotation.y += dx * rotation_scale;
    }
}
