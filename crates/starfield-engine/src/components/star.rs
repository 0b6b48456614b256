use glam::Vec3;

use crate::core::rng::RandomSource;
use crate::renderer::surface::Color;

/// Tints a star may be tagged with.
pub const STAR_PALETTE: [Color; 4] = [
    Color::WHITE,
    Color::rgb(0.78, 0.86, 1.0),
    Color::rgb(1.0, 0.94, 0.78),
    Color::rgb(0.86, 0.8, 1.0),
];

/// A drifting point star, approaching the viewer along -z.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Units of z lost per tick.
    pub speed: f32,
    pub size: f32,
    pub color: Option<Color>,
}

impl Star {
    /// Below this z the star is recycled.
    pub const NEAR: f32 = 1.0;
    /// Recycled stars restart here; also the depth that fades stars to zero.
    pub const FAR: f32 = 2000.0;
    pub const SPAWN_XY: f32 = 2000.0;
    pub const SPAWN_Z: (f32, f32) = (100.0, 2100.0);
    pub const SPEED: (f32, f32) = (0.5, 2.0);
    pub const SIZE: (f32, f32) = (1.0, 2.5);

    /// Random star. Draws, in order: x, y, z, speed, size, then a palette
    /// pick when `tinted`.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R, tinted: bool) -> Self {
        let x = rng.range(-Self::SPAWN_XY, Self::SPAWN_XY);
        let y = rng.range(-Self::SPAWN_XY, Self::SPAWN_XY);
        let z = rng.range(Self::SPAWN_Z.0, Self::SPAWN_Z.1);
        let speed = rng.range(Self::SPEED.0, Self::SPEED.1);
        let size = rng.range(Self::SIZE.0, Self::SIZE.1);
        let color = tinted.then(|| STAR_PALETTE[rng.index(STAR_PALETTE.len())]);
        Self {
            position: Vec3::new(x, y, z),
            speed,
            size,
            color,
        }
    }

    /// Move one tick toward the viewer, recycling to the far bound once
    /// past the near threshold. Returns true when recycled.
    pub fn advance<R: RandomSource + ?Sized>(&mut self, rng: &mut R, tinted: bool) -> bool {
        self.position.z -= self.speed;
        if self.position.z < Self::NEAR {
            *self = Self::random(rng, tinted);
            self.position.z = Self::FAR;
            return true;
        }
        false
    }

    /// Opacity from depth: 1 at the viewer, 0 at [`Star::FAR`].
    pub fn alpha_at(depth: f32) -> f32 {
        (1.0 - depth / Self::FAR).clamp(0.0, 1.0)
    }
}
