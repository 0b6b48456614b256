//! Per-tick simulation of the star and comet pools.

use crate::components::comet::Comet;
use crate::components::star::Star;
use crate::core::camera::Camera;
use crate::core::rng::RandomSource;

/// Per-tick settings that do not live on the particles themselves.
#[derive(Debug, Clone, Copy)]
pub struct StepParams {
    /// Comet currently held by the pointer; it neither moves nor spins.
    pub locked: Option<usize>,
    /// Recycled stars receive a palette tint.
    pub tinted_stars: bool,
}

/// Counts of particles replaced during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub stars_recycled: usize,
    pub comets_recycled: usize,
}

/// Advance stars and comets one tick.
///
/// Per comet: move (unless locked), extend or drain the trail from the
/// new projected center, then recycle using the post-move z.
pub fn step<R: RandomSource + ?Sized>(
    stars: &mut [Star],
    comets: &mut [Comet],
    camera: &Camera,
    params: StepParams,
    rng: &mut R,
) -> StepReport {
    let mut report = StepReport::default();

    for star in stars.iter_mut() {
        if star.advance(rng, params.tinted_stars) {
            report.stars_recycled += 1;
        }
    }

    for (idx, comet) in comets.iter_mut().enumerate() {
        if params.locked != Some(idx) {
            comet.advance();
        }

        match camera.project(comet.position) {
            Some(center) => comet.trail.push(center.pos),
            None => comet.trail.shrink(),
        }

        if comet.is_spent(camera.fov) {
            log::trace!("comet {} recycled at z={:.1}", idx, comet.position.z);
            *comet = Comet::random(rng);
            report.comets_recycled += 1;
        }
    }

    if report.stars_recycled > 0 {
        log::trace!("{} stars recycled", report.stars_recycled);
    }
    report
}
