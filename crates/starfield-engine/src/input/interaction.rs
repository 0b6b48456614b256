//! Pointer interaction: grab-and-tumble comets, or orbit the camera.
//!
//! A small state machine. Pointer-down hit-tests projected comet centers;
//! a hit enters comet drag, a miss enters camera orbit (orbit cameras
//! only). Pointer-up always returns to idle.

use glam::Vec2;

use crate::components::comet::Comet;
use crate::core::camera::Camera;

/// The current interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// No active interaction.
    Idle,
    /// Dragging a comet; it is locked against the simulation step.
    DragComet { comet_idx: usize },
    /// Orbiting camera (drag on empty space).
    OrbitCamera,
}

/// Result of processing a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionResult {
    /// No action needed.
    None,
    /// A comet was picked up.
    CometGrabbed { comet_idx: usize },
    /// The held comet moved by this screen delta.
    CometDragged { comet_idx: usize, delta: Vec2 },
    /// Camera was orbited.
    CameraOrbited,
    /// A drag or orbit ended.
    Released,
}

/// Manages pointer interaction state.
pub struct InteractionSystem {
    mode: InteractionMode,
    /// Last pointer position (for delta calculation).
    last_pointer: Vec2,
}

impl InteractionSystem {
    /// Pick radius around a projected comet center, in pixels.
    pub const HIT_RADIUS: f32 = 60.0;
    /// Radians of tumble per pixel of drag.
    pub const DRAG_ROTATION_SCALE: f32 = 0.01;

    pub fn new() -> Self {
        Self {
            mode: InteractionMode::Idle,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Get the current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Comet held by the pointer, if any.
    pub fn dragged_comet(&self) -> Option<usize> {
        match self.mode {
            InteractionMode::DragComet { comet_idx } => Some(comet_idx),
            _ => None,
        }
    }

    /// Handle pointer down event.
    pub fn on_pointer_down(&mut self, pos: Vec2, comets: &[Comet], camera: &Camera) -> InteractionResult {
        self.last_pointer = pos;

        if let Some(comet_idx) = hit_test(comets, camera, pos) {
            log::debug!("comet {} grabbed", comet_idx);
            self.mode = InteractionMode::DragComet { comet_idx };
            InteractionResult::CometGrabbed { comet_idx }
        } else if camera.supports_orbit() {
            log::debug!("camera orbit started");
            self.mode = InteractionMode::OrbitCamera;
            InteractionResult::None
        } else {
            self.mode = InteractionMode::Idle;
            InteractionResult::None
        }
    }

    /// Handle pointer move event.
    pub fn on_pointer_move(
        &mut self,
        pos: Vec2,
        comets: &mut [Comet],
        camera: &mut Camera,
    ) -> InteractionResult {
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;

        match self.mode {
            InteractionMode::Idle => InteractionResult::None,
            InteractionMode::DragComet { comet_idx } => match comets.get_mut(comet_idx) {
                Some(comet) => {
                    comet.drag(delta.x, delta.y, Self::DRAG_ROTATION_SCALE);
                    InteractionResult::CometDragged { comet_idx, delta }
                }
                None => {
                    // Pool shrank under us; drop the stale grab.
                    self.mode = InteractionMode::Idle;
                    InteractionResult::Released
                }
            },
            InteractionMode::OrbitCamera => {
                camera.orbit(delta.x, delta.y);
                InteractionResult::CameraOrbited
            }
        }
    }

    /// Handle pointer up event.
    pub fn on_pointer_up(&mut self) -> InteractionResult {
        let was = self.mode;
        self.mode = InteractionMode::Idle;
        match was {
            InteractionMode::Idle => InteractionResult::None,
            _ => {
                log::debug!("released from {:?}", was);
                InteractionResult::Released
            }
        }
    }

    /// Reset the interaction state.
    pub fn reset(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}

impl Default for InteractionSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// First comet whose projected center lies within [`InteractionSystem::HIT_RADIUS`]
/// of `screen_pos`. Comets that do not project are never hit.
pub fn hit_test(comets: &[Comet], camera: &Camera, screen_pos: Vec2) -> Option<usize> {
    comets.iter().position(|comet| {
        camera
            .project(comet.position)
            .is_some_and(|p| p.pos.distance(screen_pos) < InteractionSystem::HIT_RADIUS)
    })
}
