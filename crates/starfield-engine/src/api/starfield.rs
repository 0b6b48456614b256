use glam::Vec2;

use crate::api::config::StarfieldConfig;
use crate::components::comet::Comet;
use crate::components::star::Star;
use crate::core::camera::Camera;
use crate::core::rng::{RandomSource, Rng};
use crate::input::interaction::{InteractionMode, InteractionResult, InteractionSystem};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::surface::Surface;
use crate::systems::render::{render_frame, FrameView};
use crate::systems::simulation::{step, StepParams, StepReport};

/// The whole simulation context: particle pools, camera, pointer state
/// and pending input. Lifecycle is `new` -> `init` -> `tick` per frame.
pub struct Starfield<R: RandomSource = Rng> {
    config: StarfieldConfig,
    camera: Camera,
    stars: Vec<Star>,
    comets: Vec<Comet>,
    interaction: InteractionSystem,
    input: InputQueue,
    rng: R,
    initialized: bool,
}

impl Starfield<Rng> {
    /// Create a star field for a `width` x `height` surface, seeded from the config.
    pub fn new(config: StarfieldConfig, width: f32, height: f32) -> Self {
        let rng = Rng::new(config.effective_seed());
        Self::with_rng(config, width, height, rng)
    }
}

impl<R: RandomSource> Starfield<R> {
    pub fn with_rng(config: StarfieldConfig, width: f32, height: f32, rng: R) -> Self {
        let camera = Camera::new(config.camera, config.fov, width, height);
        Self {
            stars: Vec::with_capacity(config.star_count),
            comets: Vec::with_capacity(config.comet_count),
            config,
            camera,
            interaction: InteractionSystem::new(),
            input: InputQueue::new(),
            rng,
            initialized: false,
        }
    }

    /// Populate the particle pools. Calling again re-randomizes them.
    pub fn init(&mut self) {
        self.stars.clear();
        self.comets.clear();
        for _ in 0..self.config.star_count {
            self.stars.push(Star::random(&mut self.rng, self.config.tinted_stars));
        }
        for _ in 0..self.config.comet_count {
            self.comets.push(Comet::random(&mut self.rng));
        }
        self.interaction.reset();
        self.initialized = true;
        log::info!(
            "starfield: {} stars, {} comets, {:?} camera, {}x{}",
            self.stars.len(),
            self.comets.len(),
            self.camera.mode,
            self.camera.screen_width,
            self.camera.screen_height,
        );
    }

    /// Queue an event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply an event immediately.
    pub fn handle_input(&mut self, event: InputEvent) -> InteractionResult {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.interaction
                    .on_pointer_down(Vec2::new(x, y), &self.comets, &self.camera)
            }
            InputEvent::PointerMove { x, y } => self.interaction.on_pointer_move(
                Vec2::new(x, y),
                &mut self.comets,
                &mut self.camera,
            ),
            InputEvent::PointerUp => self.interaction.on_pointer_up(),
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                InteractionResult::None
            }
        }
    }

    /// Update the projection center for a new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.camera.screen_width != width || self.camera.screen_height != height {
            log::debug!("resize to {}x{}", width, height);
            self.camera.set_screen_size(width, height);
        }
    }

    /// Advance the simulation one tick without drawing.
    pub fn step(&mut self) -> StepReport {
        let params = StepParams {
            locked: self.interaction.dragged_comet(),
            tinted_stars: self.config.tinted_stars,
        };
        step(&mut self.stars, &mut self.comets, &self.camera, params, &mut self.rng)
    }

    /// Draw the current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_frame(
            surface,
            &FrameView {
                camera: &self.camera,
                stars: &self.stars,
                comets: &self.comets,
                star_streaks: self.config.star_streaks,
            },
        );
    }

    /// One frame: apply queued input, step, render. No-op before `init`.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.initialized {
            return;
        }
        for event in self.input.drain() {
            self.handle_input(event);
        }
        self.step();
        self.render(surface);
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn comets(&self) -> &[Comet] {
        &self.comets
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::CameraMode;
    use crate::renderer::commands::{CommandBuffer, CommandKind};
    use glam::Vec3;

    fn small_config() -> StarfieldConfig {
        StarfieldConfig {
            star_count: 40,
            comet_count: 3,
            ..Default::default()
        }
    }

    #[test]
    fn tick_before_init_draws_nothing() {
        let mut field = Starfield::new(small_config(), 800.0, 600.0);
        let mut buf = CommandBuffer::new();
        field.tick(&mut buf);
        assert!(buf.is_empty());
        assert!(!field.is_initialized());
    }

    #[test]
    fn init_fills_pools() {
        let mut field = Starfield::new(small_config(), 800.0, 600.0);
        field.init();
        assert_eq!(field.stars().len(), 40);
        assert_eq!(field.comets().len(), 3);
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = Starfield::new(small_config(), 800.0, 600.0);
        let mut b = Starfield::new(small_config(), 800.0, 600.0);
        a.init();
        b.init();
        let (mut fa, mut fb) = (CommandBuffer::new(), CommandBuffer::new());
        for _ in 0..30 {
            fa.clear();
            fb.clear();
            a.tick(&mut fa);
            b.tick(&mut fb);
        }
        assert_eq!(fa.commands, fb.commands);
    }

    #[test]
    fn frame_starts_with_backdrop_and_draws_stars() {
        let mut field = Starfield::new(small_config(), 800.0, 600.0);
        field.init();
        let mut buf = CommandBuffer::new();
        field.tick(&mut buf);
        assert_eq!(buf.commands[0].kind(), Some(CommandKind::FillRect));
        assert!(buf.count(CommandKind::FillCircle) > 0);
    }

    #[test]
    fn queued_drag_locks_comet_during_tick() {
        let config = StarfieldConfig {
            star_count: 0,
            comet_count: 1,
            camera: CameraMode::Fixed,
            ..Default::default()
        };
        let mut field = Starfield::new(config, 800.0, 600.0);
        field.init();
        field.comets[0].position = Vec3::new(0.0, 0.0, 500.0);
        let center = field.camera().project(field.comets[0].position).unwrap().pos;

        field.push_input(InputEvent::PointerDown { x: center.x, y: center.y });
        field.push_input(InputEvent::PointerMove { x: center.x + 10.0, y: center.y - 5.0 });
        let mut buf = CommandBuffer::new();
        field.tick(&mut buf);

        let comet = &field.comets()[0];
        assert_eq!(comet.position, Vec3::new(10.0, -5.0, 500.0));
        assert!(matches!(field.interaction_mode(), InteractionMode::DragComet { comet_idx: 0 }));

        field.push_input(InputEvent::PointerUp);
        field.tick(&mut buf);
        assert_eq!(field.interaction_mode(), InteractionMode::Idle);
        assert!(field.comets()[0].position.z < 500.0);
    }

    #[test]
    fn orbit_drag_rotates_camera() {
        let mut field = Starfield::new(StarfieldConfig { comet_count: 0, ..small_config() }, 800.0, 600.0);
        field.init();
        field.handle_input(InputEvent::PointerDown { x: 5.0, y: 5.0 });
        let result = field.handle_input(InputEvent::PointerMove { x: 105.0, y: 5.0 });
        assert_eq!(result, InteractionResult::CameraOrbited);
        assert!((field.camera().yaw - 0.5).abs() < 1e-6);
    }

    #[test]
    fn resize_event_recenters_projection() {
        let mut field = Starfield::new(small_config(), 800.0, 600.0);
        field.init();
        field.push_input(InputEvent::Resize { width: 1024.0, height: 768.0 });
        field.push_input(InputEvent::Resize { width: 1024.0, height: 768.0 });
        let mut buf = CommandBuffer::new();
        field.tick(&mut buf);
        assert_eq!(field.camera().screen_width, 1024.0);
        let backdrop = buf.commands[0];
        assert_eq!((backdrop.x1, backdrop.y1), (1024.0, 768.0));
    }
}
