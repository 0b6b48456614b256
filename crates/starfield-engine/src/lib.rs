pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::StarfieldConfig;
pub use api::starfield::Starfield;
pub use components::comet::Comet;
pub use components::shape::ShapeKind;
pub use components::star::{Star, STAR_PALETTE};
pub use components::trail::Trail;
pub use crate::core::camera::{Camera, CameraMode, Projection, project_point};
pub use crate::core::math::rotate;
pub use crate::core::rng::{RandomSource, Rng, SequenceRng};
pub use input::interaction::{InteractionMode, InteractionResult, InteractionSystem, hit_test};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::commands::{CommandBuffer, CommandKind, DrawCommand};
pub use renderer::surface::{Color, Surface};
pub use systems::render::{render_frame, comet_fade, FrameView};
pub use systems::simulation::{step, StepParams, StepReport};
