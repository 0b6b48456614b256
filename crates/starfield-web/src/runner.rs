use starfield_engine::{CommandBuffer, InputEvent, Starfield, StarfieldConfig};

use crate::canvas::{CanvasSurface, CanvasTarget};

/// Wires the engine loop to the browser.
///
/// Each tick records draw commands into a [`CommandBuffer`] (readable from
/// JS through raw pointers) and, when a canvas is attached, replays them
/// onto it.
pub struct StarfieldRunner<C: CanvasTarget = CanvasSurface> {
    field: Starfield,
    commands: CommandBuffer,
    canvas: Option<C>,
}

impl<C: CanvasTarget> StarfieldRunner<C> {
    pub fn new(config: StarfieldConfig, width: f32, height: f32) -> Self {
        let commands = CommandBuffer::with_capacity(config.star_count + config.comet_count * 40 + 1);
        Self {
            field: Starfield::new(config, width, height),
            commands,
            canvas: None,
        }
    }

    /// Populate the particle pools.
    pub fn init(&mut self) {
        self.field.init();
    }

    /// Replay frames onto `canvas`, sizing it to the current viewport.
    pub fn attach_canvas(&mut self, mut canvas: C) {
        let camera = self.field.camera();
        canvas.set_size(camera.screen_width as u32, camera.screen_height as u32);
        self.canvas = Some(canvas);
    }

    /// Detach the canvas, e.g. to hand it to a replacement runner.
    pub fn take_canvas(&mut self) -> Option<C> {
        self.canvas.take()
    }

    /// Queue an input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.field.push_input(event);
    }

    /// Resize the canvas now; the projection center follows on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_size(width as u32, height as u32);
        }
        self.field.push_input(InputEvent::Resize { width, height });
    }

    /// Run one frame: input, simulation step, render.
    pub fn tick(&mut self) {
        self.commands.clear();
        self.field.tick(&mut self.commands);
        if let Some(canvas) = self.canvas.as_mut() {
            self.commands.replay(canvas);
        }
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.commands_ptr()
    }

    pub fn command_count(&self) -> u32 {
        self.commands.command_count()
    }

    pub fn viewport_width(&self) -> f32 {
        self.field.camera().screen_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.field.camera().screen_height
    }
}
