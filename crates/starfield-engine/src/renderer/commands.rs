use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::surface::{Color, Surface};

/// Kind tag stored in [`DrawCommand::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CommandKind {
    /// `(x0, y0)` origin, `(x1, y1)` width/height.
    FillRect = 0,
    /// `(x0, y0)` center, `size` radius.
    FillCircle = 1,
    /// `(x0, y0)` to `(x1, y1)`, `size` line width.
    StrokeLine = 2,
}

/// One recorded draw call, shared with JS as raw floats.
/// Must match the host protocol: 10 floats = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    pub kind: f32,
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawCommand {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(kind: CommandKind, a: Vec2, b: Vec2, size: f32, color: Color) -> Self {
        Self {
            kind: kind as u8 as f32,
            x0: a.x,
            y0: a.y,
            x1: b.x,
            y1: b.y,
            size,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }

    /// Decode the kind tag. `None` for corrupted records.
    pub fn kind(&self) -> Option<CommandKind> {
        match self.kind as u8 {
            0 => Some(CommandKind::FillRect),
            1 => Some(CommandKind::FillCircle),
            2 => Some(CommandKind::StrokeLine),
            _ => None,
        }
    }

    pub fn color(&self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

/// Surface that records every draw call for later replay.
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Count recorded commands of one kind.
    pub fn count(&self, kind: CommandKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == Some(kind)).count()
    }

    /// Flat float view of all commands.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.commands)
    }

    /// Raw pointer to command data for shared-memory reads.
    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }

    pub fn command_count(&self) -> u32 {
        self.commands.len() as u32
    }

    /// Play every recorded command onto another surface, in order.
    pub fn replay<S: Surface + ?Sized>(&self, target: &mut S) {
        for cmd in &self.commands {
            let a = Vec2::new(cmd.x0, cmd.y0);
            let b = Vec2::new(cmd.x1, cmd.y1);
            match cmd.kind() {
                Some(CommandKind::FillRect) => target.fill_rect(a, b, cmd.color()),
                Some(CommandKind::FillCircle) => target.fill_circle(a, cmd.size, cmd.color()),
                Some(CommandKind::StrokeLine) => target.stroke_line(a, b, cmd.size, cmd.color()),
                None => {}
            }
        }
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for CommandBuffer {
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::new(CommandKind::FillRect, origin, size, 0.0, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::new(CommandKind::FillCircle, center, center, radius, color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.commands
            .push(DrawCommand::new(CommandKind::StrokeLine, from, to, width, color));
    }
}
