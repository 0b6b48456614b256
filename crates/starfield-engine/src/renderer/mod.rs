pub mod commands;
pub mod surface;

// Re-export key types for convenient access
pub use commands::{CommandBuffer, CommandKind, DrawCommand};
pub use surface::{Color, Surface};
