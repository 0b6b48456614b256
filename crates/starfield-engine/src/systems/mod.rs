pub mod render;
pub mod simulation;
