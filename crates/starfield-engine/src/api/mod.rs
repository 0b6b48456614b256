pub mod config;
pub mod starfield;
