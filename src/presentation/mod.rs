// Presentation layer - Terminal rendering and command-line surface
pub mod cli;
pub mod render;
