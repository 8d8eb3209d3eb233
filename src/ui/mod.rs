pub mod render;
pub mod style;
