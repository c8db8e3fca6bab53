pub mod catalog;
pub mod preview;
pub mod render;
