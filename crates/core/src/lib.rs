pub mod content;
pub mod geometry;
pub mod parallax;
pub mod svg;
pub mod views;
