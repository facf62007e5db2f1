pub mod geometry;
pub mod svg;
