pub mod axes;
pub mod profile;
