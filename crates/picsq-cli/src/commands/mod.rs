pub mod config;
pub mod geometry;
pub mod parse;
pub mod square;
