pub mod batch;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod session;
pub mod transform;
