pub mod camera;
pub mod config;
pub mod controls;
pub mod error;
pub mod scene;


pub use camera::{Camera, Movement};
pub use error::{Error, Result};
