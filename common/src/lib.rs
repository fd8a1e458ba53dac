//! Common rendering front end for the wave demos
//!
//! Window and GPU setup, an orbiting camera, a colored point-cloud renderer
//! and the event loop that drives a [`Scene`].

pub mod graphics;
pub mod camera;
pub mod renderer;
pub mod viewer;

pub use graphics::*;
pub use camera::*;
pub use renderer::*;
pub use viewer::*;
