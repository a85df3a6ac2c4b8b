//! Rendering module
//!
//! The game draws through the `Surface` trait; the browser canvas and the
//! recording surface are the two implementations.

pub mod recording;
pub mod scene;
pub mod surface;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_scene;
pub use surface::{ShapeStyle, Surface, TextAlign};
