//! WebGPU rendering module
//!
//! The board is built as plain colored triangles on the CPU each frame and
//! drawn with a single pass-through pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
