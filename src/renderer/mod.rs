//! WebGPU rendering module
//!
//! Flat-shaded triangle lists; the sphere look comes from per-ring vertex
//! colors, not the fragment shader.

pub mod pipeline;
pub mod shading;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
