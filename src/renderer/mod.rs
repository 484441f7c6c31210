//! WebGPU rendering module
//!
//! Boxes are flattened into pre-shaded triangles on the CPU and drawn back to
//! front through a single camera uniform.

pub mod camera;
pub mod mesh_scene;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use mesh_scene::MeshScene;
pub use pipeline::RenderState;
pub use vertex::Vertex;
