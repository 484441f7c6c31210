//! Vertex types for 3D box rendering

use bytemuck::{Pod, Zeroable};

/// World-space vertex with a pre-shaded color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Face brightness used for flat shading (light from above, front-right)
pub mod shade {
    pub const TOP: f32 = 1.0;
    pub const RIGHT: f32 = 0.85;
    pub const FRONT: f32 = 0.75;
    pub const LEFT: f32 = 0.6;
    pub const BACK: f32 = 0.55;
    pub const BOTTOM: f32 = 0.4;
}
