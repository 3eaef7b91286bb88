//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub pillar: [f32; 4],
    pub pillar_cap: [f32; 4],
    pub outline: [f32; 4],
    pub lava_top: [f32; 4],
    pub lava_bottom: [f32; 4],
    pub player: [f32; 4],
    pub player_eye: [f32; 4],
}

impl Palette {
    /// Dark red hellscape
    pub const STANDARD: Palette = Palette {
        background: [0.5, 0.11, 0.11, 1.0],
        pillar: [0.12, 0.16, 0.22, 1.0],
        pillar_cap: [0.22, 0.25, 0.32, 1.0],
        outline: [0.0, 0.0, 0.0, 1.0],
        lava_top: [0.92, 0.7, 0.03, 1.0],
        lava_bottom: [0.92, 0.35, 0.05, 1.0],
        player: [0.86, 0.15, 0.15, 1.0],
        player_eye: [0.99, 0.88, 0.28, 1.0],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: [0.0, 0.0, 0.0, 1.0],
        pillar: [1.0, 1.0, 1.0, 1.0],
        pillar_cap: [0.8, 0.8, 0.8, 1.0],
        outline: [0.0, 0.0, 0.0, 1.0],
        lava_top: [1.0, 1.0, 0.0, 1.0],
        lava_bottom: [1.0, 0.5, 0.0, 1.0],
        player: [1.0, 0.0, 0.0, 1.0],
        player_eye: [1.0, 1.0, 0.0, 1.0],
    };

    pub fn for_settings(settings: &crate::Settings) -> Palette {
        if settings.high_contrast {
            Palette::HIGH_CONTRAST
        } else {
            Palette::STANDARD
        }
    }
}
