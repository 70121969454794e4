//! GPU vertex format
//!
//! Shapes are tessellated in field units; `RenderState::render` rewrites the
//! position to NDC just before upload.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use super::frame::Color;

/// Position plus flat RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Vertex at a field-space point
    pub fn from_field(point: DVec2, color: Color) -> Self {
        Self {
            position: point.as_vec2().to_array(),
            color: color.to_rgba(),
        }
    }

    /// Same color, position moved into clip space
    pub fn with_position(self, x: f32, y: f32) -> Self {
        Self {
            position: [x, y],
            ..self
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_narrows_point_and_color() {
        let v = Vertex::from_field(DVec2::new(389.5, 380.0), Color::RED);
        assert_eq!(v.position, [389.5, 380.0]);
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);

        let moved = v.with_position(0.5, -0.5);
        assert_eq!(moved.position, [0.5, -0.5]);
        assert_eq!(moved.color, v.color);
    }

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
