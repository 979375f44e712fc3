use std::f32::consts::{PI, TAU};

use wgpu::VertexFormat;

use crate::resources::geometry::{Attribute, MeshBuffer, NORMAL, POSITION, UV};

pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
        }
    }
}

/// UV sphere. Pole rows keep their degenerate triangles so the triangle count
/// is always `2 * width_segments * height_segments`.
#[must_use]
pub fn create_sphere(options: SphereOptions) -> MeshBuffer {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);

    let ring = (width_segments + 1) as usize;
    let vertex_count = ring * (height_segments + 1) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for y in 0..=height_segments {
        let v_ratio = y as f32 / height_segments as f32;
        let theta = v_ratio * PI;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for x in 0..=width_segments {
            let u_ratio = x as f32 / width_segments as f32;
            let (sin_phi, cos_phi) = (u_ratio * TAU).sin_cos();

            let normal = [-sin_theta * cos_phi, -cos_theta, sin_theta * sin_phi];
            positions.push(normal.map(|c| c * radius));
            normals.push(normal);
            uvs.push([u_ratio, 1.0 - v_ratio]);
        }
    }

    let stride = width_segments + 1;
    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for y in 0..height_segments {
        for x in 0..width_segments {
            let v0 = y * stride + x;
            let v1 = v0 + 1;
            let v2 = (y + 1) * stride + x;
            let v3 = v2 + 1;
            indices.extend_from_slice(&[v0, v1, v2, v1, v3, v2]);
        }
    }

    let mut mesh = MeshBuffer::new("sphere");
    mesh.set_attribute(POSITION, Attribute::new_planar(&positions, VertexFormat::Float32x3));
    mesh.set_attribute(NORMAL, Attribute::new_planar(&normals, VertexFormat::Float32x3));
    mesh.set_attribute(UV, Attribute::new_planar(&uvs, VertexFormat::Float32x2));
    mesh.set_indices(&indices);
    mesh.compute_bounding_volume();

    mesh
}
