use glam::Vec3;
use wgpu::VertexFormat;

use crate::resources::geometry::{Attribute, MeshBuffer, NORMAL, POSITION, UV};

/// Axis-aligned box centered on the origin, 4 vertices and 2 triangles per face.
#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> MeshBuffer {
    let half = Vec3::new(width, height, depth) * 0.5;

    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding.
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut uvs = Vec::with_capacity(24);

    for (normal, u_axis, v_axis) in faces {
        for (u, v) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (normal + u_axis * u + v_axis * v) * half;
            positions.push(p.to_array());
            normals.push(normal.to_array());
            uvs.push([(u + 1.0) * 0.5, 1.0 - (v + 1.0) * 0.5]);
        }
    }

    let indices: Vec<u32> = (0..6)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    let mut mesh = MeshBuffer::new("box");
    mesh.set_attribute(POSITION, Attribute::new_planar(&positions, VertexFormat::Float32x3));
    mesh.set_attribute(NORMAL, Attribute::new_planar(&normals, VertexFormat::Float32x3));
    mesh.set_attribute(UV, Attribute::new_planar(&uvs, VertexFormat::Float32x2));
    mesh.set_indices(&indices);
    mesh.compute_bounding_volume();

    mesh
}
