use wgpu::VertexFormat;

use crate::resources::geometry::{Attribute, MeshBuffer, NORMAL, POSITION, UV};

pub struct PlaneOptions {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    /// Z offset of the plane.
    pub z: f32,
    /// Faces -Z instead of +Z.
    pub flip: bool,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            width_segments: 1,
            height_segments: 1,
            z: 0.0,
            flip: false,
        }
    }
}

/// Vertex and index data of a subdivided XY plane, without building a mesh.
pub(crate) struct PlaneData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

pub(crate) fn plane_data(options: &PlaneOptions) -> PlaneData {
    let grid_x = options.width_segments.max(1);
    let grid_y = options.height_segments.max(1);
    let grid_x1 = grid_x + 1;

    let segment_width = options.width / grid_x as f32;
    let segment_height = options.height / grid_y as f32;
    let normal_z = if options.flip { -1.0 } else { 1.0 };

    let vertex_count = (grid_x1 * (grid_y + 1)) as usize;
    let mut data = PlaneData {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        indices: Vec::with_capacity((grid_x * grid_y * 6) as usize),
    };

    for iy in 0..=grid_y {
        // Rows run top to bottom so v follows image space.
        let y = options.height * 0.5 - iy as f32 * segment_height;
        for ix in 0..=grid_x {
            let x = ix as f32 * segment_width - options.width * 0.5;
            data.positions.push([x, y, options.z]);
            data.normals.push([0.0, 0.0, normal_z]);
            data.uvs.push([ix as f32 / grid_x as f32, iy as f32 / grid_y as f32]);
        }
    }

    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + grid_x1 * iy;
            let b = ix + grid_x1 * (iy + 1);
            let c = (ix + 1) + grid_x1 * (iy + 1);
            let d = (ix + 1) + grid_x1 * iy;

            if options.flip {
                data.indices.extend_from_slice(&[a, d, b, b, d, c]);
            } else {
                data.indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
    }

    data
}

#[must_use]
pub fn create_plane(options: PlaneOptions) -> MeshBuffer {
    let data = plane_data(&options);

    let mut mesh = MeshBuffer::new("plane");
    mesh.set_attribute(POSITION, Attribute::new_planar(&data.positions, VertexFormat::Float32x3));
    mesh.set_attribute(NORMAL, Attribute::new_planar(&data.normals, VertexFormat::Float32x3));
    mesh.set_attribute(UV, Attribute::new_planar(&data.uvs, VertexFormat::Float32x2));
    mesh.set_indices(&data.indices);
    mesh.compute_bounding_volume();

    mesh
}
