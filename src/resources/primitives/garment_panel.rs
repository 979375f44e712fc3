use wgpu::VertexFormat;

use crate::garment::GarmentStandard;
use crate::resources::geometry::{Attribute, MeshBuffer, NORMAL, POSITION, UV};
use crate::resources::primitives::plane::{PlaneOptions, plane_data};

/// Two-sided slab matching a garment's scaled bounds, centered on the origin.
///
/// Stands in for authored garment meshes: the front and back faces are each
/// subdivided `segments x segments`, giving `4 * segments^2` triangles.
#[must_use]
pub fn create_garment_panel(standard: &GarmentStandard, segments: u32) -> MeshBuffer {
    let size = standard.scaled_bounds();
    let segments = segments.max(1);

    let front = plane_data(&PlaneOptions {
        width: size.x,
        height: size.y,
        width_segments: segments,
        height_segments: segments,
        z: size.z * 0.5,
        flip: false,
    });
    let back = plane_data(&PlaneOptions {
        width: size.x,
        height: size.y,
        width_segments: segments,
        height_segments: segments,
        z: -size.z * 0.5,
        flip: true,
    });

    let offset = front.positions.len() as u32;
    let mut positions = front.positions;
    let mut normals = front.normals;
    let mut uvs = front.uvs;
    let mut indices = front.indices;

    positions.extend(back.positions);
    normals.extend(back.normals);
    uvs.extend(back.uvs);
    indices.extend(back.indices.into_iter().map(|i| i + offset));

    let mut mesh = MeshBuffer::new("garment_panel");
    mesh.set_attribute(POSITION, Attribute::new_planar(&positions, VertexFormat::Float32x3));
    mesh.set_attribute(NORMAL, Attribute::new_planar(&normals, VertexFormat::Float32x3));
    mesh.set_attribute(UV, Attribute::new_planar(&uvs, VertexFormat::Float32x2));
    mesh.set_indices(&indices);
    mesh.compute_bounding_volume();

    mesh
}
