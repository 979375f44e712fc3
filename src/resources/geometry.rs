use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec3;
use rustc_hash::FxHashMap;
use uuid::Uuid;
use wgpu::VertexFormat;

use crate::errors::{DrapeError, Result};

pub const POSITION: &str = "position";
pub const NORMAL: &str = "normal";
pub const UV: &str = "uv";

/// A planar vertex attribute: CPU-side bytes plus layout metadata.
///
/// The bytes live behind an `Arc`, so cloning an attribute (or a whole mesh)
/// shares storage; attributes are never written in place.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub data: Arc<Vec<u8>>,

    /// Data version for change detection
    pub version: u64,

    pub format: VertexFormat,
    pub count: u32,
    pub stride: u64,
}

static NEXT_ATTR_VERSION: AtomicU64 = AtomicU64::new(1);

impl Attribute {
    pub fn new_planar<T: bytemuck::Pod>(data: &[T], format: VertexFormat) -> Self {
        let raw_data = bytemuck::cast_slice(data).to_vec();

        Self {
            data: Arc::new(raw_data),
            version: NEXT_ATTR_VERSION.fetch_add(1, Ordering::Relaxed),
            format,
            count: data.len() as u32,
            stride: std::mem::size_of::<T>() as u64,
        }
    }

    #[inline]
    #[must_use]
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    pub fn read_vec3(&self, i: u32) -> Option<Vec3> {
        if self.format != VertexFormat::Float32x3 {
            return None;
        }
        let offset = (i as usize) * self.stride as usize;
        let bytes: &[u8; 12] = self.data.get(offset..offset + 12)?.try_into().ok()?;
        let vals: &[f32; 3] = bytemuck::cast_ref(bytes);
        Some(Vec3::from_array(*vals))
    }

    /// Builds a new attribute from the elements at `indices`, in order.
    ///
    /// Out-of-range indices are skipped.
    #[must_use]
    pub fn gather(&self, indices: &[u32]) -> Self {
        let stride = self.stride as usize;
        let mut raw_data = Vec::with_capacity(indices.len() * stride);
        let mut count = 0u32;

        for &i in indices {
            let start = i as usize * stride;
            if let Some(element) = self.data.get(start..start + stride) {
                raw_data.extend_from_slice(element);
                count += 1;
            }
        }

        Self {
            data: Arc::new(raw_data),
            version: NEXT_ATTR_VERSION.fetch_add(1, Ordering::Relaxed),
            format: self.format,
            count,
            stride: self.stride,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Box of the given extents centered on `center`.
    #[must_use]
    pub fn centered(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    #[must_use]
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// The eight corners; bit 2 of the index selects max x, bit 1 max y, bit 0 max z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Vertex/index buffer for one garment detail tier.
///
/// Triangle count is `index_count / 3` for indexed meshes and
/// `vertex_count / 3` otherwise. A mesh either has at least one triangle or
/// is explicitly empty ([`MeshBuffer::empty`]).
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    pub uuid: Uuid,
    pub label: String,

    attributes: FxHashMap<String, Attribute>,
    indices: Option<Arc<Vec<u32>>>,

    pub bounding_box: Option<BoundingBox>,
    pub bounding_sphere: Option<BoundingSphere>,
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl MeshBuffer {
    pub fn new(label: &str) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            label: label.to_string(),
            attributes: FxHashMap::default(),
            indices: None,
            bounding_box: None,
            bounding_sphere: None,
        }
    }

    /// A mesh with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("empty")
    }

    /// Builds a validated triangle mesh from raw arrays.
    ///
    /// Normals are computed when not supplied; bounds are always computed.
    pub fn from_arrays(
        label: &str,
        positions: &[[f32; 3]],
        normals: Option<&[[f32; 3]]>,
        uvs: Option<&[[f32; 2]]>,
        indices: Option<&[u32]>,
    ) -> Result<Self> {
        let vertex_count = positions.len();

        if let Some(normals) = normals
            && normals.len() != vertex_count
        {
            return Err(DrapeError::AttributeLengthMismatch {
                name: NORMAL,
                expected: vertex_count,
                actual: normals.len(),
            });
        }
        if let Some(uvs) = uvs
            && uvs.len() != vertex_count
        {
            return Err(DrapeError::AttributeLengthMismatch {
                name: UV,
                expected: vertex_count,
                actual: uvs.len(),
            });
        }

        match indices {
            Some(indices) => {
                if indices.len() % 3 != 0 {
                    return Err(DrapeError::IndexCountNotTriangles(indices.len()));
                }
                if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(DrapeError::IndexOutOfRange { index, vertex_count });
                }
            }
            None => {
                if vertex_count % 3 != 0 {
                    return Err(DrapeError::VertexCountNotTriangles(vertex_count));
                }
            }
        }

        let mut mesh = Self::new(label);
        mesh.set_attribute(POSITION, Attribute::new_planar(positions, VertexFormat::Float32x3));
        if let Some(uvs) = uvs {
            mesh.set_attribute(UV, Attribute::new_planar(uvs, VertexFormat::Float32x2));
        }
        if let Some(indices) = indices {
            mesh.set_indices(indices);
        }
        match normals {
            Some(normals) => {
                mesh.set_attribute(NORMAL, Attribute::new_planar(normals, VertexFormat::Float32x3));
            }
            None => mesh.compute_vertex_normals(),
        }
        mesh.compute_bounding_volume();

        Ok(mesh)
    }

    // Attributes accessors
    pub fn attributes(&self) -> &FxHashMap<String, Attribute> {
        &self.attributes
    }

    pub fn set_attribute(&mut self, name: &str, attr: Attribute) {
        self.attributes.insert(name.to_string(), attr);
    }

    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn set_indices(&mut self, indices: &[u32]) {
        self.indices = Some(Arc::new(indices.to_vec()));
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref().map(Vec::as_slice)
    }

    #[inline]
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, |i| i.len())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.attributes.get(POSITION).map_or(0, |a| a.count as usize)
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        if self.is_indexed() {
            self.index_count() / 3
        } else {
            self.vertex_count() / 3
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Sum of all attribute and index bytes.
    #[must_use]
    pub fn byte_length(&self) -> usize {
        let attrs: usize = self.attributes.values().map(Attribute::byte_length).sum();
        attrs + self.index_count() * std::mem::size_of::<u32>()
    }

    pub fn read_position(&self, i: u32) -> Option<Vec3> {
        self.attributes.get(POSITION)?.read_vec3(i)
    }

    /// Visits each triangle's vertex indices, indexed or not.
    pub fn for_each_triangle(&self, mut f: impl FnMut(usize, [u32; 3])) {
        match self.indices() {
            Some(indices) => {
                for (t, tri) in indices.chunks_exact(3).enumerate() {
                    f(t, [tri[0], tri[1], tri[2]]);
                }
            }
            None => {
                for t in 0..self.vertex_count() / 3 {
                    let base = (t * 3) as u32;
                    f(t, [base, base + 1, base + 2]);
                }
            }
        }
    }

    pub fn compute_vertex_normals(&mut self) {
        let Some(pos_attr) = self.attributes.get(POSITION) else {
            return;
        };
        if pos_attr.format != VertexFormat::Float32x3 {
            return;
        }

        let pos_count = pos_attr.count as usize;
        let mut normals = vec![Vec3::ZERO; pos_count];

        self.for_each_triangle(|_, [i0, i1, i2]| {
            let (Some(v0), Some(v1), Some(v2)) =
                (pos_attr.read_vec3(i0), pos_attr.read_vec3(i1), pos_attr.read_vec3(i2))
            else {
                return;
            };

            // Area weighted: |cross| is twice the triangle area.
            let face_normal = (v1 - v0).cross(v2 - v0);

            normals[i0 as usize] += face_normal;
            normals[i1 as usize] += face_normal;
            normals[i2 as usize] += face_normal;
        });

        for n in &mut normals {
            *n = n.normalize_or_zero();
        }

        let normal_attr = Attribute::new_planar(&normals, VertexFormat::Float32x3);
        self.set_attribute(NORMAL, normal_attr);
    }

    pub fn compute_bounding_volume(&mut self) {
        let Some(pos_attr) = self.attributes.get(POSITION) else {
            return;
        };

        let points: Vec<Vec3> = (0..pos_attr.count).filter_map(|i| pos_attr.read_vec3(i)).collect();
        if points.is_empty() {
            self.bounding_box = None;
            self.bounding_sphere = None;
            return;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for &p in &points {
            min = min.min(p);
            max = max.max(p);
        }

        // The AABB center is the sphere center.
        let center = (min + max) * 0.5;
        let max_dist_sq = points
            .iter()
            .map(|p| p.distance_squared(center))
            .fold(0.0_f32, f32::max);

        self.bounding_box = Some(BoundingBox { min, max });
        self.bounding_sphere = Some(BoundingSphere {
            center,
            radius: max_dist_sq.sqrt(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_skips_out_of_range() {
        let attr = Attribute::new_planar(&[[0.0f32, 1.0, 2.0], [3.0, 4.0, 5.0]], VertexFormat::Float32x3);
        let gathered = attr.gather(&[1, 7, 0]);
        assert_eq!(gathered.count, 2);
        assert_eq!(gathered.read_vec3(0), Some(Vec3::new(3.0, 4.0, 5.0)));
        assert_eq!(gathered.read_vec3(1), Some(Vec3::new(0.0, 1.0, 2.0)));
    }
}
