//! Triangle decimation for the medium and low detail tiers.
//!
//! Selection is deterministic fixed-stride sampling: triangle `t` of `n` is
//! kept when `floor((t + 1) * target / n) > floor(t * target / n)`, which
//! retains exactly `target` triangles spread evenly through the buffer. The
//! same input always yields the same output, so tier transitions are stable
//! and the results can be compared in tests.
//!
//! This is not topology-preserving simplification; holes appear on dense
//! regions long before a quadric collapse would produce them.

use rustc_hash::FxHashMap;

use crate::resources::MeshBuffer;
use crate::resources::geometry::POSITION;

/// Reduces `mesh` to `target` triangles (at least one).
///
/// Returns an unmodified copy when the mesh is already within budget or has
/// no position data. Normals and bounds are recomputed on decimated output.
#[must_use]
pub fn simplify(mesh: &MeshBuffer, target: usize) -> MeshBuffer {
    let triangle_count = mesh.triangle_count();
    if triangle_count <= target {
        return mesh.clone();
    }

    let Some(positions) = mesh.get_attribute(POSITION) else {
        log::warn!(
            "simplify: mesh '{}' has no position attribute, returning it unmodified",
            mesh.label
        );
        return mesh.clone();
    };
    let vertex_count = positions.count as usize;

    let target = target.max(1);
    let kept_triangles = stride_selection(triangle_count, target);

    let (vertex_order, new_indices) = match mesh.indices() {
        Some(indices) => {
            let (order, remapped) = compact_indexed(indices, &kept_triangles, vertex_count);
            (order, Some(remapped))
        }
        None => {
            let order = kept_triangles
                .iter()
                .flat_map(|&t| {
                    let base = (t * 3) as u32;
                    [base, base + 1, base + 2]
                })
                .collect();
            (order, None)
        }
    };

    if vertex_order.is_empty() {
        log::warn!(
            "simplify: mesh '{}' has no valid triangles to keep, returning it unmodified",
            mesh.label
        );
        return mesh.clone();
    }

    let mut result = MeshBuffer::new(&format!("{}_lod{}", mesh.label, target));
    for (name, attr) in mesh.attributes() {
        result.set_attribute(name, attr.gather(&vertex_order));
    }
    if let Some(indices) = new_indices {
        result.set_indices(&indices);
    }

    result.compute_vertex_normals();
    result.compute_bounding_volume();

    log::trace!(
        "simplify: '{}' {} -> {} triangles",
        mesh.label,
        triangle_count,
        result.triangle_count()
    );

    result
}

/// Indices of the triangles to keep, ascending.
pub(crate) fn stride_selection(triangle_count: usize, target: usize) -> Vec<usize> {
    let n = triangle_count as u128;
    let k = target.min(triangle_count) as u128;

    (0..triangle_count)
        .filter(|&t| {
            let t = t as u128;
            ((t + 1) * k) / n > (t * k) / n
        })
        .collect()
}

/// Keeps the selected index triples and compacts the vertices they use.
///
/// Returns the old vertex index of every new vertex, and the remapped index
/// buffer. Triangles referencing missing vertices are dropped.
fn compact_indexed(indices: &[u32], kept_triangles: &[usize], vertex_count: usize) -> (Vec<u32>, Vec<u32>) {
    let mut remap: FxHashMap<u32, u32> = FxHashMap::default();
    let mut order = Vec::new();
    let mut remapped = Vec::with_capacity(kept_triangles.len() * 3);

    for &t in kept_triangles {
        let Some(tri) = indices.get(t * 3..t * 3 + 3) else {
            continue;
        };
        if tri.iter().any(|&i| i as usize >= vertex_count) {
            continue;
        }
        for &old in tri {
            let new = *remap.entry(old).or_insert_with(|| {
                order.push(old);
                (order.len() - 1) as u32
            });
            remapped.push(new);
        }
    }

    (order, remapped)
}
