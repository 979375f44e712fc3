//! MeshBuffer and BoundingBox Tests
//!
//! Tests for:
//! - BoundingBox construction, clamp, contains and corners
//! - Validated construction from raw arrays
//! - Triangle accounting (indexed / non-indexed / empty)
//! - Vertex normal computation (area-weighted)
//! - Primitive meshes (box, plane, sphere, garment panel)

use glam::Vec3;
use wgpu::VertexFormat;

use drape::errors::DrapeError;
use drape::garment::standard_for;
use drape::resources::MeshBuffer;
use drape::resources::geometry::{Attribute, BoundingBox};
use drape::resources::primitives::{
    PlaneOptions, SphereOptions, create_box, create_garment_panel, create_plane, create_sphere,
};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
const QUAD: [[f32; 3]; 4] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];

// ============================================================================
// BoundingBox Tests
// ============================================================================

#[test]
fn bbox_centered_clamp_contains() {
    let bb = BoundingBox::centered(Vec3::ZERO, Vec3::splat(10.0));
    assert!(bb.contains(Vec3::new(5.0, 0.0, -5.0)));
    assert!(!bb.contains(Vec3::new(5.5, 0.0, 0.0)));
    assert!(vec3_approx(bb.clamp(Vec3::new(9.0, -9.0, 1.0)), Vec3::new(5.0, -5.0, 1.0)));
    assert_eq!(bb.corners()[0], Vec3::splat(-5.0));
    assert_eq!(bb.corners()[7], Vec3::splat(5.0));

    let shifted = BoundingBox::centered(Vec3::new(0.0, -8.0, 0.0), Vec3::new(12.0, 16.0, 0.6));
    assert!(vec3_approx(shifted.min, Vec3::new(-6.0, -16.0, -0.3)));
    assert!(vec3_approx(shifted.max, Vec3::new(6.0, 0.0, 0.3)));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn from_arrays_computes_normals_and_bounds() {
    let mesh = MeshBuffer::from_arrays("tri", &TRIANGLE, None, None, None).unwrap();

    assert_eq!(mesh.triangle_count(), 1);
    assert!(!mesh.is_indexed());
    assert!(mesh.get_attribute("normal").is_some());

    let bb = mesh.bounding_box.unwrap();
    assert!(vec3_approx(bb.min, Vec3::ZERO));
    assert!(vec3_approx(bb.max, Vec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn from_arrays_rejects_partial_triangles() {
    let err = MeshBuffer::from_arrays("bad", &QUAD, None, None, None).unwrap_err();
    assert!(matches!(err, DrapeError::VertexCountNotTriangles(4)));

    let err = MeshBuffer::from_arrays("bad", &QUAD, None, None, Some(&[0, 1, 2, 3])).unwrap_err();
    assert!(matches!(err, DrapeError::IndexCountNotTriangles(4)));
}

#[test]
fn from_arrays_rejects_out_of_range_index() {
    let err = MeshBuffer::from_arrays("bad", &QUAD, None, None, Some(&[0, 1, 7])).unwrap_err();
    assert!(matches!(
        err,
        DrapeError::IndexOutOfRange {
            index: 7,
            vertex_count: 4
        }
    ));
}

#[test]
fn from_arrays_rejects_short_uvs() {
    let uvs = [[0.0, 0.0], [1.0, 0.0]];
    let err = MeshBuffer::from_arrays("bad", &TRIANGLE, None, Some(&uvs), None).unwrap_err();
    assert!(matches!(
        err,
        DrapeError::AttributeLengthMismatch {
            name: "uv",
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn empty_mesh_has_no_triangles() {
    let empty = MeshBuffer::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.triangle_count(), 0);
    assert_eq!(empty.byte_length(), 0);
}

#[test]
fn byte_length_counts_attributes_and_indices() {
    let mesh = MeshBuffer::from_arrays("quad", &QUAD, None, None, Some(&[0, 1, 2, 0, 2, 3])).unwrap();
    // positions + normals (4 * 12 each) + 6 u32 indices
    assert_eq!(mesh.byte_length(), 4 * 12 * 2 + 6 * 4);
    assert_eq!(mesh.triangle_count(), 2);
}

// ============================================================================
// Normals
// ============================================================================

#[test]
fn compute_normals_single_triangle_facing_z() {
    let mesh = MeshBuffer::from_arrays("tri", &TRIANGLE, None, None, None).unwrap();
    let normals = mesh.get_attribute("normal").unwrap();
    for i in 0..3 {
        let n = normals.read_vec3(i).unwrap();
        assert!(n.z > 0.9, "normal {i} should point +Z, got {n:?}");
    }
}

#[test]
fn compute_normals_indexed_quad() {
    let mesh = MeshBuffer::from_arrays("quad", &QUAD, None, None, Some(&[0, 1, 2, 0, 2, 3])).unwrap();
    let normals = mesh.get_attribute("normal").unwrap();
    for i in 0..4 {
        let n = normals.read_vec3(i).unwrap();
        assert!(vec3_approx(n, Vec3::Z), "normal {i}: {n:?}");
    }
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn attribute_gather_reorders_vertices() {
    let attr = Attribute::new_planar(&[Vec3::X, Vec3::Y, Vec3::Z], VertexFormat::Float32x3);
    let gathered = attr.gather(&[2, 0]);
    assert_eq!(gathered.count, 2);
    assert!(vec3_approx(gathered.read_vec3(0).unwrap(), Vec3::Z));
    assert!(vec3_approx(gathered.read_vec3(1).unwrap(), Vec3::X));
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn box_bounds_match_extents() {
    let mesh = create_box(2.0, 4.0, 6.0);
    let bb = mesh.bounding_box.unwrap();
    assert!(vec3_approx(bb.min, Vec3::new(-1.0, -2.0, -3.0)));
    assert!(vec3_approx(bb.max, Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn plane_triangle_count() {
    let mesh = create_plane(PlaneOptions {
        width_segments: 4,
        height_segments: 3,
        ..PlaneOptions::default()
    });
    assert_eq!(mesh.triangle_count(), 24);
    assert!(mesh.get_attribute("uv").is_some());
}

#[test]
fn sphere_bounding_radius() {
    let mesh = create_sphere(SphereOptions {
        radius: 5.0,
        ..SphereOptions::default()
    });
    let radius = mesh.bounding_sphere.unwrap().radius;
    assert!((radius - 5.0).abs() < 0.1, "expected ≈ 5.0, got {radius}");
    assert_eq!(mesh.triangle_count(), 2 * 32 * 16);
}

#[test]
fn garment_panel_matches_scaled_bounds() {
    let standard = standard_for("hoodie");
    let mesh = create_garment_panel(&standard, 8);

    assert_eq!(mesh.triangle_count(), 4 * 8 * 8);
    let bb = mesh.bounding_box.unwrap();
    let size = bb.max - bb.min;
    assert!(vec3_approx(size, standard.scaled_bounds()));
}
