//! Level of Detail Tests
//!
//! Tests for:
//! - Decimation budgets, determinism and malformed input
//! - Tier generation through the viewport's distances
//! - Distance / frame-rate tier selection
//! - Per-instance controller state and stats

use std::sync::Arc;
use std::time::Duration;

use glam::Vec3;

use drape::garment::standard_for;
use drape::lod::{
    DetailSelector, DistanceSelector, LodController, LodDistances, LodGenerator, LodTier, PerformanceMonitor,
    simplify,
};
use drape::resources::MeshBuffer;
use drape::resources::primitives::{SphereOptions, create_garment_panel, create_sphere};
use drape::settings::{LodSettings, PerformanceSettings};
use drape::viewport::{DeviceClass, ViewportManager, ViewportSize};

const FAST_FRAME: Duration = Duration::from_millis(16);
const SLOW_FRAME: Duration = Duration::from_millis(100);

fn distances() -> LodDistances {
    LodDistances {
        high: 2.0,
        medium: 6.0,
        low: 15.0,
    }
}

fn strip(triangles: usize) -> MeshBuffer {
    let positions: Vec<[f32; 3]> = (0..triangles * 3)
        .map(|i| {
            let t = (i / 3) as f32;
            match i % 3 {
                0 => [t, 0.0, 0.0],
                1 => [t + 1.0, 0.0, 0.0],
                _ => [t, 1.0, 0.0],
            }
        })
        .collect();
    MeshBuffer::from_arrays("strip", &positions, None, None, None).unwrap()
}

// ============================================================================
// simplify
// ============================================================================

#[test]
fn within_budget_is_unchanged() {
    let mesh = create_sphere(SphereOptions::default());
    let count = mesh.triangle_count();

    let same = simplify(&mesh, count);
    assert_eq!(same.triangle_count(), count);
    let above = simplify(&mesh, count * 2);
    assert_eq!(above.triangle_count(), count);
    assert_eq!(above.uuid, mesh.uuid);
}

#[test]
fn indexed_decimation_hits_target() {
    let mesh = create_garment_panel(&standard_for("tshirt"), 32);
    assert_eq!(mesh.triangle_count(), 4096);

    let reduced = simplify(&mesh, 1000);
    assert_eq!(reduced.triangle_count(), 1000);
    assert!(reduced.vertex_count() <= mesh.vertex_count());
    assert!(reduced.indices().unwrap().iter().all(|&i| (i as usize) < reduced.vertex_count()));
}

#[test]
fn non_indexed_decimation_hits_target() {
    let mesh = strip(10);
    let reduced = simplify(&mesh, 4);

    assert!(!reduced.is_indexed());
    assert_eq!(reduced.triangle_count(), 4);
    assert_eq!(reduced.vertex_count(), 12);
}

#[test]
fn decimation_is_deterministic() {
    let mesh = create_sphere(SphereOptions {
        radius: 2.0,
        width_segments: 48,
        height_segments: 24,
    });
    let a = simplify(&mesh, 300);
    let b = simplify(&mesh, 300);
    assert_eq!(a.indices(), b.indices());
    assert_eq!(a.bounding_box, b.bounding_box);
}

#[test]
fn zero_target_keeps_one_triangle() {
    let reduced = simplify(&strip(5), 0);
    assert_eq!(reduced.triangle_count(), 1);
}

#[test]
fn bounds_are_recomputed() {
    let mesh = strip(10);
    let reduced = simplify(&mesh, 2);
    assert!(reduced.bounding_box.is_some());
    let bb = reduced.bounding_box.unwrap();
    assert!(bb.max.x <= mesh.bounding_box.unwrap().max.x);
}

#[test]
fn missing_positions_returns_copy() {
    let mut broken = MeshBuffer::new("broken");
    broken.set_indices(&(0..30).collect::<Vec<u32>>());
    assert_eq!(broken.triangle_count(), 10);

    let result = simplify(&broken, 2);
    assert_eq!(result.triangle_count(), 10);
    assert_eq!(result.label, "broken");
}

// ============================================================================
// LodGenerator
// ============================================================================

#[test]
fn generator_builds_budgeted_tiers() {
    let viewport = Arc::new(ViewportManager::new(ViewportSize::new(1280, 720), LodSettings::default()));
    let generator = LodGenerator::new(viewport.clone());

    let mut calls = 0;
    let bundle = generator.generate("hoodie", || {
        calls += 1;
        create_garment_panel(&standard_for("hoodie"), 64)
    });

    assert_eq!(calls, 1);
    assert_eq!(bundle.triangle_counts(), [16_384, 5_000, 2_000]);
    assert_eq!(bundle.distances, viewport.lod_distances_for("hoodie", DeviceClass::Desktop));
    assert!(bundle.byte_length() > bundle.high.byte_length());
}

#[test]
fn small_base_mesh_is_shared_by_all_tiers() {
    let viewport = Arc::new(ViewportManager::default());
    let bundle = LodGenerator::new(viewport).generate("cap", || create_sphere(SphereOptions::default()));

    let [high, medium, low] = bundle.triangle_counts();
    assert_eq!(high, medium);
    assert_eq!(medium, low);
}

#[test]
fn empty_base_mesh_still_produces_a_bundle() {
    let viewport = Arc::new(ViewportManager::default());
    let bundle = LodGenerator::new(viewport).generate("tshirt", MeshBuffer::empty);
    assert_eq!(bundle.triangle_counts(), [0, 0, 0]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn distance_thresholds() {
    let selector = DistanceSelector::new(distances(), &PerformanceSettings::default());

    assert_eq!(selector.select(Some(1.0), None), LodTier::High);
    assert_eq!(selector.select(Some(5.99), None), LodTier::High);
    assert_eq!(selector.select(Some(6.0), None), LodTier::Medium);
    assert_eq!(selector.select(Some(14.9), None), LodTier::Medium);
    assert_eq!(selector.select(Some(15.0), None), LodTier::Low);
    assert_eq!(selector.select(None, None), LodTier::High);
    assert_eq!(selector.select(Some(f32::NAN), None), LodTier::High);
}

#[test]
fn low_frame_rate_drops_one_tier() {
    let selector = DistanceSelector::new(distances(), &PerformanceSettings::default());

    assert_eq!(selector.select(Some(1.0), Some(20.0)), LodTier::Medium);
    assert_eq!(selector.select(Some(10.0), Some(20.0)), LodTier::Low);
    assert_eq!(selector.select(Some(20.0), Some(20.0)), LodTier::Low);
    assert_eq!(selector.select(Some(1.0), Some(60.0)), LodTier::High);
}

#[test]
fn auto_quality_can_be_disabled() {
    let settings = PerformanceSettings {
        auto_quality: false,
        ..PerformanceSettings::default()
    };
    let selector = DistanceSelector::new(distances(), &settings);
    assert_eq!(selector.select(Some(1.0), Some(5.0)), LodTier::High);
}

#[test]
fn monitor_reports_degradation() {
    let mut monitor = PerformanceMonitor::default();
    assert_eq!(monitor.frame_rate(), None);
    assert!(!monitor.is_degraded());

    for _ in 0..3 {
        monitor.record_frame(SLOW_FRAME);
    }
    assert!(monitor.is_degraded());

    monitor.reset();
    assert_eq!(monitor.frame_rate(), None);
}

#[test]
fn single_startup_hitch_is_not_degradation() {
    let mut monitor = PerformanceMonitor::default();
    assert_eq!(monitor.record_frame(Duration::from_millis(500)), None);
    assert!(!monitor.is_degraded());
}

// ============================================================================
// LodController
// ============================================================================

fn controller() -> LodController {
    let viewport = Arc::new(ViewportManager::default());
    let mut bundle = LodGenerator::new(viewport).generate("tshirt", || {
        create_garment_panel(&standard_for("tshirt"), 64)
    });
    bundle.distances = distances();
    LodController::new(Arc::new(bundle), Vec3::ZERO, &PerformanceSettings::default())
}

#[test]
fn controller_without_camera_stays_high() {
    let mut c = controller();
    assert_eq!(c.update(None, FAST_FRAME), LodTier::High);
    assert_eq!(c.stats().triangle_count, 16_384);
}

#[test]
fn controller_follows_camera_distance() {
    let mut c = controller();
    assert_eq!(c.update(Some(Vec3::new(0.0, 0.0, 3.0)), FAST_FRAME), LodTier::High);
    assert_eq!(c.update(Some(Vec3::new(0.0, 0.0, 10.0)), FAST_FRAME), LodTier::Medium);
    assert_eq!(c.update(Some(Vec3::new(0.0, 20.0, 0.0)), FAST_FRAME), LodTier::Low);

    let stats = c.stats();
    assert_eq!(stats.tier, LodTier::Low);
    assert_eq!(stats.triangle_count, 2_000);
    assert!(stats.frame_rate.unwrap() > 30.0);
}

#[test]
fn controller_degrades_and_recovers() {
    let mut c = controller();
    let near = Some(Vec3::new(0.0, 0.0, 1.0));

    // A lone slow first frame is not enough to judge.
    assert_eq!(c.update(near, SLOW_FRAME), LodTier::High);
    c.update(near, SLOW_FRAME);
    assert_eq!(c.update(near, SLOW_FRAME), LodTier::Medium);
    assert_eq!(c.current_mesh().unwrap().triangle_count(), 5_000);

    for _ in 0..30 {
        c.update(near, FAST_FRAME);
    }
    assert_eq!(c.current_tier(), LodTier::High);
}

#[test]
fn controller_without_bundle_stays_high_with_zero_triangles() {
    let settings = PerformanceSettings::default();
    let mut c = LodController::with_selector(
        None,
        Vec3::ZERO,
        DistanceSelector::new(distances(), &settings),
        PerformanceMonitor::new(&settings),
    );

    for _ in 0..3 {
        assert_eq!(c.update(Some(Vec3::new(0.0, 0.0, 100.0)), FAST_FRAME), LodTier::High);
    }
    assert!(c.current_mesh().is_none());

    let stats = c.stats();
    assert_eq!(stats.tier, LodTier::High);
    assert_eq!(stats.triangle_count, 0);
    assert!(stats.frame_rate.is_some());
}

#[test]
fn set_bundle_adopts_new_distances() {
    let mut c = controller();
    let far_bundle = {
        let mut b = (**c.bundle().unwrap()).clone();
        b.distances = LodDistances {
            high: 20.0,
            medium: 60.0,
            low: 150.0,
        };
        Arc::new(b)
    };
    c.set_bundle(far_bundle);
    assert_eq!(c.update(Some(Vec3::new(0.0, 0.0, 10.0)), FAST_FRAME), LodTier::High);
}
