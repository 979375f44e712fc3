//! Viewport Manager Tests
//!
//! Tests for:
//! - Device classification boundaries
//! - Bounds, anchor and responsive scale
//! - Camera framing per device
//! - LOD distance derivation

use glam::Vec3;

use drape::settings::LodSettings;
use drape::viewport::{DeviceClass, ViewportManager, ViewportSize, classify_device, fit_distance};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn manager(width: u32) -> ViewportManager {
    ViewportManager::new(ViewportSize::new(width, 800), LodSettings::default())
}

// ============================================================================
// Device classification
// ============================================================================

#[test]
fn classify_typical_widths() {
    assert_eq!(classify_device(500), DeviceClass::Mobile);
    assert_eq!(classify_device(800), DeviceClass::Tablet);
    assert_eq!(classify_device(1200), DeviceClass::Desktop);
}

#[test]
fn classify_exact_boundaries() {
    assert_eq!(classify_device(767), DeviceClass::Mobile);
    assert_eq!(classify_device(768), DeviceClass::Tablet);
    assert_eq!(classify_device(1023), DeviceClass::Tablet);
    assert_eq!(classify_device(1024), DeviceClass::Desktop);
    assert_eq!(classify_device(0), DeviceClass::Mobile);
}

#[test]
fn device_class_follows_resize() {
    let vm = manager(1280);
    assert_eq!(vm.device_class(), DeviceClass::Desktop);

    vm.set_viewport_size(600, 900);
    assert_eq!(vm.device_class(), DeviceClass::Mobile);
    assert_eq!(vm.viewport_size(), ViewportSize::new(600, 900));

    vm.set_viewport_size(900, 900);
    assert_eq!(vm.device_class(), DeviceClass::Tablet);
}

// ============================================================================
// Bounds / anchor / scale
// ============================================================================

#[test]
fn hoodie_bounds() {
    let b = manager(1280).bounds("hoodie");
    assert!(approx(b.width, 12.75));
    assert!(approx(b.height, 15.3));
    assert!(approx(b.depth, 0.68));
}

#[test]
fn anchor_positions() {
    let vm = manager(1280);

    let tshirt = vm.bounds("tshirt");
    assert!(vec3_approx(vm.anchor_position("tshirt", &tshirt), Vec3::new(0.0, -8.0, 0.0)));

    let cap = vm.bounds("cap");
    assert!(vec3_approx(vm.anchor_position("cap", &cap), Vec3::ZERO));

    let tote = vm.bounds("tote-bag");
    assert!(vec3_approx(vm.anchor_position("tote-bag", &tote), Vec3::new(0.0, 7.5, 0.0)));
}

#[test]
fn responsive_scale_entries() {
    let vm = manager(1280);
    let s = vm.responsive_scale("jacket");
    assert!(approx(s.base, 0.8));
    assert!(approx(s.mobile, 0.72));
    assert!(approx(s.tablet, 0.76));
    assert!(approx(s.desktop, 0.8));
}

#[test]
fn current_scale_on_mobile_is_ninety_percent() {
    let vm = manager(400);
    for garment in ["tshirt", "hoodie", "cap", "no-such-thing"] {
        let base = vm.standard(garment).scale;
        assert!(approx(vm.current_scale(garment), base * 0.9), "{garment}");
    }
}

// ============================================================================
// Camera framing
// ============================================================================

#[test]
fn desktop_framing_for_tshirt() {
    let vm = manager(1280);
    let f = vm.current_camera_framing("tshirt");

    // max(12, 16) * 0.8 * 1.0
    assert!(approx(f.position.z, 12.8));
    assert!(vec3_approx(f.target, Vec3::new(0.0, -8.0, 0.0)));
    assert!(approx(f.position.y, -1.6));
    assert!(approx(f.fov, 40.0));
    assert!(approx(f.min_distance, 12.8 * 0.4));
    assert!(approx(f.max_distance, 12.8 * 2.0));
    assert_eq!(f.device, DeviceClass::Desktop);
}

#[test]
fn mobile_framing_pulls_back() {
    let vm = manager(1280);
    let desktop = vm.camera_framing("cap", ViewportSize::new(1280, 720));
    let mobile = vm.camera_framing("cap", ViewportSize::new(390, 844));

    assert!(approx(mobile.position.z, desktop.position.z * 1.4));
    assert!(approx(mobile.fov, 50.0));
    let (min, max) = mobile.zoom_limits();
    assert!(approx(min, mobile.position.z * 0.6));
    assert!(approx(max, mobile.position.z * 3.0));
}

#[test]
fn framing_matrices_are_finite() {
    let f = manager(1280).current_camera_framing("hoodie");
    let vp = f.projection_matrix(16.0 / 9.0) * f.view_matrix();
    assert!(vp.is_finite());
    assert!(f.near < f.far);
}

#[test]
fn clamp_distance_respects_zoom_limits() {
    let f = manager(1280).current_camera_framing("tshirt");
    assert!(approx(f.clamp_distance(0.0), f.min_distance));
    assert!(approx(f.clamp_distance(1e6), f.max_distance));
}

#[test]
fn fit_distance_at_ninety_degrees() {
    // tan(45°) = 1, so the distance is half the extent.
    assert!(approx(fit_distance(10.0, 90.0), 5.0));
}

// ============================================================================
// LOD distances
// ============================================================================

#[test]
fn desktop_distances_divide_by_garment_scale() {
    let vm = manager(1280);
    let d = vm.lod_distances("cap");
    assert!(approx(d.high, 2.0 / 1.6));
    assert!(approx(d.medium, 6.0 / 1.6));
    assert!(approx(d.low, 15.0 / 1.6));
}

#[test]
fn mobile_distances_are_one_and_a_half_times_desktop() {
    let vm = manager(1280);
    let desktop = vm.lod_distances_for("cap", DeviceClass::Desktop);
    let mobile = vm.lod_distances_for("cap", DeviceClass::Mobile);

    assert!(approx(mobile.high, desktop.high * 1.5));
    assert!(approx(mobile.medium, desktop.medium * 1.5));
    assert!(approx(mobile.low, desktop.low * 1.5));
}

#[test]
fn tablet_distances_match_desktop() {
    let vm = manager(1280);
    assert_eq!(
        vm.lod_distances_for("hoodie", DeviceClass::Tablet),
        vm.lod_distances_for("hoodie", DeviceClass::Desktop)
    );
}
