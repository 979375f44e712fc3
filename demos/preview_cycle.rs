//! Preview Cycle Demo
//!
//! Drives one preview session without a renderer: switches garments and
//! devices, walks the camera out from the garment while logging the chosen
//! tier, simulates a frame-rate dip, and prints cache statistics.
//!
//! Run with `RUST_LOG=debug cargo run --example preview_cycle` to see cache
//! and LOD decisions.

use std::time::Duration;

use drape::garment::standard_for;
use drape::material::{FabricType, MaterialConfig, PrintMethod};
use drape::resources::Texture;
use drape::resources::primitives::create_garment_panel;
use drape::utils::IdleQueueScheduler;
use drape::viewport::fit_distance;
use drape::{PreviewEngine, PreviewSettings, ViewportSize};

const SMOOTH: Duration = Duration::from_millis(16);
const STUTTER: Duration = Duration::from_millis(80);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = PreviewSettings::from_json_str(r#"{ "performance": { "min_frame_rate": 30.0 } }"#)?;
    let engine = PreviewEngine::new(settings, ViewportSize::new(1440, 900));

    let scheduler = IdleQueueScheduler::new();
    engine.preload_materials(&scheduler);

    for garment in ["tshirt", "hoodie", "cap", "mystery-garment"] {
        let standard = standard_for(garment);
        let bundle = engine.lod_bundle(garment, "front", || create_garment_panel(&standard, 72));
        let framing = engine.camera_framing(garment);

        log::info!(
            "{garment}: tiers {:?}, distances {:?}, framed at {:.2} (fit {:.2})",
            bundle.triangle_counts(),
            bundle.distances,
            framing.distance(),
            fit_distance(engine.viewport().bounds(garment).max_extent(), framing.fov),
        );

        let bounds = engine.viewport().bounds(garment);
        let grid = engine.guides().snap_grid(&bounds, framing.target, 1.0);
        log::info!("  snap grid: {} lines, {} bytes", grid.segment_count(), grid.as_bytes().len());

        let mut controller = engine.controller(garment, bundle);
        for step in 0..6 {
            let eye = framing.target + (framing.position - framing.target) * (1.0 + step as f32);
            let tier = controller.update(Some(eye), SMOOTH);
            log::info!("  eye {:.1} -> {}", eye.distance(framing.target), tier.as_str());
        }

        let near = Some(framing.position);
        controller.update(near, STUTTER);
        log::info!("  after a stutter: {:?}", controller.stats());

        // Drain a few preloads in the "idle" gap between garments.
        scheduler.run_idle(4);
    }

    let design = std::sync::Arc::new(Texture::new("logo", 2048, 2048));
    for (width, label) in [(1440, "desktop"), (390, "mobile")] {
        engine.resize(width, 844);
        engine.materials().clear_texture_cache();

        let config = MaterialConfig::new(0x1E3A8A, "hoodie", FabricType::Fleece, PrintMethod::Dtg)
            .with_design(design.clone())
            .with_high_quality(width >= 1024);
        let material = engine.material(&config);
        let map = material.map.as_ref().map(|m| (m.transform.repeat, m.generate_mipmaps));
        log::info!("{label}: sheen {:.2}, design map {:?}", material.sheen, map);
    }

    scheduler.run_idle(usize::MAX);
    log::info!("{:?}", engine.cache_stats());

    engine.dispose();
    Ok(())
}
